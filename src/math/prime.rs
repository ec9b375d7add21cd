use rand::Rng;

pub(crate) fn gcd(mut n: u64, mut m: u64) -> u64 {
    assert!(n != 0 && m != 0);
    while m != 0 {
        if m < n {
            std::mem::swap(&mut m, &mut n);
        }
        m %= n;
    }
    n
}

/// a * b mod p without overflow for moduli up to 63 bits
pub(crate) fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

pub(crate) fn modpow(mut a: u64, mut n: u64, p: u64) -> u64 {
    let mut res = 1;
    a %= p;
    while n > 0 {
        if n % 2 == 1 {
            res = mul_mod(res, a, p);
        }
        a = mul_mod(a, a, p);
        n /= 2;
    }
    res
}

/// miller rabin prime test
pub(crate) fn is_prime(n: u64) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n == 1 {
        return false;
    }

    // n-1 = 2^k * q, with q odd
    let (k, q) = {
        let mut k = 0;
        let mut q = n - 1;
        while q % 2 == 0 {
            k += 1;
            q /= 2;
        }
        (k, q)
    };

    // Looping 64 times, choose a random value for the witness a, with 2 < a < n-2.
    let mut rng = rand::thread_rng();
    for _ in 0..64 {
        let mut a = rng.gen_range(2..n - 1);

        if gcd(a, n) != 1 {
            return false;
        }

        // a = a^q mod n. If a == 1, no information.
        a = modpow(a, q, n);
        if a == 1 {
            continue;
        }

        let mut unbroken = true;
        for _ in 0..=(k - 1) {
            if a == n - 1 {
                unbroken = false;
                break;
            }
            a = modpow(a, 2, n);
        }
        if unbroken {
            return false;
        }
    }

    true
}
