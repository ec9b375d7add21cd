use super::prime::{modpow, mul_mod};

pub(crate) fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// bit reversal
/// the length of x should be a power of two
fn bitrev(x: &mut [u64]) {
    let n = x.len();
    if !is_power_of_two(n) {
        panic!("The length n of x must be a power of two");
    }

    let mut rho = vec![0usize; n];
    let mut k = 2;

    while k <= n {
        // compute rho_k(0: k-1)
        for i in 0..k / 2 {
            rho[i + k / 2] = 2 * rho[i] + 1;
            rho[i] = 2 * rho[i];
        }
        k *= 2;
    }

    for i in 0..n {
        if i < rho[i] {
            x.swap(i, rho[i]);
        }
    }
}

/// Computes the forward number-theoretic transform of x in place, modulo the
/// prime q, with respect to the primitive nth root of unity whose powers are
/// tabulated in pow_table (n/2 entries). The length of x must be a power of 2.
pub(crate) fn ntt_radix2(x: &mut [u64], pow_table: &[u64], q: u64) {
    let n = x.len();
    if !is_power_of_two(n) {
        panic!("Length is not a power of 2");
    }

    bitrev(x);

    let mut k = 2;
    while k <= n {
        for r in 0..n / k {
            for j in 0..k / 2 {
                let tau = mul_mod(pow_table[n / k * j], x[r * k + j + k / 2], q);
                let u = x[r * k + j];
                x[r * k + j + k / 2] = (u + q - tau) % q;
                x[r * k + j] = (u + tau) % q;
            }
        }
        k *= 2;
    }
}

/// Inverse transform of ntt_radix2; inv_pow_table holds the powers of the
/// inverse root.
pub(crate) fn inv_ntt_radix2(x: &mut [u64], inv_pow_table: &[u64], q: u64) {
    let n = x.len();
    ntt_radix2(x, inv_pow_table, q);
    let n_inv = modpow(n as u64, q - 2, q);
    for c in x.iter_mut() {
        *c = mul_mod(*c, n_inv, q);
    }
}

/// Tabulates root^0, root^1, ..., root^(n/2 - 1) mod q.
pub(crate) fn generate_power_table(root: u64, n: usize, q: u64) -> Vec<u64> {
    let mut pow_table = vec![0u64; n / 2];
    let mut temp = 1;
    for entry in pow_table.iter_mut() {
        *entry = temp;
        temp = mul_mod(temp, root, q);
    }
    pow_table
}
