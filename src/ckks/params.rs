use super::CkksError;
use crate::math::prime::is_prime;
use crate::ring::RingError;
use num_bigint::BigUint;

const Q0_BIT_SIZE: u64 = 61;

/// Immutable scheme parameters: the ring-size exponent, the primary
/// modulus chain q_0, ..., q_L and the special (auxiliary) moduli
/// p_0, ..., p_{k-1} used to extend the basis during key switching.
///
/// `is_valid` is set exactly once, by the constructors below; every
/// ciphertext allocation checks it before touching the chains.
#[derive(Debug, Clone)]
pub struct Parameters {
    pub(crate) log_n: u64,
    pub(crate) q_vec: Vec<u64>,
    pub(crate) p_vec: Vec<u64>,
    pub(crate) is_valid: bool,
}

impl Parameters {
    /// Validates explicit modulus chains: the primary chain must be
    /// non-empty and every modulus of Q and P must be a distinct
    /// NTT-friendly prime for the ring degree 2^log_n.
    pub fn new(log_n: u64, q_vec: Vec<u64>, p_vec: Vec<u64>) -> Result<Self, CkksError> {
        if q_vec.is_empty() {
            return Err(RingError::EmptyModulusChain.into());
        }

        let m = 1u64 << (log_n + 1);
        let mut seen: Vec<u64> = vec![];
        for &q in q_vec.iter().chain(p_vec.iter()) {
            if q % m != 1 || !is_prime(q) {
                return Err(RingError::InvalidModulus(q).into());
            }
            if seen.contains(&q) {
                return Err(RingError::DuplicateModulus(q).into());
            }
            seen.push(q);
        }

        Ok(Self {
            log_n,
            q_vec,
            p_vec,
            is_valid: true,
        })
    }

    /// Generates chains the usual way: a ~2^61-bit base prime q_0, then
    /// `max_level` rescaling primes scanned alternately above and below
    /// 2^bit, then `num_special` special primes from the same scan (so the
    /// whole set stays pairwise distinct). All candidates have the form
    /// 2^b + k * 2N + 1, which makes them NTT-friendly by construction.
    pub fn generate(
        log_n: u64,
        max_level: usize,
        num_special: usize,
        bit: u64,
    ) -> Result<Self, CkksError> {
        assert!(
            bit > log_n + 1 && bit < Q0_BIT_SIZE,
            "scale prime size must lie strictly between 2N and the base prime"
        );

        let m = 1u64 << (log_n + 1);

        let q0 = {
            let mut bnd = 1;
            loop {
                let candidate = (1u64 << Q0_BIT_SIZE) + bnd * m + 1;
                if is_prime(candidate) {
                    break candidate;
                }
                bnd += 1;
            }
        };

        let mut q_vec = vec![q0];
        let mut p_vec = vec![];
        let mut bnd = 1;
        while q_vec.len() < max_level + 1 || p_vec.len() < num_special {
            for candidate in [(1u64 << bit) + bnd * m + 1, (1u64 << bit) - bnd * m + 1] {
                if !is_prime(candidate) {
                    continue;
                }
                if q_vec.len() < max_level + 1 {
                    q_vec.push(candidate);
                } else if p_vec.len() < num_special {
                    p_vec.push(candidate);
                }
            }
            bnd += 1;
        }
        Self::new(log_n, q_vec, p_vec)
    }

    pub fn log_n(&self) -> u64 {
        self.log_n
    }

    /// Ring degree N = 2^log_n.
    pub fn n(&self) -> usize {
        1 << self.log_n
    }

    /// Highest level a ciphertext can be allocated at.
    pub fn max_level(&self) -> usize {
        self.q_vec.len() - 1
    }

    /// Primary modulus chain q_0, ..., q_L.
    pub fn qi(&self) -> &[u64] {
        &self.q_vec
    }

    /// Special moduli p_0, ..., p_{k-1}.
    pub fn pi(&self) -> &[u64] {
        &self.p_vec
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Product of the active chain head q_0 * ... * q_level, the modulus a
    /// level-`level` ciphertext actually lives under.
    pub fn big_q(&self, level: usize) -> BigUint {
        assert!(level <= self.max_level());
        self.q_vec[..=level].iter().map(|&q| BigUint::from(q)).product()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // q = 1 mod 2048 for log_n = 10
    const Q_N1024: [u64; 3] = [1032193, 1038337, 1054721];
    const P_N1024: [u64; 2] = [1062913, 1067009];

    #[test]
    fn test_new_accepts_valid_chains() {
        let params = Parameters::new(10, Q_N1024.to_vec(), P_N1024.to_vec()).unwrap();
        assert!(params.is_valid());
        assert_eq!(params.n(), 1024);
        assert_eq!(params.max_level(), 2);
        assert_eq!(params.qi(), &Q_N1024);
        assert_eq!(params.pi(), &P_N1024);
    }

    #[test]
    fn test_new_rejects_empty_primary_chain() {
        assert_eq!(
            Parameters::new(10, vec![], P_N1024.to_vec()).unwrap_err(),
            CkksError::Ring(RingError::EmptyModulusChain)
        );
    }

    #[test]
    fn test_new_rejects_bad_modulus() {
        // composite, even though it is 1 mod 2048
        let composite = 2049 * 2048 + 1;
        assert!(!is_prime(composite));
        assert_eq!(
            Parameters::new(10, vec![Q_N1024[0], composite], vec![]).unwrap_err(),
            CkksError::Ring(RingError::InvalidModulus(composite))
        );
        // prime, but not 1 mod 2048
        assert_eq!(
            Parameters::new(10, vec![13], vec![]).unwrap_err(),
            CkksError::Ring(RingError::InvalidModulus(13))
        );
    }

    #[test]
    fn test_new_rejects_duplicates_across_chains() {
        assert_eq!(
            Parameters::new(10, Q_N1024.to_vec(), vec![Q_N1024[1]]).unwrap_err(),
            CkksError::Ring(RingError::DuplicateModulus(Q_N1024[1]))
        );
    }

    #[test]
    fn test_generate_shapes_and_primality() {
        let params = Parameters::generate(13, 3, 2, 40).unwrap();
        assert!(params.is_valid());
        assert_eq!(params.qi().len(), 4);
        assert_eq!(params.pi().len(), 2);
        assert_eq!(params.max_level(), 3);

        let m = 1u64 << 14;
        for &q in params.qi().iter().chain(params.pi()) {
            assert!(is_prime(q));
            assert_eq!(q % m, 1);
        }
        // base prime is the big one, rescaling primes sit near 2^40
        assert!(params.qi()[0] > 1 << 60);
        for &q in &params.qi()[1..] {
            assert!(q > (1 << 39) && q < (1 << 41));
        }
    }

    #[test]
    fn test_big_q_matches_chain_head() {
        let params = Parameters::new(10, Q_N1024.to_vec(), vec![]).unwrap();
        assert_eq!(params.big_q(0), BigUint::from(Q_N1024[0]));
        assert_eq!(
            params.big_q(2),
            Q_N1024.iter().map(|&q| BigUint::from(q)).product()
        );
    }
}
