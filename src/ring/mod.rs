/*!
Arithmetic engine for the polynomial ring R_Q = Z_Q[X]/(X^N + 1) with Q
given in RNS form: one residue row ("limb") per prime modulus. A
`RingContext` is a pure function of its ring degree and modulus list; it
owns the per-modulus transform tables and allocates `Poly` values shaped
for that modulus set.
*/

pub mod sampler;

use crate::math::{
    ntt::{generate_power_table, inv_ntt_radix2, is_power_of_two, ntt_radix2},
    prime::{is_prime, modpow, mul_mod},
};

#[derive(Debug, PartialEq)]
pub enum RingError {
    /// the ring degree must be a power of two >= 2
    DegreeNotPowerOfTwo(usize),
    EmptyModulusChain,
    /// modulus is not an NTT-friendly prime (q prime, q = 1 mod 2N)
    InvalidModulus(u64),
    DuplicateModulus(u64),
}

/// RNS polynomial: `coeffs[i][j]` is the j-th coefficient reduced modulo
/// the i-th prime of the modulus set the poly was allocated for.
#[derive(Debug, Clone, PartialEq)]
pub struct Poly {
    pub(crate) coeffs: Vec<Vec<u64>>,
}

impl Poly {
    /// Allocates a zeroed polynomial of ring degree `n` over `moduli_count` primes.
    pub fn new(n: usize, moduli_count: usize) -> Self {
        Self {
            coeffs: vec![vec![0; n]; moduli_count],
        }
    }

    pub fn moduli_count(&self) -> usize {
        self.coeffs.len()
    }

    pub fn n(&self) -> usize {
        self.coeffs.first().map_or(0, |limb| limb.len())
    }

    pub fn coeffs(&self) -> &[Vec<u64>] {
        &self.coeffs
    }

    pub fn coeffs_mut(&mut self) -> &mut [Vec<u64>] {
        &mut self.coeffs
    }
}

#[derive(Debug)]
pub struct RingContext {
    n: usize,
    moduli: Vec<u64>,
    /// psi_pow[i][j] = psi_i^j for j < n, psi_i a primitive 2n-th root mod moduli[i]
    psi_pow: Vec<Vec<u64>>,
    psi_inv_pow: Vec<Vec<u64>>,
    /// power tables of omega_i = psi_i^2 for the radix-2 transform
    omega_pow: Vec<Vec<u64>>,
    omega_inv_pow: Vec<Vec<u64>>,
}

impl RingContext {
    /// Builds the context for degree `n` over the given modulus list.
    /// Every modulus must be a distinct prime congruent to 1 mod 2n so that
    /// the negacyclic NTT exists.
    pub fn new(n: usize, moduli: &[u64]) -> Result<Self, RingError> {
        if !is_power_of_two(n) || n < 2 {
            return Err(RingError::DegreeNotPowerOfTwo(n));
        }
        if moduli.is_empty() {
            return Err(RingError::EmptyModulusChain);
        }

        let m = 2 * n as u64;
        for (i, &q) in moduli.iter().enumerate() {
            if q % m != 1 || !is_prime(q) {
                return Err(RingError::InvalidModulus(q));
            }
            if moduli[..i].contains(&q) {
                return Err(RingError::DuplicateModulus(q));
            }
        }

        let mut psi_pow = Vec::with_capacity(moduli.len());
        let mut psi_inv_pow = Vec::with_capacity(moduli.len());
        let mut omega_pow = Vec::with_capacity(moduli.len());
        let mut omega_inv_pow = Vec::with_capacity(moduli.len());

        for &q in moduli {
            let psi = Self::primitive_root_of_unity(q, m);
            let psi_inv = modpow(psi, q - 2, q);
            let omega = mul_mod(psi, psi, q);
            let omega_inv = modpow(omega, q - 2, q);

            psi_pow.push(full_power_table(psi, n, q));
            psi_inv_pow.push(full_power_table(psi_inv, n, q));
            omega_pow.push(generate_power_table(omega, n, q));
            omega_inv_pow.push(generate_power_table(omega_inv, n, q));
        }

        Ok(Self {
            n,
            moduli: moduli.to_vec(),
            psi_pow,
            psi_inv_pow,
            omega_pow,
            omega_inv_pow,
        })
    }

    /// Finds an element of order exactly m in F_q^*; m is a power of two
    /// dividing q - 1, so psi^(m/2) == -1 characterizes full order.
    fn primitive_root_of_unity(q: u64, m: u64) -> u64 {
        let exponent = (q - 1) / m;
        let mut a = 2;
        loop {
            let psi = modpow(a, exponent, q);
            if modpow(psi, m / 2, q) == q - 1 {
                return psi;
            }
            a += 1;
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn moduli(&self) -> &[u64] {
        &self.moduli
    }

    pub fn moduli_count(&self) -> usize {
        self.moduli.len()
    }

    /// Allocates a zeroed polynomial shaped for this context.
    pub fn new_poly(&self) -> Poly {
        Poly::new(self.n, self.moduli.len())
    }

    /// Negacyclic forward transform of every limb, in place: twist by the
    /// powers of psi, then the cyclic radix-2 NTT with omega = psi^2.
    pub fn ntt_inplace(&self, poly: &mut Poly) {
        self.check_shape(poly);
        for (i, limb) in poly.coeffs.iter_mut().enumerate() {
            let q = self.moduli[i];
            for (j, c) in limb.iter_mut().enumerate() {
                *c = mul_mod(*c, self.psi_pow[i][j], q);
            }
            ntt_radix2(limb, &self.omega_pow[i], q);
        }
    }

    /// Inverse of `ntt_inplace`.
    pub fn intt_inplace(&self, poly: &mut Poly) {
        self.check_shape(poly);
        for (i, limb) in poly.coeffs.iter_mut().enumerate() {
            let q = self.moduli[i];
            inv_ntt_radix2(limb, &self.omega_inv_pow[i], q);
            for (j, c) in limb.iter_mut().enumerate() {
                *c = mul_mod(*c, self.psi_inv_pow[i][j], q);
            }
        }
    }

    /// Coefficient-wise sum of two polynomials over this context's moduli.
    pub fn add(&self, a: &Poly, b: &Poly) -> Poly {
        self.check_shape(a);
        self.check_shape(b);
        let mut res = self.new_poly();
        for (i, limb) in res.coeffs.iter_mut().enumerate() {
            let q = self.moduli[i];
            for (j, c) in limb.iter_mut().enumerate() {
                *c = (a.coeffs[i][j] + b.coeffs[i][j]) % q;
            }
        }
        res
    }

    /// Coefficient-wise product; equals the ring product when both inputs
    /// are in the NTT domain.
    pub fn mul_pointwise(&self, a: &Poly, b: &Poly) -> Poly {
        self.check_shape(a);
        self.check_shape(b);
        let mut res = self.new_poly();
        for (i, limb) in res.coeffs.iter_mut().enumerate() {
            let q = self.moduli[i];
            for (j, c) in limb.iter_mut().enumerate() {
                *c = mul_mod(a.coeffs[i][j], b.coeffs[i][j], q);
            }
        }
        res
    }

    fn check_shape(&self, poly: &Poly) {
        assert_eq!(poly.moduli_count(), self.moduli.len());
        assert_eq!(poly.n(), self.n);
    }
}

/// Tabulates root^0, ..., root^(n-1) mod q (the half-length table of the
/// cyclic transform is not enough for the negacyclic twist).
fn full_power_table(root: u64, n: usize, q: u64) -> Vec<u64> {
    let mut table = vec![0u64; n];
    let mut temp = 1;
    for entry in table.iter_mut() {
        *entry = temp;
        temp = mul_mod(temp, root, q);
    }
    table
}
