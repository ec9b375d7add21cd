use super::{element::Element, params::Parameters, CkksError};
use crate::ring::{sampler::UniformSampler, Poly, RingContext};
use rand::Rng;
use std::ops::{Deref, DerefMut};

/// An `Element` used as a ciphertext: by convention at least two polynomial
/// components with coefficients in R_Q. Constructed exclusively through the
/// allocation operations below; resizing means constructing a new one.
#[derive(Debug, Clone)]
pub struct Ciphertext(pub(crate) Element);

impl Deref for Ciphertext {
    type Target = Element;

    fn deref(&self) -> &Element {
        &self.0
    }
}

impl DerefMut for Ciphertext {
    fn deref_mut(&mut self) -> &mut Element {
        &mut self.0
    }
}

impl Ciphertext {
    /// Allocates a zeroed ciphertext of `degree + 1` components, each
    /// carrying the `level + 1` head primes of the primary chain. The
    /// result starts in the NTT domain.
    pub fn new(
        params: &Parameters,
        degree: usize,
        level: usize,
        scale: f64,
    ) -> Result<Self, CkksError> {
        if !params.is_valid() {
            return Err(CkksError::InvalidParameters);
        }
        if level > params.max_level() {
            return Err(CkksError::LevelOutOfBounds {
                level,
                max_level: params.max_level(),
            });
        }

        let value = (0..=degree)
            .map(|_| Poly::new(params.n(), level + 1))
            .collect();

        Ok(Self(Element {
            value,
            scale,
            is_ntt: true,
        }))
    }

    /// Allocates the (Q, P) sibling pair consumed together by key-switching
    /// code: same degree and scale on both sides, but the P part always
    /// spans the full special modulus set, whatever the level. Keeping the
    /// two bases in separate ciphertexts lets basis-extension routines work
    /// limb by limb without mixing heterogeneous moduli in one array.
    pub fn new_qp(
        params: &Parameters,
        degree: usize,
        level: usize,
        scale: f64,
    ) -> Result<(Self, Self), CkksError> {
        if !params.is_valid() {
            return Err(CkksError::InvalidParameters);
        }
        if params.pi().is_empty() {
            return Err(CkksError::EmptyAuxiliarySet);
        }
        let ciphertext_q = Self::new(params, degree, level, scale)?;

        let value = (0..=degree)
            .map(|_| Poly::new(params.n(), params.pi().len()))
            .collect();
        let ciphertext_p = Self(Element {
            value,
            scale,
            is_ntt: true,
        });

        Ok((ciphertext_q, ciphertext_p))
    }

    /// Allocates a ciphertext whose every coefficient, in every limb of
    /// every component, is an independent uniform sample under the chain
    /// head for `level`. Components are sampled in index order.
    pub fn new_random<R: Rng>(
        rng: R,
        params: &Parameters,
        degree: usize,
        level: usize,
        scale: f64,
    ) -> Result<Self, CkksError> {
        let mut ciphertext = Self::new(params, degree, level, scale)?;

        let context = RingContext::new(params.n(), &params.qi()[..=level])?;
        let mut sampler = UniformSampler::new(rng, &context);
        for component in ciphertext.0.value.iter_mut() {
            sampler.read(component);
        }

        Ok(ciphertext)
    }
}
