use super::{Poly, RingContext};
use rand::Rng;

/// Fills ring elements with independent uniform residues, one distribution
/// per modulus of the bound context. The randomness source is taken by
/// value; share one across samplers by passing `&mut rng`.
pub struct UniformSampler<'a, R: Rng> {
    context: &'a RingContext,
    rng: R,
}

impl<'a, R: Rng> UniformSampler<'a, R> {
    pub fn new(rng: R, context: &'a RingContext) -> Self {
        Self { context, rng }
    }

    /// Overwrites every coefficient of `poly` with a fresh uniform sample
    /// below the matching modulus. The poly must be shaped for the bound
    /// context.
    pub fn read(&mut self, poly: &mut Poly) {
        assert_eq!(poly.moduli_count(), self.context.moduli_count());
        for (limb, &q) in poly.coeffs.iter_mut().zip(self.context.moduli()) {
            for c in limb.iter_mut() {
                *c = self.rng.gen_range(0..q);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_read_stays_below_moduli() {
        let context = RingContext::new(16, &[97, 193]).unwrap();
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(1), &context);
        let mut poly = context.new_poly();
        sampler.read(&mut poly);
        for (limb, &q) in poly.coeffs().iter().zip(context.moduli()) {
            assert!(limb.iter().all(|&c| c < q));
        }
        // 32 coefficients in [0, 97) u [0, 193): all-zero is (practically) impossible
        assert!(poly.coeffs().iter().flatten().any(|&c| c != 0));
    }

    #[test]
    fn test_read_is_seed_deterministic() {
        let context = RingContext::new(16, &[97, 193]).unwrap();
        let mut poly1 = context.new_poly();
        let mut poly2 = context.new_poly();

        UniformSampler::new(StdRng::seed_from_u64(42), &context).read(&mut poly1);
        UniformSampler::new(StdRng::seed_from_u64(42), &context).read(&mut poly2);
        assert_eq!(poly1, poly2);

        let mut poly3 = context.new_poly();
        UniformSampler::new(StdRng::seed_from_u64(43), &context).read(&mut poly3);
        assert_ne!(poly1, poly3);
    }
}
