use crate::ring::Poly;

/// Base unit of encrypted or plaintext state: `degree + 1` same-shape RNS
/// polynomials, the encoding scale, and the domain flag. The level is not
/// stored; it is read off the allocation (`moduli_count - 1`), so level and
/// storage can never drift apart.
#[derive(Debug, Clone)]
pub struct Element {
    pub(crate) value: Vec<Poly>,
    pub(crate) scale: f64,
    pub(crate) is_ntt: bool,
}

impl Element {
    /// Polynomial components, component 0 first. The order carries
    /// algebraic meaning for evaluation and must be preserved.
    pub fn value(&self) -> &[Poly] {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut [Poly] {
        &mut self.value
    }

    pub fn degree(&self) -> usize {
        self.value.len() - 1
    }

    /// Level of the element, derived from the modulus count of its
    /// components.
    pub fn level(&self) -> usize {
        self.value[0].moduli_count() - 1
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Only rescale-style operations should touch the scale after
    /// construction.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    /// True when every component is stored in the transform (evaluation)
    /// domain.
    pub fn is_ntt(&self) -> bool {
        self.is_ntt
    }

    pub fn set_ntt(&mut self, is_ntt: bool) {
        self.is_ntt = is_ntt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let element = Element {
            value: vec![Poly::new(8, 3); 2],
            scale: (1u64 << 30) as f64,
            is_ntt: true,
        };
        assert_eq!(element.degree(), 1);
        assert_eq!(element.level(), 2);
        assert_eq!(element.scale(), (1u64 << 30) as f64);
        assert!(element.is_ntt());
    }

    #[test]
    fn test_flag_and_scale_mutation() {
        let mut element = Element {
            value: vec![Poly::new(8, 1)],
            scale: 1.0,
            is_ntt: true,
        };
        element.set_ntt(false);
        assert!(!element.is_ntt());
        element.set_scale(2.0);
        assert_eq!(element.scale(), 2.0);
    }
}
