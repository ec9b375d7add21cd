/*!
CKKS scheme layer: validated parameter chains and the ciphertext
allocation protocol. Encryption, evaluation and encoding live on top of
the types defined here.
*/

pub mod ciphertext;
pub mod element;
pub mod params;

pub use ciphertext::Ciphertext;
pub use element::Element;
pub use params::Parameters;

use crate::ring::RingError;

#[derive(Debug, PartialEq)]
pub enum CkksError {
    /// the parameters were never generated/validated
    InvalidParameters,
    /// requested level exceeds the primary modulus chain
    LevelOutOfBounds { level: usize, max_level: usize },
    /// a QP allocation was requested but the parameters carry no special moduli
    EmptyAuxiliarySet,
    Ring(RingError),
}

impl From<RingError> for CkksError {
    fn from(err: RingError) -> Self {
        Self::Ring(err)
    }
}
