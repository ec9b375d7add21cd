/*!
CKKS-style approximate homomorphic encryption over residue-number-system
(RNS) polynomial rings: the parameter chains, ring contexts, uniform
sampling, and the ciphertext allocation core that encryption and
evaluation code build on.
*/

pub mod ckks;
pub mod math;
pub mod ring;
