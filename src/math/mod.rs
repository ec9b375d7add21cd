pub mod ntt;
pub mod prime;
