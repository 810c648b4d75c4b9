//! Transfer-function mathematics for the transform hot path

pub mod gamma;

pub use gamma::{LINEAR_TO_SRGB, SRGB_TO_LINEAR, srgb_gamma_decode, srgb_gamma_encode};
