//! Colour space types and conversions
//!
//! This module provides:
//! - CIELAB (L*a*b*) samples and the T.42 piecewise cube-root law
//! - White point definitions and the ITU-T.42 illuminant catalog

pub mod lab;
pub mod white_point;

pub use lab::CieLab;
pub use white_point::{D50, D65, Illuminant, WhitePoint, illuminant_by_tag};
