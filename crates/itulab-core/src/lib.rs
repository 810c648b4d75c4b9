//! # itulab - ITU-T T.42 colour encoding for fax
//!
//! The colour engine behind "JPEG for FAX": converts between device
//! sRGB and the ITULab representation of T.42 Annex E.6.4, where CIELAB
//! samples are linearly quantized to 8-bit codes under a configurable
//! gamut and illuminant, and speaks the `G3FAX` application marker
//! protocol that makes a JPEG stream interpretable as fax data.
//!
//! ## Goals
//!
//! - **Interoperable**: quantization follows the exact T.4 E.6.4
//!   arithmetic used by deployed fax hardware, down to the rounded
//!   constants.
//! - **Fast**: LUT-accelerated transfer functions, `multiversion`
//!   dispatch on the per-pixel loops.
//! - **Safe**: pure functions over caller-owned buffers; no shared
//!   mutable state, so concurrent conversions just work.
//!
//! ## Quick Start
//!
//! ```
//! use itulab_core::{LabParams, lab_to_srgb, srgb_to_lab};
//!
//! // D50 illuminant, T.42 default gamut
//! let params = LabParams::default();
//!
//! let srgb = [255u8, 255, 255, 0, 0, 0];
//! let mut lab = [0u8; 6];
//! srgb_to_lab(&params, &srgb, &mut lab);
//!
//! let mut back = [0u8; 6];
//! lab_to_srgb(&params, &lab, &mut back);
//! ```
//!
//! The JPEG container bridge (decoding and producing ITULab JPEG
//! streams) lives in the companion `itulab-jpeg` crate; this crate has
//! no codec dependencies.

pub mod color;
pub mod error;
pub mod marker;
pub mod math;
pub mod params;
pub mod transform;

pub use color::lab::CieLab;
pub use color::white_point::{D50, D65, Illuminant, WhitePoint, illuminant_by_tag};
pub use error::{Error, Result};
pub use params::LabParams;
pub use transform::{lab_to_srgb, srgb_to_lab};

/// Version of itulab-core
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
