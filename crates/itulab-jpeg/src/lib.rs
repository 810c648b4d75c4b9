//! # itulab-jpeg - the T.42 fax JPEG container bridge
//!
//! Moves whole images between the three representations T.42 fax
//! workflows deal in:
//!
//! - ITULab JPEG streams (quantized CIELAB codes riding in a JPEG
//!   container, signalled by the `G3FAX` application marker)
//! - plain sRGB baseline JPEG streams
//! - raw in-memory pixel buffers, sRGB or already-quantized ITULab
//!
//! The colour mathematics lives in `itulab-core`; this crate drives the
//! external JPEG codec pair around it and handles the marker segments.
//!
//! ## Quick Start
//!
//! ```no_run
//! use itulab_jpeg::{LabParams, itulab_to_srgb, srgb_to_itulab};
//!
//! # fn main() -> itulab_jpeg::Result<()> {
//! let params = LabParams::default();
//!
//! // A 2x2 all-white page into an ITULab fax stream
//! let page = [0xFFu8; 2 * 2 * 3];
//! let stream = srgb_to_itulab(&params, &page, 2, 2)?;
//!
//! // And back out into a caller-owned buffer
//! let mut decoded = LabParams::default();
//! let mut raw = [0u8; 2 * 2 * 3];
//! let layout = itulab_to_srgb(&mut decoded, &stream, &mut raw)?;
//! assert_eq!((layout.width, layout.height), (2, 2));
//! # Ok(())
//! # }
//! ```

pub mod bridge;
pub mod segments;

pub use bridge::{
    DecodedLayout, itulab_to_itulab, itulab_to_jpeg, itulab_to_srgb, jpeg_to_itulab,
    srgb_to_itulab,
};
pub use itulab_core::{Error, LabParams, Result};
pub use segments::{copy_density, embed_itu_fax_marker, recognise_itu_fax};
