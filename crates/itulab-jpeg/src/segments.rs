//! G3FAX and JFIF segment handling inside JPEG containers
//!
//! Works at the marker-segment level via `img-parts`, so markers can be
//! read and inserted without touching the entropy-coded image data.

use img_parts::Bytes;
use img_parts::jpeg::markers::{APP0, APP1};
use img_parts::jpeg::{Jpeg, JpegSegment};
use itulab_core::{LabParams, marker};

/// Scan every APP1 segment and apply the G3FAX records to `params`
///
/// Returns whether the stream identified itself as ITU-T.42 fax data.
pub fn recognise_itu_fax(params: &mut LabParams, jpeg: &Jpeg) -> bool {
    let payloads = jpeg
        .segments()
        .iter()
        .filter(|segment| segment.marker() == APP1)
        .map(|segment| segment.contents().as_ref());
    marker::apply_marker_payloads(params, payloads)
}

/// Insert the minimal ITUFAX marker as the stream's first segment
pub fn embed_itu_fax_marker(jpeg: &mut Jpeg) {
    let segment = JpegSegment::new_with_contents(
        APP1,
        Bytes::copy_from_slice(&marker::itufax_marker()),
    );
    jpeg.segments_mut().insert(0, segment);
}

/// Copy the JFIF density fields (unit byte + X/Y density) between streams
///
/// Both streams must already carry a JFIF APP0 for anything to happen;
/// streams without one are left alone.
pub fn copy_density(src: &Jpeg, dst: &mut Jpeg) {
    let Some((unit, x_density, y_density)) = src.segments().iter().find_map(jfif_density) else {
        return;
    };
    for segment in dst.segments_mut().iter_mut() {
        if segment.marker() != APP0 {
            continue;
        }
        let contents = segment.contents();
        if contents.len() < 12 || !contents.starts_with(b"JFIF\0") {
            continue;
        }
        let mut patched = contents.to_vec();
        patched[7] = unit;
        patched[8..10].copy_from_slice(&x_density.to_be_bytes());
        patched[10..12].copy_from_slice(&y_density.to_be_bytes());
        *segment = JpegSegment::new_with_contents(APP0, Bytes::from(patched));
    }
}

/// Read the density fields out of a JFIF APP0 segment, if this is one
fn jfif_density(segment: &JpegSegment) -> Option<(u8, u16, u16)> {
    if segment.marker() != APP0 {
        return None;
    }
    let contents = segment.contents();
    if contents.len() < 12 || !contents.starts_with(b"JFIF\0") {
        return None;
    }
    Some((
        contents[7],
        u16::from_be_bytes([contents[8], contents[9]]),
        u16::from_be_bytes([contents[10], contents[11]]),
    ))
}
