//! The G3FAX application marker protocol
//!
//! ITU-T fax streams signal their T.42 semantics with APP1 segments
//! whose payload starts `"G3FAX"`, followed by a sub-type byte that
//! selects the record layout. Decoding accepts the whole record family
//! (stream header, gamut, illuminant, palette); encoding emits only the
//! minimal stream header record. That asymmetry is how deployed fax
//! equipment behaves, so it is kept.
//!
//! All multi-byte fields are big-endian.

use tracing::{debug, warn};

use crate::params::LabParams;

/// Payload prefix identifying ITU-T.42 fax streams
pub const G3FAX_PREFIX: &[u8; 5] = b"G3FAX";

/// Version field carried in stream header records (the 1994 edition)
pub const G3FAX_VERSION: u16 = 0x07CA;

/// Resolution written into produced streams, in dots per inch
pub const G3FAX_DPI: u16 = 200;

/// Sub-type 0: stream header (version + resolution)
const SUBTYPE_HEADER: u8 = 0;
/// Sub-type 1: gamut in (P, Q) wire form
const SUBTYPE_GAMUT: u8 = 1;
/// Sub-type 2: illuminant tag or colour-temperature escape
const SUBTYPE_ILLUMINANT: u8 = 2;
/// Sub-type 3: colour palette table selection
const SUBTYPE_PALETTE: u8 = 3;

/// Walk APP1 payloads and apply every G3FAX record to `params`
///
/// Returns true iff at least one header, gamut or illuminant record was
/// seen anywhere in the chain. Scanning never stops early: repeated
/// gamut or illuminant records overwrite earlier ones, so the last
/// writer wins. A palette record alone does not make a stream ITU fax
/// data, and unknown sub-types are skipped.
pub fn apply_marker_payloads<'a, I>(params: &mut LabParams, payloads: I) -> bool
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut recognised = false;
    for payload in payloads {
        recognised |= apply_one(params, payload);
    }
    recognised
}

fn apply_one(params: &mut LabParams, payload: &[u8]) -> bool {
    if payload.len() < 6 || !payload.starts_with(G3FAX_PREFIX) {
        return false;
    }
    let subtype = payload[5];
    let body = &payload[6..];
    match subtype {
        SUBTYPE_HEADER => {
            if body.len() < 4 {
                warn!(len = body.len(), "truncated G3FAX header record");
                return false;
            }
            let version = u16::from_be_bytes([body[0], body[1]]);
            let dpi = u16::from_be_bytes([body[2], body[3]]);
            debug!(version, dpi, "fax stream header");
            true
        }
        SUBTYPE_GAMUT => {
            let Some(code) = body.first_chunk::<12>() else {
                warn!(len = body.len(), "truncated G3FAX gamut record");
                return false;
            };
            params.set_gamut_from_code(code);
            true
        }
        SUBTYPE_ILLUMINANT => {
            let Some(code) = body.first_chunk::<4>() else {
                warn!(len = body.len(), "truncated G3FAX illuminant record");
                return false;
            };
            params.set_illuminant_from_tag(code);
            true
        }
        SUBTYPE_PALETTE => {
            if body.len() < 2 {
                warn!(len = body.len(), "truncated G3FAX palette record");
                return false;
            }
            let index = u16::from_be_bytes([body[0], body[1]]);
            debug!(index, "colour palette table selected");
            false
        }
        other => {
            debug!(subtype = other, "ignoring unknown G3FAX record");
            false
        }
    }
}

/// Build the minimal marker payload every produced stream carries
///
/// Layout: `"G3FAX"`, sub-type 0, version, resolution in dpi. Gamut and
/// illuminant records are never emitted; receivers fall back to the
/// T.42 defaults, which is what this library encodes with.
pub fn itufax_marker() -> [u8; 10] {
    let mut payload = [0u8; 10];
    payload[..5].copy_from_slice(G3FAX_PREFIX);
    payload[5] = SUBTYPE_HEADER;
    payload[6..8].copy_from_slice(&G3FAX_VERSION.to_be_bytes());
    payload[8..10].copy_from_slice(&G3FAX_DPI.to_be_bytes());
    payload
}
