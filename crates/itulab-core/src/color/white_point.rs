//! White points and the ITU-T.42 illuminant catalog
//!
//! White points define the colour of "white" for a given illuminant,
//! as CIE XYZ tristimulus values with Y normalised to 1.0.
//!
//! The catalog holds the illuminants T.42 allows a fax stream to name
//! on the wire, with the tristimulus values at the percentage scale the
//! CIE tables publish them in. Wire tags are 4 raw bytes, which may
//! include leading zero bytes; only the 2-degree observer entries are
//! addressable on the wire, the 10-degree variants are informational.

/// A white point definition (Y normalised to 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhitePoint {
    /// X tristimulus value
    pub xn: f32,
    /// Y tristimulus value
    pub yn: f32,
    /// Z tristimulus value
    pub zn: f32,
}

impl WhitePoint {
    /// Create a new white point
    pub const fn new(xn: f32, yn: f32, zn: f32) -> Self {
        Self { xn, yn, zn }
    }
}

/// CIE Standard Illuminant D50 (Horizon Light)
///
/// Correlated Colour Temperature: ~5003K.
/// The default illuminant for ITU-T.42 fax conversions.
pub const D50: WhitePoint = WhitePoint::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D65 (Noon Daylight)
///
/// Correlated Colour Temperature: ~6504K.
/// Standard white point for sRGB and most display colour spaces.
pub const D65: WhitePoint = WhitePoint::new(0.95047, 1.0, 1.08883);

// ============================================================================
// Wire-addressable illuminant catalog
// ============================================================================

/// One illuminant catalog entry
///
/// Tristimulus values are at percentage scale (Y = 100.0), matching the
/// CIE tables and the auto-rescale rule in
/// [`LabParams::set_illuminant`](crate::params::LabParams::set_illuminant).
#[derive(Debug, Clone, Copy)]
pub struct Illuminant {
    /// 4-byte wire tag, if the entry is addressable on the wire
    pub tag: Option<[u8; 4]>,
    /// Human-readable name
    pub name: &'static str,
    /// X tristimulus value (percentage scale)
    pub xn: f32,
    /// Y tristimulus value (percentage scale)
    pub yn: f32,
    /// Z tristimulus value (percentage scale)
    pub zn: f32,
}

impl Illuminant {
    const fn new(tag: Option<[u8; 4]>, name: &'static str, xn: f32, yn: f32, zn: f32) -> Self {
        Self {
            tag,
            name,
            xn,
            yn,
            zn,
        }
    }
}

/// The read-only, process-wide illuminant catalog
pub const ILLUMINANTS: [Illuminant; 18] = [
    Illuminant::new(Some(*b"\0D50"), "CIE D50/2\u{b0}", 96.422, 100.000, 82.521),
    Illuminant::new(None, "CIE D50/10\u{b0}", 96.720, 100.000, 81.427),
    Illuminant::new(None, "CIE D55/2\u{b0}", 95.682, 100.000, 92.149),
    Illuminant::new(None, "CIE D55/10\u{b0}", 95.799, 100.000, 90.926),
    Illuminant::new(Some(*b"\0D65"), "CIE D65/2\u{b0}", 95.047, 100.000, 108.883),
    Illuminant::new(None, "CIE D65/10\u{b0}", 94.811, 100.000, 107.304),
    Illuminant::new(Some(*b"\0D75"), "CIE D75/2\u{b0}", 94.972, 100.000, 122.638),
    Illuminant::new(None, "CIE D75/10\u{b0}", 94.416, 100.000, 120.641),
    Illuminant::new(Some(*b"\0\0F2"), "F02/2\u{b0}", 99.186, 100.000, 67.393),
    Illuminant::new(None, "F02/10\u{b0}", 103.279, 100.000, 69.027),
    Illuminant::new(Some(*b"\0\0F7"), "F07/2\u{b0}", 95.041, 100.000, 108.747),
    Illuminant::new(None, "F07/10\u{b0}", 95.792, 100.000, 107.686),
    Illuminant::new(Some(*b"\0F11"), "F11/2\u{b0}", 100.962, 100.000, 64.350),
    Illuminant::new(None, "F11/10\u{b0}", 103.863, 100.000, 65.607),
    Illuminant::new(Some(*b"\0\0SA"), "A/2\u{b0}", 109.850, 100.000, 35.585),
    Illuminant::new(None, "A/10\u{b0}", 111.144, 100.000, 35.200),
    Illuminant::new(Some(*b"\0\0SC"), "C/2\u{b0}", 98.074, 100.000, 118.232),
    Illuminant::new(None, "C/10\u{b0}", 97.285, 100.000, 116.145),
];

/// Look up a catalog entry by its exact 4-byte wire tag
pub fn illuminant_by_tag(tag: &[u8; 4]) -> Option<&'static Illuminant> {
    ILLUMINANTS
        .iter()
        .find(|entry| entry.tag.as_ref() == Some(tag))
}
