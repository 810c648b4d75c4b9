//! CIELAB (L*a*b*) colour samples
//!
//! L*a*b* is the perceptually uniform space ITU-T.42 quantizes for fax
//! transmission:
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis
//! - b*: Blue-yellow axis
//!
//! The piecewise cube-root law here uses the rounded constants from
//! T.42 so that quantized codes interoperate with other fax
//! implementations, rather than the exact 6/29 rationals.

use crate::color::WhitePoint;

/// A CIELAB colour sample
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CieLab {
    /// Lightness (0 to 100)
    pub l: f32,
    /// Green-red axis (typically -128 to 127)
    pub a: f32,
    /// Blue-yellow axis (typically -128 to 127)
    pub b: f32,
}

impl CieLab {
    /// Create a new Lab sample
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Convert from CIE XYZ, normalising by the given white point
    pub fn from_xyz(xyz: [f32; 3], white: &WhitePoint) -> Self {
        let fx = lab_f(xyz[0] / white.xn);
        let fy = lab_f(xyz[1] / white.yn);
        let fz = lab_f(xyz[2] / white.zn);

        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert to CIE XYZ, denormalising by the given white point
    pub fn to_xyz(&self, white: &WhitePoint) -> [f32; 3] {
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        [
            lab_f_inv(fx) * white.xn,
            lab_f_inv(fy) * white.yn,
            lab_f_inv(fz) * white.zn,
        ]
    }

    /// Check if approximately equal to another Lab sample
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

/// Forward function f(t) for XYZ → Lab
#[inline]
pub(crate) fn lab_f(t: f32) -> f32 {
    if t <= 0.008856 { 7.787 * t + 0.1379 } else { t.cbrt() }
}

/// Inverse function f⁻¹(t) for Lab → XYZ
#[inline]
pub(crate) fn lab_f_inv(t: f32) -> f32 {
    if t <= 0.2068 {
        0.1284 * (t - 0.1379)
    } else {
        t * t * t
    }
}
