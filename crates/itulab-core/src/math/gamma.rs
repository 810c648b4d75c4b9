//! sRGB transfer functions and the lookup tables built from them
//!
//! The scalar functions are the IEC 61966-2-1 reference; the tables are
//! what the per-pixel loops actually index. Both must agree: the tables
//! are generated from the scalar functions, and a test pins every entry
//! to the reference result.

use std::sync::LazyLock;

/// sRGB gamma decode (encoded → linear)
///
/// Converts an sRGB-encoded value in [0,1] to linear light in [0,1].
#[inline]
pub fn srgb_gamma_decode(encoded: f32) -> f32 {
    if encoded <= 0.04045 {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Converts linear light in [0,1] to an sRGB-encoded value in [0,1].
#[inline]
pub fn srgb_gamma_encode(linear: f32) -> f32 {
    if linear <= 0.003_130_8 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// 8-bit sRGB code → linear light, one entry per code
pub static SRGB_TO_LINEAR: LazyLock<[f32; 256]> = LazyLock::new(|| {
    let mut lut = [0.0f32; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = srgb_gamma_decode(i as f32 / 255.0);
    }
    lut
});

/// Fixed-point linear light (scaled by 4096) → 8-bit sRGB code
///
/// Index with `(linear * 4096.0)` clamped to [0, 4095].
pub static LINEAR_TO_SRGB: LazyLock<[u8; 4096]> = LazyLock::new(|| {
    let mut lut = [0u8; 4096];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = encode_to_code(i as f32 / 4096.0);
    }
    lut
});

/// Reference scalar path: linear light to a clamped 8-bit sRGB code
#[inline]
pub(crate) fn encode_to_code(linear: f32) -> u8 {
    let encoded = (srgb_gamma_encode(linear) * 256.0).floor();
    if encoded < 0.0 {
        0
    } else if encoded <= 255.0 {
        encoded as u8
    } else {
        255
    }
}

/// Clamp a scaled linear value into the encode table's index range
#[inline]
pub fn linear_to_srgb_index(linear: f32) -> usize {
    let scaled = (linear * 4096.0) as i32;
    scaled.clamp(0, 4095) as usize
}
