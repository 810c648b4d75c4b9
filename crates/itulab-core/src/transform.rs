//! Batch transforms between 8-bit sRGB and quantized ITULab triples
//!
//! These are the two per-pixel-array primitives the container bridge
//! drives scanline by scanline. Both walk fixed-stride 3-byte groups,
//! are pure in everything but the output slice, and dispatch through
//! `multiversion` for the hot loop.

use multiversion::multiversion;

use crate::color::lab::CieLab;
use crate::math::gamma::{LINEAR_TO_SRGB, SRGB_TO_LINEAR, linear_to_srgb_index};
use crate::params::LabParams;

/// Linear sRGB → CIE XYZ (Rec. 709 primaries, D65 derivation)
const RGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// CIE XYZ → linear sRGB
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2406, -1.5372, -0.4986],
    [-0.9689, 1.8758, 0.0415],
    [0.0557, -0.2040, 1.0570],
];

/// Transform packed 8-bit sRGB triples into quantized ITULab triples
///
/// `src` and `dst` hold the same number of whole 3-byte pixel groups;
/// an empty slice is a no-op.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn srgb_to_lab(params: &LabParams, src: &[u8], dst: &mut [u8]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len());

    let white = params.white_point();
    let to_linear = &*SRGB_TO_LINEAR;

    for (srgb, lab) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
        let r = to_linear[usize::from(srgb[0])];
        let g = to_linear[usize::from(srgb[1])];
        let b = to_linear[usize::from(srgb[2])];

        let xyz = [
            RGB_TO_XYZ[0][0] * r + RGB_TO_XYZ[0][1] * g + RGB_TO_XYZ[0][2] * b,
            RGB_TO_XYZ[1][0] * r + RGB_TO_XYZ[1][1] * g + RGB_TO_XYZ[1][2] * b,
            RGB_TO_XYZ[2][0] * r + RGB_TO_XYZ[2][1] * g + RGB_TO_XYZ[2][2] * b,
        ];

        lab.copy_from_slice(&params.quantize(&CieLab::from_xyz(xyz, &white)));
    }
}

/// Transform packed quantized ITULab triples into 8-bit sRGB triples
///
/// Exact inverse of [`srgb_to_lab`] up to the 8-bit quantization of
/// both representations. Out-of-gamut intermediate values clamp into
/// [0, 255], never wrap.
#[multiversion(targets("x86_64+avx2", "x86_64+sse4.1", "aarch64+neon",))]
pub fn lab_to_srgb(params: &LabParams, src: &[u8], dst: &mut [u8]) {
    assert!(src.len() % 3 == 0);
    assert!(dst.len() >= src.len());

    let white = params.white_point();
    let to_srgb = &*LINEAR_TO_SRGB;

    for (lab, srgb) in src.chunks_exact(3).zip(dst.chunks_exact_mut(3)) {
        let value = params.dequantize([lab[0], lab[1], lab[2]]);
        let xyz = value.to_xyz(&white);

        let r = XYZ_TO_RGB[0][0] * xyz[0] + XYZ_TO_RGB[0][1] * xyz[1] + XYZ_TO_RGB[0][2] * xyz[2];
        let g = XYZ_TO_RGB[1][0] * xyz[0] + XYZ_TO_RGB[1][1] * xyz[1] + XYZ_TO_RGB[1][2] * xyz[2];
        let b = XYZ_TO_RGB[2][0] * xyz[0] + XYZ_TO_RGB[2][1] * xyz[1] + XYZ_TO_RGB[2][2] * xyz[2];

        srgb[0] = to_srgb[linear_to_srgb_index(r)];
        srgb[1] = to_srgb[linear_to_srgb_index(g)];
        srgb[2] = to_srgb[linear_to_srgb_index(b)];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_a_noop() {
        let params = LabParams::default();
        let mut dst = [0u8; 0];
        srgb_to_lab(&params, &[], &mut dst);
        lab_to_srgb(&params, &[], &mut dst);
    }

    #[test]
    fn test_white_hits_top_of_l_range() {
        let params = LabParams::default();
        let mut lab = [0u8; 3];
        srgb_to_lab(&params, &[255, 255, 255], &mut lab);
        assert_eq!(lab[0], 255);
    }

    #[test]
    fn test_black_hits_bottom_of_l_range() {
        let params = LabParams::default();
        let mut lab = [0u8; 3];
        srgb_to_lab(&params, &[0, 0, 0], &mut lab);
        assert_eq!(lab[0], 0);
    }

    #[test]
    fn test_neutral_grey_lands_near_signed_range_midpoint() {
        let mut params = LabParams::default();
        params.set_gamut(0, 100, -128, 127, -128, 127, true);

        let mut lab = [0u8; 3];
        srgb_to_lab(&params, &[128, 128, 128], &mut lab);

        // L* of sRGB grey 128 is ~53.6; the code must land near the
        // midpoint of the configured [0, 100] range.
        let midpoint = 127.5;
        assert!(
            (f32::from(lab[0]) - midpoint).abs() < 15.0,
            "L code {} too far from midpoint",
            lab[0]
        );
    }

    fn roundtrip(params: &LabParams, srgb: &[u8]) -> Vec<u8> {
        let mut lab = vec![0u8; srgb.len()];
        let mut back = vec![0u8; srgb.len()];
        srgb_to_lab(params, srgb, &mut lab);
        lab_to_srgb(params, &lab, &mut back);
        back
    }

    fn max_channel_delta(a: &[u8], b: &[u8]) -> i16 {
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| (i16::from(x) - i16::from(y)).abs())
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_roundtrip_representative_triples() {
        let params = LabParams::default();

        // White and black sit on the quantizer's endpoints, mid grey and
        // saturated red land well inside the default T.42 gamut.
        let srgb = [
            255u8, 255, 255, //
            0, 0, 0, //
            128, 128, 128, //
            255, 0, 0,
        ];
        let back = roundtrip(&params, &srgb);
        assert!(
            max_channel_delta(&srgb, &back) <= 2,
            "representative triples drift beyond two codes: {back:?}"
        );
    }

    #[test]
    fn test_roundtrip_grey_ramp_and_scatter() {
        let params = LabParams::default();

        let mut srgb = Vec::new();
        for v in (0u8..=255).step_by(17) {
            srgb.extend_from_slice(&[v, v, v]);
        }
        // Low-chroma scatter: channels jittered around a common base stay
        // inside the default T.42 gamut. Strongly saturated triples (pure
        // blue has b* below -75) are clipped by design, not round-tripped,
        // so they do not belong in this sweep.
        use rand::{Rng, SeedableRng, rngs::StdRng};
        let mut rng = StdRng::seed_from_u64(0x1701);
        for _ in 0..256 {
            let base = rng.gen_range(0..=255i16);
            for _ in 0..3 {
                let jitter = rng.gen_range(-32..=32i16);
                srgb.push((base + jitter).clamp(0, 255) as u8);
            }
        }

        let back = roundtrip(&params, &srgb);
        // Quantization errors in L, a* and b* can align against a single
        // output channel, which costs up to one extra code on dark input
        // where the transfer curve is steepest.
        assert!(max_channel_delta(&srgb, &back) <= 3);
    }

    #[test]
    fn test_roundtrip_with_signed_gamut() {
        let mut params = LabParams::default();
        params.set_gamut(0, 100, -128, 127, -128, 127, true);

        let srgb = [12u8, 200, 130, 255, 0, 64, 128, 128, 128];
        let back = roundtrip(&params, &srgb);
        // The [-128, 127] gamut quantizes a*/b* a good deal coarser than
        // the default one (a full Lab unit per code), so the drift bound
        // loosens accordingly. Sign-bias mishandling would show up as
        // errors two orders of magnitude larger.
        assert!(max_channel_delta(&srgb, &back) <= 4);
    }

    #[test]
    fn test_extreme_lab_values_saturate_without_wrapping() {
        // A wire gamut with an enormous Q span dequantizes codes to Lab
        // values far outside anything displayable. Decoding must clamp
        // through the fixed-point LUT index, saturating at 0 or 255.
        let mut wild_high = LabParams::default();
        wild_high.set_gamut_pq(0, 60000, 128, 170, 96, 200);
        let mut srgb = [1u8; 3];
        // L dequantizes to ~60000 with neutral chroma: far past white
        lab_to_srgb(&wild_high, &[255, 128, 96], &mut srgb);
        assert_eq!(srgb, [255, 255, 255]);

        // A huge P offset pushes L hugely negative instead
        let mut wild_low = LabParams::default();
        wild_low.set_gamut_pq(60000, 100, 128, 170, 96, 200);
        let mut srgb = [1u8; 3];
        lab_to_srgb(&wild_low, &[0, 128, 96], &mut srgb);
        assert_eq!(srgb, [0, 0, 0]);

        // Every corner of the code cube decodes without panicking under
        // the default gamut, clamping whatever leaves the sRGB cube.
        let params = LabParams::default();
        for corner in [
            [0u8, 0, 0],
            [0, 0, 255],
            [0, 255, 0],
            [0, 255, 255],
            [255, 0, 0],
            [255, 0, 255],
            [255, 255, 0],
            [255, 255, 255],
        ] {
            let mut out = [0u8; 3];
            lab_to_srgb(&params, &corner, &mut out);
        }
    }

    #[test]
    fn test_matrices_are_mutual_inverses() {
        // Rounded published coefficients: the product is identity to ~1e-3
        for i in 0..3 {
            for j in 0..3 {
                let mut sum = 0.0f32;
                for (k, row) in XYZ_TO_RGB.iter().enumerate() {
                    sum += RGB_TO_XYZ[i][k] * row[j];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (sum - expected).abs() < 2e-3,
                    "product[{}][{}] = {}",
                    i,
                    j,
                    sum
                );
            }
        }
    }
}
