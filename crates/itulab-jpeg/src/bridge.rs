//! The container bridge: whole-image conversions between ITULab JPEG
//! streams, sRGB JPEG streams and raw pixel buffers
//!
//! Every operation is synchronous and blocking: decode (or take) the
//! source scanlines, run each one through the colour engine, feed them
//! to the destination encoder or buffer. Codec state never outlives an
//! operation, so concurrent conversions on separate threads need
//! nothing more than separate [`LabParams`] values.
//!
//! ITULab scanlines ride inside the JPEG container tagged as YCbCr;
//! forcing the codec's output colourspace to YCbCr is the "don't touch"
//! convention that gets the quantized Lab codes through unconverted.

use img_parts::Bytes;
use img_parts::jpeg::Jpeg;
use mozjpeg::{ColorSpace, Compress};
use tracing::{debug, warn};
use zune_core::colorspace::ColorSpace as DecodeColorSpace;
use zune_core::options::DecoderOptions;
use zune_jpeg::JpegDecoder;

use itulab_core::{Error, LabParams, Result, lab_to_srgb, srgb_to_lab};

use crate::segments;

/// Geometry of a decode written into a caller-owned buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedLayout {
    /// Discovered image width in pixels
    pub width: u32,
    /// Discovered image height in pixels
    pub height: u32,
    /// Total bytes written into the caller's buffer
    pub bytes_written: usize,
}

/// Convert an ITULab JPEG stream into a plain sRGB JPEG stream
///
/// The source must identify itself with a G3FAX marker; its gamut and
/// illuminant records (if any) are applied to `params` before the pixel
/// data is transformed. Dimensions and JFIF density carry over.
pub fn itulab_to_jpeg(params: &mut LabParams, src: &[u8]) -> Result<Vec<u8>> {
    let source = parse_stream(src)?;
    if !segments::recognise_itu_fax(params, &source) {
        return Err(Error::NotItuFax);
    }

    let (pixels, width, height) = decode_scanlines(src, DecodeColorSpace::YCbCr)?;
    let stride = scanline_stride(width, height)?;

    let encoded = compress_scanlines(ColorSpace::JCS_RGB, width, height, |y, row| {
        lab_to_srgb(params, &pixels[y * stride..(y + 1) * stride], row);
    })?;

    finish_stream(encoded, Some(&source), false)
}

/// Convert a plain sRGB JPEG stream into an ITULab JPEG stream
///
/// The output carries the minimal G3FAX marker and the source's JFIF
/// density fields.
pub fn jpeg_to_itulab(params: &LabParams, src: &[u8]) -> Result<Vec<u8>> {
    let source = parse_stream(src)?;

    let (pixels, width, height) = decode_scanlines(src, DecodeColorSpace::RGB)?;
    let stride = scanline_stride(width, height)?;

    let encoded = compress_scanlines(ColorSpace::JCS_YCbCr, width, height, |y, row| {
        srgb_to_lab(params, &pixels[y * stride..(y + 1) * stride], row);
    })?;

    finish_stream(encoded, Some(&source), true)
}

/// Encode a raw in-memory sRGB buffer as an ITULab JPEG stream
///
/// `pixels` must hold exactly `width * height` packed 3-byte groups.
pub fn srgb_to_itulab(
    params: &LabParams,
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let (width, height) = (width as usize, height as usize);
    let stride = scanline_stride(width, height)?;
    check_buffer(pixels.len(), stride * height)?;

    let encoded = compress_scanlines(ColorSpace::JCS_YCbCr, width, height, |y, row| {
        srgb_to_lab(params, &pixels[y * stride..(y + 1) * stride], row);
    })?;

    finish_stream(encoded, None, true)
}

/// Encode an already-quantized raw ITULab buffer as a JPEG stream
///
/// No colour transform runs; the caller has produced the wire codes.
/// The G3FAX marker is still emitted.
pub fn itulab_to_itulab(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let (width, height) = (width as usize, height as usize);
    let stride = scanline_stride(width, height)?;
    check_buffer(pixels.len(), stride * height)?;

    let encoded = compress_scanlines(ColorSpace::JCS_YCbCr, width, height, |y, row| {
        row.copy_from_slice(&pixels[y * stride..(y + 1) * stride]);
    })?;

    finish_stream(encoded, None, true)
}

/// Decode an ITULab JPEG stream into a caller-owned raw sRGB buffer
///
/// Marker recognition is deliberately soft here: a stream without a
/// G3FAX marker is decoded anyway with the parameters the caller
/// already configured, and the absence is only logged. The strict
/// counterpart is [`itulab_to_jpeg`]; keep the two behaviours distinct.
pub fn itulab_to_srgb(
    params: &mut LabParams,
    src: &[u8],
    dst: &mut [u8],
) -> Result<DecodedLayout> {
    let source = parse_stream(src)?;
    if !segments::recognise_itu_fax(params, &source) {
        warn!("stream carries no G3FAX application marker; decoding with caller parameters");
    }

    let options = DecoderOptions::default().jpeg_set_out_colorspace(DecodeColorSpace::YCbCr);
    let mut decoder = JpegDecoder::new_with_options(src, options);
    decoder
        .decode_headers()
        .map_err(|e| Error::Codec(format!("failed to read JPEG header: {e:?}")))?;
    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| Error::Codec("decoder reported no dimensions".into()))?;

    let stride = scanline_stride(width, height)?;
    let needed = stride * height;
    if dst.len() < needed {
        return Err(Error::BufferSize {
            expected: needed,
            actual: dst.len(),
        });
    }

    let pixels = decoder
        .decode()
        .map_err(|e| Error::Codec(format!("failed to decode scanlines: {e:?}")))?;
    check_buffer(pixels.len(), needed)?;

    for (lab_row, srgb_row) in pixels
        .chunks_exact(stride)
        .zip(dst.chunks_exact_mut(stride))
    {
        lab_to_srgb(params, lab_row, srgb_row);
    }

    debug!(width, height, "decoded ITULab stream into raw sRGB buffer");
    Ok(DecodedLayout {
        width: width as u32,
        height: height as u32,
        bytes_written: needed,
    })
}

/// Parse a byte stream into its marker segments
fn parse_stream(src: &[u8]) -> Result<Jpeg> {
    Jpeg::from_bytes(Bytes::copy_from_slice(src))
        .map_err(|e| Error::StreamOpen(format!("failed to open source as JPEG: {e}")))
}

/// Full decode through the external codec, with a forced output colourspace
fn decode_scanlines(src: &[u8], colorspace: DecodeColorSpace) -> Result<(Vec<u8>, usize, usize)> {
    let options = DecoderOptions::default().jpeg_set_out_colorspace(colorspace);
    let mut decoder = JpegDecoder::new_with_options(src, options);
    let pixels = decoder
        .decode()
        .map_err(|e| Error::Codec(format!("failed to decode scanlines: {e:?}")))?;
    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| Error::Codec("decoder reported no dimensions".into()))?;

    let stride = scanline_stride(width, height)?;
    check_buffer(pixels.len(), stride * height)?;
    debug!(width, height, "decoded source stream");
    Ok((pixels, width, height))
}

/// Drive the external encoder scanline by scanline
///
/// `fill_row` produces scanline `y` into the scratch row; the scratch
/// is owned here and dropped on every exit path.
fn compress_scanlines<F>(
    in_color: ColorSpace,
    width: usize,
    height: usize,
    mut fill_row: F,
) -> Result<Vec<u8>>
where
    F: FnMut(usize, &mut [u8]),
{
    let stride = scanline_stride(width, height)?;

    let mut comp = Compress::new(in_color);
    comp.set_size(width, height);

    let mut output = Vec::with_capacity((stride * height / 10).max(4096));
    let mut writer = comp
        .start_compress(&mut output)
        .map_err(|e| Error::Codec(format!("mozjpeg: failed to start compress: {e:?}")))?;

    let mut row = vec![0u8; stride];
    for y in 0..height {
        fill_row(y, &mut row);
        writer
            .write_scanlines(&row)
            .map_err(|e| Error::Codec(format!("mozjpeg: failed to write scanlines: {e:?}")))?;
    }

    writer
        .finish()
        .map_err(|e| Error::Codec(format!("mozjpeg: failed to finish: {e:?}")))?;

    Ok(output)
}

/// Reparse the fresh encode and attach marker and density metadata
fn finish_stream(encoded: Vec<u8>, source: Option<&Jpeg>, embed_marker: bool) -> Result<Vec<u8>> {
    let mut stream = Jpeg::from_bytes(Bytes::from(encoded))
        .map_err(|e| Error::Codec(format!("failed to reparse encoded stream: {e}")))?;

    if embed_marker {
        segments::embed_itu_fax_marker(&mut stream);
    }
    if let Some(source) = source {
        segments::copy_density(source, &mut stream);
    }

    let mut bytes = Vec::new();
    stream
        .encoder()
        .write_to(&mut bytes)
        .map_err(|e| Error::Codec(format!("failed to write JPEG stream: {e}")))?;
    Ok(bytes)
}

/// Bytes per packed 3-sample scanline, with overflow treated as an
/// allocation refusal
fn scanline_stride(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(3)
        .filter(|stride| stride.checked_mul(height).is_some())
        .ok_or(Error::Allocation {
            width: width as u32,
            height: height as u32,
        })
}

/// Validate that a pixel buffer matches the image geometry exactly
fn check_buffer(actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::BufferSize { expected, actual });
    }
    Ok(())
}
