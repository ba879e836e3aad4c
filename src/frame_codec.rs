/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::buffer_geometry::checked_frame_geometry;
use crate::codec_error::{check_overflow_v3, check_packed_buffer, UnsupportedFormat};
use crate::color_matrix::{ColorMatrix, Gamut};
use crate::images::{ComponentPlanes, RgbFrame, RgbImage};
use crate::numerics::clamp_unit;
use crate::packed_layout::{pack_group, unpack_group, PixelCodes, MAX_GROUP_PIXELS};
use crate::range_map::{get_code_range, CodeRange, RangeConvention};
use crate::sample::RgbSample;
use crate::{CodecError, PixelFormat};
#[cfg(feature = "rayon")]
use rayon::iter::{IndexedParallelIterator, ParallelIterator};
#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelSlice, ParallelSliceMut};

/// Everything a row needs to move between samples and native codes
#[derive(Debug, Copy, Clone)]
struct RowConversion {
    /// Present for YCbCr formats only
    matrix: Option<ColorMatrix>,
    /// Code range of the packed side
    codes: CodeRange,
    /// Convention of the integer sample side
    samples: RangeConvention,
}

pub(crate) fn resolve_matrix(
    format: PixelFormat,
    gamut: Option<Gamut>,
) -> Result<Option<ColorMatrix>, CodecError> {
    if !format.is_yuv() {
        return Ok(None);
    }
    match gamut {
        Some(gamut) => Ok(Some(ColorMatrix::new(gamut))),
        None => Err(CodecError::UnsupportedFormat(
            UnsupportedFormat::MissingGamut(format),
        )),
    }
}

/// v210 averages pair chroma before quantizing, 2vuy averages the quantized codes.
#[inline(always)]
const fn averages_chroma_in_float(format: PixelFormat) -> bool {
    matches!(format, PixelFormat::Yuv10)
}

#[inline(always)]
fn read_rgb<T: RgbSample>(src: &[T], x: usize, convention: RangeConvention) -> [f32; 3] {
    let px = &src[x * 3..x * 3 + 3];
    [
        px[0].to_unit(convention),
        px[1].to_unit(convention),
        px[2].to_unit(convention),
    ]
}

fn fill_rgb_group<T: RgbSample>(
    src: &[T],
    start: usize,
    width: usize,
    conversion: &RowConversion,
    codes: &mut [PixelCodes],
) {
    let range = &conversion.codes;
    let black = range.black();
    for (i, code) in codes.iter_mut().enumerate() {
        let x = start + i;
        *code = if x < width {
            read_rgb(src, x, conversion.samples).map(|v| range.quantize_y(v))
        } else {
            [black; 3]
        };
    }
}

fn fill_ycbcr_group<T: RgbSample>(
    src: &[T],
    start: usize,
    width: usize,
    matrix: &ColorMatrix,
    conversion: &RowConversion,
    format: PixelFormat,
    codes: &mut [PixelCodes],
) {
    let range = &conversion.codes;
    let quantize = |v: [f32; 3]| {
        [
            range.quantize_y(v[0]),
            range.quantize_uv(v[1]),
            range.quantize_uv(v[2]),
        ]
    };
    // Padding pixels are normalized black with zero color difference,
    // a half filled pair at the row end averages its real chroma with neutral
    let mut ycbcr = [[0f32; 3]; MAX_GROUP_PIXELS];
    for (i, dst) in ycbcr.iter_mut().take(codes.len()).enumerate() {
        let x = start + i;
        if x < width {
            let [r, g, b] = read_rgb(src, x, conversion.samples);
            *dst = matrix.forward(r, g, b);
        }
    }

    for (pair, dst) in codes.chunks_exact_mut(2).enumerate() {
        let (a, b) = (ycbcr[pair * 2], ycbcr[pair * 2 + 1]);
        let (first, second) = if averages_chroma_in_float(format) {
            let cb = (a[1] + b[1]) * 0.5f32;
            let cr = (a[2] + b[2]) * 0.5f32;
            (quantize([a[0], cb, cr]), quantize([b[0], cb, cr]))
        } else {
            (quantize(a), quantize(b))
        };
        dst[0] = first;
        dst[1] = second;
    }
}

fn pack_row<T: RgbSample, const FORMAT: u8>(
    src: &[T],
    dst: &mut [u8],
    width: usize,
    conversion: &RowConversion,
) {
    let format: PixelFormat = FORMAT.into();
    let group_pixels = format.group_pixels();
    let mut codes = [[0u16; 3]; MAX_GROUP_PIXELS];

    for (group, dst) in dst.chunks_exact_mut(format.group_bytes()).enumerate() {
        let start = group * group_pixels;
        let group_codes = &mut codes[..group_pixels];
        match conversion.matrix.as_ref() {
            Some(matrix) => {
                fill_ycbcr_group(src, start, width, matrix, conversion, format, group_codes)
            }
            None => fill_rgb_group(src, start, width, conversion, group_codes),
        }
        pack_group::<FORMAT>(group_codes, dst);
    }
}

#[inline(always)]
fn decode_pixel(code: &PixelCodes, conversion: &RowConversion) -> [f32; 3] {
    let range = &conversion.codes;
    match conversion.matrix.as_ref() {
        Some(matrix) => matrix.inverse(
            range.normalize_y(code[0] as u32),
            range.normalize_uv(code[1] as u32),
            range.normalize_uv(code[2] as u32),
        ),
        None => code.map(|x| clamp_unit(range.normalize_y(x as u32))),
    }
}

fn unpack_row<T: RgbSample, const FORMAT: u8>(
    src: &[u8],
    dst: &mut [T],
    width: usize,
    conversion: &RowConversion,
) {
    let format: PixelFormat = FORMAT.into();
    let group_pixels = format.group_pixels();
    let mut codes = [[0u16; 3]; MAX_GROUP_PIXELS];

    for (group, src) in src.chunks_exact(format.group_bytes()).enumerate() {
        let start = group * group_pixels;
        unpack_group::<FORMAT>(src, &mut codes[..group_pixels]);
        let count = group_pixels.min(width - start);
        for (i, code) in codes[..count].iter().enumerate() {
            let rgb = decode_pixel(code, conversion);
            let x = start + i;
            let dst = &mut dst[x * 3..x * 3 + 3];
            dst[0] = T::from_unit(rgb[0], conversion.samples);
            dst[1] = T::from_unit(rgb[1], conversion.samples);
            dst[2] = T::from_unit(rgb[2], conversion.samples);
        }
    }
}

fn pack_frame_impl<T: RgbSample, const FORMAT: u8>(
    image: &RgbImage<T>,
    packed: &mut [u8],
    row_bytes: usize,
    conversion: RowConversion,
) {
    let width = image.width as usize;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = packed
            .par_chunks_exact_mut(row_bytes)
            .zip(image.data.par_chunks_exact(width * 3));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = packed
            .chunks_exact_mut(row_bytes)
            .zip(image.data.chunks_exact(width * 3));
    }
    iter.for_each(|(dst, src)| {
        pack_row::<T, FORMAT>(src, dst, width, &conversion);
    });
}

fn unpack_frame_impl<T: RgbSample, const FORMAT: u8>(
    packed: &[u8],
    row_bytes: usize,
    frame: &mut RgbFrame<T>,
    conversion: RowConversion,
) {
    let width = frame.width as usize;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = frame
            .data
            .par_chunks_exact_mut(width * 3)
            .zip(packed.par_chunks_exact(row_bytes));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = frame
            .data
            .chunks_exact_mut(width * 3)
            .zip(packed.chunks_exact(row_bytes));
    }
    iter.for_each(|(dst, src)| {
        unpack_row::<T, FORMAT>(src, dst, width, &conversion);
    });
}

/// Packs an interleaved RGB frame into a broadcast pixel format.
///
/// Rows are packed to whole pixel groups, pixels past `width` are written as
/// range black with neutral chroma. YCbCr 4:2:2 formats share one chroma sample
/// per pixel pair: v210 averages normalized chroma before quantizing,
/// 2vuy averages the quantized 8-bit codes.
///
/// # Arguments
///
/// * `image`: Source RGB image, `width * height * 3` samples
/// * `format`: Target packed format
/// * `gamut`: YCbCr matrix, required for YCbCr formats and ignored for RGB formats
/// * `input_range`: Range of integer samples, float samples are always `[0, 1]`
/// * `output_range`: Range of the packed codes
///
pub fn pack_frame<T: RgbSample>(
    image: &RgbImage<T>,
    format: PixelFormat,
    gamut: Option<Gamut>,
    input_range: RangeConvention,
    output_range: RangeConvention,
) -> Result<Vec<u8>, CodecError> {
    image.check_constraints()?;
    let matrix = resolve_matrix(format, gamut)?;
    let geometry = checked_frame_geometry(format, image.width, image.height)?;

    let mut packed = vec![0u8; geometry.total_bytes];
    if geometry.total_bytes == 0 {
        return Ok(packed);
    }

    let conversion = RowConversion {
        matrix,
        codes: get_code_range(format.bit_depth(), output_range),
        samples: input_range,
    };
    let row_bytes = geometry.row_bytes;
    match format {
        PixelFormat::Yuv8 => pack_frame_impl::<T, { PixelFormat::Yuv8 as u8 }>(
            image,
            &mut packed,
            row_bytes,
            conversion,
        ),
        PixelFormat::Yuv10 => pack_frame_impl::<T, { PixelFormat::Yuv10 as u8 }>(
            image,
            &mut packed,
            row_bytes,
            conversion,
        ),
        PixelFormat::Rgb10 => pack_frame_impl::<T, { PixelFormat::Rgb10 as u8 }>(
            image,
            &mut packed,
            row_bytes,
            conversion,
        ),
        PixelFormat::Rgb12 => pack_frame_impl::<T, { PixelFormat::Rgb12 as u8 }>(
            image,
            &mut packed,
            row_bytes,
            conversion,
        ),
        PixelFormat::Bgra8 => pack_frame_impl::<T, { PixelFormat::Bgra8 as u8 }>(
            image,
            &mut packed,
            row_bytes,
            conversion,
        ),
    }
    Ok(packed)
}

/// Unpacks a packed frame into interleaved RGB samples.
///
/// Each pixel of a 4:2:2 pair receives the pair chroma, RGB output is clamped to
/// the nominal range. Padding pixels are never returned, bytes past
/// `row_bytes * height` are not read.
///
/// # Arguments
///
/// * `packed`: Packed frame with the row stride of [crate::frame_geometry]
/// * `width`: Frame width in pixels
/// * `height`: Frame height in pixels
/// * `format`: Source packed format
/// * `gamut`: YCbCr matrix, required for YCbCr formats and ignored for RGB formats
/// * `input_range`: Range of the packed codes
/// * `output_range`: Range of integer samples, float samples are always `[0, 1]`
///
pub fn unpack_frame<T: RgbSample>(
    packed: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
    gamut: Option<Gamut>,
    input_range: RangeConvention,
    output_range: RangeConvention,
) -> Result<RgbFrame<T>, CodecError> {
    let matrix = resolve_matrix(format, gamut)?;
    let geometry = checked_frame_geometry(format, width, height)?;
    check_packed_buffer(packed, geometry.row_bytes, geometry.row_bytes, height)?;
    check_overflow_v3(width as usize, height as usize, 3)?;

    let mut frame = RgbFrame::<T>::alloc(width, height);
    if geometry.total_bytes == 0 {
        return Ok(frame);
    }

    let conversion = RowConversion {
        matrix,
        codes: get_code_range(format.bit_depth(), input_range),
        samples: output_range,
    };
    let row_bytes = geometry.row_bytes;
    match format {
        PixelFormat::Yuv8 => unpack_frame_impl::<T, { PixelFormat::Yuv8 as u8 }>(
            packed,
            row_bytes,
            &mut frame,
            conversion,
        ),
        PixelFormat::Yuv10 => unpack_frame_impl::<T, { PixelFormat::Yuv10 as u8 }>(
            packed,
            row_bytes,
            &mut frame,
            conversion,
        ),
        PixelFormat::Rgb10 => unpack_frame_impl::<T, { PixelFormat::Rgb10 as u8 }>(
            packed,
            row_bytes,
            &mut frame,
            conversion,
        ),
        PixelFormat::Rgb12 => unpack_frame_impl::<T, { PixelFormat::Rgb12 as u8 }>(
            packed,
            row_bytes,
            &mut frame,
            conversion,
        ),
        PixelFormat::Bgra8 => unpack_frame_impl::<T, { PixelFormat::Bgra8 as u8 }>(
            packed,
            row_bytes,
            &mut frame,
            conversion,
        ),
    }
    Ok(frame)
}

fn split_row<const FORMAT: u8>(src: &[u8], c0: &mut [u16], c1: &mut [u16], c2: &mut [u16]) {
    let format: PixelFormat = FORMAT.into();
    let group_pixels = format.group_pixels();
    let width = c0.len();
    let mut codes = [[0u16; 3]; MAX_GROUP_PIXELS];

    for (group, src) in src.chunks_exact(format.group_bytes()).enumerate() {
        let start = group * group_pixels;
        unpack_group::<FORMAT>(src, &mut codes[..group_pixels]);
        let count = group_pixels.min(width - start);
        for (i, code) in codes[..count].iter().enumerate() {
            c0[start + i] = code[0];
            c1[start + i] = code[1];
            c2[start + i] = code[2];
        }
    }
}

fn split_components_impl<const FORMAT: u8>(
    packed: &[u8],
    row_bytes: usize,
    planes: &mut ComponentPlanes,
) {
    let width = planes.width as usize;
    let [p0, p1, p2] = &mut planes.planes;
    let iter;
    #[cfg(feature = "rayon")]
    {
        iter = p0
            .par_chunks_exact_mut(width)
            .zip(p1.par_chunks_exact_mut(width))
            .zip(p2.par_chunks_exact_mut(width))
            .zip(packed.par_chunks_exact(row_bytes));
    }
    #[cfg(not(feature = "rayon"))]
    {
        iter = p0
            .chunks_exact_mut(width)
            .zip(p1.chunks_exact_mut(width))
            .zip(p2.chunks_exact_mut(width))
            .zip(packed.chunks_exact(row_bytes));
    }
    iter.for_each(|(((c0, c1), c2), src)| {
        split_row::<FORMAT>(src, c0, c1, c2);
    });
}

/// Splits a packed frame into three planes of native component codes.
///
/// No range or matrix conversion is applied, codes are returned as stored.
///
/// # Arguments
///
/// * `packed`: Packed frame with the row stride of [crate::frame_geometry]
/// * `width`: Frame width in pixels
/// * `height`: Frame height in pixels
/// * `format`: Source packed format
///
pub fn split_components(
    packed: &[u8],
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Result<ComponentPlanes, CodecError> {
    let geometry = checked_frame_geometry(format, width, height)?;
    check_packed_buffer(packed, geometry.row_bytes, geometry.row_bytes, height)?;
    check_overflow_v3(width as usize, height as usize, 3)?;

    let mut planes = ComponentPlanes::alloc(format.component_order(), width, height);
    if geometry.total_bytes == 0 {
        return Ok(planes);
    }

    let row_bytes = geometry.row_bytes;
    match format {
        PixelFormat::Yuv8 => {
            split_components_impl::<{ PixelFormat::Yuv8 as u8 }>(packed, row_bytes, &mut planes)
        }
        PixelFormat::Yuv10 => {
            split_components_impl::<{ PixelFormat::Yuv10 as u8 }>(packed, row_bytes, &mut planes)
        }
        PixelFormat::Rgb10 => {
            split_components_impl::<{ PixelFormat::Rgb10 as u8 }>(packed, row_bytes, &mut planes)
        }
        PixelFormat::Rgb12 => {
            split_components_impl::<{ PixelFormat::Rgb12 as u8 }>(packed, row_bytes, &mut planes)
        }
        PixelFormat::Bgra8 => {
            split_components_impl::<{ PixelFormat::Bgra8 as u8 }>(packed, row_bytes, &mut planes)
        }
    }
    Ok(planes)
}
