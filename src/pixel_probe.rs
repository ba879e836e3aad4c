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

use crate::buffer_geometry::packed_row_bytes;
use crate::codec_error::check_packed_buffer;
use crate::packed_layout::{unpack_group, PixelCodes, MAX_GROUP_PIXELS};
use crate::{CodecError, PixelFormat};

fn probe_impl<const FORMAT: u8>(bytes: &[u8], row_bytes: usize, x: u32, y: u32) -> PixelCodes {
    let format: PixelFormat = FORMAT.into();
    let group = x as usize / format.group_pixels();
    let offset = y as usize * row_bytes + group * format.group_bytes();
    let mut codes = [[0u16; 3]; MAX_GROUP_PIXELS];
    unpack_group::<FORMAT>(
        &bytes[offset..offset + format.group_bytes()],
        &mut codes[..format.group_pixels()],
    );
    codes[x as usize % format.group_pixels()]
}

/// Reads native component codes of a single pixel.
///
/// Capture drivers may pad rows past the packed row size, so the stride is explicit.
///
/// # Arguments
///
/// * `bytes`: Packed frame, at least `row_bytes * height` long
/// * `row_bytes`: Row stride in bytes, not less than the format row size for `width`
/// * `width`: Frame width in pixels
/// * `height`: Frame height in pixels
/// * `format`: Packed format of the frame
/// * `x`, `y`: Pixel position
///
/// Returns `[Y, Cb, Cr]` for YCbCr formats and `[R, G, B]` otherwise.
pub fn probe_pixel(
    bytes: &[u8],
    row_bytes: usize,
    width: u32,
    height: u32,
    format: PixelFormat,
    x: u32,
    y: u32,
) -> Result<PixelCodes, CodecError> {
    if x >= width || y >= height {
        return Err(CodecError::CoordinateOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    let min_row_bytes = packed_row_bytes(format, width)?;
    check_packed_buffer(bytes, row_bytes, min_row_bytes, height)?;

    let codes = match format {
        PixelFormat::Yuv8 => probe_impl::<{ PixelFormat::Yuv8 as u8 }>(bytes, row_bytes, x, y),
        PixelFormat::Yuv10 => probe_impl::<{ PixelFormat::Yuv10 as u8 }>(bytes, row_bytes, x, y),
        PixelFormat::Rgb10 => probe_impl::<{ PixelFormat::Rgb10 as u8 }>(bytes, row_bytes, x, y),
        PixelFormat::Rgb12 => probe_impl::<{ PixelFormat::Rgb12 as u8 }>(bytes, row_bytes, x, y),
        PixelFormat::Bgra8 => probe_impl::<{ PixelFormat::Bgra8 as u8 }>(bytes, row_bytes, x, y),
    };
    Ok(codes)
}
