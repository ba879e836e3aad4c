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

use crate::bgra8::{pack_bgra8_group, unpack_bgra8_group};
use crate::r10l::{pack_r10l_group, unpack_r10l_group};
use crate::r12l::{pack_r12l_group, unpack_r12l_group};
use crate::uyvy8::{pack_2vuy_group, unpack_2vuy_group};
use crate::v210::{pack_v210_group, unpack_v210_group};
use crate::PixelFormat;

/// Native component codes of one pixel, `[Y, Cb, Cr]` or `[R, G, B]`
pub type PixelCodes = [u16; 3];

/// Largest pixel group of any supported format
pub(crate) const MAX_GROUP_PIXELS: usize = 8;

/// Encodes one pixel group.
///
/// `codes` holds at least `group_pixels` entries, `dst` at least `group_bytes`.
/// For YCbCr layouts chroma of a pixel pair is the rounded average of both pixels,
/// callers that want a single chroma sample for the pair store it into both.
#[inline(always)]
pub(crate) fn pack_group<const FORMAT: u8>(codes: &[PixelCodes], dst: &mut [u8]) {
    let format: PixelFormat = FORMAT.into();
    match format {
        PixelFormat::Yuv8 => pack_2vuy_group(codes, dst),
        PixelFormat::Yuv10 => pack_v210_group(codes, dst),
        PixelFormat::Rgb10 => pack_r10l_group(codes, dst),
        PixelFormat::Rgb12 => pack_r12l_group(codes, dst),
        PixelFormat::Bgra8 => pack_bgra8_group(codes, dst),
    }
}

/// Decodes one pixel group, each pixel of a YCbCr pair receives the pair chroma.
#[inline(always)]
pub(crate) fn unpack_group<const FORMAT: u8>(src: &[u8], codes: &mut [PixelCodes]) {
    let format: PixelFormat = FORMAT.into();
    match format {
        PixelFormat::Yuv8 => unpack_2vuy_group(src, codes),
        PixelFormat::Yuv10 => unpack_v210_group(src, codes),
        PixelFormat::Rgb10 => unpack_r10l_group(src, codes),
        PixelFormat::Rgb12 => unpack_r12l_group(src, codes),
        PixelFormat::Bgra8 => unpack_bgra8_group(src, codes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_group(format: PixelFormat) -> [PixelCodes; MAX_GROUP_PIXELS] {
        let mut rng = rand::rng();
        let max_code = format.bit_depth().max_code() as u16;
        let mut codes = [[0u16; 3]; MAX_GROUP_PIXELS];
        for pixel in codes.iter_mut() {
            for component in pixel.iter_mut() {
                *component = rng.random_range(0..=max_code);
            }
        }
        if format.is_yuv() {
            for pair in codes.chunks_exact_mut(2) {
                pair[1][1] = pair[0][1];
                pair[1][2] = pair[0][2];
            }
        }
        codes
    }

    fn round_trip<const FORMAT: u8>() {
        let format: PixelFormat = FORMAT.into();
        for _ in 0..500 {
            let codes = random_group(format);
            let mut bytes = [0u8; 36];
            pack_group::<FORMAT>(&codes, &mut bytes);
            assert!(
                bytes[format.group_bytes()..].iter().all(|&x| x == 0),
                "{} wrote past its group",
                format
            );
            let mut restored = [[0u16; 3]; MAX_GROUP_PIXELS];
            unpack_group::<FORMAT>(&bytes, &mut restored);
            assert_eq!(
                &restored[..format.group_pixels()],
                &codes[..format.group_pixels()],
                "{}",
                format
            );
        }
    }

    #[test]
    fn test_group_round_trip() {
        round_trip::<{ PixelFormat::Yuv8 as u8 }>();
        round_trip::<{ PixelFormat::Yuv10 as u8 }>();
        round_trip::<{ PixelFormat::Rgb10 as u8 }>();
        round_trip::<{ PixelFormat::Rgb12 as u8 }>();
        round_trip::<{ PixelFormat::Bgra8 as u8 }>();
    }
}
