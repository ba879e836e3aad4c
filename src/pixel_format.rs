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
use crate::codec_error::UnsupportedFormat;
use crate::images::ComponentOrder;
use crate::range_map::BitDepth;
use crate::CodecError;
use std::fmt::{Display, Formatter};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Packed pixel layouts accepted by broadcast playout and capture hardware
pub enum PixelFormat {
    /// 4:2:2 8-bit YCbCr, `Cb Y0 Cr Y1` bytes per two pixels
    Yuv8 = 0,
    /// 4:2:2 10-bit YCbCr, six pixels in four little endian words
    Yuv10 = 1,
    /// 10-bit RGB, one pixel per little endian word
    Rgb10 = 2,
    /// 12-bit RGB, eight pixels in nine little endian words
    Rgb12 = 3,
    /// 8-bit BGRA, alpha is always opaque
    Bgra8 = 4,
}

impl From<u8> for PixelFormat {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => PixelFormat::Yuv8,
            1 => PixelFormat::Yuv10,
            2 => PixelFormat::Rgb10,
            3 => PixelFormat::Rgb12,
            4 => PixelFormat::Bgra8,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

impl PixelFormat {
    pub const ALL: [PixelFormat; 5] = [
        PixelFormat::Yuv8,
        PixelFormat::Yuv10,
        PixelFormat::Rgb10,
        PixelFormat::Rgb12,
        PixelFormat::Bgra8,
    ];

    #[inline]
    pub const fn bits_per_component(self) -> u32 {
        match self {
            PixelFormat::Yuv8 | PixelFormat::Bgra8 => 8,
            PixelFormat::Yuv10 | PixelFormat::Rgb10 => 10,
            PixelFormat::Rgb12 => 12,
        }
    }

    #[inline]
    pub const fn bit_depth(self) -> BitDepth {
        match self {
            PixelFormat::Yuv8 | PixelFormat::Bgra8 => BitDepth::Eight,
            PixelFormat::Yuv10 | PixelFormat::Rgb10 => BitDepth::Ten,
            PixelFormat::Rgb12 => BitDepth::Twelve,
        }
    }

    /// Smallest run of pixels that is encoded independently of its neighbours.
    #[inline]
    pub const fn group_pixels(self) -> usize {
        match self {
            PixelFormat::Yuv8 => 2,
            PixelFormat::Yuv10 => 6,
            PixelFormat::Rgb10 => 1,
            PixelFormat::Rgb12 => 8,
            PixelFormat::Bgra8 => 1,
        }
    }

    #[inline]
    pub const fn group_bytes(self) -> usize {
        match self {
            PixelFormat::Yuv8 => 4,
            PixelFormat::Yuv10 => 16,
            PixelFormat::Rgb10 => 4,
            PixelFormat::Rgb12 => 36,
            PixelFormat::Bgra8 => 4,
        }
    }

    #[inline]
    pub const fn is_yuv(self) -> bool {
        matches!(self, PixelFormat::Yuv8 | PixelFormat::Yuv10)
    }

    #[inline]
    pub const fn component_order(self) -> ComponentOrder {
        if self.is_yuv() {
            ComponentOrder::YCbCr
        } else {
            ComponentOrder::Rgb
        }
    }

    /// FourCC as the big endian value of its four characters, e.g. `'v210'`.
    #[inline]
    pub const fn fourcc(self) -> u32 {
        match self {
            PixelFormat::Yuv8 => u32::from_be_bytes(*b"2vuy"),
            PixelFormat::Yuv10 => u32::from_be_bytes(*b"v210"),
            PixelFormat::Rgb10 => u32::from_be_bytes(*b"R10l"),
            PixelFormat::Rgb12 => u32::from_be_bytes(*b"R12L"),
            PixelFormat::Bgra8 => u32::from_be_bytes(*b"BGRA"),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PixelFormat::Yuv8 => "8-bit YUV (2vuy)",
            PixelFormat::Yuv10 => "10-bit YUV (v210)",
            PixelFormat::Rgb10 => "10-bit RGB LE (R10l)",
            PixelFormat::Rgb12 => "12-bit RGB LE (R12L)",
            PixelFormat::Bgra8 => "8-bit BGRA",
        }
    }
}

impl TryFrom<u32> for PixelFormat {
    type Error = CodecError;

    fn try_from(fourcc: u32) -> Result<Self, Self::Error> {
        PixelFormat::ALL
            .into_iter()
            .find(|format| format.fourcc() == fourcc)
            .ok_or(CodecError::UnsupportedFormat(UnsupportedFormat::FourCc(
                fourcc,
            )))
    }
}

impl Display for PixelFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constants() {
        let expected = [
            (PixelFormat::Yuv8, 8, 2, 4),
            (PixelFormat::Yuv10, 10, 6, 16),
            (PixelFormat::Rgb10, 10, 1, 4),
            (PixelFormat::Rgb12, 12, 8, 36),
            (PixelFormat::Bgra8, 8, 1, 4),
        ];
        for (format, bits, pixels, bytes) in expected {
            assert_eq!(format.bits_per_component(), bits, "{}", format);
            assert_eq!(format.bit_depth().bits(), bits, "{}", format);
            assert_eq!(format.group_pixels(), pixels, "{}", format);
            assert_eq!(format.group_bytes(), bytes, "{}", format);
        }
    }

    #[test]
    fn test_u8_tags_round_trip() {
        for format in PixelFormat::ALL {
            assert_eq!(PixelFormat::from(format as u8), format);
        }
    }

    #[test]
    fn test_fourcc_round_trip() {
        for format in PixelFormat::ALL {
            assert_eq!(PixelFormat::try_from(format.fourcc()), Ok(format));
        }
        assert_eq!(PixelFormat::Yuv10.fourcc(), 0x7632_3130);
        assert_eq!(PixelFormat::Rgb12.fourcc(), 0x5231_324C);
    }

    #[test]
    fn test_unknown_fourcc() {
        let nv12 = u32::from_be_bytes(*b"NV12");
        assert_eq!(
            PixelFormat::try_from(nv12),
            Err(CodecError::UnsupportedFormat(UnsupportedFormat::FourCc(
                nv12
            )))
        );
    }

    #[test]
    fn test_component_order() {
        assert_eq!(PixelFormat::Yuv8.component_order(), ComponentOrder::YCbCr);
        assert_eq!(PixelFormat::Yuv10.component_order(), ComponentOrder::YCbCr);
        assert_eq!(PixelFormat::Rgb12.component_order(), ComponentOrder::Rgb);
        assert_eq!(PixelFormat::Bgra8.component_order(), ComponentOrder::Rgb);
        assert_eq!(PixelFormat::Rgb10.to_string(), "10-bit RGB LE (R10l)");
    }
}
