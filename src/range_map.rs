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
use crate::numerics::round_saturate;
use crate::CodecError;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Code value precision of a component
pub enum BitDepth {
    Eight = 8,
    Ten = 10,
    Twelve = 12,
    Sixteen = 16,
}

impl BitDepth {
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    #[inline]
    pub const fn max_code(self) -> u32 {
        (1u32 << self.bits()) - 1
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            8 => Ok(BitDepth::Eight),
            10 => Ok(BitDepth::Ten),
            12 => Ok(BitDepth::Twelve),
            16 => Ok(BitDepth::Sixteen),
            _ => Err(CodecError::UnsupportedFormat(UnsupportedFormat::BitDepth(
                value,
            ))),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Declares code range Narrow (legal, studio) or Full
pub enum RangeConvention {
    /// Narrow range Y, RGB ∈ [16 << (depth - 8), 235 << (depth - 8)], UV centered on 1 << (depth - 1) with half span 112 << (depth - 8)
    #[default]
    Narrow,
    /// Full range Y, RGB ∈ [0, 2^bit_depth - 1], UV centered on 1 << (depth - 1) with span 2^bit_depth - 1
    Full,
}

/// Code layout of a single bit depth and range convention.
///
/// `bias_y` and `range_y` describe luma and RGB components,
/// `bias_uv` is the chroma center and `range_uv` the chroma code distance
/// covered by the normalized interval `[-0.5, 0.5]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CodeRange {
    pub bias_y: u32,
    pub bias_uv: u32,
    pub range_y: u32,
    pub range_uv: u32,
    pub max_code: u32,
    pub depth: BitDepth,
    pub convention: RangeConvention,
}

pub const fn get_code_range(depth: BitDepth, convention: RangeConvention) -> CodeRange {
    let bits = depth.bits();
    match convention {
        RangeConvention::Narrow => CodeRange {
            bias_y: 16 << (bits - 8),
            bias_uv: 1 << (bits - 1),
            range_y: 219 << (bits - 8),
            range_uv: 224 << (bits - 8),
            max_code: depth.max_code(),
            depth,
            convention,
        },
        RangeConvention::Full => CodeRange {
            bias_y: 0,
            bias_uv: 1 << (bits - 1),
            range_y: depth.max_code(),
            range_uv: depth.max_code(),
            max_code: depth.max_code(),
            depth,
            convention,
        },
    }
}

impl CodeRange {
    /// Distance from the chroma center to either chroma extreme.
    #[inline]
    pub const fn half_span_uv(&self) -> u32 {
        self.range_uv / 2
    }

    /// Code that encodes black for luma and RGB components.
    #[inline]
    pub const fn black(&self) -> u16 {
        self.bias_y as u16
    }

    /// Code that encodes zero color difference.
    #[inline]
    pub const fn neutral_chroma(&self) -> u16 {
        self.bias_uv as u16
    }

    #[inline(always)]
    pub fn normalize_y(&self, code: u32) -> f32 {
        (code as f32 - self.bias_y as f32) / self.range_y as f32
    }

    #[inline(always)]
    pub fn normalize_uv(&self, code: u32) -> f32 {
        (code as f32 - self.bias_uv as f32) / self.range_uv as f32
    }

    #[inline(always)]
    pub fn quantize_y(&self, value: f32) -> u16 {
        round_saturate(
            value * self.range_y as f32 + self.bias_y as f32,
            self.max_code,
        )
    }

    #[inline(always)]
    pub fn quantize_uv(&self, value: f32) -> u16 {
        round_saturate(
            value * self.range_uv as f32 + self.bias_uv as f32,
            self.max_code,
        )
    }
}

/// Converts native code into normalized value.
///
/// Luma and RGB codes map onto `[0, 1]`, chroma codes onto `[-0.5, 0.5]`.
/// Codes outside of the nominal range produce values outside of those intervals.
pub fn to_normalized(code: u32, depth: BitDepth, convention: RangeConvention, chroma: bool) -> f32 {
    let range = get_code_range(depth, convention);
    if chroma {
        range.normalize_uv(code)
    } else {
        range.normalize_y(code)
    }
}

/// Converts normalized value into native code, rounding half up and saturating into code space.
pub fn from_normalized(
    value: f32,
    depth: BitDepth,
    convention: RangeConvention,
    chroma: bool,
) -> u16 {
    let range = get_code_range(depth, convention);
    if chroma {
        range.quantize_uv(value)
    } else {
        range.quantize_y(value)
    }
}
