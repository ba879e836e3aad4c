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

use crate::range_map::{get_code_range, BitDepth, RangeConvention};
use num_traits::AsPrimitive;
use std::fmt::Debug;

/// Element type of an interleaved RGB sample buffer.
///
/// Integer samples are interpreted through a [RangeConvention] at their own bit depth,
/// float samples are always normalized `[0, 1]` and ignore the convention.
pub trait RgbSample: Copy + Default + Debug + Send + Sync + 'static {
    /// Bit depth of integer samples, `None` for float samples
    const BIT_DEPTH: Option<BitDepth>;

    fn to_unit(self, convention: RangeConvention) -> f32;

    fn from_unit(value: f32, convention: RangeConvention) -> Self;
}

#[inline(always)]
fn integer_to_unit<V: AsPrimitive<u32>>(
    value: V,
    depth: BitDepth,
    convention: RangeConvention,
) -> f32 {
    get_code_range(depth, convention).normalize_y(value.as_())
}

#[inline(always)]
fn integer_from_unit<V: Copy + 'static>(
    value: f32,
    depth: BitDepth,
    convention: RangeConvention,
) -> V
where
    u16: AsPrimitive<V>,
{
    get_code_range(depth, convention).quantize_y(value).as_()
}

impl RgbSample for u8 {
    const BIT_DEPTH: Option<BitDepth> = Some(BitDepth::Eight);

    #[inline(always)]
    fn to_unit(self, convention: RangeConvention) -> f32 {
        integer_to_unit(self, BitDepth::Eight, convention)
    }

    #[inline(always)]
    fn from_unit(value: f32, convention: RangeConvention) -> Self {
        integer_from_unit(value, BitDepth::Eight, convention)
    }
}

impl RgbSample for u16 {
    const BIT_DEPTH: Option<BitDepth> = Some(BitDepth::Sixteen);

    #[inline(always)]
    fn to_unit(self, convention: RangeConvention) -> f32 {
        integer_to_unit(self, BitDepth::Sixteen, convention)
    }

    #[inline(always)]
    fn from_unit(value: f32, convention: RangeConvention) -> Self {
        integer_from_unit(value, BitDepth::Sixteen, convention)
    }
}

impl RgbSample for f32 {
    const BIT_DEPTH: Option<BitDepth> = None;

    #[inline(always)]
    fn to_unit(self, _: RangeConvention) -> f32 {
        self
    }

    #[inline(always)]
    fn from_unit(value: f32, _: RangeConvention) -> Self {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_samples() {
        assert_eq!(255u8.to_unit(RangeConvention::Full), 1.);
        assert_eq!(235u8.to_unit(RangeConvention::Narrow), 1.);
        assert_eq!(16u8.to_unit(RangeConvention::Narrow), 0.);
        assert_eq!(u8::from_unit(1., RangeConvention::Narrow), 235);
        assert_eq!(u8::from_unit(1.5, RangeConvention::Full), 255);
        assert_eq!(u8::from_unit(-1., RangeConvention::Narrow), 0);
    }

    #[test]
    fn test_u16_samples() {
        assert_eq!(65535u16.to_unit(RangeConvention::Full), 1.);
        assert_eq!(u16::from_unit(1., RangeConvention::Narrow), 60160);
        assert_eq!(u16::from_unit(0., RangeConvention::Narrow), 4096);
        for code in [0u16, 1, 4096, 32768, 60160, 65535] {
            assert_eq!(u16::from_unit(code.to_unit(RangeConvention::Full), RangeConvention::Full), code);
        }
    }

    #[test]
    fn test_float_samples_ignore_convention() {
        assert_eq!(0.25f32.to_unit(RangeConvention::Narrow), 0.25);
        assert_eq!(f32::from_unit(0.75, RangeConvention::Narrow), 0.75);
        assert_eq!(f32::BIT_DEPTH, None);
    }
}
