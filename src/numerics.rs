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

#[inline(always)]
/// Rounds half up and saturates into `[0, max]`, NaN goes to zero
pub(crate) fn round_saturate(v: f32, max: u32) -> u16 {
    let rounded = (v + 0.5f32).floor();
    if !(rounded > 0f32) {
        0
    } else if rounded >= max as f32 {
        max as u16
    } else {
        rounded as u16
    }
}

#[inline(always)]
/// Average of two codes rounded half up
pub(crate) fn avg_round(a: u16, b: u16) -> u16 {
    ((a as u32 + b as u32 + 1) >> 1) as u16
}

#[inline(always)]
pub(crate) fn clamp_unit(v: f32) -> f32 {
    v.max(0f32).min(1f32)
}

#[inline(always)]
pub(crate) fn read_le_word(src: &[u8], word: usize) -> u32 {
    let offset = word * 4;
    u32::from_le_bytes([
        src[offset],
        src[offset + 1],
        src[offset + 2],
        src[offset + 3],
    ])
}

#[inline(always)]
pub(crate) fn write_le_word(dst: &mut [u8], word: usize, value: u32) {
    let offset = word * 4;
    dst[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_saturate_half_up() {
        assert_eq!(round_saturate(127.5, 255), 128);
        assert_eq!(round_saturate(127.49, 255), 127);
        assert_eq!(round_saturate(939.99994, 1023), 940);
    }

    #[test]
    fn test_round_saturate_clamps() {
        assert_eq!(round_saturate(-3.0, 1023), 0);
        assert_eq!(round_saturate(1200.0, 1023), 1023);
        assert_eq!(round_saturate(70000.0, 65535), 65535);
        assert_eq!(round_saturate(f32::NAN, 1023), 0);
        assert_eq!(round_saturate(f32::INFINITY, 4095), 4095);
    }

    #[test]
    fn test_avg_round() {
        assert_eq!(avg_round(10, 11), 11);
        assert_eq!(avg_round(10, 10), 10);
        assert_eq!(avg_round(255, 255), 255);
    }

    #[test]
    fn test_le_words() {
        let mut bytes = [0u8; 8];
        write_le_word(&mut bytes, 1, 0xFFC0_0000);
        assert_eq!(bytes, [0, 0, 0, 0, 0x00, 0x00, 0xC0, 0xFF]);
        assert_eq!(read_le_word(&bytes, 1), 0xFFC0_0000);
    }
}
