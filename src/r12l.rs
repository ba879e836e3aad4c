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

use crate::numerics::{read_le_word, write_le_word};
use crate::packed_layout::PixelCodes;

const MASK: u32 = 0xFFF;

pub(crate) fn pack_r12l_group(codes: &[PixelCodes], dst: &mut [u8]) {
    let mut r = [0u32; 8];
    let mut g = [0u32; 8];
    let mut b = [0u32; 8];
    for (i, pixel) in codes.iter().take(8).enumerate() {
        r[i] = pixel[0] as u32 & MASK;
        g[i] = pixel[1] as u32 & MASK;
        b[i] = pixel[2] as u32 & MASK;
    }

    // Components straddle word boundaries in an irregular R G B / B R G / G B R rotation
    let words = [
        ((b[0] & 0xFF) << 24) | (g[0] << 12) | r[0],
        ((b[1] & 0xF) << 28) | (g[1] << 16) | (r[1] << 4) | ((b[0] & 0xF00) >> 8),
        (g[2] << 20) | (r[2] << 8) | ((b[1] & 0xFF0) >> 4),
        ((g[3] & 0xFF) << 24) | (r[3] << 12) | b[2],
        ((g[4] & 0xF) << 28) | (r[4] << 16) | (b[3] << 4) | ((g[3] & 0xF00) >> 8),
        (r[5] << 20) | (b[4] << 8) | ((g[4] & 0xFF0) >> 4),
        ((r[6] & 0xFF) << 24) | (b[5] << 12) | g[5],
        ((r[7] & 0xF) << 28) | (b[6] << 16) | (g[6] << 4) | ((r[6] & 0xF00) >> 8),
        (b[7] << 20) | (g[7] << 8) | ((r[7] & 0xFF0) >> 4),
    ];
    for (i, &word) in words.iter().enumerate() {
        write_le_word(dst, i, word);
    }
}

pub(crate) fn unpack_r12l_group(src: &[u8], codes: &mut [PixelCodes]) {
    let mut w = [0u32; 9];
    for (i, word) in w.iter_mut().enumerate() {
        *word = read_le_word(src, i);
    }

    let unpacked: [[u32; 3]; 8] = [
        [
            w[0] & MASK,
            (w[0] >> 12) & MASK,
            ((w[0] >> 24) & 0xFF) | ((w[1] & 0xF) << 8),
        ],
        [
            (w[1] >> 4) & MASK,
            (w[1] >> 16) & MASK,
            ((w[1] >> 28) & 0xF) | ((w[2] & 0xFF) << 4),
        ],
        [(w[2] >> 8) & MASK, (w[2] >> 20) & MASK, w[3] & MASK],
        [
            (w[3] >> 12) & MASK,
            ((w[3] >> 24) & 0xFF) | ((w[4] & 0xF) << 8),
            (w[4] >> 4) & MASK,
        ],
        [
            (w[4] >> 16) & MASK,
            ((w[4] >> 28) & 0xF) | ((w[5] & 0xFF) << 4),
            (w[5] >> 8) & MASK,
        ],
        [(w[5] >> 20) & MASK, w[6] & MASK, (w[6] >> 12) & MASK],
        [
            ((w[6] >> 24) & 0xFF) | ((w[7] & 0xF) << 8),
            (w[7] >> 4) & MASK,
            (w[7] >> 16) & MASK,
        ],
        [
            ((w[7] >> 28) & 0xF) | ((w[8] & 0xFF) << 4),
            (w[8] >> 8) & MASK,
            (w[8] >> 20) & MASK,
        ],
    ];

    for (dst, src) in codes.iter_mut().zip(unpacked.iter()) {
        *dst = src.map(|x| x as u16);
    }
}

/// Packs eight pixels into one R12L group of nine little endian words.
///
/// # Arguments
///
/// * `codes`: `[R, G, B]` codes of eight consecutive pixels, truncated to 12 bits
///
pub fn pack_r12l(codes: &[PixelCodes; 8]) -> [u8; 36] {
    let mut bytes = [0u8; 36];
    pack_r12l_group(codes, &mut bytes);
    bytes
}

pub fn unpack_r12l(bytes: &[u8; 36]) -> [PixelCodes; 8] {
    let mut codes = [[0u16; 3]; 8];
    unpack_r12l_group(bytes, &mut codes);
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_first_pixel_layout() {
        let mut codes = [[0u16; 3]; 8];
        codes[0] = [0xABC, 0xDEF, 0x123];
        let bytes = pack_r12l(&codes);
        let w0 = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        let w1 = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(w0, 0x23DE_FABC);
        assert_eq!(w1, 0x1);
        assert!(bytes[8..].iter().all(|&x| x == 0));
    }

    #[test]
    fn test_every_bit_is_used_once() {
        let mut seen = [0u8; 36];
        for pixel in 0..8 {
            for component in 0..3 {
                for bit in 0..12 {
                    let mut codes = [[0u16; 3]; 8];
                    codes[pixel][component] = 1 << bit;
                    let bytes = pack_r12l(&codes);
                    let set: Vec<usize> = (0..36 * 8)
                        .filter(|&i| bytes[i / 8] & (1 << (i % 8)) != 0)
                        .collect();
                    assert_eq!(set.len(), 1, "pixel {pixel} component {component} bit {bit}");
                    let i = set[0];
                    assert_eq!(seen[i / 8] & (1 << (i % 8)), 0);
                    seen[i / 8] |= 1 << (i % 8);
                }
            }
        }
        assert!(seen.iter().all(|&x| x == 0xFF));
    }

    #[test]
    fn test_random_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..2000 {
            let mut codes = [[0u16; 3]; 8];
            for pixel in codes.iter_mut() {
                for component in pixel.iter_mut() {
                    *component = rng.random_range(0..=4095);
                }
            }
            assert_eq!(unpack_r12l(&pack_r12l(&codes)), codes);
        }
    }

    #[test]
    fn test_arbitrary_bytes_round_trip() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let mut bytes = [0u8; 36];
            rng.fill(&mut bytes[..]);
            assert_eq!(pack_r12l(&unpack_r12l(&bytes)), bytes);
        }
    }
}
