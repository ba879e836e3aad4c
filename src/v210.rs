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

use crate::numerics::{avg_round, read_le_word, write_le_word};
use crate::packed_layout::PixelCodes;

const MASK: u32 = 0x3FF;

#[inline(always)]
fn luma(codes: &[PixelCodes], pixel: usize) -> u32 {
    codes[pixel][0] as u32 & MASK
}

#[inline(always)]
fn pair_chroma(codes: &[PixelCodes], pair: usize, component: usize) -> u32 {
    avg_round(codes[pair * 2][component], codes[pair * 2 + 1][component]) as u32 & MASK
}

pub(crate) fn pack_v210_group(codes: &[PixelCodes], dst: &mut [u8]) {
    let cb = |pair: usize| pair_chroma(codes, pair, 1);
    let cr = |pair: usize| pair_chroma(codes, pair, 2);

    write_le_word(dst, 0, cb(0) | (luma(codes, 0) << 10) | (cr(0) << 20));
    write_le_word(dst, 1, luma(codes, 1) | (cb(1) << 10) | (luma(codes, 2) << 20));
    write_le_word(dst, 2, cr(1) | (luma(codes, 3) << 10) | (cb(2) << 20));
    write_le_word(dst, 3, luma(codes, 4) | (cr(2) << 10) | (luma(codes, 5) << 20));
}

pub(crate) fn unpack_v210_group(src: &[u8], codes: &mut [PixelCodes]) {
    let w0 = read_le_word(src, 0);
    let w1 = read_le_word(src, 1);
    let w2 = read_le_word(src, 2);
    let w3 = read_le_word(src, 3);

    let field = |word: u32, shift: u32| ((word >> shift) & MASK) as u16;

    let y = [
        field(w0, 10),
        field(w1, 0),
        field(w1, 20),
        field(w2, 10),
        field(w3, 0),
        field(w3, 20),
    ];
    let cb = [field(w0, 0), field(w1, 10), field(w2, 20)];
    let cr = [field(w0, 20), field(w2, 0), field(w3, 10)];

    for (i, pixel) in codes.iter_mut().take(6).enumerate() {
        *pixel = [y[i], cb[i / 2], cr[i / 2]];
    }
}

/// Packs six pixels into one v210 group of four little endian words.
///
/// Word layout, 10-bit fields at bits 0, 10 and 20:
/// `Cb0 Y0 Cr0 | Y1 Cb1 Y2 | Cr1 Y3 Cb2 | Y4 Cr2 Y5`.
/// Chroma of each pixel pair is the average of both pixels rounded half up.
/// Codes are truncated to their low 10 bits.
///
/// # Arguments
///
/// * `codes`: `[Y, Cb, Cr]` codes of six consecutive pixels
///
pub fn pack_v210(codes: &[PixelCodes; 6]) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    pack_v210_group(codes, &mut bytes);
    bytes
}

/// Unpacks one v210 group, every pixel receives the chroma of its pair.
pub fn unpack_v210(bytes: &[u8; 16]) -> [PixelCodes; 6] {
    let mut codes = [[0u16; 3]; 6];
    unpack_v210_group(bytes, &mut codes);
    codes
}
