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

const MASK: u32 = 0x3FF;

pub(crate) fn pack_r10l_group(codes: &[PixelCodes], dst: &mut [u8]) {
    let [r, g, b] = codes[0].map(|x| x as u32 & MASK);
    write_le_word(dst, 0, (r << 22) | (g << 12) | (b << 2));
}

pub(crate) fn unpack_r10l_group(src: &[u8], codes: &mut [PixelCodes]) {
    let word = read_le_word(src, 0);
    codes[0] = [
        ((word >> 22) & MASK) as u16,
        ((word >> 12) & MASK) as u16,
        ((word >> 2) & MASK) as u16,
    ];
}

/// Packs one pixel into a little endian R10l word `R << 22 | G << 12 | B << 2`.
///
/// The two low bits are always zero, codes are truncated to 10 bits.
pub fn pack_r10l(codes: &PixelCodes) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    pack_r10l_group(std::slice::from_ref(codes), &mut bytes);
    bytes
}

pub fn unpack_r10l(bytes: &[u8; 4]) -> PixelCodes {
    let mut codes = [[0u16; 3]; 1];
    unpack_r10l_group(bytes, &mut codes);
    codes[0]
}
