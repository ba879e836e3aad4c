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

use crate::numerics::avg_round;
use crate::packed_layout::PixelCodes;

// Byte positions inside a `Cb Y0 Cr Y1` group
const CB_POSITION: usize = 0;
const FIRST_Y_POSITION: usize = 1;
const CR_POSITION: usize = 2;
const SECOND_Y_POSITION: usize = 3;

#[inline(always)]
fn low_byte(code: u16) -> u8 {
    (code & 0xFF) as u8
}

pub(crate) fn pack_2vuy_group(codes: &[PixelCodes], dst: &mut [u8]) {
    let (first, second) = (codes[0], codes[1]);
    dst[CB_POSITION] = low_byte(avg_round(first[1] & 0xFF, second[1] & 0xFF));
    dst[FIRST_Y_POSITION] = low_byte(first[0]);
    dst[CR_POSITION] = low_byte(avg_round(first[2] & 0xFF, second[2] & 0xFF));
    dst[SECOND_Y_POSITION] = low_byte(second[0]);
}

pub(crate) fn unpack_2vuy_group(src: &[u8], codes: &mut [PixelCodes]) {
    let cb = src[CB_POSITION] as u16;
    let cr = src[CR_POSITION] as u16;
    codes[0] = [src[FIRST_Y_POSITION] as u16, cb, cr];
    codes[1] = [src[SECOND_Y_POSITION] as u16, cb, cr];
}

/// Packs a pixel pair into 2vuy (UYVY) bytes `Cb Y0 Cr Y1`.
///
/// Pair chroma is `(c0 + c1 + 1) >> 1` over the 8-bit codes.
///
/// # Arguments
///
/// * `codes`: `[Y, Cb, Cr]` codes of two consecutive pixels, truncated to 8 bits
///
pub fn pack_2vuy(codes: &[PixelCodes; 2]) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    pack_2vuy_group(codes, &mut bytes);
    bytes
}

/// Unpacks 2vuy bytes, both pixels receive the pair chroma.
pub fn unpack_2vuy(bytes: &[u8; 4]) -> [PixelCodes; 2] {
    let mut codes = [[0u16; 3]; 2];
    unpack_2vuy_group(bytes, &mut codes);
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        let bytes = pack_2vuy(&[[16, 128, 128], [235, 128, 128]]);
        assert_eq!(bytes, [128, 16, 128, 235]);
        assert_eq!(unpack_2vuy(&bytes), [[16, 128, 128], [235, 128, 128]]);
    }

    #[test]
    fn test_chroma_average_rounds_half_up() {
        let bytes = pack_2vuy(&[[100, 10, 240], [110, 11, 17]]);
        assert_eq!(bytes, [11, 100, 129, 110]);
        let codes = unpack_2vuy(&bytes);
        assert_eq!(codes[0][1..], codes[1][1..]);
    }
}
