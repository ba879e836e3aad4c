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

use crate::packed_layout::PixelCodes;

pub(crate) fn pack_bgra8_group(codes: &[PixelCodes], dst: &mut [u8]) {
    let [r, g, b] = codes[0].map(|x| (x & 0xFF) as u8);
    dst[0] = b;
    dst[1] = g;
    dst[2] = r;
    dst[3] = 255;
}

pub(crate) fn unpack_bgra8_group(src: &[u8], codes: &mut [PixelCodes]) {
    codes[0] = [src[2] as u16, src[1] as u16, src[0] as u16];
}

/// Packs one pixel as `B G R A` bytes with opaque alpha.
pub fn pack_bgra8(codes: &PixelCodes) -> [u8; 4] {
    let mut bytes = [0u8; 4];
    pack_bgra8_group(std::slice::from_ref(codes), &mut bytes);
    bytes
}

/// Unpacks `B G R A` bytes into `[R, G, B]`, alpha is discarded.
pub fn unpack_bgra8(bytes: &[u8; 4]) -> PixelCodes {
    let mut codes = [[0u16; 3]; 1];
    unpack_bgra8_group(bytes, &mut codes);
    codes[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        assert_eq!(pack_bgra8(&[1, 2, 3]), [3, 2, 1, 255]);
        assert_eq!(unpack_bgra8(&[3, 2, 1, 0]), [1, 2, 3]);
        assert_eq!(unpack_bgra8(&[3, 2, 1, 17]), [1, 2, 3]);
    }
}
