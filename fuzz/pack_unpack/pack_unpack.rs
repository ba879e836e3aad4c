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


#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vidpack::{
    frame_geometry, pack_frame, solid_color, unpack_frame, Gamut, PixelFormat, RangeConvention,
    RgbFrame,
};

#[derive(Arbitrary, Debug)]
struct PackInput {
    width: u8,
    height: u8,
    format: u8,
    gamut: u8,
    narrow_output: bool,
    rgb: [u16; 3],
}

fuzz_target!(|input: PackInput| {
    let format = PixelFormat::ALL[input.format as usize % PixelFormat::ALL.len()];
    let gamut = Gamut::ALL[input.gamut as usize % Gamut::ALL.len()];
    let range = if input.narrow_output {
        RangeConvention::Narrow
    } else {
        RangeConvention::Full
    };
    let width = input.width as u32;
    let height = input.height as u32;

    fuzz_u16(width, height, format, gamut, range, input.rgb);
    fuzz_f32(width, height, format, gamut, range, input.rgb);
});

fn fuzz_u16(
    width: u32,
    height: u32,
    format: PixelFormat,
    gamut: Gamut,
    range: RangeConvention,
    rgb: [u16; 3],
) {
    let frame = solid_color(width, height, rgb);
    let packed = pack_frame(
        &frame.as_image(),
        format,
        Some(gamut),
        RangeConvention::Full,
        range,
    )
    .unwrap();
    assert_eq!(packed.len(), frame_geometry(format, width, height).total_bytes);
    let restored: RgbFrame<u16> = unpack_frame(
        &packed,
        width,
        height,
        format,
        Some(gamut),
        range,
        RangeConvention::Full,
    )
    .unwrap();
    assert_eq!(restored.data.len(), frame.data.len());
}

fn fuzz_f32(
    width: u32,
    height: u32,
    format: PixelFormat,
    gamut: Gamut,
    range: RangeConvention,
    rgb: [u16; 3],
) {
    // Spread values past the nominal interval to hit saturation
    let rgb = rgb.map(|x| x as f32 / 32767.5f32 - 0.5f32);
    let frame = solid_color(width, height, rgb);
    let packed = pack_frame(
        &frame.as_image(),
        format,
        Some(gamut),
        RangeConvention::Full,
        range,
    )
    .unwrap();
    let restored: RgbFrame<f32> = unpack_frame(
        &packed,
        width,
        height,
        format,
        Some(gamut),
        range,
        RangeConvention::Full,
    )
    .unwrap();
    assert!(restored.data.iter().all(|&x| (0f32..=1f32).contains(&x)));
}
