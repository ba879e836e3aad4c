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

use libfuzzer_sys::fuzz_target;
use vidpack::{frame_geometry, split_components, PixelFormat};

fuzz_target!(|data: (u8, u8, u8, Vec<u8>)| {
    let format = PixelFormat::ALL[data.2 as usize % PixelFormat::ALL.len()];
    let width = data.0 as u32;
    let height = data.1 as u32;
    let packed = data.3;

    let geometry = frame_geometry(format, width, height);
    match split_components(&packed, width, height, format) {
        Ok(planes) => {
            assert!(packed.len() >= geometry.total_bytes);
            let max_code = format.bit_depth().max_code() as u16;
            for plane in planes.planes.iter() {
                assert_eq!(plane.len(), width as usize * height as usize);
                assert!(plane.iter().all(|&x| x <= max_code));
            }
        }
        Err(_) => assert!(packed.len() < geometry.total_bytes),
    }
});
