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

use crate::images::RgbFrame;
use std::fmt::Debug;

const BARS: [[f32; 3]; 7] = [
    [0.75, 0.75, 0.75],
    [0.75, 0.75, 0.],
    [0., 0.75, 0.75],
    [0., 0.75, 0.],
    [0.75, 0., 0.75],
    [0.75, 0., 0.],
    [0., 0., 0.75],
];

const PLUGE: [f32; 4] = [-0.04, 0., 0.075, 0.15];

/// Normalized RGB value of 75% color bars at the point
fn color_bars_pixel(x: usize, y: usize, width: usize, height: usize) -> [f32; 3] {
    let top_height = height * 2 / 3;
    if y < top_height {
        let bar_width = width / 7;
        let bar = if bar_width == 0 {
            6
        } else {
            (x / bar_width).min(6)
        };
        return BARS[bar];
    }

    let section = width / 3;
    if x < section {
        [0., 0., 0.75]
    } else if x < section * 2 {
        let level = (x - section) as f32 / section as f32;
        [level; 3]
    } else {
        let pluge_width = (width - section * 2) / 4;
        let step = if pluge_width == 0 {
            3
        } else {
            ((x - section * 2) / pluge_width).min(3)
        };
        [PLUGE[step]; 3]
    }
}

/// Renders 75% SMPTE style color bars as normalized float RGB.
///
/// Top two thirds hold white, yellow, cyan, green, magenta, red and blue bars.
/// Bottom third holds a blue patch, a black to white ramp and a PLUGE
/// with super black, black, 7.5% and 15% steps. Super black sits below zero
/// and lands in footroom when packed to narrow range.
pub fn color_bars(width: u32, height: u32) -> RgbFrame<f32> {
    let mut frame = RgbFrame::<f32>::alloc(width, height);
    let (w, h) = (width as usize, height as usize);
    if w == 0 {
        return frame;
    }
    for (y, row) in frame.data.chunks_exact_mut(w * 3).enumerate() {
        for (x, dst) in row.chunks_exact_mut(3).enumerate() {
            dst.copy_from_slice(&color_bars_pixel(x, y, w, h));
        }
    }
    frame
}

/// Frame filled with a single color
pub fn solid_color<T: Default + Copy + Debug>(width: u32, height: u32, rgb: [T; 3]) -> RgbFrame<T> {
    let mut frame = RgbFrame::<T>::alloc(width, height);
    for dst in frame.data.chunks_exact_mut(3) {
        dst.copy_from_slice(&rgb);
    }
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_layout() {
        let frame = color_bars(1920, 1080);
        for (i, color) in BARS.iter().enumerate() {
            let x = i as u32 * (1920 / 7) + 10;
            assert_eq!(frame.pixel(x, 0), *color);
            assert_eq!(frame.pixel(x, 719), *color);
        }
        assert_eq!(frame.pixel(1919, 100), BARS[6]);
        assert_eq!(frame.pixel(0, 720), [0., 0., 0.75]);
        assert_eq!(frame.pixel(640, 1079), [0., 0., 0.]);
        assert_eq!(frame.pixel(960, 800), [0.5, 0.5, 0.5]);
        assert_eq!(frame.pixel(1280, 720), [-0.04; 3]);
        assert_eq!(frame.pixel(1280 + 160, 720), [0.; 3]);
        assert_eq!(frame.pixel(1280 + 320, 720), [0.075; 3]);
        assert_eq!(frame.pixel(1919, 1079), [0.15; 3]);
    }

    #[test]
    fn test_bars_tiny_frames() {
        for (w, h) in [(0u32, 3u32), (1, 1), (2, 5), (5, 2), (3, 0)] {
            let frame = color_bars(w, h);
            assert_eq!(frame.data.len(), (w * h * 3) as usize);
            assert!(frame.data.iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn test_solid_color() {
        let frame = solid_color(3, 2, [1u16, 2, 3]);
        assert_eq!(frame.data, [1u16, 2, 3].repeat(6));
    }
}
