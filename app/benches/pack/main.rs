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

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use vidpack::{color_bars, pack_frame, Gamut, PixelFormat, RangeConvention, RgbFrame};

pub fn criterion_benchmark(c: &mut Criterion) {
    let (width, height) = (1920u32, 1080u32);
    let bars = color_bars(width, height);

    let mut rng = rand::rng();
    let mut noise = RgbFrame::<u16>::alloc(width, height);
    for v in noise.data.iter_mut() {
        *v = rng.random_range(0..=u16::MAX);
    }

    for format in PixelFormat::ALL {
        c.bench_function(&format!("vidpack: f32 bars -> {}", format), |b| {
            b.iter(|| {
                pack_frame(
                    &bars.as_image(),
                    format,
                    Some(Gamut::Rec709),
                    RangeConvention::Full,
                    RangeConvention::Narrow,
                )
                .unwrap()
            })
        });

        c.bench_function(&format!("vidpack: u16 noise -> {}", format), |b| {
            b.iter(|| {
                pack_frame(
                    &noise.as_image(),
                    format,
                    Some(Gamut::Rec2020),
                    RangeConvention::Full,
                    RangeConvention::Full,
                )
                .unwrap()
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
