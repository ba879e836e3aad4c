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
use crate::numerics::clamp_unit;
use std::fmt::{Display, Formatter};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
/// Declares standard YCbCr matrices, check [ITU-R](https://www.itu.int/rec/T-REC-H.273/en) information for more info
pub enum Gamut {
    Rec601 = 0,
    #[default]
    Rec709 = 1,
    Rec2020 = 2,
}

impl Gamut {
    pub const ALL: [Gamut; 3] = [Gamut::Rec601, Gamut::Rec709, Gamut::Rec2020];

    pub const fn get_kr_kb(self) -> LumaCoefficients {
        match self {
            Gamut::Rec601 => LumaCoefficients {
                kr: 0.299f32,
                kb: 0.114f32,
            },
            Gamut::Rec709 => LumaCoefficients {
                kr: 0.2126f32,
                kb: 0.0722f32,
            },
            Gamut::Rec2020 => LumaCoefficients {
                kr: 0.2627f32,
                kb: 0.0593f32,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Gamut::Rec601 => "Rec.601",
            Gamut::Rec709 => "Rec.709",
            Gamut::Rec2020 => "Rec.2020",
        }
    }
}

impl Display for Gamut {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Luma weights of red and blue primaries, green weight is always derived.
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct LumaCoefficients {
    pub kr: f32,
    pub kb: f32,
}

impl LumaCoefficients {
    #[inline]
    pub fn kg(&self) -> f32 {
        1f32 - self.kr - self.kb
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct CbCrForwardTransform<T> {
    pub yr: T,
    pub yg: T,
    pub yb: T,
    pub cb_r: T,
    pub cb_g: T,
    pub cb_b: T,
    pub cr_r: T,
    pub cr_g: T,
    pub cr_b: T,
}

/// RGB to YCbCr on normalized values with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
pub fn get_forward_transform(kr_kb: LumaCoefficients) -> CbCrForwardTransform<f32> {
    let kr = kr_kb.kr;
    let kb = kr_kb.kb;
    let kg = kr_kb.kg();

    CbCrForwardTransform {
        yr: kr,
        yg: kg,
        yb: kb,
        cb_r: -0.5f32 * kr / (1f32 - kb),
        cb_g: -0.5f32 * kg / (1f32 - kb),
        cb_b: 0.5f32,
        cr_r: 0.5f32,
        cr_g: -0.5f32 * kg / (1f32 - kr),
        cr_b: -0.5f32 * kb / (1f32 - kr),
    }
}

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct CbCrInverseTransform<T> {
    pub cr_coef: T,
    pub cb_coef: T,
    pub g_coeff_1: T,
    pub g_coeff_2: T,
}

/// YCbCr to RGB on normalized values with coefficients as specified in [ITU-R](https://www.itu.int/rec/T-REC-H.273/en)
pub fn get_inverse_transform(kr_kb: LumaCoefficients) -> CbCrInverseTransform<f32> {
    let kr = kr_kb.kr;
    let kb = kr_kb.kb;
    let kg = kr_kb.kg();
    CbCrInverseTransform {
        cr_coef: 2f32 * (1f32 - kr),
        cb_coef: 2f32 * (1f32 - kb),
        g_coeff_1: 2f32 * ((1f32 - kr) * kr / kg),
        g_coeff_2: 2f32 * ((1f32 - kb) * kb / kg),
    }
}

/// Linear transform between normalized RGB and YCbCr for one [Gamut].
///
/// Luma and RGB live in `[0, 1]`, color differences in `[-0.5, 0.5]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorMatrix {
    gamut: Gamut,
    forward: CbCrForwardTransform<f32>,
    inverse: CbCrInverseTransform<f32>,
}

impl ColorMatrix {
    pub fn new(gamut: Gamut) -> ColorMatrix {
        let kr_kb = gamut.get_kr_kb();
        ColorMatrix {
            gamut,
            forward: get_forward_transform(kr_kb),
            inverse: get_inverse_transform(kr_kb),
        }
    }

    pub fn gamut(&self) -> Gamut {
        self.gamut
    }

    pub fn forward_transform(&self) -> CbCrForwardTransform<f32> {
        self.forward
    }

    pub fn inverse_transform(&self) -> CbCrInverseTransform<f32> {
        self.inverse
    }

    /// RGB to `[Y, Cb, Cr]`, no clamping is applied.
    #[inline(always)]
    pub fn forward(&self, r: f32, g: f32, b: f32) -> [f32; 3] {
        let ts = &self.forward;
        let y = ts.yr * r + ts.yg * g + ts.yb * b;
        let cb = ts.cb_r * r + ts.cb_g * g + ts.cb_b * b;
        let cr = ts.cr_r * r + ts.cr_g * g + ts.cr_b * b;
        [y, cb, cr]
    }

    /// `[Y, Cb, Cr]` to RGB, each channel is clamped to `[0, 1]`.
    ///
    /// Clamping is the only lossy step of the round trip, colors outside
    /// of the RGB cube are saturated onto its surface.
    #[inline(always)]
    pub fn inverse(&self, y: f32, cb: f32, cr: f32) -> [f32; 3] {
        let ts = &self.inverse;
        let r = y + ts.cr_coef * cr;
        let b = y + ts.cb_coef * cb;
        let g = y - ts.g_coeff_1 * cr - ts.g_coeff_2 * cb;
        [clamp_unit(r), clamp_unit(g), clamp_unit(b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn assert_close(a: f32, b: f32, tolerance: f32, what: &str) {
        assert!(
            (a - b).abs() <= tolerance,
            "{what}: expected {b}, got {a}, tolerance {tolerance}"
        );
    }

    #[test]
    fn test_coefficients_sum_to_one() {
        for gamut in Gamut::ALL {
            let kr_kb = gamut.get_kr_kb();
            let ts = get_forward_transform(kr_kb);
            assert_close(ts.yr + ts.yg + ts.yb, 1., 1e-6, gamut.name());
            assert_close(ts.cb_r + ts.cb_g + ts.cb_b, 0., 1e-6, gamut.name());
            assert_close(ts.cr_r + ts.cr_g + ts.cr_b, 0., 1e-6, gamut.name());
        }
    }

    #[test]
    fn test_forward_matches_published_coefficients() {
        let published = [
            (Gamut::Rec601, [-0.1687f32, -0.3313, 0.5], [0.5f32, -0.4187, -0.0813]),
            (Gamut::Rec709, [-0.1146f32, -0.3854, 0.5], [0.5f32, -0.4542, -0.0458]),
            (Gamut::Rec2020, [-0.1396f32, -0.3604, 0.5], [0.5f32, -0.4598, -0.0402]),
        ];
        for (gamut, cb, cr) in published {
            let ts = ColorMatrix::new(gamut).forward_transform();
            assert_close(ts.cb_r, cb[0], 1e-4, gamut.name());
            assert_close(ts.cb_g, cb[1], 1e-4, gamut.name());
            assert_close(ts.cb_b, cb[2], 1e-4, gamut.name());
            assert_close(ts.cr_r, cr[0], 1e-4, gamut.name());
            assert_close(ts.cr_g, cr[1], 1e-4, gamut.name());
            assert_close(ts.cr_b, cr[2], 1e-4, gamut.name());
        }
    }

    #[test]
    fn test_inverse_matches_published_coefficients() {
        let published = [
            (Gamut::Rec601, 1.402f32, 0.344136f32, 0.714136f32, 1.772f32),
            (Gamut::Rec709, 1.5748f32, 0.1873f32, 0.4681f32, 1.8556f32),
            (Gamut::Rec2020, 1.4746f32, 0.16455f32, 0.57135f32, 1.8814f32),
        ];
        for (gamut, r_cr, g_cb, g_cr, b_cb) in published {
            let ts = ColorMatrix::new(gamut).inverse_transform();
            assert_close(ts.cr_coef, r_cr, 1e-4, gamut.name());
            assert_close(ts.g_coeff_2, g_cb, 1e-4, gamut.name());
            assert_close(ts.g_coeff_1, g_cr, 1e-4, gamut.name());
            assert_close(ts.cb_coef, b_cb, 1e-4, gamut.name());
        }
    }

    #[test]
    fn test_forward_agrees_with_direct_form() {
        let mut rng = rand::rng();
        for gamut in Gamut::ALL {
            let matrix = ColorMatrix::new(gamut);
            let kr_kb = gamut.get_kr_kb();
            for _ in 0..1000 {
                let r: f32 = rng.random_range(0f32..=1f32);
                let g: f32 = rng.random_range(0f32..=1f32);
                let b: f32 = rng.random_range(0f32..=1f32);
                let [y, cb, cr] = matrix.forward(r, g, b);
                let direct_y = kr_kb.kr * r + kr_kb.kg() * g + kr_kb.kb * b;
                assert_close(y, direct_y, 1e-6, "luma");
                assert_close(cb, 0.5 * (b - direct_y) / (1. - kr_kb.kb), 1e-5, "cb");
                assert_close(cr, 0.5 * (r - direct_y) / (1. - kr_kb.kr), 1e-5, "cr");
            }
        }
    }

    #[test]
    fn test_inverse_green_agrees_with_direct_form() {
        let mut rng = rand::rng();
        for gamut in Gamut::ALL {
            let matrix = ColorMatrix::new(gamut);
            let kr_kb = gamut.get_kr_kb();
            for _ in 0..1000 {
                let r: f32 = rng.random_range(0.1f32..=0.9f32);
                let g: f32 = rng.random_range(0.1f32..=0.9f32);
                let b: f32 = rng.random_range(0.1f32..=0.9f32);
                let [y, cb, cr] = matrix.forward(r, g, b);
                let [rr, gg, bb] = matrix.inverse(y, cb, cr);
                let direct_g = (y - kr_kb.kr * rr - kr_kb.kb * bb) / kr_kb.kg();
                assert_close(gg, direct_g, 1e-5, gamut.name());
            }
        }
    }

    #[test]
    fn test_matrix_identity() {
        let mut rng = rand::rng();
        for gamut in Gamut::ALL {
            let matrix = ColorMatrix::new(gamut);
            let mut points = vec![
                [0f32, 0., 0.],
                [1., 1., 1.],
                [1., 0., 0.],
                [0., 1., 0.],
                [0., 0., 1.],
                [1., 1., 0.],
                [0., 1., 1.],
                [1., 0., 1.],
            ];
            for _ in 0..5000 {
                points.push([
                    rng.random_range(0f32..=1f32),
                    rng.random_range(0f32..=1f32),
                    rng.random_range(0f32..=1f32),
                ]);
            }
            for [r, g, b] in points {
                let [y, cb, cr] = matrix.forward(r, g, b);
                let [rr, gg, bb] = matrix.inverse(y, cb, cr);
                assert_close(rr, r, 1e-5, gamut.name());
                assert_close(gg, g, 1e-5, gamut.name());
                assert_close(bb, b, 1e-5, gamut.name());
            }
        }
    }

    #[test]
    fn test_inverse_clamps_out_of_gamut() {
        let matrix = ColorMatrix::new(Gamut::Rec709);
        let [r, g, b] = matrix.inverse(1.0, 0.5, 0.5);
        assert_eq!(r, 1.);
        assert!(g >= 0. && g <= 1.);
        assert_eq!(b, 1.);
        let [r, g, b] = matrix.inverse(0.0, -0.5, -0.5);
        assert_eq!(r, 0.);
        assert!(g >= 0. && g <= 1.);
        assert_eq!(b, 0.);
    }

    #[test]
    fn test_white_and_black_are_neutral() {
        for gamut in Gamut::ALL {
            let matrix = ColorMatrix::new(gamut);
            let [y, cb, cr] = matrix.forward(1., 1., 1.);
            assert_close(y, 1., 1e-6, gamut.name());
            assert_close(cb, 0., 1e-6, gamut.name());
            assert_close(cr, 0., 1e-6, gamut.name());
            assert_eq!(matrix.forward(0., 0., 0.), [0., 0., 0.]);
        }
    }
}
