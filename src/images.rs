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

use crate::codec_error::check_rgb_samples;
use crate::packed_layout::PixelCodes;
use crate::CodecError;
use std::fmt::Debug;

#[derive(Debug, Clone)]
/// Borrowed interleaved RGB image, rows are dense and hold `width * 3` samples
pub struct RgbImage<'a, T>
where
    T: Copy + Debug,
{
    pub data: &'a [T],
    pub width: u32,
    pub height: u32,
}

impl<T> RgbImage<'_, T>
where
    T: Copy + Debug,
{
    pub fn check_constraints(&self) -> Result<(), CodecError> {
        check_rgb_samples(self.data, self.width, self.height)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Owned interleaved RGB image
pub struct RgbFrame<T>
where
    T: Copy + Debug,
{
    pub data: Vec<T>,
    pub width: u32,
    pub height: u32,
}

impl<T> RgbFrame<T>
where
    T: Default + Clone + Copy + Debug,
{
    /// Allocates zeroed frame
    pub fn alloc(width: u32, height: u32) -> Self {
        RgbFrame {
            data: vec![T::default(); width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Wraps existing samples, `data` must hold exactly `width * height * 3` elements
    pub fn new(data: Vec<T>, width: u32, height: u32) -> Result<Self, CodecError> {
        check_rgb_samples(&data, width, height)?;
        Ok(RgbFrame {
            data,
            width,
            height,
        })
    }

    pub fn as_image(&self) -> RgbImage<'_, T> {
        RgbImage {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Returns `[R, G, B]` at the point, panics when the point is outside of the frame
    pub fn pixel(&self, x: u32, y: u32) -> [T; 3] {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, rgb: [T; 3]) {
        let offset = self.offset(x, y);
        self.data[offset..offset + 3].copy_from_slice(&rgb);
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
/// Meaning of the three component planes of a packed format
pub enum ComponentOrder {
    YCbCr,
    Rgb,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Native codes of a packed frame split into three `width * height` planes.
///
/// Plane order follows [ComponentOrder]: `Y, Cb, Cr` or `R, G, B`.
/// Chroma planes of 4:2:2 formats hold the pair chroma in both pixels of a pair.
pub struct ComponentPlanes {
    pub order: ComponentOrder,
    pub planes: [Vec<u16>; 3],
    pub width: u32,
    pub height: u32,
}

impl ComponentPlanes {
    pub fn alloc(order: ComponentOrder, width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        ComponentPlanes {
            order,
            planes: [vec![0u16; size], vec![0u16; size], vec![0u16; size]],
            width,
            height,
        }
    }

    /// Returns the three codes at the point, panics when the point is outside of the frame
    pub fn component(&self, x: u32, y: u32) -> PixelCodes {
        let offset = y as usize * self.width as usize + x as usize;
        [
            self.planes[0][offset],
            self.planes[1][offset],
            self.planes[2][offset],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec_error::MismatchedSize;

    #[test]
    fn test_frame_pixels() {
        let mut frame = RgbFrame::<u16>::alloc(4, 3);
        assert_eq!(frame.data.len(), 36);
        frame.set_pixel(3, 2, [1, 2, 3]);
        assert_eq!(frame.pixel(3, 2), [1, 2, 3]);
        assert_eq!(&frame.data[33..], &[1, 2, 3]);
        assert_eq!(frame.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn test_frame_shape_is_checked() {
        assert!(RgbFrame::new(vec![0u8; 12], 2, 2).is_ok());
        assert_eq!(
            RgbFrame::new(vec![0u8; 11], 2, 2),
            Err(CodecError::ShapeMismatch(MismatchedSize {
                expected: 12,
                received: 11
            }))
        );
        let image = RgbImage {
            data: &[0f32; 5],
            width: 1,
            height: 2,
        };
        assert!(image.check_constraints().is_err());
    }

    #[test]
    fn test_planes() {
        let mut planes = ComponentPlanes::alloc(ComponentOrder::YCbCr, 2, 2);
        planes.planes[0][3] = 940;
        planes.planes[1][3] = 512;
        planes.planes[2][3] = 448;
        assert_eq!(planes.component(1, 1), [940, 512, 448]);
        assert_eq!(planes.component(0, 0), [0, 0, 0]);
        assert!(planes.planes.iter().all(|plane| plane.len() == 4));
    }
}
