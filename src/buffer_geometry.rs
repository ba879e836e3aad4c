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

use crate::codec_error::check_overflow_v2;
use crate::{CodecError, PixelFormat};

/// Byte layout of a packed frame
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FrameGeometry {
    /// Bytes of one row, always a whole number of pixel groups
    pub row_bytes: usize,
    pub total_bytes: usize,
}

/// Computes row stride and total size of a packed frame.
///
/// Rows are rounded up to whole pixel groups, a group is never split between rows.
///
/// # Arguments
///
/// * `format`: Target packed pixel format
/// * `width`: Frame width in pixels
/// * `height`: Frame height in pixels
///
/// # Panics
///
/// Panics if the frame size does not fit into `usize`,
/// dimensions reported by capture hardware never come close to it.
pub fn frame_geometry(format: PixelFormat, width: u32, height: u32) -> FrameGeometry {
    match checked_frame_geometry(format, width, height) {
        Ok(geometry) => geometry,
        Err(err) => panic!("{}", err),
    }
}

#[inline]
pub(crate) fn packed_row_bytes(format: PixelFormat, width: u32) -> Result<usize, CodecError> {
    let groups = (width as usize).div_ceil(format.group_pixels());
    check_overflow_v2(groups, format.group_bytes())
}

/// Same as [frame_geometry] but reports [CodecError::PointerOverflow] instead of panicking
/// when the frame size does not fit into `usize`.
pub fn checked_frame_geometry(
    format: PixelFormat,
    width: u32,
    height: u32,
) -> Result<FrameGeometry, CodecError> {
    let row_bytes = packed_row_bytes(format, width)?;
    let total_bytes = check_overflow_v2(row_bytes, height as usize)?;
    Ok(FrameGeometry {
        row_bytes,
        total_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_row_bytes_are_whole_groups() {
        let mut rng = rand::rng();
        for format in PixelFormat::ALL {
            for _ in 0..200 {
                let width = rng.random_range(1..4096u32);
                let geometry = frame_geometry(format, width, 3);
                assert_eq!(geometry.row_bytes % format.group_bytes(), 0, "{}", format);
                let covered = geometry.row_bytes / format.group_bytes() * format.group_pixels();
                assert!(covered >= width as usize);
                assert!(covered < width as usize + format.group_pixels());
                assert_eq!(geometry.total_bytes, geometry.row_bytes * 3);
            }
        }
    }

    #[test]
    fn test_known_strides() {
        assert_eq!(frame_geometry(PixelFormat::Yuv10, 7, 1).row_bytes, 32);
        assert_eq!(frame_geometry(PixelFormat::Yuv10, 1920, 1).row_bytes, 5120);
        assert_eq!(frame_geometry(PixelFormat::Yuv10, 1280, 1).row_bytes, 3424);
        assert_eq!(frame_geometry(PixelFormat::Yuv8, 1920, 1).row_bytes, 3840);
        assert_eq!(frame_geometry(PixelFormat::Yuv8, 5, 1).row_bytes, 12);
        assert_eq!(frame_geometry(PixelFormat::Rgb10, 1920, 1).row_bytes, 7680);
        assert_eq!(frame_geometry(PixelFormat::Rgb12, 1920, 1).row_bytes, 8640);
        assert_eq!(frame_geometry(PixelFormat::Rgb12, 9, 1).row_bytes, 72);
        assert_eq!(frame_geometry(PixelFormat::Bgra8, 3, 2).total_bytes, 24);
    }

    #[test]
    fn test_empty_frames() {
        for format in PixelFormat::ALL {
            let geometry = frame_geometry(format, 0, 1080);
            assert_eq!(geometry.row_bytes, 0);
            assert_eq!(geometry.total_bytes, 0);
            assert_eq!(frame_geometry(format, 1920, 0).total_bytes, 0);
        }
    }

    #[test]
    fn test_checked_geometry() {
        assert_eq!(
            checked_frame_geometry(PixelFormat::Yuv10, 1920, 1080),
            Ok(frame_geometry(PixelFormat::Yuv10, 1920, 1080))
        );
        assert_eq!(
            checked_frame_geometry(PixelFormat::Rgb12, u32::MAX, u32::MAX),
            Err(CodecError::PointerOverflow)
        );
    }
}
