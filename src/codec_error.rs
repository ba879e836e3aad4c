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
use crate::PixelFormat;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct MismatchedSize {
    pub expected: usize,
    pub received: usize,
}

/// Describes which part of a request falls outside the supported set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum UnsupportedFormat {
    /// YCbCr formats need a [crate::Gamut] to convert from or to RGB.
    MissingGamut(PixelFormat),
    /// FourCC that does not name one of the supported pixel formats.
    FourCc(u32),
    /// Bit depth other than 8, 10, 12 or 16.
    BitDepth(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CodecError {
    /// Sample array does not hold `width * height * 3` elements.
    ShapeMismatch(MismatchedSize),
    /// Packed buffer, or its row stride, is shorter than the frame geometry requires.
    BufferTooSmall(MismatchedSize),
    UnsupportedFormat(UnsupportedFormat),
    PointerOverflow,
    CoordinateOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

fn fourcc_to_string(fourcc: u32) -> String {
    fourcc
        .to_be_bytes()
        .iter()
        .map(|&b| {
            if b.is_ascii_graphic() || b == b' ' {
                b as char
            } else {
                '?'
            }
        })
        .collect()
}

impl Display for UnsupportedFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsupportedFormat::MissingGamut(format) => f.write_fmt(format_args!(
                "{} requires a color matrix, but none was provided",
                format
            )),
            UnsupportedFormat::FourCc(fourcc) => f.write_fmt(format_args!(
                "FourCC '{}' (0x{:08X}) is not a supported pixel format",
                fourcc_to_string(*fourcc),
                fourcc
            )),
            UnsupportedFormat::BitDepth(depth) => f.write_fmt(format_args!(
                "Bit depth {} is not supported, expected one of 8, 10, 12, 16",
                depth
            )),
        }
    }
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecError::ShapeMismatch(size) => f.write_fmt(format_args!(
                "Sample buffer must hold exactly {} elements, but it holds {}",
                size.expected, size.received
            )),
            CodecError::BufferTooSmall(size) => f.write_fmt(format_args!(
                "Packed buffer must have size at least {} but it is {}",
                size.expected, size.received
            )),
            CodecError::UnsupportedFormat(unsupported) => unsupported.fmt(f),
            CodecError::PointerOverflow => f.write_str("Image size overflow pointer capabilities"),
            CodecError::CoordinateOutOfBounds {
                x,
                y,
                width,
                height,
            } => f.write_fmt(format_args!(
                "Point ({}, {}) is outside of {}x{} frame",
                x, y, width, height
            )),
        }
    }
}

impl Error for CodecError {}

impl From<UnsupportedFormat> for CodecError {
    fn from(value: UnsupportedFormat) -> Self {
        CodecError::UnsupportedFormat(value)
    }
}

#[inline]
pub(crate) fn check_overflow_v2(v0: usize, v1: usize) -> Result<usize, CodecError> {
    v0.checked_mul(v1).ok_or(CodecError::PointerOverflow)
}

#[inline]
pub(crate) fn check_overflow_v3(v0: usize, v1: usize, v2: usize) -> Result<usize, CodecError> {
    let product0 = check_overflow_v2(v0, v1)?;
    check_overflow_v2(product0, v2)
}

/// Interleaved RGB sample buffer must be exactly `width * height * 3` long.
#[inline]
pub(crate) fn check_rgb_samples<V>(arr: &[V], width: u32, height: u32) -> Result<(), CodecError> {
    let expected = check_overflow_v3(width as usize, height as usize, 3)?;
    if arr.len() != expected {
        return Err(CodecError::ShapeMismatch(MismatchedSize {
            expected,
            received: arr.len(),
        }));
    }
    Ok(())
}

/// Packed buffer may be longer than required, trailing bytes are never read.
#[inline]
pub(crate) fn check_packed_buffer(
    packed: &[u8],
    row_bytes: usize,
    min_row_bytes: usize,
    height: u32,
) -> Result<(), CodecError> {
    if row_bytes < min_row_bytes {
        return Err(CodecError::BufferTooSmall(MismatchedSize {
            expected: min_row_bytes,
            received: row_bytes,
        }));
    }
    let expected = check_overflow_v2(row_bytes, height as usize)?;
    if packed.len() < expected {
        return Err(CodecError::BufferTooSmall(MismatchedSize {
            expected,
            received: packed.len(),
        }));
    }
    Ok(())
}
