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

mod bgra8;
mod buffer_geometry;
mod codec_error;
mod color_matrix;
mod frame_codec;
mod images;
mod numerics;
mod packed_layout;
mod patterns;
mod pixel_format;
mod pixel_probe;
mod r10l;
mod r12l;
mod range_map;
mod sample;
mod uyvy8;
mod v210;

pub use codec_error::{CodecError, MismatchedSize, UnsupportedFormat};

pub use range_map::{from_normalized, get_code_range, to_normalized};
pub use range_map::{BitDepth, CodeRange, RangeConvention};

pub use color_matrix::{get_forward_transform, get_inverse_transform};
pub use color_matrix::{CbCrForwardTransform, CbCrInverseTransform, ColorMatrix, Gamut, LumaCoefficients};

pub use pixel_format::PixelFormat;
pub use packed_layout::PixelCodes;
pub use buffer_geometry::{checked_frame_geometry, frame_geometry, FrameGeometry};

pub use v210::{pack_v210, unpack_v210};
pub use uyvy8::{pack_2vuy, unpack_2vuy};
pub use r10l::{pack_r10l, unpack_r10l};
pub use r12l::{pack_r12l, unpack_r12l};
pub use bgra8::{pack_bgra8, unpack_bgra8};

pub use images::{ComponentOrder, ComponentPlanes, RgbFrame, RgbImage};
pub use sample::RgbSample;

pub use frame_codec::{pack_frame, split_components, unpack_frame};
pub use pixel_probe::probe_pixel;
pub use patterns::{color_bars, solid_color};
