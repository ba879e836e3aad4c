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

use image::{ColorType, ImageReader};
use std::fs;
use std::time::Instant;
use vidpack::{
    checked_frame_geometry, color_bars, pack_frame, probe_pixel, BitDepth, ComponentOrder,
    FrameGeometry, Gamut, PixelFormat, RangeConvention, RgbImage, RgbSample,
};

const USAGE: &str = "usage:
  vidpack-app bars <format> <width> <height> <out> [--gamut 601|709|2020] [--range narrow|full]
  vidpack-app probe <format> <width> <height> <file> <x> <y> [--row-bytes N]
  vidpack-app convert <png> <format> <out> [--gamut 601|709|2020] [--range narrow|full]
  vidpack-app geometry <format> <width> <height>

formats: 2vuy, v210, r10l, r12l, bgra";

#[derive(Debug, Copy, Clone)]
struct Options {
    gamut: Gamut,
    range: RangeConvention,
    row_bytes: Option<usize>,
}

fn parse_format(value: &str) -> Result<PixelFormat, String> {
    PixelFormat::ALL
        .into_iter()
        .find(|format| {
            let fourcc = format.fourcc().to_be_bytes();
            value.as_bytes().eq_ignore_ascii_case(&fourcc)
        })
        .ok_or_else(|| format!("Unknown pixel format '{}'", value))
}

fn parse_gamut(value: &str) -> Result<Gamut, String> {
    match value.to_ascii_lowercase().trim_start_matches("rec").trim_start_matches('.') {
        "601" => Ok(Gamut::Rec601),
        "709" => Ok(Gamut::Rec709),
        "2020" => Ok(Gamut::Rec2020),
        _ => Err(format!("Unknown gamut '{}'", value)),
    }
}

fn parse_range(value: &str) -> Result<RangeConvention, String> {
    match value.to_ascii_lowercase().as_str() {
        "narrow" | "legal" | "limited" => Ok(RangeConvention::Narrow),
        "full" => Ok(RangeConvention::Full),
        _ => Err(format!("Unknown range '{}'", value)),
    }
}

fn parse_number<V: std::str::FromStr>(value: &str, what: &str) -> Result<V, String> {
    value
        .parse::<V>()
        .map_err(|_| format!("Invalid {} '{}'", what, value))
}

/// Splits positional arguments from `--flag value` pairs
fn parse_args(args: &[String]) -> Result<(Vec<&str>, Options), String> {
    let mut positional = Vec::new();
    let mut options = Options {
        gamut: Gamut::Rec709,
        range: RangeConvention::Narrow,
        row_bytes: None,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(flag) = arg.strip_prefix("--") {
            let value = iter
                .next()
                .ok_or_else(|| format!("Missing value for --{}", flag))?;
            match flag {
                "gamut" => options.gamut = parse_gamut(value)?,
                "range" => options.range = parse_range(value)?,
                "row-bytes" => options.row_bytes = Some(parse_number(value, "row bytes")?),
                _ => return Err(format!("Unknown option --{}", flag)),
            }
        } else {
            positional.push(arg.as_str());
        }
    }
    Ok((positional, options))
}

fn expect_args<'a>(positional: &[&'a str], count: usize) -> Result<Vec<&'a str>, String> {
    if positional.len() != count {
        return Err(format!(
            "Expected {} arguments, got {}\n{}",
            count,
            positional.len(),
            USAGE
        ));
    }
    Ok(positional.to_vec())
}

fn geometry_of(format: PixelFormat, width: u32, height: u32) -> Result<FrameGeometry, String> {
    checked_frame_geometry(format, width, height).map_err(|e| e.to_string())
}

/// Row stride of a probed file, explicit `--row-bytes` wins over the packed row size
fn probe_row_bytes(
    format: PixelFormat,
    width: u32,
    height: u32,
    options: Options,
) -> Result<usize, String> {
    match options.row_bytes {
        Some(row_bytes) => Ok(row_bytes),
        None => Ok(geometry_of(format, width, height)?.row_bytes),
    }
}

/// Per channel depth of a decoded image, `None` for float or unusual layouts
fn decoded_depth(color: ColorType) -> Option<BitDepth> {
    let channels = color.channel_count() as u32;
    if channels == 0 {
        return None;
    }
    BitDepth::try_from(color.bits_per_pixel() as u32 / channels).ok()
}

fn pack_decoded<T: RgbSample>(
    data: &[T],
    width: u32,
    height: u32,
    format: PixelFormat,
    options: Options,
) -> Result<Vec<u8>, String> {
    let image = RgbImage {
        data,
        width,
        height,
    };
    match T::BIT_DEPTH {
        Some(depth) => println!("packing {}-bit samples", depth.bits()),
        None => println!("packing float samples"),
    }
    // PNG samples are full range at their own depth
    pack_frame(
        &image,
        format,
        Some(options.gamut),
        RangeConvention::Full,
        options.range,
    )
    .map_err(|e| e.to_string())
}

fn bars(positional: &[&str], options: Options) -> Result<(), String> {
    let args = expect_args(positional, 4)?;
    let format = parse_format(args[0])?;
    let width: u32 = parse_number(args[1], "width")?;
    let height: u32 = parse_number(args[2], "height")?;

    let frame = color_bars(width, height);
    let start = Instant::now();
    let packed = pack_frame(
        &frame.as_image(),
        format,
        Some(options.gamut),
        RangeConvention::Full,
        options.range,
    )
    .map_err(|e| e.to_string())?;
    let elapsed = start.elapsed();
    fs::write(args[3], &packed).map_err(|e| e.to_string())?;

    println!(
        "{} {}x{} {:?} {}: {} bytes, packed in {:?}",
        format,
        width,
        height,
        options.range,
        options.gamut,
        packed.len(),
        elapsed
    );
    Ok(())
}

fn probe(positional: &[&str], options: Options) -> Result<(), String> {
    let args = expect_args(positional, 6)?;
    let format = parse_format(args[0])?;
    let width: u32 = parse_number(args[1], "width")?;
    let height: u32 = parse_number(args[2], "height")?;
    let bytes = fs::read(args[3]).map_err(|e| format!("Can't read {}: {}", args[3], e))?;
    let x: u32 = parse_number(args[4], "x")?;
    let y: u32 = parse_number(args[5], "y")?;

    let row_bytes = probe_row_bytes(format, width, height, options)?;
    let codes = probe_pixel(&bytes, row_bytes, width, height, format, x, y)
        .map_err(|e| e.to_string())?;
    let label = match format.component_order() {
        ComponentOrder::YCbCr => "Y'CbCr",
        ComponentOrder::Rgb => "R'G'B'",
    };
    println!(
        "{} ({}, {}) = [{}, {}, {}]",
        label, x, y, codes[0], codes[1], codes[2]
    );
    Ok(())
}

fn convert(positional: &[&str], options: Options) -> Result<(), String> {
    let args = expect_args(positional, 3)?;
    let format = parse_format(args[1])?;
    let img = ImageReader::open(args[0])
        .map_err(|e| e.to_string())?
        .decode()
        .map_err(|e| e.to_string())?;
    let (width, height) = (img.width(), img.height());

    let start = Instant::now();
    // Anything deeper than 8 bits, float included, goes through 16-bit samples
    let packed = match decoded_depth(img.color()) {
        Some(depth) if Some(depth) <= u8::BIT_DEPTH => {
            pack_decoded(img.to_rgb8().as_raw(), width, height, format, options)?
        }
        _ => pack_decoded(img.to_rgb16().as_raw(), width, height, format, options)?,
    };
    let elapsed = start.elapsed();
    fs::write(args[2], &packed).map_err(|e| e.to_string())?;

    println!(
        "{} -> {} {}x{}: {} bytes, packed in {:?}",
        args[0],
        format,
        width,
        height,
        packed.len(),
        elapsed
    );
    Ok(())
}

fn geometry(positional: &[&str]) -> Result<(), String> {
    let args = expect_args(positional, 3)?;
    let format = parse_format(args[0])?;
    let width: u32 = parse_number(args[1], "width")?;
    let height: u32 = parse_number(args[2], "height")?;
    let geometry = geometry_of(format, width, height)?;
    println!(
        "{} {}x{}: {} bytes per row, {} bytes total",
        format, width, height, geometry.row_bytes, geometry.total_bytes
    );
    Ok(())
}

fn run(args: &[String]) -> Result<(), String> {
    let (command, rest) = args.split_first().ok_or_else(|| USAGE.to_string())?;
    let (positional, options) = parse_args(rest)?;
    match command.as_str() {
        "bars" => bars(&positional, options),
        "probe" => probe(&positional, options),
        "convert" => convert(&positional, options),
        "geometry" => geometry(&positional),
        _ => Err(format!("Unknown command '{}'\n{}", command, USAGE)),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(message) = run(&args) {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}
