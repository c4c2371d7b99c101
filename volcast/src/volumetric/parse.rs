//! Parser of the binary volume format
//!
//! Layout, all little-endian:
//! 1. header -- 3x 16bit unsigned ints (width, height, depth)
//! 2. data -- width*height*depth 16bit samples, x fastest, then y, then z
//!
//! Samples carry a 12 bit signal and are normalized by `4095`.

use std::io;

use nom::{
    combinator::map,
    multi::count,
    number::complete::le_u16,
    sequence::tuple,
    IResult,
};

use super::Voxel;
use crate::{defaults, error::LoadError};

/// Dimensions read from the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeHeader {
    pub width: usize,
    pub height: usize,
    pub depth: usize,
}

impl VolumeHeader {
    pub fn size(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Reject dimensions outside of `(0;MAX_DIMENSION>`
    pub fn validate(&self) -> Result<(), LoadError> {
        let in_range = |d: usize| d > 0 && d <= defaults::MAX_DIMENSION;
        if in_range(self.width) && in_range(self.height) && in_range(self.depth) {
            Ok(())
        } else {
            Err(LoadError::Format {
                width: self.width,
                height: self.height,
                depth: self.depth,
            })
        }
    }
}

fn header_inner(s: &[u8]) -> IResult<&[u8], VolumeHeader> {
    let mut header = tuple((le_u16, le_u16, le_u16));
    let (s, (width, height, depth)) = header(s)?;
    Ok((
        s,
        VolumeHeader {
            width: width as usize,
            height: height as usize,
            depth: depth as usize,
        },
    ))
}

fn samples_inner(s: &[u8], size: usize) -> IResult<&[u8], Vec<Voxel>> {
    count(map(le_u16, normalize), size)(s)
}

/// Raw sample to voxel, clamped to `<0;1>`
pub fn normalize(raw: u16) -> Voxel {
    Voxel::clamped(raw as f32 / defaults::RAW_SAMPLE_MAX)
}

fn truncated(what: &str) -> LoadError {
    io::Error::new(io::ErrorKind::UnexpectedEof, format!("volume {what} is truncated")).into()
}

/// Parse and validate header
pub fn parse_header(slice: &[u8]) -> Result<VolumeHeader, LoadError> {
    let (_rest, header) = header_inner(slice).map_err(|_| truncated("header"))?;
    header.validate()?;
    Ok(header)
}

/// Parse whole volume, header and normalized samples.
/// Trailing bytes after the last sample are ignored.
pub fn parse_volume(slice: &[u8]) -> Result<(VolumeHeader, Vec<Voxel>), LoadError> {
    let header = parse_header(slice)?;
    let body = &slice[defaults::HEADER_LEN..];

    let size = header.size();
    // Checked upfront, `count` would otherwise allocate before failing
    if body.len() / 2 < size {
        log::warn!(
            "Volume body holds {} samples, header promises {}",
            body.len() / 2,
            size
        );
        return Err(truncated("body"));
    }

    let (_rest, voxels) = samples_inner(body, size).map_err(|_| truncated("body"))?;

    if log::log_enabled!(log::Level::Debug) {
        let clamped = body[..size * 2]
            .chunks_exact(2)
            .filter(|b| u16::from_le_bytes([b[0], b[1]]) as f32 > defaults::RAW_SAMPLE_MAX)
            .count();
        log::debug!("Parsed {size} samples, {clamped} clamped");
    }

    Ok((header, voxels))
}
