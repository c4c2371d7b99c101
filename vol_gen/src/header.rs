use byteorder::{ByteOrder, LittleEndian};
use volcast::defaults::HEADER_LEN;

use crate::config::Config;

/// Header of the volume format
/// little-endian, total length 6B
/// 1. resolution -- 3x 16bit unsigned ints (x,y,z)
/// 2. data -- x*y*z 16bit samples follow, x fastest
pub fn generate_header(cfg: &Config) -> Vec<u8> {
    let mut vec = vec![0; HEADER_LEN];
    let slice = &mut vec[..];

    LittleEndian::write_u16(&mut slice[0..2], cfg.dims.x as u16);
    LittleEndian::write_u16(&mut slice[2..4], cfg.dims.y as u16);
    LittleEndian::write_u16(&mut slice[4..6], cfg.dims.z as u16);

    vec
}
