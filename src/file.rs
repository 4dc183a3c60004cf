//! Reading and writing of image files
//!
//! Pixels are stored premultiplied in memory and straight RGBA on disk
use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::error::*;

use std::path::Path;

/// Read an image file as straight RGBA bytes, width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write straight RGBA bytes to an image file, format chosen by extension
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32, image::ColorType::RGBA(8))?;
    Ok(())
}

impl Bitmap {
    /// Load a bitmap from an image file
    pub fn from_file<P: AsRef<Path>>(filename: P) -> Result<Bitmap> {
        let (buf, w, h) = read_file(filename)?;
        let pixels = buf.chunks(4)
            .map(|c| Pixel::from_rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        Bitmap::from_pixels(w, h, pixels)
    }
    /// Straight RGBA bytes, row-major
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels().iter().flat_map(|p| p.to_rgba().to_vec()).collect()
    }
    /// Save the bitmap as an image file
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        write_file(&self.to_rgba(), self.width(), self.height(), filename)
    }
}

/// Compare two image files pixel by pixel
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        return Ok(false);
    }
    if d1.len() != d2.len() {
        log::debug!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            log::debug!("{} [{},{},{}]: {} {}", i, (i/4)%w1,(i/4)/w1,i%4, v1,v2);
            flag = false;
        }
    }
    Ok(flag)
}
