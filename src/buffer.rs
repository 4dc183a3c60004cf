//! Pixel storage

use crate::color::Pixel;
use crate::error::*;

use std::ops::Index;
use std::ops::IndexMut;

/// Bitmap of premultiplied pixels
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Clone,PartialEq)]
pub struct Bitmap {
    /// Pixel data
    pixels: Vec<Pixel>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl Bitmap {
    /// Create a new transparent bitmap of width and height
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBitmap { width, height });
        }
        Ok(Bitmap { width, height, pixels: vec![Pixel::zero(); width * height] })
    }
    /// Wrap existing pixel data
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::EmptyBitmap { width, height });
        }
        if pixels.len() != width * height {
            return Err(Error::PixelCount { expected: width * height, found: pixels.len() });
        }
        Ok(Bitmap { width, height, pixels })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }
    /// Never true, bitmaps have at least one pixel
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }
    /// Return a complete row
    pub fn row(&self, y: usize) -> &[Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &self.pixels[i .. i + self.width]
    }
    /// Return a complete, mutable row
    pub fn row_mut(&mut self, y: usize) -> &mut [Pixel] {
        debug_assert!(y < self.height);
        let i = y * self.width;
        &mut self.pixels[i .. i + self.width]
    }
    /// Pixel at `(x,y)`, None if outside
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }
    /// Set every pixel
    pub fn fill(&mut self, p: Pixel) {
        self.pixels.iter_mut().for_each(|v| *v = p);
    }
    /// All pixels have alpha 255
    pub fn is_opaque(&self) -> bool {
        self.pixels.iter().all(|p| p.is_opaque())
    }
}

impl Index<(usize,usize)> for Bitmap {
    type Output = Pixel;
    fn index(&self, index: (usize, usize)) -> &Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.pixels[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for Bitmap {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.pixels[index.1 * self.width + index.0]
    }
}
