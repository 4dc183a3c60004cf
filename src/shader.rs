//! Bitmap Shader

use crate::buffer::Bitmap;
use crate::color::Pixel;
use crate::error::*;
use crate::math::{floor_to_int, Point};
use crate::transform::Transform;
use crate::{Shader, CLAMP_MAX};

use std::cell::Cell;

/// How coordinates outside `[0,1)` are folded back in
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum TileMode {
    /// Extend the edge values
    Clamp,
    /// Wrap around
    Repeat,
    /// Wrap around, reflecting every other copy
    Mirror,
}

impl Default for TileMode {
    fn default() -> Self {
        TileMode::Clamp
    }
}

impl TileMode {
    /// Fold `t` into `[0,1)`
    pub fn tile(self, t: f64) -> f64 {
        match self {
            TileMode::Clamp => t.max(0.0).min(CLAMP_MAX),
            TileMode::Repeat => t - t.floor(),
            TileMode::Mirror => {
                let f = t.rem_euclid(2.0);
                let f = if f > 1.0 { 2.0 - f } else { f };
                f.min(CLAMP_MAX)
            }
        }
    }
}

/// Nearest sampling of a bitmap
///
/// The local transform maps bitmap pixel space to the space the shape is
///   drawn in.
#[derive(Debug)]
pub struct BitmapShader<'b> {
    bitmap: &'b Bitmap,
    local: Transform,
    mode: TileMode,
    opaque: bool,
    inverse: Cell<Transform>,
}

impl<'b> BitmapShader<'b> {
    /// Create a shader, the local transform must be invertible
    pub fn new(bitmap: &'b Bitmap, local: Transform, mode: TileMode) -> Result<Self> {
        if local.invert().is_none() {
            return Err(Error::NonInvertible);
        }
        Ok(Self {
            bitmap,
            local,
            mode,
            opaque: bitmap.is_opaque(),
            inverse: Cell::new(Transform::new()),
        })
    }
}

impl<'b> Shader for BitmapShader<'b> {
    fn is_opaque(&self) -> bool {
        self.opaque
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        let inv = (*ctm * self.local).invert().ok_or(Error::NonInvertible)?;
        self.inverse.set(inv);
        Ok(())
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let inv = self.inverse.get();
        let w = self.bitmap.width();
        let h = self.bitmap.height();
        let (wf, hf) = (w as f64, h as f64);
        let texel = |v: f64, n: usize| floor_to_int(v * n as f64).max(0).min(n as i64 - 1) as usize;
        for (i, out) in row.iter_mut().enumerate() {
            let p = inv.map_point(Point::new((x + i as i64) as f64 + 0.5, y as f64 + 0.5));
            let u = self.mode.tile(p.x / wf);
            let v = self.mode.tile(p.y / hf);
            *out = self.bitmap[(texel(u, w), texel(v, h))];
        }
    }
}
