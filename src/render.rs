//! Span Renderer

use crate::base::RenderingBase;
use crate::blend::BlendMode;
use crate::color::Pixel;
use crate::{Render, Shader};

/// Where source pixels come from
#[derive(Clone,Copy)]
pub enum Source<'s> {
    /// One pixel for every covered position
    Solid(Pixel),
    /// Rows fetched from a shader after a successful `set_context`
    Shader(&'s dyn Shader),
}

/// Turns spans from the scan converters into blended pixels
pub struct SpanRenderer<'a, 's> {
    base: RenderingBase<'a>,
    source: Source<'s>,
    row: Vec<Pixel>,
}

impl<'a, 's> SpanRenderer<'a, 's> {
    pub fn new(base: RenderingBase<'a>, source: Source<'s>) -> Self {
        let w = base.bitmap.width();
        Self { base, source, row: Vec::with_capacity(w) }
    }
}

impl<'a, 's> Render for SpanRenderer<'a, 's> {
    fn span(&mut self, y: i64, left: i64, right: i64) {
        let (xmin, xmax, _, _) = self.base.limits();
        let left = left.max(xmin);
        let right = right.min(xmax);
        if right <= left {
            return;
        }
        match self.source {
            Source::Solid(p) => self.base.blend_hline(left, y, right, p),
            Source::Shader(_) if self.base.mode() == BlendMode::Clear => {
                self.base.blend_hline(left, y, right, Pixel::zero())
            }
            Source::Shader(s) => {
                self.row.resize((right - left) as usize, Pixel::zero());
                s.shade_row(left, y, &mut self.row);
                self.base.blend_hspan(left, y, &self.row);
            }
        }
    }
}
