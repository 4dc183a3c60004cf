//! Rendering Base

use crate::blend::{BlendFn, BlendMode};
use crate::buffer::Bitmap;
use crate::color::Pixel;

use std::cmp::max;
use std::cmp::min;

/// Framebuffer bound to a resolved blend mode
#[derive(Debug)]
pub struct RenderingBase<'a> {
    pub bitmap: &'a mut Bitmap,
    mode: BlendMode,
    func: BlendFn,
}

impl<'a> RenderingBase<'a> {
    pub fn new(bitmap: &'a mut Bitmap, mode: BlendMode) -> Self {
        Self { bitmap, mode, func: mode.blend_fn() }
    }
    pub fn mode(&self) -> BlendMode {
        self.mode
    }
    /// Device bounds as (xmin, xmax, ymin, ymax), max exclusive
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.bitmap.width() as i64;
        let h = self.bitmap.height() as i64;
        (0, w, 0, h)
    }
    /// Blend a single source pixel over `[x1,x2)` on row `y`
    pub fn blend_hline(&mut self, x1: i64, y: i64, x2: i64, src: Pixel) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y >= ymax || y < ymin || x1 >= xmax || x2 <= xmin {
            return;
        }
        let x1 = max(x1, xmin) as usize;
        let x2 = min(x2, xmax) as usize;
        if x2 <= x1 {
            return;
        }
        let row = &mut self.bitmap.row_mut(y as usize)[x1 .. x2];
        match self.mode {
            BlendMode::Dst => {},
            BlendMode::Src => row.iter_mut().for_each(|p| *p = src),
            BlendMode::Clear => row.iter_mut().for_each(|p| *p = Pixel::zero()),
            _ => {
                // runs of equal destination pixels blend once
                let mut prev = None;
                for p in row.iter_mut() {
                    let out = match prev {
                        Some((d, out)) if d == *p => out,
                        _ => {
                            let out = (self.func)(*p, src);
                            prev = Some((*p, out));
                            out
                        }
                    };
                    *p = out;
                }
            }
        }
    }
    /// Blend a row of source pixels starting at `(x,y)`
    pub fn blend_hspan(&mut self, x: i64, y: i64, srcs: &[Pixel]) {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y >= ymax || y < ymin {
            return;
        }
        let (mut x, mut srcs) = (x, srcs);
        if x < xmin {
            let off = (xmin - x) as usize;
            if off >= srcs.len() {
                return;
            }
            srcs = &srcs[off ..];
            x = xmin;
        }
        if x >= xmax {
            return;
        }
        let len = min(srcs.len(), (xmax - x) as usize);
        let x = x as usize;
        let row = &mut self.bitmap.row_mut(y as usize)[x .. x + len];
        match self.mode {
            BlendMode::Dst => {},
            BlendMode::Src => row.copy_from_slice(&srcs[.. len]),
            _ => {
                for (p, s) in row.iter_mut().zip(srcs.iter()) {
                    *p = (self.func)(*p, *s);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hline_is_clipped() {
        let mut pix = Bitmap::new(4, 2).unwrap();
        let red = Pixel::pack(255, 255, 0, 0);
        {
            let mut ren = RenderingBase::new(&mut pix, BlendMode::SrcOver);
            ren.blend_hline(-3, 0, 2, red);
            ren.blend_hline(0, 5, 4, red);
            ren.blend_hline(3, 1, 9, red);
        }
        assert_eq!(pix.row(0), &[red, red, Pixel::zero(), Pixel::zero()]);
        assert_eq!(pix.row(1), &[Pixel::zero(), Pixel::zero(), Pixel::zero(), red]);
    }

    #[test]
    fn hspan_is_clipped() {
        let mut pix = Bitmap::new(3, 1).unwrap();
        let srcs : Vec<_> = (1 ..= 5).map(|i| Pixel::pack(255, i, 0, 0)).collect();
        {
            let mut ren = RenderingBase::new(&mut pix, BlendMode::Src);
            ren.blend_hspan(-1, 0, &srcs);
        }
        assert_eq!(pix.row(0), &srcs[1 .. 4]);
    }
}
