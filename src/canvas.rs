//! Canvas
//!
//! Draw calls transform their geometry by the current transform, prepare
//!   the paint's shader, resolve the blend mode and hand the edges to one
//!   of the scan converters.  A draw whose shader cannot be prepared leaves
//!   the bitmap untouched.

use crate::base::RenderingBase;
use crate::blend::{optimize_mode, BlendMode};
use crate::buffer::Bitmap;
use crate::clip::{path_edges, polygon_edges, Rect};
use crate::color::Color;
use crate::math::{bilerp, bilerp_color, Point};
use crate::path::Path;
use crate::raster::{fill_convex, fill_path};
use crate::render::{Source, SpanRenderer};
use crate::transform::Transform;
use crate::tricolor::{CompositeShader, ProxyShader, TriColorShader};
use crate::{Render, Shader};

use log::debug;

use std::fmt;

/// How a shape is colored
#[derive(Clone,Copy)]
pub struct Paint<'s> {
    /// Solid color, used when there is no shader
    pub color: Color,
    /// Per pixel source color
    pub shader: Option<&'s dyn Shader>,
    /// How source and destination are combined
    pub mode: BlendMode,
}

impl<'s> Paint<'s> {
    /// Solid color paint, drawn with SrcOver
    pub fn new(color: Color) -> Self {
        Self { color, shader: None, mode: BlendMode::SrcOver }
    }
    /// Shader paint; the nominal color is opaque black
    pub fn from_shader(shader: &'s dyn Shader) -> Self {
        Self { color: Color::black(), shader: Some(shader), mode: BlendMode::SrcOver }
    }
    /// Same paint with a different blend mode
    pub fn with_mode(mut self, mode: BlendMode) -> Self {
        self.mode = mode;
        self
    }
}

impl<'s> fmt::Debug for Paint<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paint")
            .field("color", &self.color)
            .field("shader", &self.shader.is_some())
            .field("mode", &self.mode)
            .finish()
    }
}

/// Drawing surface over a borrowed bitmap
pub struct Canvas<'a> {
    device: &'a mut Bitmap,
    ctm: Vec<Transform>,
}

impl<'a> Canvas<'a> {
    /// Canvas with an identity transform
    pub fn new(device: &'a mut Bitmap) -> Self {
        Self { device, ctm: vec![Transform::new()] }
    }
    pub fn device(&self) -> &Bitmap {
        &*self.device
    }
    /// Current transform
    pub fn ctm(&self) -> Transform {
        self.ctm.last().copied().unwrap_or_default()
    }
    /// Push a copy of the current transform
    pub fn save(&mut self) {
        let top = self.ctm();
        self.ctm.push(top);
    }
    /// Pop the transform pushed by the matching `save`
    pub fn restore(&mut self) {
        debug_assert!(self.ctm.len() > 1, "restore without save");
        if self.ctm.len() > 1 {
            self.ctm.pop();
        }
    }
    /// Apply `m` before the current transform
    pub fn concat(&mut self, m: &Transform) {
        let top = self.ctm() * *m;
        if let Some(t) = self.ctm.last_mut() {
            *t = top;
        }
    }
    pub fn translate(&mut self, tx: f64, ty: f64) {
        self.concat(&Transform::new_translate(tx, ty));
    }
    pub fn scale(&mut self, sx: f64, sy: f64) {
        self.concat(&Transform::new_scale(sx, sy));
    }
    pub fn rotate(&mut self, radians: f64) {
        self.concat(&Transform::new_rotate(radians));
    }
    /// Set every pixel to `color`, ignoring transform and blending
    pub fn clear(&mut self, color: Color) {
        self.device.fill(color.to_pixel());
    }

    /// Resolve the blend mode and pixel source for a draw, None to skip it
    fn prepare<'s>(&self, paint: &Paint<'s>) -> Option<(BlendMode, Source<'s>)> {
        let pixel = paint.color.to_pixel();
        let (mode, source) = match paint.shader {
            Some(shader) => {
                if let Err(e) = shader.set_context(&self.ctm()) {
                    debug!("draw skipped: {}", e);
                    return None;
                }
                let mode = if shader.is_opaque() {
                    optimize_mode(paint.mode, pixel)
                } else {
                    paint.mode
                };
                (mode, Source::Shader(shader))
            }
            None => (optimize_mode(paint.mode, pixel), Source::Solid(pixel)),
        };
        debug!("blend mode {:?} resolved to {:?}", paint.mode, mode);
        if mode == BlendMode::Dst {
            return None;
        }
        Some((mode, source))
    }

    fn renderer<'s>(&mut self, mode: BlendMode, source: Source<'s>) -> SpanRenderer<'_, 's> {
        SpanRenderer::new(RenderingBase::new(self.device, mode), source)
    }

    /// Fill a rectangle
    ///
    /// Without rotation or shear the rectangle is rounded to whole pixels
    ///   and filled directly, otherwise it is drawn as a polygon.
    pub fn fill_rect(&mut self, rect: &Rect, paint: &Paint) {
        let ctm = self.ctm();
        if !ctm.is_scale_translate() {
            self.fill_convex_polygon(&rect.corners(), paint);
            return;
        }
        let (mode, source) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let mut pts = rect.corners();
        ctm.map_points(&mut pts);
        let dev = Rect::ltrb(pts[0].x, pts[0].y, pts[2].x, pts[2].y).sorted();
        let (w, h) = (self.device.width() as i64, self.device.height() as i64);
        let r = match dev.round().clamp(w, h) {
            Some(r) => r,
            None => {
                debug!("rect outside device");
                return;
            }
        };
        let mut ren = self.renderer(mode, source);
        for y in r.top .. r.bottom {
            ren.span(y, r.left, r.right);
        }
    }

    /// Fill a convex polygon
    ///
    /// Fewer than three points draw nothing
    pub fn fill_convex_polygon(&mut self, points: &[Point], paint: &Paint) {
        if points.len() < 3 {
            return;
        }
        let (mode, source) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let mut pts = points.to_vec();
        self.ctm().map_points(&mut pts);
        let mut edges = polygon_edges(&pts, self.device.width(), self.device.height());
        if edges.len() < 2 {
            debug!("polygon has no visible edges");
            return;
        }
        let mut ren = self.renderer(mode, source);
        fill_convex(&mut edges, &mut ren);
    }

    /// Fill a path with the non-zero winding rule
    pub fn fill_path(&mut self, path: &Path, paint: &Paint) {
        let (mode, source) = match self.prepare(paint) {
            Some(v) => v,
            None => return,
        };
        let dev = path.transformed(&self.ctm());
        let (w, h) = (self.device.width(), self.device.height());
        let mut edges = path_edges(&dev, w, h);
        if edges.len() < 2 {
            debug!("path has no visible edges");
            return;
        }
        let mut ren = self.renderer(mode, source);
        fill_path(&mut edges, h as i64, &mut ren);
    }

    /// Draw triangles from `indices`, three per triangle
    ///
    /// With `colors` each triangle interpolates its corner colors.  With
    ///   `texs` and a paint shader the shader is mapped onto each triangle
    ///   through the texture coordinates.  With both the two are multiplied.
    ///   With neither nothing is drawn.
    pub fn draw_mesh(&mut self, verts: &[Point], colors: Option<&[Color]>, texs: Option<&[Point]>,
                     indices: &[usize], paint: &Paint) {
        for tri in indices.chunks_exact(3) {
            let pts = match (verts.get(tri[0]), verts.get(tri[1]), verts.get(tri[2])) {
                (Some(a), Some(b), Some(c)) => [*a, *b, *c],
                _ => {
                    debug!("triangle {:?} out of range", tri);
                    continue;
                }
            };
            let cols = colors.and_then(|c| Some([*c.get(tri[0])?, *c.get(tri[1])?, *c.get(tri[2])?]));
            let tex = texs.and_then(|t| Some([*t.get(tri[0])?, *t.get(tri[1])?, *t.get(tri[2])?]));
            self.draw_triangle(pts, cols, tex, paint);
        }
    }

    fn draw_triangle(&mut self, pts: [Point; 3], cols: Option<[Color; 3]>, tex: Option<[Point; 3]>, paint: &Paint) {
        let tri = cols.map(|c| TriColorShader::new(pts, c));
        let proxy = match (tex, paint.shader) {
            (Some(t), Some(s)) => Some(ProxyShader::new(s, pts, t)),
            _ => None,
        };
        let mode = paint.mode;
        match (&tri, &proxy) {
            (Some(t), Some(p)) => {
                let comp = CompositeShader::new(t, p);
                self.fill_convex_polygon(&pts, &Paint::from_shader(&comp).with_mode(mode));
            }
            (Some(t), None) => self.fill_convex_polygon(&pts, &Paint::from_shader(t).with_mode(mode)),
            (None, Some(p)) => self.fill_convex_polygon(&pts, &Paint::from_shader(p).with_mode(mode)),
            (None, None) => {}
        }
    }

    /// Draw a quad subdivided into a `(level + 1)` square grid of cells
    ///
    /// Corners run clockwise from the top left; colors and texture
    ///   coordinates are interpolated bilinearly across the grid.
    pub fn draw_quad(&mut self, verts: &[Point; 4], colors: Option<&[Color; 4]>, texs: Option<&[Point; 4]>,
                     level: usize, paint: &Paint) {
        const INDICES : [usize; 6] = [0, 1, 2, 1, 3, 2];
        let n = level + 1;
        let d = 1.0 / n as f64;
        let cell = |u: f64, v: f64| [(u, v), (u + d, v), (u, v + d), (u + d, v + d)];
        for y in 0 .. n {
            for x in 0 .. n {
                let uv = cell(x as f64 * d, y as f64 * d);
                let mut pts = [Point::default(); 4];
                let mut cols = [Color::default(); 4];
                let mut tex = [Point::default(); 4];
                for (i, &(u, v)) in uv.iter().enumerate() {
                    pts[i] = bilerp(verts[0], verts[1], verts[2], verts[3], u, v);
                    if let Some(c) = colors {
                        cols[i] = bilerp_color(c[0], c[1], c[2], c[3], u, v);
                    }
                    if let Some(t) = texs {
                        tex[i] = bilerp(t[0], t[1], t[2], t[3], u, v);
                    }
                }
                self.draw_mesh(&pts,
                               colors.map(|_| &cols[..]),
                               texs.map(|_| &tex[..]),
                               &INDICES, paint);
            }
        }
    }
}
