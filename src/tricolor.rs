//! Triangle Shaders
//!
//! Shaders used when drawing meshes: per-vertex color interpolation, texture
//!   mapping through another shader, and the product of the two.

use crate::color::{Color, Pixel};
use crate::error::*;
use crate::math::{div255, Point};
use crate::transform::Transform;
use crate::Shader;

use std::cell::{Cell, RefCell};

/// Affine basis taking the unit triangle onto `p0, p1, p2`
pub fn triangle_basis(p0: Point, p1: Point, p2: Point) -> Transform {
    let a = p1 - p0;
    let b = p2 - p0;
    Transform::new_with(a.x, b.x, p0.x, a.y, b.y, p0.y)
}

/// Color interpolated between the three corners of a triangle
#[derive(Debug)]
pub struct TriColorShader {
    c0: Color,
    dc1: Color,
    dc2: Color,
    local: Transform,
    inverse: Cell<Transform>,
}

impl TriColorShader {
    pub fn new(pts: [Point; 3], colors: [Color; 3]) -> Self {
        Self {
            c0: colors[0],
            dc1: colors[1] - colors[0],
            dc2: colors[2] - colors[0],
            local: triangle_basis(pts[0], pts[1], pts[2]),
            inverse: Cell::new(Transform::new()),
        }
    }
}

impl Shader for TriColorShader {
    fn is_opaque(&self) -> bool {
        false
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        let inv = (*ctm * self.local).invert().ok_or(Error::NonInvertible)?;
        self.inverse.set(inv);
        Ok(())
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let inv = self.inverse.get();
        let p = inv.map_point(Point::new(x as f64 + 0.5, y as f64 + 0.5));
        let mut c = self.c0 + self.dc1 * p.x + self.dc2 * p.y;
        let dc = self.dc1 * inv.sx + self.dc2 * inv.shy;
        for out in row.iter_mut() {
            *out = c.to_pixel();
            c += dc;
        }
    }
}

/// Map a shader's texture space onto a triangle
///
/// Texture coordinates `t0, t1, t2` are placed at the triangle corners
///   `p0, p1, p2`; the inner shader is set up with the combined transform.
pub struct ProxyShader<'s> {
    inner: &'s dyn Shader,
    vertex_basis: Transform,
    texture_basis: Transform,
}

impl<'s> ProxyShader<'s> {
    pub fn new(inner: &'s dyn Shader, pts: [Point; 3], texs: [Point; 3]) -> Self {
        Self {
            inner,
            vertex_basis: triangle_basis(pts[0], pts[1], pts[2]),
            texture_basis: triangle_basis(texs[0], texs[1], texs[2]),
        }
    }
}

impl<'s> Shader for ProxyShader<'s> {
    fn is_opaque(&self) -> bool {
        self.inner.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        let tex_inv = self.texture_basis.invert().ok_or(Error::NonInvertible)?;
        self.inner.set_context(&(*ctm * self.vertex_basis * tex_inv))
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        self.inner.shade_row(x, y, row)
    }
}

/// Channel-wise product of two shaders
pub struct CompositeShader<'s> {
    first: &'s dyn Shader,
    second: &'s dyn Shader,
    scratch: RefCell<Vec<Pixel>>,
}

impl<'s> CompositeShader<'s> {
    pub fn new(first: &'s dyn Shader, second: &'s dyn Shader) -> Self {
        Self { first, second, scratch: RefCell::new(vec![]) }
    }
}

impl<'s> Shader for CompositeShader<'s> {
    fn is_opaque(&self) -> bool {
        self.first.is_opaque() && self.second.is_opaque()
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        self.first.set_context(ctm)?;
        self.second.set_context(ctm)
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let mut other = self.scratch.borrow_mut();
        other.resize(row.len(), Pixel::zero());
        self.first.shade_row(x, y, row);
        self.second.shade_row(x, y, &mut other);
        let mul = |a: u8, b: u8| div255(u32::from(a) * u32::from(b)) as u8;
        for (p, q) in row.iter_mut().zip(other.iter()) {
            *p = Pixel::pack(mul(p.a(), q.a()), mul(p.r(), q.r()), mul(p.g(), q.g()), mul(p.b(), q.b()));
        }
    }
}
