//! Affine Transforms

use crate::math::Point;

use std::ops::Mul;

/// Affine transform
///
/// ```text
/// x' = sx  * x + shx * y + tx
/// y' = shy * x + sy  * y + ty
/// ```
///
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Transform {
    pub sx: f64,
    pub shx: f64,
    pub tx: f64,
    pub shy: f64,
    pub sy: f64,
    pub ty: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform
    pub fn new() -> Self {
        Self::new_with(1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
    }
    /// Transform from its six components, row by row
    pub fn new_with(sx: f64, shx: f64, tx: f64, shy: f64, sy: f64, ty: f64) -> Self {
        Self { sx, shx, tx, shy, sy, ty }
    }
    /// Translation by `(tx,ty)`
    pub fn new_translate(tx: f64, ty: f64) -> Self {
        Self::new_with(1.0, 0.0, tx, 0.0, 1.0, ty)
    }
    /// Scale by `sx` and `sy`
    pub fn new_scale(sx: f64, sy: f64) -> Self {
        Self::new_with(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }
    /// Rotation by `ang` radians
    pub fn new_rotate(ang: f64) -> Self {
        let (s, c) = ang.sin_cos();
        Self::new_with(c, -s, 0.0, s, c, 0.0)
    }
    /// Compose `a` and `b`, the result applies `b` first then `a`
    pub fn concat(a: &Transform, b: &Transform) -> Transform {
        Transform {
            sx:  a.sx  * b.sx  + a.shx * b.shy,
            shx: a.sx  * b.shx + a.shx * b.sy,
            tx:  a.sx  * b.tx  + a.shx * b.ty + a.tx,
            shy: a.shy * b.sx  + a.sy  * b.shy,
            sy:  a.shy * b.shx + a.sy  * b.sy,
            ty:  a.shy * b.tx  + a.sy  * b.ty + a.ty,
        }
    }
    /// Determinant of the linear part
    pub fn determinant(&self) -> f64 {
        self.sx * self.sy - self.shy * self.shx
    }
    /// Inverse transform, None if the determinant is zero
    pub fn invert(&self) -> Option<Transform> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(Transform {
            sx:   self.sy  / det,
            shx: -self.shx / det,
            tx:  (self.shx * self.ty - self.sy * self.tx) / det,
            shy: -self.shy / det,
            sy:   self.sx  / det,
            ty:  (self.shy * self.tx - self.sx * self.ty) / det,
        })
    }
    /// Only translation and scale, no rotation or shear
    pub fn is_scale_translate(&self) -> bool {
        self.shx == 0.0 && self.shy == 0.0
    }
    /// Transform a single coordinate
    pub fn transform(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.sx  + y * self.shx + self.tx,
         x * self.shy + y * self.sy  + self.ty)
    }
    /// Transform a point
    pub fn map_point(&self, p: Point) -> Point {
        let (x, y) = self.transform(p.x, p.y);
        Point::new(x, y)
    }
    /// Transform a set of points in place
    pub fn map_points(&self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.map_point(*p);
        }
    }
}

impl Mul for Transform {
    type Output = Transform;
    fn mul(self, rhs: Transform) -> Transform {
        Transform::concat(&self, &rhs)
    }
}
