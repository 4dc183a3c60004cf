//! Fixed point and geometry helpers

use crate::color::Color;

use std::ops::Add;
use std::ops::Sub;
use std::ops::Mul;

/// Point in 2D space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new Point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    /// Distance from the origin
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl From<(f64,f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}
impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, s: f64) -> Point {
        Point::new(self.x * s, self.y * s)
    }
}
impl Mul<Point> for f64 {
    type Output = Point;
    fn mul(self, p: Point) -> Point {
        p * self
    }
}

/// Divide a product of two u8 values by 255 using fixed point math
///
/// Computes `(x + 128) * 257 >> 16`, which rounds `x / 255` to the nearest
///   integer for every `x` in `0 ..= 255 * 255`
///
///     use scanfill::div255;
///
///     assert_eq!(div255(255 * 255), 255);
///     assert_eq!(div255(128 * 255), 128);
///     assert_eq!(div255(0), 0);
///
pub fn div255(product: u32) -> u32 {
    ((product + 128) * 257) >> 16
}

/// Round to the nearest integer, halves go up
pub fn round_to_int(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
/// Largest integer less than or equal to `v`
pub fn floor_to_int(v: f64) -> i64 {
    v.floor() as i64
}
/// Smallest integer greater than or equal to `v`
pub fn ceil_to_int(v: f64) -> i64 {
    v.ceil() as i64
}

/// Linear interpolation between two points
pub fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new((1.0 - t) * a.x + t * b.x,
               (1.0 - t) * a.y + t * b.y)
}

/// Bilinear interpolation across the corners of a quad
///
/// Corners are ordered `a` top-left, `b` top-right, `c` bottom-right and
///   `d` bottom-left; `(u,v)` = `(0,0)` is `a` and `(1,1)` is `c`
pub fn bilerp(a: Point, b: Point, c: Point, d: Point, u: f64, v: f64) -> Point {
    let (wa, wb, wc, wd) = bilerp_weights(u, v);
    a * wa + b * wb + c * wc + d * wd
}

/// Bilinear interpolation of colors, see [bilerp](fn.bilerp.html)
pub fn bilerp_color(a: Color, b: Color, c: Color, d: Color, u: f64, v: f64) -> Color {
    let (wa, wb, wc, wd) = bilerp_weights(u, v);
    a * wa + b * wb + c * wc + d * wd
}

fn bilerp_weights(u: f64, v: f64) -> (f64, f64, f64, f64) {
    ((1.0 - u) * (1.0 - v),
     u * (1.0 - v),
     u * v,
     (1.0 - u) * v)
}
