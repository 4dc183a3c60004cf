//! Edges

use crate::math::{round_to_int, Point};

/// Clipped line segment, monotonic in y, in device space
///
/// `x = m * y + b` for `y` in `[top, bottom)`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    /// Slope, change in x per row
    pub m: f64,
    /// Intercept
    pub b: f64,
    /// First row covered
    pub top: i64,
    /// Row past the last covered
    pub bottom: i64,
    /// +1 or -1, direction of the source segment
    pub winding: i32,
}

impl Edge {
    /// Edge between two points
    ///
    /// Points are ordered by y; when `p1` is below `p2` they are swapped and
    ///   the winding is negated.  Returns None when the edge would not cover
    ///   any row.
    pub fn new(p1: Point, p2: Point, winding: i32) -> Option<Edge> {
        if p1.y == p2.y {
            return None;
        }
        let (p1, p2, winding) = if p1.y < p2.y {
            (p1, p2, winding)
        } else {
            (p2, p1, -winding)
        };
        let top = round_to_int(p1.y);
        let bottom = round_to_int(p2.y);
        if top == bottom {
            return None;
        }
        let m = (p2.x - p1.x) / (p2.y - p1.y);
        let b = p1.x - m * p1.y;
        Some(Edge { m, b, top, bottom, winding })
    }
    /// Edge covers the row with center `y`
    pub fn is_valid(&self, y: f64) -> bool {
        y >= self.top as f64 && y < self.bottom as f64
    }
    /// x at `y`
    pub fn x_at(&self, y: f64) -> f64 {
        self.m * y + self.b
    }
}
