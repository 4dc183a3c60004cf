//! Clipping and edge building
//!
//! Segments are clipped against the device `[0,width] x [0,height]`.
//!   Vertical clipping trims a segment to the visible rows; horizontal
//!   clipping either pins a segment lying fully left or right onto that
//!   side, keeping its winding contribution, or bends it at the side it
//!   crosses, producing up to three edges.

use crate::edge::Edge;
use crate::math::{ceil_to_int, round_to_int, Point};
use crate::path::Segment;
use crate::{VertexSource, FLATTEN_TOLERANCE};

use log::trace;
use smallvec::{smallvec, SmallVec};

/// Rectangle
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rect {
    /// Minimum x value
    pub left: f64,
    /// Minimum y value
    pub top: f64,
    /// Maximum x value
    pub right: f64,
    /// Maximum y value
    pub bottom: f64,
}

impl Rect {
    /// Rectangle from its sides
    pub fn ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    /// Rectangle from an origin and size
    pub fn xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::ltrb(x, y, x + w, y + h)
    }
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
    /// Sides sorted so left <= right and top <= bottom
    pub fn sorted(&self) -> Self {
        Self::ltrb(self.left.min(self.right), self.top.min(self.bottom),
                   self.left.max(self.right), self.top.max(self.bottom))
    }
    /// Expand if the point is outside
    pub fn add_point(&mut self, p: Point) {
        if p.x < self.left   { self.left   = p.x; }
        if p.x > self.right  { self.right  = p.x; }
        if p.y < self.top    { self.top    = p.y; }
        if p.y > self.bottom { self.bottom = p.y; }
    }
    /// Corners, clockwise from the top left
    pub fn corners(&self) -> [Point; 4] {
        [Point::new(self.left, self.top),
         Point::new(self.right, self.top),
         Point::new(self.right, self.bottom),
         Point::new(self.left, self.bottom)]
    }
    /// Round each side to the nearest integer
    pub fn round(&self) -> IRect {
        IRect {
            left: round_to_int(self.left),
            top: round_to_int(self.top),
            right: round_to_int(self.right),
            bottom: round_to_int(self.bottom),
        }
    }
}

/// Integer rectangle, right and bottom exclusive
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq)]
pub struct IRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl IRect {
    /// Intersection with `[0,width) x [0,height)`, None if empty
    pub fn clamp(&self, width: i64, height: i64) -> Option<IRect> {
        let r = IRect {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(width),
            bottom: self.bottom.min(height),
        };
        if r.left < r.right && r.top < r.bottom { Some(r) } else { None }
    }
}

/// Clip a segment to the rows `[top, bottom]`
///
/// Requires `p1.y <= p2.y`.  Returns false if nothing remains, otherwise
///   the endpoints are moved along the segment onto the boundary.
pub fn clip_vertical(p1: &mut Point, p2: &mut Point, top: f64, bottom: f64) -> bool {
    debug_assert!(p1.y <= p2.y);
    if p2.y < top || p1.y > bottom || p1.y == p2.y {
        return false;
    }
    let m = (p2.x - p1.x) / (p2.y - p1.y);
    if p1.y < top {
        p1.x += m * (top - p1.y);
        p1.y = top;
    }
    if p2.y > bottom {
        p2.x += m * (bottom - p2.y);
        p2.y = bottom;
    }
    true
}

/// Clip a segment to the columns `[left, right]`
///
/// Segments fully outside collapse onto the nearest side.  A segment
///   crossing a side is cut there and joined to the side by a vertical
///   piece at the original y.
pub fn clip_horizontal(p1: Point, p2: Point, left: f64, right: f64) -> SmallVec<[Point; 4]> {
    let (mut p1, mut p2) = if p1.x > p2.x { (p2, p1) } else { (p1, p2) };
    if p2.x < left {
        return smallvec![Point::new(left, p1.y), Point::new(left, p2.y)];
    }
    if p1.x > right {
        return smallvec![Point::new(right, p1.y), Point::new(right, p2.y)];
    }
    let mut pts = SmallVec::new();
    if p1.x < left {
        pts.push(Point::new(left, p1.y));
        p1.y += (left - p1.x) * (p2.y - p1.y) / (p2.x - p1.x);
        p1.x = left;
    }
    if p2.x > right {
        pts.push(Point::new(right, p2.y));
        p2.y += (right - p2.x) * (p2.y - p1.y) / (p2.x - p1.x);
        p2.x = right;
    }
    pts.push(p1);
    pts.push(p2);
    pts
}

/// Clip one segment and append its edges
///
/// Edges of a segment heading down the device get `winding`, heading up
///   get `-winding`.
pub fn segment_edges(p0: Point, p1: Point, winding: i32, width: usize, height: usize, edges: &mut Vec<Edge>) {
    let (mut a, mut b, winding) = if p0.y > p1.y {
        (p1, p0, -winding)
    } else {
        (p0, p1, winding)
    };
    if !clip_vertical(&mut a, &mut b, 0.0, height as f64) {
        return;
    }
    let mut pts = clip_horizontal(a, b, 0.0, width as f64);
    pts.sort_by(|a, b| b.y.total_cmp(&a.y));
    for w in pts.windows(2) {
        if let Some(e) = Edge::new(w[1], w[0], winding) {
            trace!("edge {:?}", e);
            edges.push(e);
        }
    }
}

/// Clipped edges of a closed polygon
pub fn polygon_edges(vertices: &[Point], width: usize, height: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(vertices.len());
    let n = vertices.len();
    for i in 0 .. n {
        let p0 = vertices[i];
        let p1 = vertices[(i + 1) % n];
        if round_to_int(p0.y) == round_to_int(p1.y) {
            continue;
        }
        segment_edges(p0, p1, 1, width, height, &mut edges);
    }
    edges
}

/// Number of lines used for a quadratic
pub fn quad_segments(p: &[Point; 3]) -> usize {
    let err = (p[0] - p[1] * 2.0 + p[2]).length();
    ceil_to_int((err / FLATTEN_TOLERANCE).sqrt()).max(1) as usize
}

/// Number of lines used for a cubic
pub fn cubic_segments(p: &[Point; 4]) -> usize {
    let e1 = (p[0] - p[1] * 2.0 + p[2]).length();
    let e2 = (p[1] - p[2] * 2.0 + p[3]).length();
    ceil_to_int((3.0 * e1.max(e2)).sqrt()).max(1) as usize
}

fn flatten<F>(n: usize, p0: Point, p1: Point, eval: F, width: usize, height: usize, edges: &mut Vec<Edge>)
    where F: Fn(f64) -> Point
{
    let mut prev = p0;
    for i in 1 .. n {
        let next = eval(i as f64 / n as f64);
        segment_edges(prev, next, 1, width, height, edges);
        prev = next;
    }
    segment_edges(prev, p1, 1, width, height, edges);
}

/// Clipped edges of a path, curves flattened to lines
pub fn path_edges<V: VertexSource + ?Sized>(path: &V, width: usize, height: usize) -> Vec<Edge> {
    use crate::path::{eval_cubic, eval_quad};
    let mut edges = vec![];
    for seg in path.segments() {
        match seg {
            Segment::Line(p) => segment_edges(p[0], p[1], 1, width, height, &mut edges),
            Segment::Quad(p) => {
                let n = quad_segments(&p);
                flatten(n, p[0], p[2], |t| eval_quad(&p, t), width, height, &mut edges);
            }
            Segment::Cubic(p) => {
                let n = cubic_segments(&p);
                flatten(n, p[0], p[3], |t| eval_cubic(&p, t), width, height, &mut edges);
            }
        }
    }
    trace!("path edges: {}", edges.len());
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_of(p0: (f64,f64), p1: (f64,f64)) -> Vec<Edge> {
        let mut edges = vec![];
        segment_edges(p0.into(), p1.into(), 1, 10, 10, &mut edges);
        edges
    }

    #[test]
    fn outside_vertically_yields_nothing() {
        assert!(edges_of((2.0, -5.0), (8.0, -1.0)).is_empty());
        assert!(edges_of((2.0, 11.0), (8.0, 20.0)).is_empty());
    }

    #[test]
    fn inside_is_unmodified() {
        let e = edges_of((1.0, 1.0), (5.0, 9.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].m, 0.5);
        assert_eq!(e[0].b, 0.5);
        assert_eq!((e[0].top, e[0].bottom), (1, 9));
        assert_eq!(e[0].winding, 1);
        let up = edges_of((5.0, 9.0), (1.0, 1.0));
        assert_eq!(up[0].winding, -1);
        assert_eq!(up[0].m, 0.5);
    }

    #[test]
    fn left_of_device_is_pinned() {
        let e = edges_of((-8.0, 1.0), (-2.0, 9.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].m, 0.0);
        assert_eq!(e[0].b, 0.0);
        assert_eq!((e[0].top, e[0].bottom), (1, 9));
    }

    #[test]
    fn right_of_device_is_pinned() {
        let e = edges_of((12.0, 1.0), (20.0, 9.0));
        assert_eq!(e.len(), 1);
        assert_eq!(e[0].x_at(5.0), 10.0);
    }

    #[test]
    fn crossing_both_sides_bends_twice() {
        let e = edges_of((-10.0, 0.0), (20.0, 10.0));
        assert_eq!(e.len(), 3);
        let total : i64 = e.iter().map(|e| e.bottom - e.top).sum();
        assert_eq!(total, 10);
        assert!(e.iter().all(|e| e.winding == 1));
        // crossing part keeps its slope
        assert!(e.iter().any(|e| (e.m - 3.0).abs() < 1e-9));
    }

    #[test]
    fn vertical_clip_projects_along_line() {
        let mut a = Point::new(0.0, -2.0);
        let mut b = Point::new(4.0, 6.0);
        assert!(clip_vertical(&mut a, &mut b, 0.0, 4.0));
        assert_eq!(a, Point::new(1.0, 0.0));
        assert_eq!(b, Point::new(3.0, 4.0));
    }

    #[test]
    fn polygon_skips_flat_pairs() {
        let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
        let e = polygon_edges(&tri, 4, 4);
        assert_eq!(e.len(), 2);
    }

    #[test]
    fn flattening_counts() {
        let line = [Point::new(0.0,0.0), Point::new(1.0,1.0), Point::new(2.0,2.0)];
        assert_eq!(quad_segments(&line), 1);
        let q = [Point::new(0.0,0.0), Point::new(5.0,10.0), Point::new(10.0,0.0)];
        // |e| = 20, sqrt(80)
        assert_eq!(quad_segments(&q), 9);
        let c = [Point::new(0.0,0.0), Point::new(0.0,10.0), Point::new(10.0,10.0), Point::new(10.0,0.0)];
        // max |e| = sqrt(200)
        assert_eq!(cubic_segments(&c), 7);
    }
}
