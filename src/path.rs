//! Path storage
//!
//! A path is a list of points and a list of verbs, each verb consuming a
//!   fixed number of points.  Contours begin with `Move` and are implicitly
//!   closed when iterated with [Edger](struct.Edger.html).

use crate::clip::Rect;
use crate::math::{lerp, Point};
use crate::transform::Transform;
use crate::VertexSource;

/// Path verbs
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Verb {
    /// Start a new contour, one point
    Move,
    /// Line from the previous point, one point
    Line,
    /// Quadratic from the previous point, control and end point
    Quad,
    /// Cubic from the previous point, two controls and end point
    Cubic,
}

impl Verb {
    /// Points consumed from storage
    pub fn count(self) -> usize {
        match self {
            Verb::Move | Verb::Line => 1,
            Verb::Quad => 2,
            Verb::Cubic => 3,
        }
    }
}

/// Contour direction, in device space (y down)
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Path of lines, quadratics and cubics
#[derive(Debug,Default,Clone,PartialEq)]
pub struct Path {
    pts: Vec<Point>,
    verbs: Vec<Verb>,
}

impl Path {
    pub fn new() -> Self {
        Self { pts: vec![], verbs: vec![] }
    }
    /// Remove all points and verbs
    pub fn remove_all(&mut self) {
        self.pts.clear();
        self.verbs.clear();
    }
    pub fn points(&self) -> &[Point] {
        &self.pts
    }
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }
    fn inject_move(&mut self) {
        if self.verbs.is_empty() {
            self.move_to(0.0, 0.0);
        }
    }
    /// Start a new contour at `(x,y)`
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.pts.push(Point::new(x, y));
        self.verbs.push(Verb::Move);
        self
    }
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.inject_move();
        self.pts.push(Point::new(x, y));
        self.verbs.push(Verb::Line);
        self
    }
    pub fn quad_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> &mut Self {
        self.inject_move();
        self.pts.push(Point::new(x1, y1));
        self.pts.push(Point::new(x2, y2));
        self.verbs.push(Verb::Quad);
        self
    }
    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> &mut Self {
        self.inject_move();
        self.pts.push(Point::new(x1, y1));
        self.pts.push(Point::new(x2, y2));
        self.pts.push(Point::new(x3, y3));
        self.verbs.push(Verb::Cubic);
        self
    }
    /// Add a rectangle as a new contour
    ///
    /// Clockwise visits top-left, top-right, bottom-right, bottom-left
    pub fn add_rect(&mut self, r: &Rect, dir: Direction) -> &mut Self {
        self.move_to(r.left, r.top);
        match dir {
            Direction::Clockwise => {
                self.line_to(r.right, r.top);
                self.line_to(r.right, r.bottom);
                self.line_to(r.left, r.bottom);
            }
            Direction::CounterClockwise => {
                self.line_to(r.left, r.bottom);
                self.line_to(r.right, r.bottom);
                self.line_to(r.right, r.top);
            }
        }
        self
    }
    /// Add a polygon as a new contour
    pub fn add_polygon(&mut self, pts: &[Point]) -> &mut Self {
        for (i, p) in pts.iter().enumerate() {
            if i == 0 {
                self.move_to(p.x, p.y);
            } else {
                self.line_to(p.x, p.y);
            }
        }
        self
    }
    /// Add a circle as a new contour of eight quadratics
    pub fn add_circle(&mut self, center: Point, radius: f64, dir: Direction) -> &mut Self {
        let t = (std::f64::consts::PI / 8.0).tan();
        let r = std::f64::consts::FRAC_1_SQRT_2;
        let ux = [1.0, 1.0, r, t, 0.0, -t, -r, -1.0, -1.0, -1.0, -r, -t, 0.0, t, r, 1.0, 1.0];
        let uy = [0.0, -t, -r, -1.0, -1.0, -1.0, -r, -t, 0.0, t, r, 1.0, 1.0, 1.0, r, t, 0.0];
        let at = |i: usize| (center.x + radius * ux[i], center.y + radius * uy[i]);

        self.move_to(center.x + radius, center.y);
        match dir {
            Direction::CounterClockwise => {
                for i in (1 .. 16).step_by(2) {
                    let (x1, y1) = at(i);
                    let (x2, y2) = at(i + 1);
                    self.quad_to(x1, y1, x2, y2);
                }
            }
            Direction::Clockwise => {
                for i in (1 .. 16).rev().step_by(2) {
                    let (x1, y1) = at(i);
                    let (x2, y2) = at(i - 1);
                    self.quad_to(x1, y1, x2, y2);
                }
            }
        }
        self
    }
    /// Transform all points in place
    pub fn transform(&mut self, m: &Transform) {
        m.map_points(&mut self.pts);
    }
    /// Copy of the path with all points transformed
    pub fn transformed(&self, m: &Transform) -> Path {
        let mut p = self.clone();
        p.transform(m);
        p
    }
    /// Tight bounds, including the extrema of curves
    pub fn bounds(&self) -> Rect {
        let first = match self.pts.first() {
            Some(p) => *p,
            None => return Rect::ltrb(0.0, 0.0, 0.0, 0.0),
        };
        let mut r = Rect::ltrb(first.x, first.y, first.x, first.y);
        for seg in self.segments() {
            match seg {
                Segment::Line(p) => r.add_point(p[1]),
                Segment::Quad(p) => {
                    r.add_point(p[2]);
                    for t in quad_extrema(&p).iter().flatten() {
                        r.add_point(eval_quad(&p, *t));
                    }
                }
                Segment::Cubic(p) => {
                    r.add_point(p[3]);
                    for t in cubic_extrema(&p).iter().flatten() {
                        r.add_point(eval_cubic(&p, *t));
                    }
                }
            }
        }
        r
    }
}

impl VertexSource for Path {
    fn segments(&self) -> Edger<'_> {
        Edger::new(self)
    }
}

/// Segment yielded by [Edger](struct.Edger.html), with its start point
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Segment {
    Line([Point; 2]),
    Quad([Point; 3]),
    Cubic([Point; 4]),
}

/// Iterator over the segments of a path
///
/// Each contour is closed with a line back to its first point
#[derive(Debug,Clone)]
pub struct Edger<'a> {
    path: &'a Path,
    verb: usize,
    pt: usize,
    start: Option<Point>,
    last: Point,
}

impl<'a> Edger<'a> {
    pub fn new(path: &'a Path) -> Self {
        Edger { path, verb: 0, pt: 0, start: None, last: Point::default() }
    }
    fn close(&mut self) -> Option<Segment> {
        let start = self.start.take()?;
        if start != self.last {
            Some(Segment::Line([self.last, start]))
        } else {
            None
        }
    }
}

impl<'a> Iterator for Edger<'a> {
    type Item = Segment;
    fn next(&mut self) -> Option<Segment> {
        loop {
            let verb = match self.path.verbs.get(self.verb) {
                Some(v) => *v,
                None => return self.close(),
            };
            if verb == Verb::Move && self.start.is_some() {
                if let Some(seg) = self.close() {
                    return Some(seg);
                }
            }
            let pts = &self.path.pts[self.pt .. self.pt + verb.count()];
            self.verb += 1;
            self.pt += verb.count();
            let p0 = self.last;
            let seg = match verb {
                Verb::Move => {
                    self.start = Some(pts[0]);
                    self.last = pts[0];
                    continue;
                }
                Verb::Line => Segment::Line([p0, pts[0]]),
                Verb::Quad => Segment::Quad([p0, pts[0], pts[1]]),
                Verb::Cubic => Segment::Cubic([p0, pts[0], pts[1], pts[2]]),
            };
            self.last = pts[pts.len() - 1];
            return Some(seg);
        }
    }
}

/// Split a quadratic at `t`, returns both halves sharing the middle point
pub fn chop_quad_at(src: &[Point; 3], t: f64) -> [Point; 5] {
    let ab = lerp(src[0], src[1], t);
    let bc = lerp(src[1], src[2], t);
    let abc = lerp(ab, bc, t);
    [src[0], ab, abc, bc, src[2]]
}

/// Split a cubic at `t`, returns both halves sharing the middle point
pub fn chop_cubic_at(src: &[Point; 4], t: f64) -> [Point; 7] {
    let ab = lerp(src[0], src[1], t);
    let bc = lerp(src[1], src[2], t);
    let cd = lerp(src[2], src[3], t);
    let abc = lerp(ab, bc, t);
    let bcd = lerp(bc, cd, t);
    let abcd = lerp(abc, bcd, t);
    [src[0], ab, abc, abcd, bcd, cd, src[3]]
}

/// Point on a quadratic at `t`
pub fn eval_quad(p: &[Point; 3], t: f64) -> Point {
    let u = 1.0 - t;
    p[0] * (u * u) + p[1] * (2.0 * u * t) + p[2] * (t * t)
}

/// Point on a cubic at `t`
pub fn eval_cubic(p: &[Point; 4], t: f64) -> Point {
    let u = 1.0 - t;
    p[0] * (u * u * u) + p[1] * (3.0 * u * u * t) + p[2] * (3.0 * u * t * t) + p[3] * (t * t * t)
}

fn unit_root(num: f64, den: f64) -> Option<f64> {
    if den == 0.0 {
        return None;
    }
    let t = num / den;
    if t > 0.0 && t < 1.0 { Some(t) } else { None }
}

// Derivative zeros per axis, inside (0,1)
fn quad_extrema(p: &[Point; 3]) -> [Option<f64>; 2] {
    let tx = unit_root(p[0].x - p[1].x, p[0].x - 2.0 * p[1].x + p[2].x);
    let ty = unit_root(p[0].y - p[1].y, p[0].y - 2.0 * p[1].y + p[2].y);
    [tx, ty]
}

fn cubic_extrema(p: &[Point; 4]) -> [Option<f64>; 4] {
    let roots = |a: f64, b: f64, c: f64, d: f64| -> [Option<f64>; 2] {
        // derivative / 3 = A t^2 + B t + C
        let qa = -a + 3.0 * b - 3.0 * c + d;
        let qb = 2.0 * (a - 2.0 * b + c);
        let qc = b - a;
        if qa == 0.0 {
            return [unit_root(-qc, qb), None];
        }
        let disc = qb * qb - 4.0 * qa * qc;
        if disc < 0.0 {
            return [None, None];
        }
        let s = disc.sqrt();
        [unit_root(-qb + s, 2.0 * qa), unit_root(-qb - s, 2.0 * qa)]
    };
    let [x0, x1] = roots(p[0].x, p[1].x, p[2].x, p[3].x);
    let [y0, y1] = roots(p[0].y, p[1].y, p[2].y, p[3].y);
    [x0, x1, y0, y1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edger_closes_contours() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).line_to(10.0, 0.0).line_to(10.0, 10.0);
        p.move_to(20.0, 20.0).line_to(30.0, 20.0).line_to(20.0, 30.0);
        let segs : Vec<_> = p.segments().collect();
        assert_eq!(segs.len(), 6);
        assert_eq!(segs[2], Segment::Line([Point::new(10.0, 10.0), Point::new(0.0, 0.0)]));
        assert_eq!(segs[5], Segment::Line([Point::new(20.0, 30.0), Point::new(20.0, 20.0)]));
    }

    #[test]
    fn edger_is_restartable() {
        let mut p = Path::new();
        p.add_polygon(&[Point::new(0.0,0.0), Point::new(4.0,0.0), Point::new(0.0,4.0)]);
        assert_eq!(p.segments().count(), 3);
        assert_eq!(p.segments().count(), 3);
    }

    #[test]
    fn line_without_move_starts_at_origin() {
        let mut p = Path::new();
        p.line_to(5.0, 5.0);
        assert_eq!(p.verbs(), &[Verb::Move, Verb::Line]);
        assert_eq!(p.points()[0], Point::new(0.0, 0.0));
    }

    #[test]
    fn rect_directions() {
        let r = Rect::ltrb(1.0, 2.0, 3.0, 4.0);
        let mut cw = Path::new();
        cw.add_rect(&r, Direction::Clockwise);
        assert_eq!(cw.points()[1], Point::new(3.0, 2.0));
        let mut ccw = Path::new();
        ccw.add_rect(&r, Direction::CounterClockwise);
        assert_eq!(ccw.points()[1], Point::new(1.0, 4.0));
        assert_eq!(cw.bounds(), r);
    }

    #[test]
    fn circle_bounds() {
        let mut p = Path::new();
        p.add_circle(Point::new(10.0, 10.0), 5.0, Direction::Clockwise);
        assert_eq!(p.verbs().len(), 9);
        let b = p.bounds();
        assert!((b.left - 5.0).abs() < 1e-9);
        assert!((b.right - 15.0).abs() < 1e-9);
        assert!((b.top - 5.0).abs() < 1e-9);
        assert!((b.bottom - 15.0).abs() < 1e-9);
    }

    #[test]
    fn cubic_bounds_include_extrema() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0).cubic_to(0.0, 10.0, 10.0, 10.0, 10.0, 0.0);
        let b = p.bounds();
        assert!((b.bottom - 7.5).abs() < 1e-9);
    }

    #[test]
    fn chop_halves() {
        let q = [Point::new(0.0,0.0), Point::new(2.0,2.0), Point::new(4.0,0.0)];
        let c = chop_quad_at(&q, 0.5);
        assert_eq!(c[2], Point::new(2.0, 1.0));
        assert_eq!(c[2], eval_quad(&q, 0.5));
        let k = [Point::new(0.0,0.0), Point::new(0.0,4.0), Point::new(4.0,4.0), Point::new(4.0,0.0)];
        let c = chop_cubic_at(&k, 0.5);
        assert_eq!(c[3], Point::new(2.0, 3.0));
        assert_eq!(c[6], k[3]);
    }
}
