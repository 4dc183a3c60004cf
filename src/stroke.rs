//! Polygon Stroking
//!
//! Strokes are built as fillable paths: each straight segment becomes a
//!   rectangle of the stroke width and every vertex gets a round joint.
//!   All pieces share one orientation so overlaps stay filled under the
//!   non-zero rule.
//!
//! # Example
//!
//!     use scanfill::{stroke_polygon, Bitmap, Canvas, Color, Paint, Point};
//!
//!     // Input polyline
//!     let pts = [Point::new(10.0, 10.0), Point::new(90.0, 50.0), Point::new(10.0, 90.0)];
//!
//!     // Stroke
//!     let path = stroke_polygon(&pts, 6.0, false);
//!
//!     // Draw
//!     let mut pix = Bitmap::new(100, 100).unwrap();
//!     Canvas::new(&mut pix).fill_path(&path, &Paint::new(Color::black()));
//!

use crate::math::Point;
use crate::path::{Direction, Path};

/// Outline of a polyline of `width`, closing it back to the start if `closed`
pub fn stroke_polygon(points: &[Point], width: f64, closed: bool) -> Path {
    let mut path = Path::new();
    let radius = width / 2.0;
    if points.len() < 2 || radius <= 0.0 {
        return path;
    }
    for w in points.windows(2) {
        add_segment(&mut path, w[0], w[1], radius);
    }
    if closed {
        add_segment(&mut path, points[points.len() - 1], points[0], radius);
    }
    path
}

fn add_segment(path: &mut Path, p0: Point, p1: Point, radius: f64) {
    let v = p1 - p0;
    let len = v.length();
    if len == 0.0 {
        return;
    }
    let n = Point::new(-v.y, v.x) * (radius / len);
    path.add_polygon(&[p0 + n, p1 + n, p1 - n, p0 - n]);
    path.add_circle(p0, radius, Direction::CounterClockwise);
    path.add_circle(p1, radius, Direction::CounterClockwise);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::path_edges;
    use crate::raster::fill_path;
    use crate::Render;

    #[derive(Default)]
    struct Spans(Vec<(i64,i64,i64)>);
    impl Render for Spans {
        fn span(&mut self, y: i64, left: i64, right: i64) {
            self.0.push((y, left, right));
        }
    }

    #[test]
    fn segment_pieces() {
        let p = stroke_polygon(&[Point::new(0.0, 0.0), Point::new(10.0, 0.0)], 4.0, false);
        // polygon plus two circles
        assert_eq!(p.verbs().iter().filter(|&&v| v == crate::path::Verb::Move).count(), 3);
        assert_eq!(p.points()[0], Point::new(0.0, 2.0));
        assert_eq!(p.points()[2], Point::new(10.0, -2.0));
    }

    #[test]
    fn closed_adds_last_segment() {
        let pts = [Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(0.0, 10.0)];
        let open = stroke_polygon(&pts, 2.0, false);
        let closed = stroke_polygon(&pts, 2.0, true);
        assert!(closed.verbs().len() > open.verbs().len());
        assert!(stroke_polygon(&pts[..1], 2.0, true).is_empty());
        assert!(stroke_polygon(&[pts[0], pts[0]], 2.0, false).is_empty());
    }

    #[test]
    fn band_is_filled_without_holes() {
        let path = stroke_polygon(&[Point::new(5.0, 10.0), Point::new(25.0, 10.0)], 4.0, false);
        let mut edges = path_edges(&path, 40, 20);
        let mut spans = Spans::default();
        fill_path(&mut edges, 20, &mut spans);
        for y in 8 .. 12 {
            let row : Vec<_> = spans.0.iter().filter(|s| s.0 == y).collect();
            assert_eq!(row.len(), 1, "row {} {:?}", y, row);
            assert!(row[0].1 <= 4 && row[0].2 >= 26);
        }
        assert!(spans.0.iter().all(|s| s.0 >= 8 && s.0 < 12));
    }
}
