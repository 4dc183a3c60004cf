//! Scan conversion
//!
//! Both converters sample each row once at its center `y + 0.5`.  A pixel
//!   column `x` is covered when the rounded left crossing is `<= x` and the
//!   rounded right crossing is `> x`.

use crate::edge::Edge;
use crate::math::round_to_int;
use crate::Render;

use log::trace;

/// Fill a convex shape from its edges
///
/// Walks two edges at a time down the shape; edges are sorted by top,
///   then bottom.  Non-convex input is not detected.
pub fn fill_convex<R: Render>(edges: &mut [Edge], ren: &mut R) {
    if edges.len() < 2 {
        return;
    }
    edges.sort_by(|a, b| a.top.cmp(&b.top).then(a.bottom.cmp(&b.bottom)));

    let mut y = edges[0].top;
    let (mut first, mut second, mut next) = (0, 1, 2);
    while next <= edges.len() {
        let c = y as f64 + 0.5;
        if c > edges[first].bottom as f64 {
            first = next;
            next += 1;
            continue;
        }
        if c > edges[second].bottom as f64 {
            second = next;
            next += 1;
            continue;
        }
        let mut x1 = edges[first].x_at(c);
        let mut x2 = edges[second].x_at(c);
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
        }
        let (left, right) = (round_to_int(x1), round_to_int(x2));
        if right > left {
            trace!("convex row {} [{}, {})", y, left, right);
            ren.span(y, left, right);
        }
        y += 1;
    }
}

/// Fill a path with the non-zero winding rule
///
/// Edges at the front of `edges` form the active list, ordered left to
///   right at the current row.  Edges sharing a top and x crossing keep
///   their original order.
pub fn fill_path<R: Render>(edges: &mut Vec<Edge>, height: i64, ren: &mut R) {
    if edges.len() < 2 {
        return;
    }
    edges.sort_by(|a, b| {
        let xa = a.x_at(a.top as f64 + 0.5);
        let xb = b.x_at(b.top as f64 + 0.5);
        a.top.cmp(&b.top).then(xa.total_cmp(&xb))
    });

    for y in 0 .. height {
        if edges.is_empty() {
            break;
        }
        let c = y as f64 + 0.5;
        let mut w = 0;
        let mut left = 0;
        let mut n = 0;
        while n < edges.len() && edges[n].is_valid(c) {
            let x = round_to_int(edges[n].x_at(c));
            if w == 0 {
                left = x;
            }
            w += edges[n].winding;
            if w == 0 {
                debug_assert!(x >= left, "negative span [{}, {}) on row {}", left, x, y);
                if x > left {
                    ren.span(y, left, x);
                }
            }
            n += 1;
        }
        debug_assert_eq!(w, 0, "winding not closed on row {}", y);

        // Stable partition of the active edges, survivors first
        let next = c + 1.0;
        let mut keep = 0;
        for i in 0 .. n {
            if edges[i].is_valid(next) {
                edges.swap(keep, i);
                keep += 1;
            }
        }
        edges.drain(keep .. n);

        let mut active = keep;
        while active < edges.len() && edges[active].is_valid(next) {
            active += 1;
        }
        edges[.. active].sort_by(|a, b| a.x_at(next).total_cmp(&b.x_at(next)));
        trace!("row {} spans from {} edges, {} active next", y, n, active);
    }
}
