//! Gradient and Voronoi Shaders

use crate::color::{Color, Pixel};
use crate::error::*;
use crate::math::{floor_to_int, Point};
use crate::shader::TileMode;
use crate::transform::Transform;
use crate::Shader;

use std::cell::Cell;

#[derive(Debug,Clone,PartialEq)]
enum Stops {
    /// Constant color
    Single(Color),
    /// Two colors at 0 and 1
    Two(Color, Color),
    /// Colors evenly spaced over [0,1]
    Uniform(Vec<Color>),
    /// Colors at explicit, ascending positions
    Positioned(Vec<Color>, Vec<f64>),
}

/// Linear gradient between two points
///
/// `t` is 0 at `p0` and 1 at `p1`, measured along the line between them;
///   the color is constant across it.
///
///     use scanfill::{Color, LinearGradient, Point, TileMode};
///
///     let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0),
///                                 &[Color::white(), Color::black()],
///                                 TileMode::Clamp).unwrap();
///     assert_eq!(g.color_at(0.5), Color::new(0.5, 0.5, 0.5, 1.0));
///
#[derive(Debug)]
pub struct LinearGradient {
    p0: Point,
    p1: Point,
    stops: Stops,
    mode: TileMode,
    opaque: bool,
    inverse: Cell<Transform>,
}

impl LinearGradient {
    /// Gradient with colors evenly spaced from `p0` to `p1`
    ///
    /// A single color is a constant fill
    pub fn new(p0: Point, p1: Point, colors: &[Color], mode: TileMode) -> Result<Self> {
        let stops = match colors {
            [] => return Err(Error::InvalidShader("gradient needs at least one color".into())),
            [c] => Stops::Single(*c),
            [c0, c1] => Stops::Two(*c0, *c1),
            _ => Stops::Uniform(colors.to_vec()),
        };
        Ok(Self::with_stops(p0, p1, stops, colors, mode))
    }
    /// Gradient with colors at explicit positions in [0,1]
    ///
    /// Outside the first and last positions the end colors are used
    pub fn with_positions(p0: Point, p1: Point, colors: &[Color], pos: &[f64], mode: TileMode) -> Result<Self> {
        if colors.len() < 2 || colors.len() != pos.len() {
            return Err(Error::InvalidShader(format!("{} colors and {} positions", colors.len(), pos.len())));
        }
        if pos.windows(2).any(|w| !(w[0] <= w[1])) {
            return Err(Error::InvalidShader("positions must be ascending".into()));
        }
        let stops = Stops::Positioned(colors.to_vec(), pos.to_vec());
        Ok(Self::with_stops(p0, p1, stops, colors, mode))
    }
    fn with_stops(p0: Point, p1: Point, stops: Stops, colors: &[Color], mode: TileMode) -> Self {
        let opaque = colors.iter().all(|c| c.a == 1.0);
        Self { p0, p1, stops, mode, opaque, inverse: Cell::new(Transform::new()) }
    }
    /// Color at tiled parameter `t`
    pub fn color_at(&self, t: f64) -> Color {
        match &self.stops {
            Stops::Single(c) => *c,
            Stops::Two(c0, c1) => *c0 * (1.0 - t) + *c1 * t,
            Stops::Uniform(cs) => {
                let n = cs.len() - 1;
                let s = t * n as f64;
                let i = (floor_to_int(s).max(0) as usize).min(n - 1);
                let f = s - i as f64;
                cs[i] * (1.0 - f) + cs[i + 1] * f
            }
            Stops::Positioned(cs, pos) => {
                let last = pos.len() - 1;
                if t <= pos[0] {
                    return cs[0];
                }
                if t >= pos[last] {
                    return cs[last];
                }
                for j in 0 .. last {
                    if t >= pos[j] && t <= pos[j + 1] {
                        let span = pos[j + 1] - pos[j];
                        if span <= 0.0 {
                            return cs[j + 1];
                        }
                        let f = (t - pos[j]) / span;
                        return cs[j] * (1.0 - f) + cs[j + 1] * f;
                    }
                }
                cs[last]
            }
        }
    }
}

impl Shader for LinearGradient {
    fn is_opaque(&self) -> bool {
        self.opaque
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        if let Stops::Single(_) = self.stops {
            return Ok(());
        }
        let ctm_inv = ctm.invert().ok_or(Error::NonInvertible)?;
        let dx = self.p1.x - self.p0.x;
        let dy = self.p1.y - self.p0.y;
        let basis = Transform::new_with(dx, -dy, self.p0.x, dy, dx, self.p0.y);
        let basis_inv = basis.invert().ok_or(Error::NonInvertible)?;
        self.inverse.set(basis_inv * ctm_inv);
        Ok(())
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        if let Stops::Single(c) = self.stops {
            let p = c.to_pixel();
            row.iter_mut().for_each(|v| *v = p);
            return;
        }
        let inv = self.inverse.get();
        let mut p = inv.map_point(Point::new(x as f64 + 0.5, y as f64 + 0.5));
        for out in row.iter_mut() {
            *out = self.color_at(self.mode.tile(p.x)).to_pixel();
            p.x += inv.sx;
        }
    }
}

/// Color of the nearest control point
#[derive(Debug)]
pub struct VoronoiShader {
    points: Vec<Point>,
    pixels: Vec<Pixel>,
    opaque: bool,
    inverse: Cell<Transform>,
}

impl VoronoiShader {
    pub fn new(points: &[Point], colors: &[Color]) -> Result<Self> {
        if points.is_empty() || points.len() != colors.len() {
            return Err(Error::InvalidShader(format!("{} points and {} colors", points.len(), colors.len())));
        }
        Ok(Self {
            points: points.to_vec(),
            pixels: colors.iter().map(|c| c.to_pixel()).collect(),
            opaque: colors.iter().all(|c| c.a == 1.0),
            inverse: Cell::new(Transform::new()),
        })
    }
    /// Index of the nearest point, first one wins ties
    pub fn nearest(&self, p: Point) -> usize {
        let mut best = 0;
        let mut dist = std::f64::INFINITY;
        for (i, q) in self.points.iter().enumerate() {
            let d = q.x - p.x;
            let e = q.y - p.y;
            let d2 = d * d + e * e;
            if d2 < dist {
                dist = d2;
                best = i;
            }
        }
        best
    }
}

impl Shader for VoronoiShader {
    fn is_opaque(&self) -> bool {
        self.opaque
    }
    fn set_context(&self, ctm: &Transform) -> Result<()> {
        self.inverse.set(ctm.invert().ok_or(Error::NonInvertible)?);
        Ok(())
    }
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]) {
        let inv = self.inverse.get();
        for (i, out) in row.iter_mut().enumerate() {
            let p = inv.map_point(Point::new((x + i as i64) as f64 + 0.5, y as f64 + 0.5));
            *out = self.pixels[self.nearest(p)];
        }
    }
}
