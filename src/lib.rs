//! Software 2D rasterizer
//!
//! Fills rectangles, convex polygons, paths and triangle meshes into a
//!   premultiplied ARGB [Bitmap](struct.Bitmap.html) with one sample per
//!   pixel, combining source and destination with one of twelve
//!   Porter-Duff [BlendMode](enum.BlendMode.html)s.
//!
//! # How does this work
//!
//! ```text
//! canvas = Canvas( Bitmap )
//! Canvas Operations
//!   fill_rect, fill_convex_polygon, fill_path, draw_mesh, draw_quad
//!     ctm.map_points()              -- device space
//!     shader.set_context(ctm)       -- abort draw on singular transform
//!     optimize_mode(mode, pixel)    -- 'dst' returns early
//! Edges
//!   clip::polygon_edges()  / clip::path_edges()
//!     clip_vertical()
//!     clip_horizontal()             -- bends, at most 4 points
//!   Output: Edges with slope, intercept, top, bottom and winding
//! Scan Conversion
//!   raster::fill_convex()           -- two edge walk
//!   raster::fill_path()             -- active edge list, non-zero winding
//!     Render::span(y, left, right)
//!       SpanRenderer
//!         shader.shade_row()        -- or solid pixel
//!         RenderingBase::blend_hline / blend_hspan
//! ```
//!
//! # Example
//!
//!     use scanfill::{Bitmap, Canvas, Color, Paint, Pixel, Rect};
//!
//!     let mut pix = Bitmap::new(4, 4).unwrap();
//!     {
//!         let mut canvas = Canvas::new(&mut pix);
//!         let red = Paint::new(Color::new(1.0, 0.0, 0.0, 1.0));
//!         canvas.fill_rect(&Rect::ltrb(0.0, 0.0, 4.0, 4.0), &red);
//!     }
//!     assert!(pix.pixels().iter().all(|&p| p == Pixel::pack(255, 255, 0, 0)));
//!

pub mod error;
pub mod color;
pub mod math;
pub mod transform;
pub mod buffer;
pub mod file;
pub mod path;
pub mod edge;
pub mod clip;
pub mod blend;
pub mod base;
pub mod render;
pub mod raster;
pub mod shader;
pub mod gradient;
pub mod tricolor;
pub mod stroke;
pub mod canvas;

pub use crate::error::*;
pub use crate::color::*;
pub use crate::math::*;
pub use crate::transform::*;
pub use crate::buffer::*;
pub use crate::file::*;
pub use crate::path::*;
pub use crate::edge::*;
pub use crate::clip::*;
pub use crate::blend::*;
pub use crate::base::*;
pub use crate::render::*;
pub use crate::raster::*;
pub use crate::shader::*;
pub use crate::gradient::*;
pub use crate::tricolor::*;
pub use crate::stroke::*;
pub use crate::canvas::*;

/// Maximum deviation, in device pixels, when flattening quadratic curves
pub const FLATTEN_TOLERANCE : f64 = 0.25;

/// Largest tiled parameter, keeps `floor(t * n)` below `n`
pub const CLAMP_MAX : f64 = 0.999_999_999;

/// Source of per pixel color
///
/// A shader is used in two phases: [set_context](#tymethod.set_context)
///   is called once per primitive with the current transform and caches
///   whatever it needs, then [shade_row](#tymethod.shade_row) is called
///   for each horizontal run of covered pixels.
pub trait Shader {
    /// Every pixel produced has alpha 255
    fn is_opaque(&self) -> bool;
    /// Prepare for drawing under the device transform `ctm`
    ///
    /// Fails with [Error::NonInvertible](enum.Error.html) when the combined
    ///   transform is singular; the draw is then skipped.
    fn set_context(&self, ctm: &Transform) -> Result<()>;
    /// Fill `row` with pixels starting at device pixel `(x,y)`
    fn shade_row(&self, x: i64, y: i64, row: &mut [Pixel]);
}

/// Consumer of horizontal spans from the scan converters
pub trait Render {
    /// Cover pixels `[left, right)` on row `y`
    fn span(&mut self, y: i64, left: i64, right: i64);
}

/// Restartable producer of path segments
pub trait VertexSource {
    /// Iterate over lines, quadratics and cubics, with contours closed
    fn segments(&self) -> Edger<'_>;
}
