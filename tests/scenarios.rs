use scanfill::{Bitmap, BitmapShader, BlendMode, Canvas, Color, LinearGradient};
use scanfill::{Paint, Pixel, Point, Rect, TileMode, Transform};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn red() -> Color {
    Color::new(1.0, 0.0, 0.0, 1.0)
}

#[test]
fn opaque_rect_fills_every_pixel() {
    init();
    let mut pix = Bitmap::new(4, 4).unwrap();
    Canvas::new(&mut pix).fill_rect(&Rect::ltrb(0.0, 0.0, 4.0, 4.0), &Paint::new(red()));
    assert!(pix.pixels().iter().all(|&p| p == Pixel::pack(255, 255, 0, 0)));
}

#[test]
fn rotated_rect_uses_polygon_fill() {
    init();
    let mut pix = Bitmap::new(20, 20).unwrap();
    {
        let mut c = Canvas::new(&mut pix);
        c.translate(10.0, 10.0);
        c.rotate(std::f64::consts::FRAC_PI_4);
        c.fill_rect(&Rect::ltrb(-4.0, -4.0, 4.0, 4.0), &Paint::new(red()));
    }
    let on = Pixel::pack(255, 255, 0, 0);
    assert_eq!(pix[(10,10)], on);
    // diamond: corners of the axis aligned square are empty
    assert_eq!(pix[(5,5)], Pixel::zero());
    assert_eq!(pix[(15,15)], Pixel::zero());
    assert_eq!(pix[(10,6)], on);
    assert_eq!(pix[(10,2)], Pixel::zero());
}

#[test]
fn triangle_vertex_colors_interpolate() {
    init();
    let mut pix = Bitmap::new(4, 4).unwrap();
    let verts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
    let colors = [Color::new(1.0, 0.0, 0.0, 1.0),
                  Color::new(0.0, 1.0, 0.0, 1.0),
                  Color::new(0.0, 0.0, 1.0, 1.0)];
    Canvas::new(&mut pix).draw_mesh(&verts, Some(&colors[..]), None, &[0, 1, 2],
                                    &Paint::new(Color::black()).with_mode(BlendMode::Src));
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            let p = pix[(x,y)];
            if x >= 4 - y {
                assert_eq!(p, Pixel::zero(), "({},{})", x, y);
                continue;
            }
            let u = (x as f64 + 0.5) / 4.0;
            let v = (y as f64 + 0.5) / 4.0;
            let want = (colors[0] + (colors[1] - colors[0]) * u + (colors[2] - colors[0]) * v).to_pixel();
            for &(a, b) in &[(p.r(), want.r()), (p.g(), want.g()), (p.b(), want.b()), (p.a(), want.a())] {
                assert!((i32::from(a) - i32::from(b)).abs() <= 1, "({},{}) {:08x} {:08x}", x, y, p.0, want.0);
            }
        }
    }
}

#[test]
fn gradient_white_to_black() {
    init();
    let mut pix = Bitmap::new(10, 1).unwrap();
    let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0),
                                &[Color::white(), Color::black()], TileMode::Clamp).unwrap();
    Canvas::new(&mut pix).fill_rect(&Rect::ltrb(0.0, 0.0, 10.0, 1.0), &Paint::from_shader(&g));
    let row = pix.row(0);
    assert!(row[0].r() >= 240);
    assert!(row[9].r() <= 15);
    assert!(row.windows(2).all(|w| w[0].r() > w[1].r()));
    assert!(row.iter().all(|p| p.is_opaque()));
}

#[test]
fn gradient_follows_ctm() {
    init();
    let mut pix = Bitmap::new(20, 1).unwrap();
    let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0),
                                &[Color::white(), Color::black()], TileMode::Clamp).unwrap();
    {
        let mut c = Canvas::new(&mut pix);
        c.scale(2.0, 1.0);
        c.fill_rect(&Rect::ltrb(0.0, 0.0, 10.0, 1.0), &Paint::from_shader(&g));
    }
    // pixel 18.5 maps to 9.25
    assert_eq!(pix[(18,0)], Pixel::pack(255, 19, 19, 19));
}

fn checker() -> Bitmap {
    let a = Pixel::pack(255, 255, 255, 255);
    let b = Pixel::pack(255, 0, 0, 0);
    Bitmap::from_pixels(2, 2, vec![a, b, b, a]).unwrap()
}

#[test]
fn singular_shader_leaves_bitmap_unchanged() {
    init();
    let mut pix = Bitmap::new(8, 8).unwrap();
    pix.fill(Pixel::pack(255, 1, 2, 3));
    let before = pix.clone();

    let bm = checker();
    let shader = BitmapShader::new(&bm, Transform::new(), TileMode::Repeat).unwrap();
    let grad = LinearGradient::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0),
                                   &[Color::white(), red()], TileMode::Clamp).unwrap();
    {
        let mut c = Canvas::new(&mut pix);
        let r = Rect::ltrb(0.0, 0.0, 8.0, 8.0);
        c.fill_rect(&r, &Paint::from_shader(&grad));
        c.fill_convex_polygon(&r.corners(), &Paint::from_shader(&grad));
        c.save();
        c.scale(0.0, 1.0);
        c.fill_rect(&r, &Paint::from_shader(&shader));
        c.restore();
        // degenerate texture coordinates
        let verts = [Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, 8.0)];
        let texs = [Point::new(1.0, 1.0), Point::new(2.0, 2.0), Point::new(3.0, 3.0)];
        c.draw_mesh(&verts, None, Some(&texs[..]), &[0, 1, 2], &Paint::from_shader(&shader));
    }
    assert_eq!(pix, before);
}

#[test]
fn textured_quad() {
    init();
    let mut pix = Bitmap::new(8, 8).unwrap();
    let bm = checker();
    let shader = BitmapShader::new(&bm, Transform::new(), TileMode::Clamp).unwrap();
    let verts = [Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(8.0, 8.0), Point::new(0.0, 8.0)];
    let texs = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(2.0, 2.0), Point::new(0.0, 2.0)];
    Canvas::new(&mut pix).draw_quad(&verts, None, Some(&texs), 1, &Paint::from_shader(&shader));
    assert_eq!(pix[(1,1)], bm[(0,0)]);
    assert_eq!(pix[(6,1)], bm[(1,0)]);
    assert_eq!(pix[(1,6)], bm[(0,1)]);
    assert_eq!(pix[(6,6)], bm[(1,1)]);
    assert!(pix.is_opaque());
}

#[test]
fn colored_and_textured_mesh_multiplies() {
    init();
    let mut pix = Bitmap::new(8, 8).unwrap();
    let white = Bitmap::from_pixels(1, 1, vec![Pixel::pack(255, 255, 255, 255)]).unwrap();
    let shader = BitmapShader::new(&white, Transform::new(), TileMode::Clamp).unwrap();
    let verts = [Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(8.0, 8.0), Point::new(0.0, 8.0)];
    let texs = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0), Point::new(0.0, 1.0)];
    let colors = [red(); 4];
    Canvas::new(&mut pix).draw_quad(&verts, Some(&colors), Some(&texs), 0, &Paint::from_shader(&shader));
    assert!(pix.pixels().iter().all(|&p| p == Pixel::pack(255, 255, 0, 0)));
}
