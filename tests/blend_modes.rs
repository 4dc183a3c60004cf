use scanfill::{Bitmap, BlendMode, Canvas, Color, LinearGradient, Paint, Pixel, Point, Rect, TileMode};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sources() -> Vec<Color> {
    vec![Color::new(1.0, 0.0, 0.0, 1.0),
         Color::new(0.2, 0.8, 0.4, 0.5),
         Color::new(0.0, 0.0, 1.0, 0.0),
         Color::new(1.0, 1.0, 1.0, 0.25)]
}

fn dests() -> Vec<Pixel> {
    vec![Pixel::pack(255, 0, 0, 255),
         Pixel::pack(128, 64, 0, 128),
         Pixel::zero()]
}

#[test]
fn canvas_matches_blend_functions() {
    init();
    for &mode in BlendMode::ALL.iter() {
        for &d in dests().iter() {
            for &s in sources().iter() {
                let mut pix = Bitmap::new(3, 2).unwrap();
                pix.fill(d);
                Canvas::new(&mut pix).fill_rect(&Rect::ltrb(0.0, 0.0, 3.0, 2.0),
                                                &Paint::new(s).with_mode(mode));
                let want = mode.blend(d, s.to_pixel());
                assert!(pix.pixels().iter().all(|&p| p == want),
                        "{:?} dst {:08x} src {:?}: {:08x} != {:08x}", mode, d.0, s, pix[(0,0)].0, want.0);
            }
        }
    }
}

#[test]
fn shader_source_matches_solid_source() {
    init();
    for &mode in BlendMode::ALL.iter() {
        for &s in sources().iter() {
            let g = LinearGradient::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), &[s], TileMode::Clamp).unwrap();
            let mut a = Bitmap::new(4, 4).unwrap();
            let mut b = Bitmap::new(4, 4).unwrap();
            a.fill(Pixel::pack(128, 64, 0, 128));
            b.fill(Pixel::pack(128, 64, 0, 128));
            let tri = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)];
            Canvas::new(&mut a).fill_convex_polygon(&tri, &Paint::new(s).with_mode(mode));
            Canvas::new(&mut b).fill_convex_polygon(&tri, &Paint::from_shader(&g).with_mode(mode));
            assert_eq!(a, b, "{:?} {:?}", mode, s);
        }
    }
}

#[test]
fn dst_leaves_bitmap_unchanged() {
    init();
    let mut pix = Bitmap::new(5, 5).unwrap();
    pix.fill(Pixel::pack(200, 10, 20, 30));
    let before = pix.clone();
    let mut path = scanfill::Path::new();
    path.add_circle(Point::new(2.5, 2.5), 2.0, scanfill::Direction::Clockwise);
    {
        let mut c = Canvas::new(&mut pix);
        for s in sources() {
            let paint = Paint::new(s).with_mode(BlendMode::Dst);
            c.fill_rect(&Rect::ltrb(0.0, 0.0, 5.0, 5.0), &paint);
            c.fill_path(&path, &paint);
        }
    }
    assert_eq!(pix, before);
}

#[test]
fn clear_zeroes_covered_pixels_only() {
    init();
    let mut pix = Bitmap::new(4, 4).unwrap();
    pix.fill(Pixel::pack(255, 9, 9, 9));
    Canvas::new(&mut pix).fill_rect(&Rect::ltrb(1.0, 1.0, 3.0, 3.0),
                                    &Paint::new(Color::white()).with_mode(BlendMode::Clear));
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            let inside = (1 .. 3).contains(&x) && (1 .. 3).contains(&y);
            let want = if inside { Pixel::zero() } else { Pixel::pack(255, 9, 9, 9) };
            assert_eq!(pix[(x,y)], want, "({},{})", x, y);
        }
    }
}
