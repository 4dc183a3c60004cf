//! Colors

use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Sub;
use std::ops::Mul;

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Color as Red, Green, Blue, and Alpha in [0,1], not premultiplied
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Color {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Color {
    /// Create new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
    /// White Color (1,1,1,1)
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
    /// Black Color (0,0,0,1)
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
    /// Transparent Color (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Alpha is exactly 1
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }
    /// Color with every component pinned to [0,1]
    pub fn pinned(&self) -> Self {
        let pin = |v: f64| v.max(0.0).min(1.0);
        Self::new(pin(self.r), pin(self.g), pin(self.b), pin(self.a))
    }
    /// Convert to a packed premultiplied pixel
    ///
    /// Each premultiplied channel is rounded to the nearest integer
    pub fn to_pixel(&self) -> Pixel {
        let c = self.pinned();
        Pixel::pack(cu8(c.a),
                    cu8(c.r * c.a),
                    cu8(c.g * c.a),
                    cu8(c.b * c.a))
    }
}

impl Add for Color {
    type Output = Color;
    fn add(self, o: Color) -> Color {
        Color::new(self.r + o.r, self.g + o.g, self.b + o.b, self.a + o.a)
    }
}
impl AddAssign for Color {
    fn add_assign(&mut self, o: Color) {
        *self = *self + o;
    }
}
impl Sub for Color {
    type Output = Color;
    fn sub(self, o: Color) -> Color {
        Color::new(self.r - o.r, self.g - o.g, self.b - o.b, self.a - o.a)
    }
}
impl Mul<f64> for Color {
    type Output = Color;
    fn mul(self, s: f64) -> Color {
        Color::new(self.r * s, self.g * s, self.b * s, self.a * s)
    }
}

/// Premultiplied pixel packed as ARGB, alpha in the high byte
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Pack premultiplied components
    pub fn pack(a: u8, r: u8, g: u8, b: u8) -> Self {
        Pixel(u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }
    /// Transparent pixel
    pub fn zero() -> Self {
        Pixel(0)
    }
    pub fn a(self) -> u8 { (self.0 >> 24) as u8 }
    pub fn r(self) -> u8 { (self.0 >> 16) as u8 }
    pub fn g(self) -> u8 { (self.0 >>  8) as u8 }
    pub fn b(self) -> u8 { self.0 as u8 }
    /// Alpha is 255
    pub fn is_opaque(self) -> bool {
        self.a() == 255
    }
    /// Convert to straight (not premultiplied) RGBA bytes
    pub fn to_rgba(self) -> [u8; 4] {
        let a = self.a();
        if a == 0 {
            return [0, 0, 0, 0];
        }
        let un = |c: u8| {
            let v = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            v.min(255) as u8
        };
        [un(self.r()), un(self.g()), un(self.b()), a]
    }
    /// Convert from straight RGBA bytes
    pub fn from_rgba(c: [u8; 4]) -> Self {
        let a = u32::from(c[3]);
        let pre = |v: u8| crate::math::div255(u32::from(v) * a) as u8;
        Pixel::pack(c[3], pre(c[0]), pre(c[1]), pre(c[2]))
    }
}
