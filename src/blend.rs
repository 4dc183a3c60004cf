//! Porter-Duff blending of premultiplied pixels
//!
//! Every mode combines a source `s` and destination `d` per channel as
//!
//! ```text
//! out = div255( f(sa, da) * s + g(sa, da) * d )
//! ```
//!
//! | Mode    | f        | g        |
//! |---------|----------|----------|
//! | Clear   | 0        | 0        |
//! | Src     | 255      | 0        |
//! | Dst     | 0        | 255      |
//! | SrcOver | 255      | 255 - sa |
//! | DstOver | 255 - da | 255      |
//! | SrcIn   | da       | 0        |
//! | SrcOut  | 255 - da | 0        |
//! | DstIn   | 0        | sa       |
//! | DstOut  | 0        | 255 - sa |
//! | SrcATop | da       | 255 - sa |
//! | DstATop | 255 - da | sa       |
//! | Xor     | 255 - da | 255 - sa |
//!

use crate::color::Pixel;
use crate::math::div255;

/// Blend function, destination first
pub type BlendFn = fn(Pixel, Pixel) -> Pixel;

/// Porter-Duff operators
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum BlendMode {
    Clear,
    Src,
    Dst,
    SrcOver,
    DstOver,
    SrcIn,
    SrcOut,
    DstIn,
    DstOut,
    SrcATop,
    DstATop,
    Xor,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::SrcOver
    }
}

impl BlendMode {
    /// All modes
    pub const ALL : [BlendMode; 12] = [
        BlendMode::Clear, BlendMode::Src, BlendMode::Dst,
        BlendMode::SrcOver, BlendMode::DstOver,
        BlendMode::SrcIn, BlendMode::SrcOut,
        BlendMode::DstIn, BlendMode::DstOut,
        BlendMode::SrcATop, BlendMode::DstATop,
        BlendMode::Xor,
    ];
    /// Function implementing the mode, selected once per draw
    pub fn blend_fn(self) -> BlendFn {
        match self {
            BlendMode::Clear   => clear,
            BlendMode::Src     => src,
            BlendMode::Dst     => dst,
            BlendMode::SrcOver => src_over,
            BlendMode::DstOver => dst_over,
            BlendMode::SrcIn   => src_in,
            BlendMode::SrcOut  => src_out,
            BlendMode::DstIn   => dst_in,
            BlendMode::DstOut  => dst_out,
            BlendMode::SrcATop => src_atop,
            BlendMode::DstATop => dst_atop,
            BlendMode::Xor     => xor,
        }
    }
    /// Blend `src` onto `dst`
    pub fn blend(self, dst: Pixel, src: Pixel) -> Pixel {
        (self.blend_fn())(dst, src)
    }
}

/// Cheaper mode with identical results for a source of this alpha
///
/// Only alpha 0 and alpha 255 are rewritten
pub fn optimize_mode(mode: BlendMode, src: Pixel) -> BlendMode {
    use BlendMode::*;
    match src.a() {
        0 => match mode {
            Clear | Src | SrcIn | SrcOut | DstIn | DstATop => Clear,
            Dst | SrcOver | DstOver | DstOut | SrcATop | Xor => Dst,
        },
        255 => match mode {
            SrcOver => Src,
            DstIn   => Dst,
            DstOut  => Clear,
            SrcATop => SrcIn,
            DstATop => DstOver,
            Xor     => SrcOut,
            m => m,
        },
        _ => mode,
    }
}

#[inline]
fn channel(f: u32, s: u8, g: u32, d: u8) -> u8 {
    div255(f * u32::from(s) + g * u32::from(d)).min(255) as u8
}

#[inline]
fn combine(d: Pixel, s: Pixel, f: u32, g: u32) -> Pixel {
    Pixel::pack(channel(f, s.a(), g, d.a()),
                channel(f, s.r(), g, d.r()),
                channel(f, s.g(), g, d.g()),
                channel(f, s.b(), g, d.b()))
}

pub fn clear(_d: Pixel, _s: Pixel) -> Pixel {
    Pixel::zero()
}
pub fn src(_d: Pixel, s: Pixel) -> Pixel {
    s
}
pub fn dst(d: Pixel, _s: Pixel) -> Pixel {
    d
}
pub fn src_over(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 255, 255 - u32::from(s.a()))
}
pub fn dst_over(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 255 - u32::from(d.a()), 255)
}
pub fn src_in(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, u32::from(d.a()), 0)
}
pub fn src_out(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 255 - u32::from(d.a()), 0)
}
pub fn dst_in(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 0, u32::from(s.a()))
}
pub fn dst_out(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 0, 255 - u32::from(s.a()))
}
pub fn src_atop(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, u32::from(d.a()), 255 - u32::from(s.a()))
}
pub fn dst_atop(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 255 - u32::from(d.a()), u32::from(s.a()))
}
pub fn xor(d: Pixel, s: Pixel) -> Pixel {
    combine(d, s, 255 - u32::from(d.a()), 255 - u32::from(s.a()))
}
