//! Color schemes, tile sources and map decorations for urban
//! cartography.
//!
//! - The six base colors: [`RGB_CODES`], [`struct@COLORS`],
//!   [`struct@HEX`] and the listed colormap [`struct@CMAP`].
//! - Expanded categorical colormaps: [`get_colormap`].
//! - Diverging palettes: [`diverging_palette`], [`struct@DIVERGING`].
//! - The signature legend: [`named_legend`].
//! - Mapbox tiles: [`get_tiles`].
//! - North arrows: [`north_arrow`].
//!
//! Colors are exchanged through the [`RGBColor`] trait, implemented for
//! the color types of the [`rgb`] crate.

use std::marker::PhantomData;
use std::f64::consts::PI;
use rgb::{RGB, RGBA, RGB8, RGBA8};

mod error;
mod palette;
mod legend;
mod tiles;
mod north_arrow;

pub use error::{Error, Result};
pub use palette::{RGB_CODES, COLORS, HEX, CMAP, DIVERGING,
                  DEFAULT_COLORS, DEFAULT_RANDOMIZE,
                  light_palette, blend_palette, get_colormap,
                  get_colormap_with_rng, diverging_palette};
pub use legend::{ClassCode, named_legend, SIGNATURES, OUTLIER};
pub use tiles::{TileStyle, TileProvider, get_tiles};
pub use north_arrow::{Anchor, Bounds, Axis, Aspect, Shape,
                      ShapeTransform, ArrowGlyph,
                      DrawingRegion, Region, NorthArrow,
                      resolve_anchor, north_arrow};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    /// Components outside this range are clamped by integer encodings.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Return the `#rrggbb` hexadecimal notation of the color.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use urban_graphics::RGBColor;
    /// assert_eq!(RGB8::new(51, 52, 50).to_hex(), "#333432");
    /// ```
    fn to_hex(&self) -> String {
        let c = RGB8::from_rgba(self.to_rgba());
        format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
    }

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGBA{ r, g, b, a } = Self::to_rgba(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgba(RGBA{ r: x, g: x, b: x, a })
    }
}

/// Convert a component in \[0, 1\] to \[0, 255\], rounding to the
/// nearest integer.
#[inline]
fn to_u8(x: f64) -> u8 { (x.clamp(0., 1.) * 255.).round() as u8 }

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r, g: self.g, b: self.b, a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { RGB { r: c.r, g: c.g, b: c.b } }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b),
                a: to_u8(c.a) }
    }
}

/// The type for colors in the CIE L*C*h*_ab color space with a D50
/// reference white point and an alpha component.  This color space is
/// CIE L*a*b* with polar coordinates.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Lch {
    /// The lightness in the range 0. to 100.
    pub(crate) l: f64,
    /// The chroma, in the range 0. to 181.02, but less in practice.
    pub(crate) c: f64,
    /// The hue in radians in the range 0. to 2π.
    pub(crate) h: f64,
    /// Alpha component
    pub(crate) a: f64,
}

const EPS0: f64 = 6. / 29.;
const EPS: f64 = EPS0 * EPS0 * EPS0 ;
const TWO_PI: f64 = 2. * PI;

impl Lch {
    /// Build a color from its lightness, chroma and hue in degrees.
    pub(crate) fn new(l: f64, c: f64, h_deg: f64) -> Lch {
        Lch { l, c, h: h_deg.to_radians().rem_euclid(TWO_PI), a: 1. }
    }

    pub(crate) fn from_rgb(c: RGBA<f64>) -> Lch {
        // See https://github.com/dbuenzli/gg/blob/b8704687d669d139bb4ac7a54115afc7e5caaa55/src/gg.ml#L2926
        const C0: f64 = 1. / 3.;
        const C1: f64 = 841. / 108.;
        const C2: f64 = 4. / 29.;
        let xr = 0.4522795 * c.r + 0.3993744 * c.g + 0.1483460 * c.b;
        let yr = 0.2225105 * c.r + 0.7168863 * c.g + 0.0606032 * c.b;
        let zr = 0.0168820 * c.r + 0.1176865 * c.g + 0.8654315 * c.b;
        let fx = if xr > EPS { xr.powf(C0) } else { C1 * xr + C2 };
        let fy = if yr > EPS { yr.powf(C0) } else { C1 * yr + C2 };
        let fz = if zr > EPS { zr.powf(C0) } else { C1 * zr + C2 };
        let l = 116. * fy - 16.;
        let a = 500. * (fx - fy);
        let b = 200. * (fy - fz);
        let h = { let h = b.atan2(a);
                  if h < 0. { h + TWO_PI } else { h } };
        Lch { l, c: a.hypot(b), h, a: c.a }
    }

    /// Convert back to RGBA, clamping the components to \[0, 1\] since
    /// not every L*C*h* triple is representable.
    pub(crate) fn to_rgb(&self) -> RGBA<f64> {
        const C0: f64 = 108. / 841.;
        const C1: f64 = 4. / 29.;
        let a = self.c * self.h.cos();
        let b =  self.c * self.h.sin();
        let fy = (self.l + 16.) / 116.;
        let fx = a / 500. + fy;
        let fz = fy - b / 200.;
        let fx1 = if fx > EPS0 { fx * fx * fx } else { C0 * (fx - C1) };
        let fy1 = if fy > EPS0 { fy * fy * fy } else { C0 * (fy - C1) };
        let fz1 = if fz > EPS0 { fz * fz * fz } else { C0 * (fz - C1) };
        let r = 3.0215932  * fx1 - 1.6168777 * fy1 - 0.4047152 * fz1;
        let g = -0.9437222 * fx1 + 1.9161365 * fy1 + 0.0275856 * fz1;
        let b = 0.0693906  * fx1 - 0.2290271 * fy1 + 1.1596365 * fz1;
        RGBA { r: r.clamp(0., 1.), g: g.clamp(0., 1.), b: b.clamp(0., 1.),
               a: self.a }
    }
}


/// A listed colormap: a finite sequence of colors.
///
/// As a [`ColorRange`], `t` ∈ \[0, 1\] selects the color at index
/// `⌊t · len⌋` (the last color for `t = 1`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Colormap {
    colors: Vec<RGBA<f64>>,
}

impl Colormap {
    /// Create a colormap listing the given colors in order.
    pub fn new<Color: RGBColor>(colors: impl IntoIterator<Item = Color>)
                                -> Self {
        Colormap { colors: colors.into_iter().map(|c| c.to_rgba())
                   .collect() }
    }

    /// Returns the number of colors in the colormap.
    pub fn len(&self) -> usize { self.colors.len() }

    /// Says whether the colormap has no color at all.
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Returns the `i`th color, if any.
    pub fn get<Color: RGBColor>(&self, i: usize) -> Option<Color> {
        self.colors.get(i).map(|&c| Color::from_rgba(c))
    }

    /// Returns the colors of the colormap.
    pub fn colors<Color: RGBColor>(&self) -> Vec<Color> {
        self.colors.iter().map(|&c| Color::from_rgba(c)).collect()
    }

    /// Returns the colors of the colormap in hexadecimal notation.
    pub fn hex(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }
}

impl<Color: RGBColor> ColorRange<Color> for Colormap {
    /// Returns the color at `t` ∈ \[0., 1.\].  An empty colormap yields
    /// transparent black.
    fn rgb(&self, t: f64) -> Color {
        let n = self.colors.len();
        if n == 0 {
            return Color::from_rgba(RGBA { r: 0., g: 0., b: 0., a: 0. })
        }
        let i = (t.clamp(0., 1.) * n as f64).trunc() as usize;
        Color::from_rgba(self.colors[i.min(n - 1)])
    }
}

impl<Color: RGBColor> ColorRange<Color> for &Colormap {
    #[inline]
    fn rgb(&self, t: f64) -> Color {
        <Colormap as ColorRange<Color>>::rgb(*self, t)
    }
}
