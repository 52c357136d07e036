//! The base palette and the palettes derived from it.

use lazy_static::lazy_static;
use rand::{Rng, seq::SliceRandom};
use rgb::RGBA;
use tracing::debug;
use crate::{Colormap, Lch, RGBColor};

/// The six base colors as 8 bit RGB codes.
pub const RGB_CODES: [(u8, u8, u8); 6] = [
    (51, 52, 50),
    (59, 110, 141),
    (189, 91, 79),
    (144, 164, 126),
    (240, 200, 88),
    (149, 102, 110),
];

lazy_static! {
    /// The base colors with components in \[0, 1\].  The codes are
    /// divided by 256, so every component stays strictly below 1.
    pub static ref COLORS: Vec<RGBA<f64>> = RGB_CODES.iter()
        .map(|&(r, g, b)| RGBA { r: r as f64 / 256., g: g as f64 / 256.,
                                  b: b as f64 / 256., a: 1. })
        .collect();

    /// The base colors in `#rrggbb` notation.
    pub static ref HEX: Vec<String> =
        COLORS.iter().map(|c| c.to_hex()).collect();

    /// The base colors as a listed colormap.
    pub static ref CMAP: Colormap = Colormap::new(COLORS.iter().copied());

    /// Blue to red diverging palette of 6 colors through a light gray.
    pub static ref DIVERGING: Vec<RGBA<f64>> =
        diverging_palette(235., 16., 60., 44., 6);
}

/// Usual number of colors asked to [`get_colormap`].
pub const DEFAULT_COLORS: i64 = 18;

/// Whether [`get_colormap`] shuffles its colors unless told otherwise.
pub const DEFAULT_RANDOMIZE: bool = true;

/// Number of samples on each side of a diverging palette before it is
/// resampled.
const HALF_SAMPLES: usize = 128;

#[inline]
fn lerp(c0: RGBA<f64>, c1: RGBA<f64>, t: f64) -> RGBA<f64> {
    RGBA { r: c0.r + t * (c1.r - c0.r),
           g: c0.g + t * (c1.g - c0.g),
           b: c0.b + t * (c1.b - c0.b),
           a: c0.a + t * (c1.a - c0.a) }
}

/// The light end of a [`light_palette`]: same hue as `c`, lightness 95
/// and a small fraction of its chroma.
fn light_end(c: RGBA<f64>) -> RGBA<f64> {
    let lch = Lch::from_rgb(c);
    Lch { l: 95., c: 0.15 * lch.c, h: lch.h, a: c.a }.to_rgb()
}

/// Return `n_colors` colors blended linearly (in RGB) through
/// `colors`, which are taken as equally spaced stops.  The first and
/// last returned colors are the first and last stops.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use urban_graphics::blend_palette;
/// let p = blend_palette(&[RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)], 3);
/// assert_eq!(p[1], RGB8::new(128, 128, 128));
/// ```
pub fn blend_palette<Color: RGBColor>(colors: &[Color], n_colors: usize)
                                      -> Vec<Color> {
    let stops: Vec<RGBA<f64>> = colors.iter().map(|c| c.to_rgba()).collect();
    let k = stops.len();
    if k == 0 { return vec![] }
    if k == 1 {
        return (0 .. n_colors).map(|_| Color::from_rgba(stops[0])).collect()
    }
    let last = n_colors.saturating_sub(1).max(1) as f64;
    (0 .. n_colors).map(|i| {
        let pos = i as f64 / last * (k - 1) as f64;
        let seg = (pos.trunc() as usize).min(k - 2);
        Color::from_rgba(lerp(stops[seg], stops[seg + 1], pos - seg as f64))
    }).collect()
}

/// Sequential palette of `n_colors` going from a light, desaturated
/// variant of `color` to `color` itself.
///
/// With `n_colors == 1` only the light variant is returned.
pub fn light_palette<Color: RGBColor>(color: &Color, n_colors: usize)
                                      -> Vec<Color> {
    let rgb = color.to_rgba();
    blend_palette(&[light_end(rgb), rgb], n_colors)
        .into_iter().map(Color::from_rgba).collect()
}

/// Diverging palette of `n` colors going from the hue `h_neg` to the hue
/// `h_pos` (in degrees) through a light gray.  Both ends have the
/// chroma `s` and the lightness `l` (CIE L*C*h*).
pub fn diverging_palette(h_neg: f64, h_pos: f64, s: f64, l: f64, n: usize)
                         -> Vec<RGBA<f64>> {
    let neg = Lch::new(l, s, h_neg).to_rgb();
    let pos = Lch::new(l, s, h_pos).to_rgb();
    let mid = RGBA { r: 0.95, g: 0.95, b: 0.95, a: 1. };
    let mut stops = light_palette(&neg, HALF_SAMPLES);
    stops.reverse();
    stops.push(mid);
    stops.extend(light_palette(&pos, HALF_SAMPLES));
    blend_palette(&stops, n)
}

/// Number of shades generated per base color to get about `n` colors.
/// The lightest one is discarded afterwards.
fn shades_per_base(n: i64) -> usize {
    let ceil = n.div_euclid(6) + (n.rem_euclid(6) != 0) as i64;
    (ceil + 1).max(0) as usize
}

/// Return a categorical colormap of `6 · ⌈n / 6⌉` colors made of
/// shades of the six base [`struct@COLORS`].  For `n ≤ 0` the colormap
/// is empty.
///
/// When `randomize` is true the colors are shuffled so that shades of
/// the same base color are not grouped together.  The customary call is
/// `get_colormap(DEFAULT_COLORS, DEFAULT_RANDOMIZE)`, i.e. 18 shuffled
/// colors.
///
/// # Example
///
/// ```
/// use urban_graphics::get_colormap;
/// assert_eq!(get_colormap(18, false).len(), 18);
/// assert_eq!(get_colormap(20, true).len(), 24);
/// assert!(get_colormap(0, false).is_empty());
/// ```
pub fn get_colormap(n: i64, randomize: bool) -> Colormap {
    get_colormap_with_rng(n, randomize, &mut rand::rng())
}

/// Same as [`get_colormap`] but draws the permutation from `rng`.
pub fn get_colormap_with_rng<R>(n: i64, randomize: bool, rng: &mut R)
                                -> Colormap
where R: Rng + ?Sized {
    let shades = shades_per_base(n);
    let mut cols: Vec<RGBA<f64>> = COLORS.iter()
        .flat_map(|c| light_palette(c, shades).into_iter().skip(1))
        .collect();
    if randomize {
        cols.shuffle(rng);
    }
    debug!(n, randomize, len = cols.len(), "expanded colormap");
    Colormap::new(cols)
}
