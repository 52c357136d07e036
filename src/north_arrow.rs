//! North arrow decoration.
//!
//! The plotting backend is abstracted by [`DrawingRegion`] (something
//! that can host sub-regions, e.g. a figure) and [`Region`] (a
//! sub-region shapes can be drawn in, e.g. an axes).  The arrow is drawn
//! in its own sub-region placed at an [`Anchor`] of the host.

use std::{fmt, str::FromStr};
use lyon_path::{Path, geom::Angle, math::{point, Point},
                geom::euclid::{Transform2D, UnknownUnit}};
use rgb::RGBA;
use tracing::debug;
use crate::{RGBColor, error::{Error, Result}};

/// Affine transform applied to the vertices of a [`Shape`].
pub type ShapeTransform = Transform2D<f32, UnknownUnit, UnknownUnit>;

/// A rectangle given by its lower-left corner and its extent, in the
/// coordinates of the host region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Bounds { x, y, width, height }
    }

    /// Center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Align { Start, Center, End }

impl Align {
    /// Position of a segment of length `len` inside `[x0, x0 + extent]`.
    fn place(self, x0: f64, extent: f64, len: f64, pad: f64) -> f64 {
        match self {
            Align::Start => x0 + pad,
            // Centered on the midpoint, for the edge-center anchors too.
            Align::Center => x0 + 0.5 * (extent - len),
            Align::End => x0 + extent - len - pad,
        }
    }
}

/// Location of a decoration inside its host region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Anchor {
    LowerLeft,
    LowerCenter,
    LowerRight,
    CenterLeft,
    Center,
    CenterRight,
    #[default]
    UpperLeft,
    UpperCenter,
    UpperRight,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::LowerLeft, Anchor::LowerCenter, Anchor::LowerRight,
        Anchor::CenterLeft, Anchor::Center, Anchor::CenterRight,
        Anchor::UpperLeft, Anchor::UpperCenter, Anchor::UpperRight,
    ];

    /// Horizontal and vertical alignment.
    fn align(self) -> (Align, Align) {
        use Align::*;
        match self {
            Anchor::LowerLeft => (Start, Start),
            Anchor::LowerCenter => (Center, Start),
            Anchor::LowerRight => (End, Start),
            Anchor::CenterLeft => (Start, Center),
            Anchor::Center => (Center, Center),
            Anchor::CenterRight => (End, Center),
            Anchor::UpperLeft => (Start, End),
            Anchor::UpperCenter => (Center, End),
            Anchor::UpperRight => (End, End),
        }
    }

    /// Return the box of a decoration whose sides are `size` times the
    /// ones of `bounds`, placed at this anchor.  Boxes aligned on an
    /// edge are moved `pad` away from it.
    pub fn place(self, bounds: Bounds, size: f64, pad: f64) -> Bounds {
        let width = bounds.width * size;
        let height = bounds.height * size;
        let (h, v) = self.align();
        Bounds { x: h.place(bounds.x, bounds.width, width, pad),
                 y: v.place(bounds.y, bounds.height, height, pad),
                 width, height }
    }

    fn keyword(self) -> &'static str {
        match self {
            Anchor::LowerLeft => "lower left",
            Anchor::LowerCenter => "lower center",
            Anchor::LowerRight => "lower right",
            Anchor::CenterLeft => "center left",
            Anchor::Center => "center",
            Anchor::CenterRight => "center right",
            Anchor::UpperLeft => "upper left",
            Anchor::UpperCenter => "upper center",
            Anchor::UpperRight => "upper right",
        }
    }
}

/// Parse legend-like locations such as `"upper left"`.  Case is
/// ignored and words may also be separated by `-` or `_`.  `"best"` is
/// an alias of `"lower left"` and `"right"` of `"center right"`.
impl FromStr for Anchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let loc = s.trim().to_lowercase().replace(['-', '_'], " ");
        match loc.as_str() {
            "lower left" | "best" => Ok(Anchor::LowerLeft),
            "lower center" => Ok(Anchor::LowerCenter),
            "lower right" => Ok(Anchor::LowerRight),
            "center left" => Ok(Anchor::CenterLeft),
            "center" => Ok(Anchor::Center),
            "center right" | "right" => Ok(Anchor::CenterRight),
            "upper left" => Ok(Anchor::UpperLeft),
            "upper center" => Ok(Anchor::UpperCenter),
            "upper right" => Ok(Anchor::UpperRight),
            _ => Err(Error::invalid("loc", s)),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Return the box, in the units of `bounds`, of a decoration at the
/// location `loc` (see [`Anchor`]) whose sides are the fraction `size`
/// of the ones of `bounds`.
///
/// # Example
///
/// ```
/// use urban_graphics::{Bounds, resolve_anchor};
/// let b = resolve_anchor(Bounds::new(0., 0., 1., 1.), "lower right", 0.25, 0.)?;
/// assert_eq!((b.x, b.y, b.width), (0.75, 0., 0.25));
/// # Ok::<(), urban_graphics::Error>(())
/// ```
pub fn resolve_anchor(bounds: Bounds, loc: &str, size: f64, pad: f64)
                      -> Result<Bounds> {
    Ok(loc.parse::<Anchor>()?.place(bounds, size, pad))
}

/// A polygon with its style, in local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub vertices: Vec<Point>,
    /// `None` leaves the polygon unfilled.
    pub fill: Option<RGBA<f64>>,
    /// `None` leaves the outline undrawn.
    pub stroke: Option<RGBA<f64>>,
    pub line_width: f32,
    pub opacity: f32,
    pub transform: ShapeTransform,
}

impl Shape {
    /// The vertices once the transform is applied.
    pub fn transformed_vertices(&self) -> Vec<Point> {
        self.vertices.iter().map(|&p| self.transform.transform_point(p))
            .collect()
    }

    /// The closed outline of the polygon, transformed.
    pub fn to_path(&self) -> Path {
        let mut builder = Path::builder();
        if let Some((&first, rest)) = self.vertices.split_first() {
            builder.begin(first);
            for &p in rest {
                builder.line_to(p);
            }
            builder.close();
        }
        builder.build().transformed(&self.transform)
    }
}

/// The two shapes of a north arrow: a filled half and the outline of
/// the whole arrow.  The arrow points up (towards +y) before rotation.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowGlyph {
    pub face: Shape,
    pub edge: Shape,
}

impl ArrowGlyph {
    const FACE: [(f32, f32); 3] = [(0., 0.), (0., 3.), (-1.5, -0.5)];
    const EDGE: [(f32, f32); 4] = [(0., 0.), (1.5, -0.5), (0., 3.),
                                   (-1.5, -0.5)];

    /// Build the arrow rotated counter-clockwise by `rotation` degrees
    /// around the local origin.
    pub fn new(rotation: f32, color: RGBA<f64>, line_width: f32,
               opacity: f32) -> Self {
        let transform = ShapeTransform::rotation(Angle::degrees(rotation));
        let vertices = |pts: &[(f32, f32)]| -> Vec<Point> {
            pts.iter().map(|&(x, y)| point(x, y)).collect()
        };
        let face = Shape { vertices: vertices(&Self::FACE),
                           fill: Some(color), stroke: None,
                           line_width: 0., opacity, transform };
        let edge = Shape { vertices: vertices(&Self::EDGE),
                           fill: None, stroke: Some(color),
                           line_width, opacity, transform };
        ArrowGlyph { face, edge }
    }
}

/// Axis of a [`Region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis { X, Y }

/// Scaling of the data units of a [`Region`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    /// Units are stretched to fill the region.
    Auto,
    /// One unit has the same length along both axes and the limits
    /// fit the data tightly.
    Equal,
}

/// A drawing area (e.g. an axes) shapes can be added to.
pub trait Region {
    /// Draw `shape`, in data coordinates.
    fn add_shape(&mut self, shape: Shape);

    /// Show or hide the frame around the region.
    fn set_frame_visible(&mut self, visible: bool);

    /// Show or hide the ticks and labels of `axis`.
    fn set_axis_visible(&mut self, axis: Axis, visible: bool);

    /// Set how data units are scaled along both axes.
    fn set_aspect(&mut self, aspect: Aspect);
}

/// A region able to host sub-regions (e.g. a figure).
pub trait DrawingRegion {
    type Region: Region;

    /// Current bounds, in the units sub-regions are positioned with.
    fn bounds(&self) -> Bounds;

    /// Create a sub-region occupying `bounds` and return it.
    fn add_sub_region(&mut self, bounds: Bounds) -> &mut Self::Region;
}

/// Options of [`north_arrow`].
///
/// # Example
///
/// ```
/// use urban_graphics::{Anchor, NorthArrow};
/// let opts = NorthArrow::default().rotation(15.).loc("lower right")?
///     .size(0.05).pad(0.01);
/// assert_eq!(opts.anchor, Anchor::LowerRight);
/// # Ok::<(), urban_graphics::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NorthArrow {
    /// Counter-clockwise rotation in degrees (for rotated maps).
    pub rotation: f32,
    pub anchor: Anchor,
    /// Side of the arrow box as a fraction of the host sides.
    pub size: f64,
    pub line_width: f32,
    pub color: RGBA<f64>,
    /// Distance from the host edges.
    pub pad: f64,
    pub opacity: f32,
}

impl Default for NorthArrow {
    fn default() -> Self {
        NorthArrow {
            rotation: 0.,
            anchor: Anchor::UpperLeft,
            size: 0.02,
            line_width: 3.,
            color: RGBA { r: 0., g: 0., b: 0., a: 1. },
            pad: 0.,
            opacity: 1.,
        }
    }
}

impl NorthArrow {
    /// Counter-clockwise rotation of the arrow, in degrees.
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Where the arrow sits in the host.
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the anchor from its name, see [`Anchor`].
    pub fn loc(self, loc: &str) -> Result<Self> {
        Ok(self.anchor(loc.parse()?))
    }

    /// Side of the arrow box as a fraction of the host sides.
    pub fn size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Width of the outline.
    pub fn line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Color of both the fill and the outline.
    pub fn color(mut self, color: impl RGBColor) -> Self {
        self.color = color.to_rgba();
        self
    }

    /// Distance kept from the host edges the arrow is aligned on.
    pub fn pad(mut self, pad: f64) -> Self {
        self.pad = pad;
        self
    }

    /// Opacity in \[0, 1\].
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// The glyph drawn with these options.
    pub fn glyph(&self) -> ArrowGlyph {
        ArrowGlyph::new(self.rotation, self.color, self.line_width,
                        self.opacity)
    }
}

/// Add a north arrow to `host` and return the sub-region holding it.
///
/// The sub-region has no frame, no visible axes and equal aspect.
pub fn north_arrow<'a, H>(host: &'a mut H, opts: &NorthArrow)
                          -> &'a mut H::Region
where H: DrawingRegion {
    let bounds = opts.anchor.place(host.bounds(), opts.size, opts.pad);
    debug!(anchor = %opts.anchor, x = bounds.x, y = bounds.y,
           width = bounds.width, height = bounds.height,
           rotation = opts.rotation, "north arrow");
    let ArrowGlyph { face, edge } = opts.glyph();
    let region = host.add_sub_region(bounds);
    region.add_shape(face);
    region.add_shape(edge);
    region.set_aspect(Aspect::Equal);
    region.set_frame_visible(false);
    region.set_axis_visible(Axis::X, false);
    region.set_axis_visible(Axis::Y, false);
    region
}


#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::{approx_eq, assert_approx_eq};

    const UNIT: Bounds = Bounds { x: 0., y: 0., width: 1., height: 1. };

    fn assert_bounds_eq(b: Bounds, x: f64, y: f64, w: f64, h: f64) {
        assert!(approx_eq!(f64, b.x, x, epsilon = 1e-12)
                && approx_eq!(f64, b.y, y, epsilon = 1e-12)
                && approx_eq!(f64, b.width, w, epsilon = 1e-12)
                && approx_eq!(f64, b.height, h, epsilon = 1e-12),
                "{b:?} ≠ ({x}, {y}, {w}, {h})");
    }

    #[test]
    fn upper_left() {
        let b = resolve_anchor(UNIT, "upper left", 0.02, 0.).unwrap();
        assert_bounds_eq(b, 0., 0.98, 0.02, 0.02);
    }

    #[test]
    fn center_is_centered() {
        let b = resolve_anchor(UNIT, "center", 0.02, 0.).unwrap();
        let (cx, cy) = b.center();
        assert_approx_eq!(f64, cx, 0.5, epsilon = 1e-12);
        assert_approx_eq!(f64, cy, 0.5, epsilon = 1e-12);
        assert_approx_eq!(f64, b.width, 0.02);
        assert_approx_eq!(f64, b.height, 0.02);
    }

    #[test]
    fn unknown_location() {
        assert_eq!(resolve_anchor(UNIT, "bogus", 0.02, 0.),
                   Err(Error::InvalidArgument { param: "loc",
                                                value: "bogus".into() }));
        assert!("upper".parse::<Anchor>().is_err());
        assert!("".parse::<Anchor>().is_err());
    }

    #[test]
    fn keywords() {
        for a in Anchor::ALL {
            assert_eq!(a.to_string().parse::<Anchor>(), Ok(a));
        }
        assert_eq!("BEST".parse::<Anchor>(), Ok(Anchor::LowerLeft));
        assert_eq!("right".parse::<Anchor>(), Ok(Anchor::CenterRight));
        assert_eq!("Upper-Right".parse::<Anchor>(), Ok(Anchor::UpperRight));
        assert_eq!("lower_center".parse::<Anchor>(), Ok(Anchor::LowerCenter));
    }

    #[test]
    fn every_anchor_with_padding() {
        let host = Bounds::new(0.1, 0.2, 0.8, 0.6);
        let (w, h) = (0.08, 0.06);
        let pad = 0.01;
        let expected = [
            (Anchor::LowerLeft, 0.11, 0.21),
            (Anchor::LowerCenter, 0.46, 0.21),
            (Anchor::LowerRight, 0.81, 0.21),
            (Anchor::CenterLeft, 0.11, 0.47),
            (Anchor::Center, 0.46, 0.47),
            (Anchor::CenterRight, 0.81, 0.47),
            (Anchor::UpperLeft, 0.11, 0.73),
            (Anchor::UpperCenter, 0.46, 0.73),
            (Anchor::UpperRight, 0.81, 0.73),
        ];
        for (a, x, y) in expected {
            assert_bounds_eq(a.place(host, 0.1, pad), x, y, w, h);
        }
    }

    #[test]
    fn edge_center_anchors_are_centered() {
        let host = Bounds::new(0., 0., 2., 1.);
        for a in [Anchor::LowerCenter, Anchor::UpperCenter] {
            let b = a.place(host, 0.1, 0.05);
            assert_approx_eq!(f64, b.center().0, 1., epsilon = 1e-12);
        }
        for a in [Anchor::CenterLeft, Anchor::CenterRight] {
            let b = a.place(host, 0.1, 0.05);
            assert_approx_eq!(f64, b.center().1, 0.5, epsilon = 1e-12);
        }
        // Padding only moves the box away from the edge it is aligned on.
        let b = Anchor::UpperCenter.place(host, 0.1, 0.05);
        assert_approx_eq!(f64, b.y, 1. - 0.1 - 0.05, epsilon = 1e-12);
    }

    #[test]
    fn full_turn_is_identity() {
        let g0 = ArrowGlyph::new(0., RGBA { r: 0., g: 0., b: 0., a: 1. },
                                 3., 1.);
        let g360 = ArrowGlyph::new(360., RGBA { r: 0., g: 0., b: 0., a: 1. },
                                   3., 1.);
        for (s0, s1) in [(&g0.face, &g360.face), (&g0.edge, &g360.edge)] {
            for (p, q) in s0.transformed_vertices().into_iter()
                .zip(s1.transformed_vertices()) {
                assert_approx_eq!(f32, p.x, q.x, epsilon = 1e-5);
                assert_approx_eq!(f32, p.y, q.y, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn quarter_turn_points_west() {
        let g = NorthArrow::default().rotation(90.).glyph();
        let tip = g.face.transformed_vertices()[1];
        assert_approx_eq!(f32, tip.x, -3., epsilon = 1e-5);
        assert_approx_eq!(f32, tip.y, 0., epsilon = 1e-5);
    }

    #[test]
    fn glyph_style() {
        let opts = NorthArrow::default().color(rgb::RGB8::new(255, 0, 0))
            .line_width(2.).opacity(0.5);
        let g = opts.glyph();
        assert_eq!(g.face.vertices.len(), 3);
        assert_eq!(g.edge.vertices.len(), 4);
        assert_eq!(g.face.fill, Some(RGBA { r: 1., g: 0., b: 0., a: 1. }));
        assert_eq!(g.face.stroke, None);
        assert_eq!(g.edge.fill, None);
        assert_eq!(g.edge.line_width, 2.);
        assert_eq!(g.edge.opacity, 0.5);
        assert!(g.edge.to_path().iter().count() >= 5);
    }
}
