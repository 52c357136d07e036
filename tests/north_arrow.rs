use float_cmp::assert_approx_eq;
use rgb::{RGB8, RGBA};
use urban_graphics::{north_arrow, Anchor, Aspect, Axis, Bounds,
                     DrawingRegion, NorthArrow, Region, Shape};

/// Records what is drawn in it.
#[derive(Debug)]
struct Axes {
    bounds: Bounds,
    shapes: Vec<Shape>,
    frame: bool,
    x_axis: bool,
    y_axis: bool,
    aspect: Aspect,
}

impl Region for Axes {
    fn add_shape(&mut self, shape: Shape) { self.shapes.push(shape) }

    fn set_frame_visible(&mut self, visible: bool) { self.frame = visible }

    fn set_axis_visible(&mut self, axis: Axis, visible: bool) {
        match axis {
            Axis::X => self.x_axis = visible,
            Axis::Y => self.y_axis = visible,
        }
    }

    fn set_aspect(&mut self, aspect: Aspect) { self.aspect = aspect }
}

struct Figure {
    position: Bounds,
    axes: Vec<Axes>,
}

impl Figure {
    fn new(position: Bounds) -> Self { Figure { position, axes: vec![] } }
}

impl DrawingRegion for Figure {
    type Region = Axes;

    fn bounds(&self) -> Bounds { self.position }

    fn add_sub_region(&mut self, bounds: Bounds) -> &mut Axes {
        self.axes.push(Axes { bounds, shapes: vec![], frame: true,
                              x_axis: true, y_axis: true,
                              aspect: Aspect::Auto });
        let last = self.axes.len() - 1;
        &mut self.axes[last]
    }
}

#[test]
fn default_arrow_upper_left() {
    let mut fig = Figure::new(Bounds::new(0., 0., 1., 1.));
    let ax = north_arrow(&mut fig, &NorthArrow::default());
    assert_approx_eq!(f64, ax.bounds.x, 0.);
    assert_approx_eq!(f64, ax.bounds.y, 0.98);
    assert_approx_eq!(f64, ax.bounds.width, 0.02);
    assert_approx_eq!(f64, ax.bounds.height, 0.02);
    assert_eq!(fig.axes.len(), 1);
}

#[test]
fn sub_region_is_bare() {
    let mut fig = Figure::new(Bounds::new(0.125, 0.11, 0.775, 0.77));
    north_arrow(&mut fig, &NorthArrow::default());
    let ax = &fig.axes[0];
    assert!(!ax.frame);
    assert!(!ax.x_axis);
    assert!(!ax.y_axis);
    assert_eq!(ax.aspect, Aspect::Equal);
}

#[test]
fn shapes_share_style_and_rotation() {
    let mut fig = Figure::new(Bounds::new(0., 0., 2., 1.));
    let opts = NorthArrow::default()
        .rotation(30.)
        .anchor(Anchor::LowerRight)
        .size(0.1)
        .pad(0.05)
        .color(RGB8::new(0, 0, 255))
        .line_width(1.5)
        .opacity(0.8);
    north_arrow(&mut fig, &opts);
    let ax = &fig.axes[0];
    assert_approx_eq!(f64, ax.bounds.x, 2. - 0.2 - 0.05, epsilon = 1e-12);
    assert_approx_eq!(f64, ax.bounds.y, 0.05, epsilon = 1e-12);

    let [face, edge] = &ax.shapes[..] else {
        panic!("expected two shapes, got {}", ax.shapes.len())
    };
    let blue = RGBA { r: 0., g: 0., b: 1., a: 1. };
    assert_eq!(face.fill, Some(blue));
    assert_eq!(edge.stroke, Some(blue));
    assert_eq!(edge.fill, None);
    assert_eq!(edge.line_width, 1.5);
    assert_eq!(face.opacity, 0.8);
    assert_eq!(edge.opacity, 0.8);
    assert_eq!(face.transform, edge.transform);
    // The tip is shared by both shapes.
    assert_eq!(face.transformed_vertices()[1], edge.transformed_vertices()[2]);
}

#[test]
fn arrows_accumulate() {
    let mut fig = Figure::new(Bounds::new(0., 0., 1., 1.));
    for loc in ["upper left", "center", "lower right"] {
        let opts = NorthArrow::default().loc(loc).unwrap();
        north_arrow(&mut fig, &opts);
    }
    assert_eq!(fig.axes.len(), 3);
    assert_approx_eq!(f64, fig.axes[1].bounds.x, 0.49, epsilon = 1e-12);
}

#[test]
fn bad_location_is_rejected() {
    assert!(NorthArrow::default().loc("top").is_err());
}
