//! Colors of the spatial signature classification.

use std::fmt;
use indexmap::IndexMap;
use rgb::RGBA;
use crate::palette::get_colormap;

/// A signature classification code: a major class (cluster) and a minor
/// class (sub-cluster), written `major_minor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassCode {
    pub major: u8,
    pub minor: u8,
}

impl ClassCode {
    pub const fn new(major: u8, minor: u8) -> Self { ClassCode { major, minor } }
}

impl fmt::Display for ClassCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.major, self.minor)
    }
}

/// Name shared by all outlier classes.
pub const OUTLIER: &str = "outlier";

/// Signature classes: code, name and index in `get_colormap(20, false)`.
///
/// The four outlier codes deliberately share one name and one color
/// index; they are drawn identically on maps.
pub const SIGNATURES: [(ClassCode, &str, usize); 20] = [
    (ClassCode::new(0, 0), "Countryside agriculture", 17),
    (ClassCode::new(1, 0), "Accessible suburbia", 9),
    (ClassCode::new(2, 0), "Dense residential neighbourhoods", 10),
    (ClassCode::new(2, 1), "Connected residential neighbourhoods", 21),
    (ClassCode::new(2, 2), "Dense urban neighbourhoods", 11),
    (ClassCode::new(3, 0), "Open sprawl", 5),
    (ClassCode::new(4, 0), "Wild countryside", 14),
    (ClassCode::new(5, 0), "Warehouse/Park land", 6),
    (ClassCode::new(6, 0), "Gridded residential quarters", 22),
    (ClassCode::new(7, 0), "Urban buffer", 13),
    (ClassCode::new(8, 0), "Disconnected suburbia", 18),
    (ClassCode::new(9, 0), "Local urbanity", 7),
    (ClassCode::new(9, 1), "Concentrated urbanity", 2),
    (ClassCode::new(9, 2), "Regional urbanity", 23),
    (ClassCode::new(9, 3), OUTLIER, 0),
    (ClassCode::new(9, 4), "Metropolitan urbanity", 3),
    (ClassCode::new(9, 5), "Hyper concentrated urbanity", 1),
    (ClassCode::new(9, 6), OUTLIER, 0),
    (ClassCode::new(9, 7), OUTLIER, 0),
    (ClassCode::new(9, 8), OUTLIER, 0),
];

/// Return the legend colors of the signature classes, in table order.
///
/// Keys are the codes (`"9_1"`) or, when `use_names` is true, the class
/// names.  In the latter case all outlier codes collapse into a single
/// [`OUTLIER`] entry.
///
/// # Example
///
/// ```
/// use urban_graphics::named_legend;
/// assert_eq!(named_legend(false).len(), 20);
/// assert_eq!(named_legend(true).len(), 17);
/// assert_eq!(named_legend(false)["9_3"], named_legend(true)["outlier"]);
/// ```
pub fn named_legend(use_names: bool) -> IndexMap<String, RGBA<f64>> {
    let cmap = get_colormap(20, false);
    let colors = cmap.colors::<RGBA<f64>>();
    SIGNATURES.iter().map(|&(code, name, i)| {
        let key = if use_names { name.to_string() } else { code.to_string() };
        (key, colors[i])
    }).collect()
}
