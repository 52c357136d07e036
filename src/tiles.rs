//! Mapbox basemap tiles styled to match the palette.

use std::{fmt, str::FromStr};
use tracing::debug;
use crate::error::{Error, Result};

const ATTRIBUTION: &str = "(C) Mapbox (C) OpenStreetMap contributors";

/// The available tile styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileStyle {
    /// Road network only.
    Roads,
    /// Place labels only.
    Labels,
    /// Background without roads nor labels.
    Background,
}

impl TileStyle {
    /// Mapbox style identifier.
    fn style_id(self) -> &'static str {
        match self {
            TileStyle::Roads => "ckl6jkuwe3uxa17mrhnp78e62",
            TileStyle::Labels => "ckl6n87ha0tol17o61wxhfnbo",
            TileStyle::Background => "ckl6okytj5fg317mvpgc9tc6k",
        }
    }

    fn display_name(self) -> &'static str {
        match self {
            TileStyle::Roads => "MapBox Roads",
            TileStyle::Labels => "MapBox Labels",
            TileStyle::Background => "MapBox Background",
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            TileStyle::Roads => "roads",
            TileStyle::Labels => "labels",
            TileStyle::Background => "background",
        }
    }
}

impl FromStr for TileStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "roads" => Ok(TileStyle::Roads),
            "labels" => Ok(TileStyle::Labels),
            "background" => Ok(TileStyle::Background),
            _ => Err(Error::invalid("tiles", s)),
        }
    }
}

impl fmt::Display for TileStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Description of a tile source, to be handed to a map tile client.
#[derive(Clone, PartialEq, Eq)]
pub struct TileProvider {
    /// URL template with `{z}`, `{x}`, `{y}` and `{accessToken}`
    /// placeholders.
    pub url: String,
    pub attribution: String,
    pub access_token: String,
    pub name: String,
}

// The token is a credential: keep it out of debug output and logs.
impl fmt::Debug for TileProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileProvider")
            .field("url", &self.url)
            .field("attribution", &self.attribution)
            .field("access_token", &"***")
            .field("name", &self.name)
            .finish()
    }
}

impl TileProvider {
    /// Build the provider of the given `style` authenticated by `token`.
    pub fn new(style: TileStyle, token: &str) -> Self {
        TileProvider {
            url: format!("https://api.mapbox.com/styles/v1/martinfleis/{}\
                          /tiles/256/{{z}}/{{x}}/{{y}}@2x\
                          ?access_token={{accessToken}}",
                         style.style_id()),
            attribution: ATTRIBUTION.to_string(),
            access_token: token.to_string(),
            name: style.display_name().to_string(),
        }
    }

    /// Return the URL of the tile at column `x`, row `y` and zoom `z`.
    ///
    /// # Example
    ///
    /// ```
    /// use urban_graphics::{TileProvider, TileStyle};
    /// let p = TileProvider::new(TileStyle::Labels, "abc");
    /// assert!(p.build_url(1, 2, 3).ends_with("/3/1/2@2x?access_token=abc"));
    /// ```
    pub fn build_url(&self, x: u32, y: u32, z: u32) -> String {
        self.url
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
            .replace("{z}", &z.to_string())
            .replace("{accessToken}", &self.access_token)
    }
}

/// Return the Mapbox tile provider named `tiles` (`"roads"`,
/// `"labels"` or `"background"`) using the access `token`.
///
/// # Example
///
/// ```
/// use urban_graphics::get_tiles;
/// let roads = get_tiles("roads", "TOKEN").unwrap();
/// assert_eq!(roads.name, "MapBox Roads");
/// assert!(get_tiles("satellite", "TOKEN").is_err());
/// ```
pub fn get_tiles(tiles: &str, token: &str) -> Result<TileProvider> {
    let style: TileStyle = tiles.parse()?;
    debug!(%style, "tile provider");
    Ok(TileProvider::new(style, token))
}
