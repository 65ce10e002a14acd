//! Map composition
//!
//! The `Map` is a plain description of what the page will show: base layers, overlays,
//! initial view, layer control and legend.  It is built once both datasets are there and
//! rendered by `render`.
//!

use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};
use tracing::{info, trace};

use quakemap_formats::{LatLon, PlateAnnotation, QuakeAnnotation, Rgb, Transformed, depth_bands};

use crate::{ConfigError, Layers, TileConfig};

/// Mapbox styles API, Leaflet fills in the placeholders.
pub const TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const TILE_ATTRIBUTION: &str = r#"Map data &copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors, Imagery © <a href="https://www.mapbox.com/">Mapbox</a>"#;

/// Initial view
pub const CENTER: LatLon = LatLon { lat: 28., lon: 0. };
pub const ZOOM: u8 = 3;

pub const QUAKES_OVERLAY: &str = "Quakes";
pub const PLATES_OVERLAY: &str = "Tectonic Plates borders";
pub const LEGEND_TITLE: &str = "Earthquake Depth";

/// The three background choices, only one is shown at a time.
///
#[derive(Copy, Clone, Debug, Default, EnumIter, Eq, PartialEq, Serialize, strum::Display)]
pub enum BaseLayer {
    #[default]
    Satellite,
    Grayscale,
    Outdoors,
}

impl BaseLayer {
    /// Mapbox style id
    ///
    pub fn style(&self) -> &'static str {
        match self {
            BaseLayer::Satellite => "mapbox/satellite-v9",
            BaseLayer::Grayscale => "mapbox/light-v10",
            BaseLayer::Outdoors => "mapbox/outdoors-v11",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TileLayer {
    pub name: String,
    pub id: String,
    pub url: String,
    pub attribution: String,
    pub access_token: String,
    pub max_zoom: u8,
    pub tile_size: u32,
    pub zoom_offset: i8,
}

impl TileLayer {
    fn new(layer: BaseLayer, access_token: &str) -> Self {
        TileLayer {
            name: layer.to_string(),
            id: layer.style().to_string(),
            url: TILE_URL.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
            access_token: access_token.to_string(),
            max_zoom: 18,
            tile_size: 512,
            zoom_offset: -1,
        }
    }
}

/// A group of annotations that can be toggled on & off.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlay<T> {
    pub name: String,
    pub visible: bool,
    pub items: Vec<T>,
    /// Malformed features left out
    pub skipped: usize,
}

impl<T> Overlay<T> {
    fn new(name: &str, data: Transformed<T>) -> Self {
        let skipped = data.skipped();
        Overlay {
            name: name.to_string(),
            visible: true,
            items: data.items,
            skipped,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlays {
    pub quakes: Overlay<QuakeAnnotation>,
    pub plates: Overlay<PlateAnnotation>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayerControl {
    pub collapsed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub position: String,
    pub entries: Vec<LegendEntry>,
}

impl Legend {
    /// Depth legend, colors from the same scale as the markers.
    ///
    pub fn depth() -> Self {
        let entries = depth_bands()
            .into_iter()
            .map(|b| LegendEntry {
                label: b.label(),
                color: b.color,
            })
            .collect();
        Legend {
            title: LEGEND_TITLE.to_string(),
            position: "bottomright".to_string(),
            entries,
        }
    }
}

/// Everything needed to draw the page.
///
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Map {
    pub center: LatLon,
    pub zoom: u8,
    pub base_layers: Vec<TileLayer>,
    /// Name of the base layer shown first
    pub base: String,
    pub overlays: Overlays,
    pub control: LayerControl,
    pub legend: Legend,
}

/// Builds a `Map`, it can only exist with a usable tile configuration.
///
#[derive(Debug)]
pub struct MapComposer {
    tiles: TileConfig,
}

impl MapComposer {
    #[tracing::instrument]
    pub fn new(tiles: &TileConfig) -> Result<Self, ConfigError> {
        trace!("composer::new");

        tiles.key()?;
        Ok(MapComposer {
            tiles: tiles.clone(),
        })
    }

    /// Assemble the map from both transformed datasets.
    ///
    #[tracing::instrument(skip_all)]
    pub fn compose(&self, layers: Layers) -> Map {
        // Checked in `new()`
        let key = self.tiles.key().unwrap_or_default();

        let base_layers = BaseLayer::iter().map(|l| TileLayer::new(l, key)).collect();
        let map = Map {
            center: CENTER,
            zoom: ZOOM,
            base_layers,
            base: BaseLayer::default().to_string(),
            overlays: Overlays {
                quakes: Overlay::new(QUAKES_OVERLAY, layers.quakes),
                plates: Overlay::new(PLATES_OVERLAY, layers.plates),
            },
            control: LayerControl { collapsed: false },
            legend: Legend::depth(),
        };
        info!(
            quakes = map.overlays.quakes.items.len(),
            plates = map.overlays.plates.items.len(),
            skipped = map.overlays.quakes.skipped + map.overlays.plates.skipped,
            "map composed"
        );
        map
    }
}
