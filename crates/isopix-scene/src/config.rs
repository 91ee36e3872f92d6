use serde::Deserialize;
use std::error::Error;

use crate::face::Face;
use crate::shadow::ShadowMode;

/// View parameters for a scene. Every field has a default so a config file
/// only needs the values it changes.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub origin: Origin,
    #[serde(alias = "cubeSize")]
    pub cube_size: f32,
    pub crush: f32,
    #[serde(alias = "crushZ")]
    pub crush_z: f32,
    pub rotation: f32,
    #[serde(alias = "shadeFaces")]
    pub shade_faces: ShadeFaces,
    // Derived from `shade_faces` when absent, see `ViewConfig::shade_borders`.
    #[serde(alias = "shadeBorders")]
    pub shade_borders: Option<ShadeBorders>,
    #[serde(alias = "shadowMode")]
    pub shadow_mode: ShadowMode,
    #[serde(alias = "maxBounds")]
    pub max_bounds: f32,
    pub debug: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            cube_size: 25.0,
            crush: 0.5,
            crush_z: 0.8,
            rotation: 0.0,
            shade_faces: ShadeFaces::default(),
            shade_borders: None,
            shadow_mode: ShadowMode::None,
            max_bounds: 1000.0,
            debug: false,
        }
    }
}

impl ViewConfig {
    /// Border ratios, falling back to `(top + front) / 2 + 0.2`.
    pub fn shade_borders(&self) -> ShadeBorders {
        self.shade_borders.unwrap_or(ShadeBorders {
            top_front: (self.shade_faces.top + self.shade_faces.front) / 2.0 + 0.2,
        })
    }

    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }
}

/// Screen position of grid origin `(0, 0, 0)`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 400.0, y: 300.0 }
    }
}

/// Signed shade ratio per face; negative darkens, positive lightens.
/// `shadow` is applied on top of a face color when that face is shaded.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShadeFaces {
    pub top: f32,
    pub front: f32,
    pub left: f32,
    pub right: f32,
    pub back: f32,
    pub shadow: f32,
}

impl Default for ShadeFaces {
    fn default() -> Self {
        Self {
            top: 0.0,
            front: -0.05,
            left: -0.2,
            right: -0.3,
            back: -0.5,
            shadow: -0.4,
        }
    }
}

impl ShadeFaces {
    #[inline]
    pub fn ratio(&self, face: Face) -> f32 {
        match face {
            Face::Top => self.top,
            Face::Front => self.front,
            Face::Left => self.left,
            Face::Right => self.right,
            Face::Back => self.back,
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct ShadeBorders {
    #[serde(alias = "topFront")]
    pub top_front: f32,
}
