use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use isopix_color::Color;
use isopix_geom::GridPos;

use crate::config::ViewConfig;
use crate::cube::Cube;
use crate::scene::Scene;

// Scene file layout:
//   [view]            optional ViewConfig overrides
//   [[cubes]]         color = "#rrggbb" | "rgb(r,g,b)" | [r, g, b]
//                     pos = [x, y, z]
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub cubes: Vec<CubeDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CubeDef {
    pub color: Color,
    pub pos: [f32; 3],
}

impl SceneFile {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn into_scene(self) -> Scene {
        Scene::with_cubes(
            self.view,
            self.cubes
                .into_iter()
                .map(|d| Cube::new(d.color, GridPos::from(d.pos))),
        )
    }
}

pub fn load_scene_from_path(path: &Path) -> Result<Scene, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let file = SceneFile::from_toml_str(&s)?;
    log::info!(
        "loaded scene {} ({} cube(s), shadow mode {})",
        path.display(),
        file.cubes.len(),
        file.view.shadow_mode.as_str()
    );
    Ok(file.into_scene())
}
