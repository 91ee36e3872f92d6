use std::f32::consts::TAU;

use isopix_color::{Color, ShadeBlender};
use isopix_geom::{GridBounds, GridPos};

use crate::config::ViewConfig;
use crate::cube::Cube;
use crate::face::FaceSet;
use crate::octant::Octant;
use crate::shadow::{ShadowMap, ShadowMode};

/// Cubes plus the view they are rendered with.
///
/// Cubes keep insertion order; several cubes may share a position, and
/// position lookups hit the first one added.
pub struct Scene {
    pub(crate) cubes: Vec<Cube>,
    pub(crate) view: ViewConfig,
    pub(crate) blender: ShadeBlender,
    // Indexed like `cubes`; replaced by every render pass.
    pub(crate) shadows: ShadowMap,
    bounds: Option<GridBounds>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Scene {
    pub fn new(view: ViewConfig) -> Self {
        Self {
            cubes: Vec::new(),
            view,
            blender: ShadeBlender::new(),
            shadows: ShadowMap::default(),
            bounds: None,
        }
    }

    pub fn with_cubes(view: ViewConfig, cubes: impl IntoIterator<Item = Cube>) -> Self {
        let mut scene = Self::new(view);
        for c in cubes {
            scene.add_cube(c);
        }
        scene
    }

    #[inline]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    #[inline]
    pub fn view(&self) -> &ViewConfig {
        &self.view
    }

    /// Replaces the view. Shade ratios may have changed, so every cube's
    /// derived colors are dropped.
    pub fn set_view(&mut self, view: ViewConfig) {
        self.view = view;
        for c in &mut self.cubes {
            c.invalidate_colors();
        }
        self.shadows = ShadowMap::default();
    }

    pub fn add_cube(&mut self, cube: Cube) {
        let pos = cube.pos();
        self.cubes.push(cube);
        self.shadows = ShadowMap::default();
        let bounds = self
            .bounds
            .get_or_insert_with(|| GridBounds::new(pos, pos));
        bounds.include(pos);
        let extent = bounds.extent();
        if extent >= self.view.max_bounds {
            log::warn!(
                "scene extent {} reaches max_bounds {}; depth order may be wrong",
                extent,
                self.view.max_bounds
            );
        }
    }

    /// Removes the first cube at exactly `(x, y, z)`. No-op if none matches.
    pub fn remove_cube_at(&mut self, x: f32, y: f32, z: f32) -> Option<Cube> {
        let idx = self.index_at(x, y, z)?;
        self.shadows = ShadowMap::default();
        let cube = self.cubes.remove(idx);
        self.bounds = GridBounds::from_points(self.cubes.iter().map(Cube::pos));
        Some(cube)
    }

    pub fn cube_at(&self, x: f32, y: f32, z: f32) -> Option<&Cube> {
        self.index_at(x, y, z).map(|i| &self.cubes[i])
    }

    pub fn cube_at_mut(&mut self, x: f32, y: f32, z: f32) -> Option<&mut Cube> {
        let i = self.index_at(x, y, z)?;
        self.cubes.get_mut(i)
    }

    fn index_at(&self, x: f32, y: f32, z: f32) -> Option<usize> {
        let p = GridPos::new(x, y, z);
        self.cubes.iter().position(|c| c.pos() == p)
    }

    /// Recolors the first cube at `(x, y, z)`; returns false if none matches.
    pub fn set_cube_color_at(&mut self, x: f32, y: f32, z: f32, color: Color) -> bool {
        match self.cube_at_mut(x, y, z) {
            Some(c) => {
                c.set_color(color);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.view.rotation
    }

    /// Stored as given; only the octant lookup wraps it.
    pub fn set_rotation(&mut self, angle: f32) {
        self.view.rotation = angle;
    }

    /// Adds `delta` and wraps the result into `[0, 2π)`.
    pub fn rotate_by(&mut self, delta: f32) {
        self.view.rotation = (self.view.rotation + delta).rem_euclid(TAU);
    }

    #[inline]
    pub fn octant(&self) -> Octant {
        Octant::from_rotation(self.view.rotation)
    }

    #[inline]
    pub fn shadow_mode(&self) -> ShadowMode {
        self.view.shadow_mode
    }

    pub fn set_shadow_mode(&mut self, mode: ShadowMode) {
        self.view.shadow_mode = mode;
    }

    pub fn set_debug(&mut self, on: bool) {
        self.view.debug = on;
    }

    /// Shadow map from the last render pass, indexed like [`Scene::cubes`].
    #[inline]
    pub fn shadows(&self) -> &ShadowMap {
        &self.shadows
    }

    pub fn shadowed_faces_at(&self, x: f32, y: f32, z: f32) -> FaceSet {
        self.index_at(x, y, z)
            .map(|i| self.shadows.get(i))
            .unwrap_or_default()
    }

    pub fn positions(&self) -> Vec<GridPos> {
        self.cubes.iter().map(Cube::pos).collect()
    }

    /// Grown on every insert, rebuilt on removal.
    #[inline]
    pub fn bounds(&self) -> Option<GridBounds> {
        self.bounds
    }

    /// Number of memoized color blends.
    pub fn blend_cache_len(&self) -> usize {
        self.blender.len()
    }
}
