use isopix_color::{Color, ShadeBlender};
use isopix_geom::GridPos;

use crate::config::{ShadeBorders, ShadeFaces};
use crate::face::Face;

/// Derived colors for every visible face and the border line, each with a
/// shaded variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceColors {
    pub faces: [Color; 5],
    pub shaded: [Color; 5],
    pub line: Color,
    pub line_shaded: Color,
}

impl FaceColors {
    pub fn compute(
        base: Color,
        blender: &mut ShadeBlender,
        shade_faces: &ShadeFaces,
        shade_borders: &ShadeBorders,
    ) -> Self {
        let faces = Face::ALL.map(|f| blender.blend(shade_faces.ratio(f), base, None));
        let shaded = faces.map(|c| blender.blend(shade_faces.shadow, c, None));
        let line = blender.blend(shade_borders.top_front, base, None);
        let line_shaded = blender.blend(shade_faces.shadow, line, None);
        Self {
            faces,
            shaded,
            line,
            line_shaded,
        }
    }

    #[inline]
    pub fn face(&self, face: Face, shaded: bool) -> Color {
        if shaded {
            self.shaded[face.index()]
        } else {
            self.faces[face.index()]
        }
    }

    #[inline]
    pub fn line(&self, shaded: bool) -> Color {
        if shaded { self.line_shaded } else { self.line }
    }
}

/// A unit cube on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pos: GridPos,
    color: Color,
    colors: Option<FaceColors>,
}

impl Cube {
    pub fn new(color: Color, pos: GridPos) -> Self {
        Self {
            pos,
            color,
            colors: None,
        }
    }

    /// Fixed for the cube's lifetime; move a cube by removing and re-adding it.
    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Changes the base color and drops the derived face colors.
    pub fn set_color(&mut self, color: Color) {
        if color != self.color {
            log::debug!("cube at {:?}: color {} -> {}", self.pos, self.color, color);
        }
        self.color = color;
        self.colors = None;
    }

    #[inline]
    pub fn cached_colors(&self) -> Option<&FaceColors> {
        self.colors.as_ref()
    }

    pub fn invalidate_colors(&mut self) {
        self.colors = None;
    }

    /// Returns the face colors, computing them first if the cache is empty.
    pub fn colors_or_compute(
        &mut self,
        blender: &mut ShadeBlender,
        shade_faces: &ShadeFaces,
        shade_borders: &ShadeBorders,
    ) -> FaceColors {
        let base = self.color;
        *self
            .colors
            .get_or_insert_with(|| FaceColors::compute(base, blender, shade_faces, shade_borders))
    }
}
