use isopix_geom::GridPos;
use serde::Deserialize;

use crate::face::{Face, FaceSet};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowMode {
    #[default]
    #[serde(alias = "NONE")]
    None,
    /// A cube gets its top shaded when another cube in the same column has a
    /// smaller z.
    #[serde(alias = "TOP_ONLY")]
    TopOnly,
    /// A cube gets its top and front shaded when another cube in the same
    /// row sits on its 45° diagonal: smaller z, larger x, equal offsets.
    #[serde(rename = "diagonal_45", alias = "DIAGONAL_45")]
    Diagonal45,
}

impl ShadowMode {
    pub fn next(self) -> ShadowMode {
        match self {
            ShadowMode::None => ShadowMode::TopOnly,
            ShadowMode::TopOnly => ShadowMode::Diagonal45,
            ShadowMode::Diagonal45 => ShadowMode::None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShadowMode::None => "none",
            ShadowMode::TopOnly => "top_only",
            ShadowMode::Diagonal45 => "diagonal_45",
        }
    }

    pub fn parse(s: &str) -> Option<ShadowMode> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" | "0" => Some(ShadowMode::None),
            "top_only" | "top" | "1" => Some(ShadowMode::TopOnly),
            "diagonal_45" | "diagonal" | "2" => Some(ShadowMode::Diagonal45),
            _ => None,
        }
    }
}

/// Shaded faces per cube for one frame, indexed like the positions it was
/// computed from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShadowMap {
    faces: Vec<FaceSet>,
}

impl ShadowMap {
    pub fn empty(len: usize) -> Self {
        Self {
            faces: vec![FaceSet::EMPTY; len],
        }
    }

    /// Out-of-range indices read as unshaded.
    #[inline]
    pub fn get(&self, i: usize) -> FaceSet {
        self.faces.get(i).copied().unwrap_or_default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of cubes with at least one shaded face.
    pub fn shaded_count(&self) -> usize {
        self.faces.iter().filter(|f| !f.is_empty()).count()
    }
}

/// Builds a fresh [`ShadowMap`] for `positions`. Quadratic in cube count.
pub fn compute_shadows(positions: &[GridPos], mode: ShadowMode) -> ShadowMap {
    let mut map = ShadowMap::empty(positions.len());
    if mode == ShadowMode::None {
        return map;
    }
    for (i, a) in positions.iter().enumerate() {
        for (j, b) in positions.iter().enumerate() {
            if i == j {
                continue;
            }
            match mode {
                ShadowMode::None => {}
                ShadowMode::TopOnly => {
                    if a.same_column(*b) && a.z < b.z {
                        map.faces[j].insert(Face::Top);
                    }
                }
                ShadowMode::Diagonal45 => {
                    if a.y == b.y && a.z < b.z && a.x - b.x == b.z - a.z {
                        map.faces[j].insert(Face::Top);
                        map.faces[j].insert(Face::Front);
                    }
                }
            }
        }
    }
    map
}
