//! Minimal geometry types for the isometric scene crates (no Raylib dependency).
#![forbid(unsafe_code)]

use core::ops::{Add, Sub};

/// A position on the cube grid, in grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct GridPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl GridPos {
    pub const ORIGIN: GridPos = GridPos {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Offset by whole grid steps; used for cube corners.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32, dz: f32) -> GridPos {
        GridPos::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// True when both positions sit in the same vertical column (same x and y).
    #[inline]
    pub fn same_column(self, other: GridPos) -> bool {
        self.x == other.x && self.y == other.y
    }

    #[inline]
    pub fn as_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for GridPos {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        GridPos::new(v[0], v[1], v[2])
    }
}

impl From<(i32, i32, i32)> for GridPos {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        GridPos::new(x as f32, y as f32, z as f32)
    }
}

impl Add for GridPos {
    type Output = GridPos;
    #[inline]
    fn add(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for GridPos {
    type Output = GridPos;
    #[inline]
    fn sub(self, rhs: GridPos) -> GridPos {
        GridPos::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// A 2D point on the drawing surface, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn add(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for ScreenPoint {
    type Output = ScreenPoint;
    #[inline]
    fn sub(self, rhs: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Inclusive bounds of a set of grid positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct GridBounds {
    pub min: GridPos,
    pub max: GridPos,
}

impl GridBounds {
    #[inline]
    pub const fn new(min: GridPos, max: GridPos) -> Self {
        Self { min, max }
    }

    /// Returns `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = GridPos>>(points: I) -> Option<GridBounds> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut b = GridBounds::new(first, first);
        for p in it {
            b.include(p);
        }
        Some(b)
    }

    #[inline]
    pub fn include(&mut self, p: GridPos) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Largest per-axis span covered by the bounds.
    #[inline]
    pub fn extent(&self) -> f32 {
        let d = self.max - self.min;
        d.x.max(d.y).max(d.z)
    }
}
