//! Colors, shade blending and the memoizing blender used for cube faces.
#![forbid(unsafe_code)]

pub mod blend;
pub mod color;

pub use blend::{ShadeBlender, shade_blend};
pub use color::{Color, ColorError};
