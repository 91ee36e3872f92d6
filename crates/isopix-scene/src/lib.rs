//! Isometric cube scene: projection, depth ordering, shadows and rendering
//! onto an abstract drawing surface.
#![forbid(unsafe_code)]

pub mod config;
pub mod cube;
pub mod face;
pub mod octant;
pub mod projector;
pub mod render;
pub mod scene;
pub mod scene_file;
pub mod shadow;
pub mod sorter;
pub mod surface;

pub use config::{Origin, ShadeBorders, ShadeFaces, ViewConfig};
pub use cube::{Cube, FaceColors};
pub use face::{Face, FaceSet};
pub use octant::{AxisPriority, Octant};
pub use projector::Projector;
pub use render::{FrameStats, line_width, render_debug_overlay, render_frame};
pub use scene::Scene;
pub use scene_file::{CubeDef, SceneFile, load_scene_from_path};
pub use shadow::{ShadowMap, ShadowMode, compute_shadows};
pub use sorter::DepthOrder;
pub use surface::{DrawCommand, DrawList, Surface};
