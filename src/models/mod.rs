pub mod apparatus;
pub mod geometry;
pub mod scene_object;

pub use geometry::{partial_outline, BoundingBox, Shape};
pub use scene_object::{DrawStyle, Part, SceneObject};
