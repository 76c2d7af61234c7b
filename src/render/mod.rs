pub mod scene_renderer;

pub use scene_renderer::SceneRenderer;
