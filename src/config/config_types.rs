// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub frame_width: f32,    // World units visible across the window
    pub fps: u32,            // Fixed simulation and capture rate
    pub arc_resolution: u32, // Segments per circle outline
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub default_stroke_weight: f32,
    #[serde(default)]
    pub background: [f32; 3],
}

#[derive(Debug, Deserialize, Clone)]
pub struct SceneConfig {
    pub name: String,
    #[serde(default = "default_electron_count")]
    pub electron_count: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_initial_voltage")]
    pub initial_voltage: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MotionSettings {
    pub cycle_time: f32,
    pub accel_fraction: f32,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub directory: String,
    #[serde(default)]
    pub frame_limit: u32, // 0 = unlimited
    #[serde(default)]
    pub format: ImageFormat,
    #[serde(default)]
    pub record_on_start: bool,
    #[serde(default)]
    pub exit_on_finish: bool,
}

fn default_electron_count() -> usize {
    10
}

fn default_initial_voltage() -> f32 {
    1.0
}
