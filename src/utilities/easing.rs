//src/utilities/easing.rs

// rate functions for play steps and colour blending

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EasingType {
    Linear,
    #[default]
    EaseInOut,
    EaseIn,
    EaseOut,
}

impl EasingType {
    /// Maps linear progress to eased progress. Input is clamped to [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
        }
    }
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

pub fn lerp_color(start: Rgba, end: Rgba, time: f32) -> Rgba {
    let time = time.clamp(0.0, 1.0);
    rgba(
        start.red + (end.red - start.red) * time,
        start.green + (end.green - start.green) * time,
        start.blue + (end.blue - start.blue) * time,
        start.alpha + (end.alpha - start.alpha) * time,
    )
}

/// Colour from a 0xRRGGBB literal.
pub fn hex_color(hex: u32) -> Rgba {
    let r = ((hex >> 16) & 0xff) as f32 / 255.0;
    let g = ((hex >> 8) & 0xff) as f32 / 255.0;
    let b = (hex & 0xff) as f32 / 255.0;
    rgba(r, g, b, 1.0)
}

pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    rgba(color.red, color.green, color.blue, color.alpha * alpha)
}
