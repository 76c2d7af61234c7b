pub mod easing;

pub use easing::{hex_color, lerp_color, with_alpha, EasingType};
