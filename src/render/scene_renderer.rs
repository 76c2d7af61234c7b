// src/render/scene_renderer.rs
// Draws a stage snapshot with nannou, converting world units to pixels

use nannou::prelude::*;

use crate::models::{partial_outline, DrawStyle, Part, SceneObject, Shape};
use crate::scenes::{ObjectState, Snapshot};
use crate::utilities::with_alpha;

// stroke weights in the scene models are authored for this default
const REFERENCE_STROKE_WEIGHT: f32 = 4.0;
// font sizes in the scene models are authored for a 14.2 unit wide, 1280 pixel frame
const REFERENCE_PIXELS_PER_UNIT: f32 = 90.0;

pub struct SceneRenderer {
    pixels_per_unit: f32,
    arc_resolution: usize,
    stroke_scale: f32,
}

impl SceneRenderer {
    pub fn new(
        window_width: u32,
        frame_width: f32,
        arc_resolution: u32,
        default_stroke_weight: f32,
    ) -> Self {
        Self {
            pixels_per_unit: window_width as f32 / frame_width,
            arc_resolution: arc_resolution as usize,
            stroke_scale: default_stroke_weight / REFERENCE_STROKE_WEIGHT,
        }
    }

    pub fn pixels_per_unit(&self) -> f32 {
        self.pixels_per_unit
    }

    pub fn to_screen(&self, p: Point2) -> Point2 {
        p * self.pixels_per_unit
    }

    pub fn font_px(&self, font_size: f32) -> u32 {
        (font_size * self.pixels_per_unit / REFERENCE_PIXELS_PER_UNIT)
            .round()
            .max(1.0) as u32
    }

    pub fn stroke_px(&self, style: &DrawStyle) -> f32 {
        style.stroke_weight * self.stroke_scale
    }

    pub fn draw_snapshot(&self, draw: &Draw, snapshot: &Snapshot) {
        for object in &snapshot.objects {
            self.draw_object(draw, object.object, &object.state);
        }

        if let Some(template) = snapshot.electron_template {
            let state = ObjectState {
                visible: true,
                reveal: 1.0,
                opacity: 1.0,
                style: template.style.clone(),
                offset: Vec2::ZERO,
                text: None,
            };
            for position in &snapshot.electrons {
                let state = ObjectState {
                    offset: *position - template.center(),
                    ..state.clone()
                };
                self.draw_object(draw, template, &state);
            }
        }
    }

    pub fn draw_object(&self, draw: &Draw, object: &SceneObject, state: &ObjectState) {
        for part in &object.parts {
            let style = part_style(part, state);
            let shape = part.shape.translated(state.offset);
            self.draw_shape(draw, &shape, &style, state);
        }
    }

    fn draw_shape(&self, draw: &Draw, shape: &Shape, style: &DrawStyle, state: &ObjectState) {
        if let Shape::Text {
            position,
            content,
            font_size,
        } = shape
        {
            // writing reveals text by fading it in
            let text = state.text.as_deref().unwrap_or(content);
            let color = with_alpha(style.stroke, state.reveal * state.opacity);
            draw.text(text)
                .xy(self.to_screen(*position))
                .font_size(self.font_px(*font_size))
                .color(color);
            return;
        }

        if let Some(fill) = style.fill {
            let color = with_alpha(fill, state.reveal * state.opacity);
            match shape {
                Shape::Circle { center, radius } => {
                    draw.ellipse()
                        .xy(self.to_screen(*center))
                        .radius(radius * self.pixels_per_unit)
                        .color(color);
                }
                _ => {
                    let points = shape.outline(self.arc_resolution);
                    draw.polygon()
                        .points(points.into_iter().map(|p| self.to_screen(p)))
                        .color(color);
                }
            }
        }

        let outline = partial_outline(&shape.outline(self.arc_resolution), state.reveal);
        if outline.len() >= 2 {
            draw.polyline()
                .weight(self.stroke_px(style))
                .points(outline.into_iter().map(|p| self.to_screen(p)))
                .color(with_alpha(style.stroke, state.opacity));
        }
    }
}

/// Parts with their own style keep it (only fading with the object);
/// the rest follow the object's animated style.
fn part_style(part: &Part, state: &ObjectState) -> DrawStyle {
    part.style.clone().unwrap_or_else(|| state.style.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::apparatus;

    fn renderer() -> SceneRenderer {
        SceneRenderer::new(1280, 14.222, 48, 4.0)
    }

    #[test]
    fn test_world_to_screen() {
        let r = renderer();
        assert!((r.pixels_per_unit() - 1280.0 / 14.222).abs() < 1e-3);
        let p = r.to_screen(pt2(-3.2, 1.0));
        assert!((p.x + 3.2 * r.pixels_per_unit()).abs() < 1e-3);
        assert!((p.y - r.pixels_per_unit()).abs() < 1e-3);
    }

    #[test]
    fn test_font_and_stroke_scaling() {
        let r = SceneRenderer::new(640, 14.222, 48, 8.0);
        // half the reference resolution halves the font
        assert_eq!(r.font_px(30.0), 15);
        assert_eq!(r.font_px(0.0), 1);
        let style = DrawStyle::default().with_stroke_weight(5.0);
        assert_eq!(r.stroke_px(&style), 10.0);
    }

    #[test]
    fn test_part_style_override() {
        let anode = apparatus::gridded_anode();
        let state = ObjectState {
            visible: true,
            reveal: 1.0,
            opacity: 1.0,
            style: anode.style.recolored(apparatus::yellow()),
            offset: Vec2::ZERO,
            text: None,
        };
        // the plate follows the animated style, the holes keep theirs
        assert_eq!(part_style(&anode.parts[0], &state).stroke, apparatus::yellow());
        assert_eq!(part_style(&anode.parts[1], &state).stroke, apparatus::white());
    }
}
