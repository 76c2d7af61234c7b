// src/models/scene_object.rs
// A named group of shapes drawn with one style

use nannou::prelude::*;

use super::geometry::{BoundingBox, Shape};

#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub stroke: Rgba,
    pub fill: Option<Rgba>,
    pub stroke_weight: f32,
}

impl DrawStyle {
    pub fn stroke(color: Rgba) -> Self {
        Self {
            stroke: color,
            ..Default::default()
        }
    }

    pub fn filled(color: Rgba) -> Self {
        Self {
            stroke: color,
            fill: Some(color),
            ..Default::default()
        }
    }

    pub fn with_stroke_weight(mut self, stroke_weight: f32) -> Self {
        self.stroke_weight = stroke_weight;
        self
    }

    /// Same style with both stroke and fill set to `color`, keeping fill alpha.
    pub fn recolored(&self, color: Rgba) -> Self {
        Self {
            stroke: color,
            fill: self
                .fill
                .map(|fill| rgba(color.red, color.green, color.blue, fill.alpha)),
            stroke_weight: self.stroke_weight,
        }
    }
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            stroke: rgba(1.0, 1.0, 1.0, 1.0),
            fill: None,
            stroke_weight: 4.0,
        }
    }
}

/// One shape inside an object. Parts may override the object's style,
/// e.g. the white holes of the anode grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Part {
    pub shape: Shape,
    pub style: Option<DrawStyle>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub parts: Vec<Part>,
    pub style: DrawStyle,
}

impl SceneObject {
    pub fn new(name: &str, style: DrawStyle) -> Self {
        Self {
            name: name.to_string(),
            parts: Vec::new(),
            style,
        }
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.parts.push(Part { shape, style: None });
        self
    }

    pub fn with_styled_shape(mut self, shape: Shape, style: DrawStyle) -> Self {
        self.parts.push(Part {
            shape,
            style: Some(style),
        });
        self
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.parts
            .iter()
            .filter_map(|part| part.shape.bounding_box())
            .reduce(|a, b| a.union(&b))
    }

    /// Centre of the bounding box, or the origin for an empty object.
    pub fn center(&self) -> Point2 {
        self.bounding_box()
            .map(|bb| bb.center())
            .unwrap_or(Point2::ZERO)
    }

    pub fn translate(&mut self, offset: Vec2) {
        for part in self.parts.iter_mut() {
            part.shape.translate(offset);
        }
    }

    /// Moves the object so its bounding box is centred on `target`.
    pub fn move_to(mut self, target: Point2) -> Self {
        let offset = target - self.center();
        self.translate(offset);
        self
    }

    /// A copy under a new name, e.g. the collector cloned from the cathode.
    pub fn copy_as(&self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self.clone()
        }
    }

    pub fn set_color(mut self, color: Rgba) -> Self {
        self.style = self.style.recolored(color);
        self
    }

    /// Text content of the first text part, if any.
    pub fn text(&self) -> Option<&str> {
        self.parts.iter().find_map(|part| match &part.shape {
            Shape::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> SceneObject {
        SceneObject::new("square", DrawStyle::filled(rgba(1.0, 0.0, 0.0, 1.0))).with_shape(
            Shape::Polygon {
                points: vec![
                    pt2(0.0, 0.0),
                    pt2(2.0, 0.0),
                    pt2(2.0, 2.0),
                    pt2(0.0, 2.0),
                ],
            },
        )
    }

    #[test]
    fn test_move_to_centres_object() {
        let moved = square().move_to(pt2(3.0, -1.0));
        assert_eq!(moved.center(), pt2(3.0, -1.0));
        let bb = moved.bounding_box().unwrap();
        assert_eq!(bb.min, pt2(2.0, -2.0));
    }

    #[test]
    fn test_empty_object_centre_is_origin() {
        let empty = SceneObject::new("empty", DrawStyle::default());
        assert_eq!(empty.bounding_box(), None);
        assert_eq!(empty.center(), Point2::ZERO);
    }

    #[test]
    fn test_copy_and_recolor() {
        let green = rgba(0.0, 1.0, 0.0, 1.0);
        let copy = square().copy_as("collector").set_color(green);
        assert_eq!(copy.name, "collector");
        assert_eq!(copy.style.stroke, green);
        assert_eq!(copy.style.fill, Some(green));
        assert_eq!(copy.parts, square().parts);
    }

    #[test]
    fn test_recolor_keeps_fill_alpha() {
        let style = DrawStyle {
            stroke: rgba(1.0, 1.0, 1.0, 1.0),
            fill: Some(rgba(1.0, 1.0, 1.0, 0.5)),
            stroke_weight: 2.0,
        };
        let recolored = style.recolored(rgba(0.0, 0.0, 1.0, 1.0));
        assert_eq!(recolored.fill.unwrap().alpha, 0.5);
        assert_eq!(recolored.fill.unwrap().blue, 1.0);
        assert_eq!(recolored.stroke_weight, 2.0);
    }

    #[test]
    fn test_text_lookup() {
        let label = SceneObject::new("label", DrawStyle::default()).with_shape(Shape::Text {
            position: pt2(0.0, 0.0),
            content: "Voltage".to_string(),
            font_size: 24.0,
        });
        assert_eq!(label.text(), Some("Voltage"));
        assert_eq!(square().text(), None);
    }
}
