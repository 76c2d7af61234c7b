// src/models/geometry.rs
// Shape primitives in world units (y up, origin at the frame centre)

use nannou::prelude::*;
use std::f32::consts::{PI, TAU};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point2,
    pub max: Point2,
}

impl BoundingBox {
    pub fn center(&self) -> Point2 {
        (self.min + self.max) * 0.5
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn from_points(points: &[Point2]) -> Option<BoundingBox> {
        let first = *points.first()?;
        Some(points.iter().fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bb, p| BoundingBox {
                min: bb.min.min(*p),
                max: bb.max.max(*p),
            },
        ))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<Point2>,
    },
    Polyline {
        points: Vec<Point2>,
    },
    Circle {
        center: Point2,
        radius: f32,
    },
    RoundedRect {
        center: Point2,
        width: f32,
        height: f32,
        corner_radius: f32,
    },
    Text {
        position: Point2,
        content: String,
        font_size: f32,
    },
}

impl Shape {
    pub fn translate(&mut self, offset: Vec2) {
        match self {
            Shape::Polygon { points } | Shape::Polyline { points } => {
                points.iter_mut().for_each(|p| *p += offset);
            }
            Shape::Circle { center, .. } | Shape::RoundedRect { center, .. } => {
                *center += offset;
            }
            Shape::Text { position, .. } => *position += offset,
        }
    }

    pub fn translated(&self, offset: Vec2) -> Shape {
        let mut shape = self.clone();
        shape.translate(offset);
        shape
    }

    /// Whether the outline closes back on its first point.
    pub fn is_closed(&self) -> bool {
        !matches!(self, Shape::Polyline { .. } | Shape::Text { .. })
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Shape::Polygon { points } | Shape::Polyline { points } => {
                BoundingBox::from_points(points)
            }
            Shape::Circle { center, radius } => Some(BoundingBox {
                min: *center - vec2(*radius, *radius),
                max: *center + vec2(*radius, *radius),
            }),
            Shape::RoundedRect {
                center,
                width,
                height,
                ..
            } => Some(BoundingBox {
                min: *center - vec2(width / 2.0, height / 2.0),
                max: *center + vec2(width / 2.0, height / 2.0),
            }),
            // glyph metrics are up to the renderer
            Shape::Text { position, .. } => Some(BoundingBox {
                min: *position,
                max: *position,
            }),
        }
    }

    /// Flattens the shape into outline points. Closed shapes repeat their
    /// first point at the end. Text has no outline.
    pub fn outline(&self, arc_resolution: usize) -> Vec<Point2> {
        let resolution = arc_resolution.max(4);
        let mut points = match self {
            Shape::Polygon { points } | Shape::Polyline { points } => points.clone(),
            Shape::Circle { center, radius } => (0..resolution)
                .map(|i| {
                    let angle = i as f32 / resolution as f32 * TAU;
                    *center + vec2(angle.cos(), angle.sin()) * *radius
                })
                .collect(),
            Shape::RoundedRect {
                center,
                width,
                height,
                corner_radius,
            } => rounded_rect_points(*center, *width, *height, *corner_radius, resolution),
            Shape::Text { .. } => Vec::new(),
        };

        if self.is_closed() {
            if let Some(first) = points.first().copied() {
                points.push(first);
            }
        }
        points
    }
}

fn rounded_rect_points(
    center: Point2,
    width: f32,
    height: f32,
    corner_radius: f32,
    resolution: usize,
) -> Vec<Point2> {
    let r = corner_radius.min(width / 2.0).min(height / 2.0).max(0.0);
    let half = vec2(width / 2.0 - r, height / 2.0 - r);
    let steps = (resolution / 4).max(1);

    // corners counter-clockwise starting top right
    let corners = [
        (center + vec2(half.x, half.y), 0.0),
        (center + vec2(-half.x, half.y), PI / 2.0),
        (center + vec2(-half.x, -half.y), PI),
        (center + vec2(half.x, -half.y), PI * 1.5),
    ];

    let mut points = Vec::with_capacity(4 * (steps + 1));
    for (corner, start_angle) in corners {
        for i in 0..=steps {
            let angle = start_angle + i as f32 / steps as f32 * (PI / 2.0);
            points.push(corner + vec2(angle.cos(), angle.sin()) * r);
        }
    }
    points
}

pub fn outline_length(points: &[Point2]) -> f32 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// The prefix of `points` covering `fraction` of its total length,
/// ending on an interpolated point inside the last partial segment.
pub fn partial_outline(points: &[Point2], fraction: f32) -> Vec<Point2> {
    let fraction = fraction.clamp(0.0, 1.0);
    if points.len() < 2 || fraction >= 1.0 {
        return points.to_vec();
    }

    let target = outline_length(points) * fraction;
    let mut result = vec![points[0]];
    let mut travelled = 0.0;

    for w in points.windows(2) {
        let segment = w[0].distance(w[1]);
        if travelled + segment >= target {
            let remaining = target - travelled;
            let t = if segment > 0.0 { remaining / segment } else { 0.0 };
            result.push(w[0].lerp(w[1], t));
            break;
        }
        travelled += segment;
        result.push(w[1]);
    }
    result
}

/// Samples a parametric curve at `samples + 1` evenly spaced parameters in [t0, t1].
pub fn sample_parametric<F>(f: F, t0: f32, t1: f32, samples: usize) -> Vec<Point2>
where
    F: Fn(f32) -> Point2,
{
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| f(t0 + (t1 - t0) * i as f32 / samples as f32))
        .collect()
}
