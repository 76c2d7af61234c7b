// src/models/apparatus.rs
//
// Builders for the parts of the Frank-Hertz tube and the collision scene.
// Coordinates are in world units; the frame is about 14.2 x 8 units.

use nannou::prelude::*;

use super::geometry::{sample_parametric, Shape};
use super::scene_object::{DrawStyle, SceneObject};
use crate::utilities::hex_color;

pub fn white() -> Rgba {
    hex_color(0xFFFFFF)
}
pub fn red() -> Rgba {
    hex_color(0xFC6255)
}
pub fn orange() -> Rgba {
    hex_color(0xFF862F)
}
pub fn yellow() -> Rgba {
    hex_color(0xFFFF00)
}
pub fn blue() -> Rgba {
    hex_color(0x58C4DD)
}
pub fn green() -> Rgba {
    hex_color(0x83C167)
}
pub fn gray() -> Rgba {
    hex_color(0x888888)
}

// electrode outline shared by cathode, anode and collector
const ELECTRODE: [(f32, f32); 4] = [(-3.0, 0.5), (-3.0, -0.5), (-2.5, -0.2), (-2.5, 0.8)];

const FILAMENT_BOTTOM: (f32, f32) = (-3.5, -0.5);
const FILAMENT_TOP: (f32, f32) = (-3.5, 0.5);
const SPRING_SAMPLES: usize = 120;

const ANODE_GRID_ROWS: usize = 6;
const ANODE_GRID_COLS: usize = 4;
const ANODE_HOLE_RADIUS: f32 = 0.03;

fn electrode_points() -> Vec<Point2> {
    ELECTRODE.iter().map(|&(x, y)| pt2(x, y)).collect()
}

pub fn housing() -> SceneObject {
    SceneObject::new("housing", DrawStyle::stroke(white())).with_shape(Shape::RoundedRect {
        center: pt2(0.0, 0.0),
        width: 8.0,
        height: 3.0,
        corner_radius: 0.3,
    })
}

pub fn cathode() -> SceneObject {
    SceneObject::new("cathode", DrawStyle::filled(red())).with_shape(Shape::Polygon {
        points: electrode_points(),
    })
}

/// Heating filament: a vertical spring between the two attachment points,
/// with a horizontal lead wire leaving each end.
pub fn filament() -> SceneObject {
    let bottom = pt2(FILAMENT_BOTTOM.0, FILAMENT_BOTTOM.1);
    let top = pt2(FILAMENT_TOP.0, FILAMENT_TOP.1);
    let height = top.y - bottom.y;

    // x wiggles around the attachment column, y rises from bottom to top
    let spring = sample_parametric(
        |t| pt2(bottom.x + 0.2 * (25.0 * t).sin() * height, bottom.y + t * height),
        0.0,
        1.0,
        SPRING_SAMPLES,
    );

    SceneObject::new("filament", DrawStyle::stroke(orange()).with_stroke_weight(5.0))
        .with_shape(Shape::Polyline {
            points: vec![bottom - vec2(1.0, 0.0), bottom],
        })
        .with_shape(Shape::Polyline { points: spring })
        .with_shape(Shape::Polyline {
            points: vec![top, top - vec2(1.0, 0.0)],
        })
}

/// Maps a point of the unit square centred on the origin into the
/// electrode parallelogram's bounding box.
fn to_parallelogram(x: f32, y: f32) -> Point2 {
    let (p1, p2, p3, p4) = (ELECTRODE[0], ELECTRODE[1], ELECTRODE[2], ELECTRODE[3]);
    let x_ratio = x + 0.5;
    let y_ratio = y + 0.5;
    pt2(
        (1.0 - x_ratio) * p1.0 + x_ratio * p3.0,
        (1.0 - y_ratio) * p2.1 + y_ratio * p4.1,
    )
}

fn linspace(start: f32, end: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => (0..count)
            .map(|i| start + (end - start) * i as f32 / (count - 1) as f32)
            .collect(),
    }
}

/// The anode is a blue electrode with a grid of holes the electrons fly through.
pub fn gridded_anode() -> SceneObject {
    let hole_style = DrawStyle::filled(white());
    let mut anode = SceneObject::new("anode", DrawStyle::filled(blue())).with_shape(
        Shape::Polygon {
            points: electrode_points(),
        },
    );

    for x in linspace(-0.5, 0.5, ANODE_GRID_ROWS) {
        for y in linspace(-0.5, 0.5, ANODE_GRID_COLS) {
            anode = anode.with_styled_shape(
                Shape::Circle {
                    center: to_parallelogram(x, y),
                    radius: ANODE_HOLE_RADIUS,
                },
                hole_style.clone(),
            );
        }
    }

    anode.move_to(pt2(0.0, 0.0))
}

pub fn collector() -> SceneObject {
    cathode()
        .copy_as("collector")
        .set_color(green())
        .move_to(pt2(3.0, 0.0))
}

pub fn knob() -> SceneObject {
    SceneObject::new("knob", DrawStyle::stroke(yellow())).with_shape(Shape::Circle {
        center: pt2(0.0, 2.0),
        radius: 0.3,
    })
}

pub fn label(name: &str, content: &str, position: Point2, font_size: f32) -> SceneObject {
    SceneObject::new(name, DrawStyle::filled(white())).with_shape(Shape::Text {
        position,
        content: content.to_string(),
        font_size,
    })
}

pub fn knob_label() -> SceneObject {
    label("knob_label", "Voltage", pt2(0.0, 2.7), 24.0)
}

/// Electron centred on `position`: a filled blue disc with an "e⁻" label.
pub fn electron(name: &str, position: Point2, radius: f32, font_size: f32) -> SceneObject {
    SceneObject::new(name, DrawStyle::filled(blue()))
        .with_shape(Shape::Circle {
            center: position,
            radius,
        })
        .with_styled_shape(
            Shape::Text {
                position,
                content: "e⁻".to_string(),
                font_size,
            },
            DrawStyle::filled(white()),
        )
}

/// Template for the tube electrons. The stage translates it to each position.
pub fn small_electron() -> SceneObject {
    electron("electron", pt2(0.0, 0.0), 0.1, 15.0)
}

pub fn mercury_atom() -> SceneObject {
    SceneObject::new("hg_atom", DrawStyle::filled(gray())).with_shape(Shape::Circle {
        center: pt2(3.0, 0.0),
        radius: 1.2,
    })
}

pub fn mercury_label() -> SceneObject {
    label("hg_label", "Hg", pt2(3.0, 0.0), 50.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_cathode_shape() {
        let cathode = cathode();
        assert_eq!(cathode.parts.len(), 1);
        assert!((cathode.center() - pt2(-2.75, 0.15)).length() < EPSILON);
        assert_eq!(cathode.style.fill, Some(red()));
    }

    #[test]
    fn test_collector_mirrors_cathode() {
        let collector = collector();
        assert_eq!(collector.name, "collector");
        assert!((collector.center() - pt2(3.0, 0.0)).length() < EPSILON);
        assert_eq!(collector.style.stroke, green());

        let cathode_bb = cathode().bounding_box().unwrap();
        let collector_bb = collector.bounding_box().unwrap();
        assert!((cathode_bb.width() - collector_bb.width()).abs() < EPSILON);
        assert!((cathode_bb.height() - collector_bb.height()).abs() < EPSILON);
    }

    #[test]
    fn test_anode_grid() {
        let anode = gridded_anode();
        assert_eq!(anode.parts.len(), 1 + ANODE_GRID_ROWS * ANODE_GRID_COLS);
        assert!(anode.center().length() < EPSILON);

        // holes sit inside the electrode's bounding box (plus their radius)
        let plate = anode.parts[0].shape.bounding_box().unwrap();
        for part in &anode.parts[1..] {
            match &part.shape {
                Shape::Circle { center, radius } => {
                    assert_eq!(*radius, ANODE_HOLE_RADIUS);
                    assert!(center.x >= plate.min.x - EPSILON && center.x <= plate.max.x + EPSILON);
                    assert!(center.y >= plate.min.y - EPSILON && center.y <= plate.max.y + EPSILON);
                    assert_eq!(part.style.as_ref().map(|s| s.stroke), Some(white()));
                }
                other => panic!("Unexpected anode part {:?}", other),
            }
        }
    }

    #[test]
    fn test_filament_attachments() {
        let filament = filament();
        assert_eq!(filament.parts.len(), 3);

        let spring = match &filament.parts[1].shape {
            Shape::Polyline { points } => points.clone(),
            other => panic!("Unexpected filament part {:?}", other),
        };
        assert_eq!(spring.len(), SPRING_SAMPLES + 1);
        assert!((spring[0] - pt2(-3.5, -0.5)).length() < EPSILON);
        assert!((spring[SPRING_SAMPLES].y - 0.5).abs() < EPSILON);
        for p in &spring {
            assert!((p.x + 3.5).abs() <= 0.2 + EPSILON);
        }

        let bb = filament.bounding_box().unwrap();
        assert!((bb.min.x + 4.5).abs() < EPSILON);
        assert!((bb.height() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(-0.5, 0.5, 3), vec![-0.5, 0.0, 0.5]);
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_electron_template() {
        let e = small_electron();
        assert_eq!(e.center(), pt2(0.0, 0.0));
        assert_eq!(e.text(), Some("e⁻"));
    }
}
