// src/scenes/collision.rs
//
// An electron approaching a mercury atom while its kinetic energy label climbs
// through the excitation energies.

use nannou::prelude::*;

use super::stage::Stage;
use crate::animation::{Animation, Step, Timeline};
use crate::models::apparatus;

pub const NAME: &str = "collision";

const ELECTRON_START: (f32, f32) = (-4.0, 0.0);
const ELECTRON_RADIUS: f32 = 0.4;
const ATOM_CENTER: (f32, f32) = (3.0, 0.0);
const LABEL_FONT_SIZE: f32 = 30.0;

// label sits up and to the left of the electron
const LABEL_OFFSET: (f32, f32) = (-0.95, 0.8);

// energies shown once the electron reaches the atom, with the pause after each
const ENERGY_STEPS: [(&str, f32); 3] = [("4.8eV", 0.2), ("6eV", 0.2), ("9.6eV", 1.0)];

fn label_position(electron_center: Point2) -> Point2 {
    electron_center + vec2(LABEL_OFFSET.0, LABEL_OFFSET.1)
}

/// Where the electron stops: one unit short of the atom's centre.
pub fn stop_position() -> Point2 {
    pt2(ATOM_CENTER.0, ATOM_CENTER.1) - vec2(1.0, 0.0)
}

fn script() -> Vec<Step> {
    let mut steps = vec![
        Step::play(vec![Animation::Create("electron".to_string())]),
        Step::play(vec![
            Animation::Create("hg_atom".to_string()),
            Animation::Write("hg_label".to_string()),
        ]),
        Step::Wait(1.0),
        Step::play(vec![Animation::Write("ev_label".to_string())]),
        Step::Wait(1.0),
        Step::play_for(
            vec![Animation::MoveTo {
                object: "electron".to_string(),
                to: stop_position(),
            }],
            1.0,
        ),
        Step::Wait(0.3),
    ];

    for (energy, pause) in ENERGY_STEPS {
        steps.push(Step::play(vec![Animation::Morph {
            object: "ev_label".to_string(),
            text: energy.to_string(),
            to: label_position(stop_position()),
        }]));
        steps.push(Step::Wait(pause));
    }
    steps
}

pub fn build() -> Stage {
    let start = pt2(ELECTRON_START.0, ELECTRON_START.1);
    let objects = vec![
        apparatus::electron("electron", start, ELECTRON_RADIUS, 35.0),
        apparatus::mercury_atom(),
        apparatus::mercury_label(),
        apparatus::label("ev_label", "2eV", label_position(start), LABEL_FONT_SIZE),
    ];

    Stage::new(NAME, objects, Timeline::new(script()), None, 0.0)
}
