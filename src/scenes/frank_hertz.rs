// src/scenes/frank_hertz.rs
//
// The Frank-Hertz tube: housing, heated cathode, gridded anode and collector,
// then a stream of electrons whose speed follows the accelerating voltage.

use nannou::prelude::*;
use rand::Rng;

use super::stage::{ElectronSetup, Stage};
use crate::animation::{
    Animation, ElectronCloud, ElectronPath, MotionConfig, Step, Timeline, Waypoints,
};
use crate::models::apparatus;

pub const NAME: &str = "frank_hertz";

pub const CATHODE_POSITION: (f32, f32) = (-3.2, 0.0);
pub const ANODE_POSITION: (f32, f32) = (0.0, 0.0);
pub const COLLECTOR_POSITION: (f32, f32) = (3.0, 0.0);

// seconds at the initial voltage once the electrons are released
const FIRST_HOLD: f32 = 5.0;
// (voltage, seconds held) afterwards
const VOLTAGE_STEPS: [(f32, f32); 2] = [(2.0, 5.0), (3.0, 5.0)];

pub fn waypoints() -> Waypoints {
    Waypoints {
        start: pt2(CATHODE_POSITION.0, CATHODE_POSITION.1),
        mid: pt2(ANODE_POSITION.0, ANODE_POSITION.1),
        end: pt2(COLLECTOR_POSITION.0, COLLECTOR_POSITION.1),
    }
}

fn script(initial_voltage: f32) -> Vec<Step> {
    let create = |name: &str| Animation::Create(name.to_string());

    let mut steps = vec![
        Step::play(vec![create("cathode"), create("filament"), create("housing")]),
        // the filament heats up
        Step::play_for(
            vec![Animation::Recolor {
                object: "filament".to_string(),
                color: apparatus::yellow(),
            }],
            1.0,
        ),
        Step::Wait(1.0),
        Step::play(vec![create("anode"), create("collector")]),
        Step::Wait(1.0),
        Step::play(vec![
            create("knob"),
            Animation::Write("knob_label".to_string()),
        ]),
        Step::ReleaseElectrons,
        Step::SetVoltage(initial_voltage),
        Step::Wait(FIRST_HOLD),
    ];

    for (voltage, hold) in VOLTAGE_STEPS {
        steps.push(Step::SetVoltage(voltage));
        steps.push(Step::Wait(hold));
    }
    steps
}

pub fn build<R: Rng>(
    motion: MotionConfig,
    electron_count: usize,
    initial_voltage: f32,
    rng: &mut R,
) -> Stage {
    let objects = vec![
        apparatus::housing(),
        apparatus::cathode(),
        apparatus::filament(),
        apparatus::gridded_anode(),
        apparatus::collector(),
        apparatus::knob(),
        apparatus::knob_label(),
    ];

    let path = ElectronPath::new(waypoints(), motion);
    let electrons = ElectronSetup {
        cloud: ElectronCloud::spawn(path, electron_count, rng),
        template: apparatus::small_electron(),
    };

    Stage::new(
        NAME,
        objects,
        Timeline::new(script(initial_voltage)),
        Some(electrons),
        initial_voltage,
    )
}
