// src/scenes/stage.rs
//
// Runs a scene: owns the objects, the timeline, the electrons and the voltage,
// advances by fixed ticks and produces a drawable snapshot of the current frame.

use log::{debug, info, warn};
use nannou::prelude::*;
use std::collections::HashMap;

use crate::animation::{Animation, ElectronCloud, Step, Timeline};
use crate::models::{DrawStyle, SceneObject};
use crate::utilities::lerp_color;

/// Electrons of a scene and the object drawn at each electron position.
#[derive(Debug, Clone)]
pub struct ElectronSetup {
    pub cloud: ElectronCloud,
    pub template: SceneObject,
}

/// Evaluated state of one object at the current time.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectState {
    pub visible: bool,
    /// Fraction of the outline drawn (or of the text revealed).
    pub reveal: f32,
    pub opacity: f32,
    pub style: DrawStyle,
    pub offset: Vec2,
    /// Replacement text from a morph.
    pub text: Option<String>,
}

impl ObjectState {
    fn hidden(object: &SceneObject) -> Self {
        Self {
            visible: false,
            reveal: 0.0,
            opacity: 1.0,
            style: object.style.clone(),
            offset: Vec2::ZERO,
            text: None,
        }
    }
}

pub struct ObjectSnapshot<'a> {
    pub object: &'a SceneObject,
    pub state: ObjectState,
}

pub struct Snapshot<'a> {
    pub time: f32,
    pub voltage: f32,
    /// Visible objects in draw order.
    pub objects: Vec<ObjectSnapshot<'a>>,
    pub electron_template: Option<&'a SceneObject>,
    pub electrons: Vec<Point2>,
}

pub struct Stage {
    name: String,
    objects: Vec<SceneObject>,
    index: HashMap<String, usize>,
    timeline: Timeline,
    electrons: Option<ElectronSetup>,
    initial_electrons: Option<ElectronSetup>,
    initial_voltage: f32,
    voltage: f32,
    time: f32,
}

impl Stage {
    pub fn new(
        name: &str,
        objects: Vec<SceneObject>,
        timeline: Timeline,
        electrons: Option<ElectronSetup>,
        initial_voltage: f32,
    ) -> Self {
        let index: HashMap<String, usize> = objects
            .iter()
            .enumerate()
            .map(|(i, object)| (object.name.clone(), i))
            .collect();

        for entry in timeline.entries() {
            for target in step_targets(&entry.step) {
                if !index.contains_key(target) {
                    warn!("Scene '{}' script refers to unknown object '{}'", name, target);
                }
            }
        }

        if electrons.is_some() && timeline.electrons_released_at().is_none() {
            warn!("Scene '{}' has electrons but never releases them", name);
        }

        info!(
            "Stage '{}' ready: {} objects, {} steps, {:.1}s",
            name,
            objects.len(),
            timeline.entries().len(),
            timeline.duration()
        );

        Self {
            name: name.to_string(),
            objects,
            index,
            timeline,
            initial_electrons: electrons.clone(),
            electrons,
            initial_voltage,
            voltage: initial_voltage,
            time: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn voltage(&self) -> f32 {
        self.voltage
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn electrons(&self) -> Option<&ElectronCloud> {
        self.electrons.as_ref().map(|setup| &setup.cloud)
    }

    pub fn is_finished(&self) -> bool {
        self.time >= self.timeline.duration()
    }

    pub fn electrons_released(&self) -> bool {
        self.timeline
            .electrons_released_at()
            .is_some_and(|release| self.time >= release)
    }

    /// Advances the scene clock. The voltage is read from the script at the
    /// new time; electrons only accumulate the part of `dt` after their release.
    pub fn tick(&mut self, dt: f32) {
        let previous = self.time;
        self.time += dt.max(0.0);

        let voltage = self.timeline.voltage_at(self.time, self.initial_voltage);
        if voltage != self.voltage {
            debug!("Voltage {} -> {} at {:.2}s", self.voltage, voltage, self.time);
            self.voltage = voltage;
        }

        let Some(release) = self.timeline.electrons_released_at() else {
            return;
        };
        if self.time < release {
            return;
        }
        if let Some(setup) = self.electrons.as_mut() {
            let active_dt = self.time - previous.max(release);
            setup.cloud.update(active_dt, self.voltage);
        }
    }

    pub fn reset(&mut self) {
        self.time = 0.0;
        self.voltage = self.initial_voltage;
        self.electrons = self.initial_electrons.clone();
    }

    /// Evaluates every object at the current time by replaying the started
    /// steps, in order, over a hidden base state.
    pub fn object_states(&self) -> Vec<ObjectState> {
        let mut states: Vec<ObjectState> = self.objects.iter().map(ObjectState::hidden).collect();

        for (entry, progress) in self.timeline.started(self.time) {
            match &entry.step {
                Step::Add(name) => {
                    if let Some(&i) = self.index.get(name) {
                        states[i].visible = true;
                        states[i].reveal = 1.0;
                    }
                }
                Step::Play {
                    animations, easing, ..
                } => {
                    let eased = easing.apply(progress);
                    for animation in animations {
                        if let Some(&i) = self.index.get(animation.target()) {
                            apply_animation(&self.objects[i], &mut states[i], animation, eased);
                        }
                    }
                }
                Step::Wait(_) | Step::ReleaseElectrons | Step::SetVoltage(_) => {}
            }
        }
        states
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        let objects = self
            .objects
            .iter()
            .zip(self.object_states())
            .filter(|(_, state)| state.visible)
            .map(|(object, state)| ObjectSnapshot { object, state })
            .collect();

        let (electron_template, electrons) = match &self.electrons {
            Some(setup) if self.electrons_released() => {
                (Some(&setup.template), setup.cloud.positions())
            }
            _ => (None, Vec::new()),
        };

        Snapshot {
            time: self.time,
            voltage: self.voltage,
            objects,
            electron_template,
            electrons,
        }
    }
}

fn step_targets(step: &Step) -> Vec<&str> {
    match step {
        Step::Add(name) => vec![name.as_str()],
        Step::Play { animations, .. } => animations.iter().map(|a| a.target()).collect(),
        _ => Vec::new(),
    }
}

fn apply_animation(
    object: &SceneObject,
    state: &mut ObjectState,
    animation: &Animation,
    eased: f32,
) {
    match animation {
        Animation::Create(_) | Animation::Write(_) => {
            state.visible = true;
            state.reveal = eased;
        }
        Animation::FadeIn(_) => {
            state.visible = true;
            state.reveal = 1.0;
            state.opacity = eased;
        }
        Animation::Recolor { color, .. } => {
            let target = state.style.recolored(*color);
            state.style = DrawStyle {
                stroke: lerp_color(state.style.stroke, target.stroke, eased),
                fill: match (state.style.fill, target.fill) {
                    (Some(from), Some(to)) => Some(lerp_color(from, to, eased)),
                    (fill, _) => fill,
                },
                stroke_weight: state.style.stroke_weight,
            };
        }
        Animation::MoveTo { to, .. } => {
            let target = *to - object.center();
            state.offset = state.offset.lerp(target, eased);
        }
        Animation::Morph { text, to, .. } => {
            let target = *to - object.center();
            state.offset = state.offset.lerp(target, eased);
            if eased >= 0.5 {
                state.text = Some(text.clone());
            }
        }
    }
}
