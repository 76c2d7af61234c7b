// src/animation/timeline.rs
//
// The scene script: an ordered list of steps laid out back to back in time.
// Play steps run their animations in parallel; everything else is a wait
// or an instant change.

use nannou::prelude::*;

use crate::utilities::EasingType;

pub const DEFAULT_RUN_TIME: f32 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Animation {
    /// Draws the outline progressively; fills fade in alongside.
    Create(String),
    /// Reveals text.
    Write(String),
    FadeIn(String),
    Recolor { object: String, color: Rgba },
    /// Moves the object's centre to `to`.
    MoveTo { object: String, to: Point2 },
    /// Replaces the object's text and moves it to `to`.
    Morph {
        object: String,
        text: String,
        to: Point2,
    },
}

impl Animation {
    pub fn target(&self) -> &str {
        match self {
            Animation::Create(object) | Animation::Write(object) | Animation::FadeIn(object) => {
                object
            }
            Animation::Recolor { object, .. }
            | Animation::MoveTo { object, .. }
            | Animation::Morph { object, .. } => object,
        }
    }

    /// Whether the animation brings a hidden object into the scene.
    pub fn introduces(&self) -> bool {
        matches!(
            self,
            Animation::Create(_) | Animation::Write(_) | Animation::FadeIn(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Play {
        animations: Vec<Animation>,
        run_time: f32,
        easing: EasingType,
    },
    Wait(f32),
    /// Shows an object immediately, fully drawn.
    Add(String),
    /// Electrons start moving from this point on.
    ReleaseElectrons,
    SetVoltage(f32),
}

impl Step {
    pub fn play(animations: Vec<Animation>) -> Self {
        Step::play_for(animations, DEFAULT_RUN_TIME)
    }

    pub fn play_for(animations: Vec<Animation>, run_time: f32) -> Self {
        Step::Play {
            animations,
            run_time,
            easing: EasingType::default(),
        }
    }

    pub fn duration(&self) -> f32 {
        match self {
            Step::Play { run_time, .. } => run_time.max(0.0),
            Step::Wait(seconds) => seconds.max(0.0),
            Step::Add(_) | Step::ReleaseElectrons | Step::SetVoltage(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledStep {
    pub start: f32,
    pub step: Step,
}

impl ScheduledStep {
    pub fn end(&self) -> f32 {
        self.start + self.step.duration()
    }

    /// Linear progress in [0, 1], or None if the step hasn't started.
    /// Zero-length steps jump straight to 1.
    pub fn progress_at(&self, time: f32) -> Option<f32> {
        if time < self.start {
            return None;
        }
        let duration = self.step.duration();
        if duration <= f32::EPSILON {
            return Some(1.0);
        }
        Some(((time - self.start) / duration).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<ScheduledStep>,
    duration: f32,
}

impl Timeline {
    pub fn new(steps: Vec<Step>) -> Self {
        let mut cursor = 0.0;
        let entries: Vec<ScheduledStep> = steps
            .into_iter()
            .map(|step| {
                let start = cursor;
                cursor += step.duration();
                ScheduledStep { start, step }
            })
            .collect();

        Self {
            entries,
            duration: cursor,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn entries(&self) -> &[ScheduledStep] {
        &self.entries
    }

    pub fn progress_at(&self, index: usize, time: f32) -> Option<f32> {
        self.entries.get(index)?.progress_at(time)
    }

    /// Steps that have started by `time`, in script order, with their progress.
    pub fn started(&self, time: f32) -> impl Iterator<Item = (&ScheduledStep, f32)> {
        self.entries
            .iter()
            .filter_map(move |entry| entry.progress_at(time).map(|p| (entry, p)))
    }

    /// The voltage set by the last `SetVoltage` at or before `time`.
    pub fn voltage_at(&self, time: f32, initial: f32) -> f32 {
        self.started(time)
            .filter_map(|(entry, _)| match entry.step {
                Step::SetVoltage(value) => Some(value),
                _ => None,
            })
            .last()
            .unwrap_or(initial)
    }

    pub fn electrons_released_at(&self) -> Option<f32> {
        self.entries
            .iter()
            .find(|entry| matches!(entry.step, Step::ReleaseElectrons))
            .map(|entry| entry.start)
    }
}
