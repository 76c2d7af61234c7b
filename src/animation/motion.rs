// src/animation/motion.rs
//
// Electron motion along the cathode -> anode -> collector path.
// Each cycle has two phases: quadratic acceleration up to the anode grid,
// then uniform drift to the collector. The cycle then wraps back to the cathode.

use nannou::prelude::*;

use crate::error::{Error, Result};

pub const DEFAULT_CYCLE_TIME: f32 = 3.0;
pub const DEFAULT_ACCEL_FRACTION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    cycle_time: f32,
    accel_fraction: f32,
}

impl MotionConfig {
    /// `cycle_time` must be positive and `accel_fraction` strictly inside (0, 1),
    /// otherwise the phase normalization would divide by zero.
    pub fn new(cycle_time: f32, accel_fraction: f32) -> Result<Self> {
        if !(cycle_time.is_finite() && cycle_time > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "cycle_time must be positive, got {}",
                cycle_time
            )));
        }
        if !(accel_fraction > 0.0 && accel_fraction < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "accel_fraction must be between 0 and 1 (exclusive), got {}",
                accel_fraction
            )));
        }
        Ok(Self {
            cycle_time,
            accel_fraction,
        })
    }

    pub fn cycle_time(&self) -> f32 {
        self.cycle_time
    }

    pub fn accel_fraction(&self) -> f32 {
        self.accel_fraction
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            cycle_time: DEFAULT_CYCLE_TIME,
            accel_fraction: DEFAULT_ACCEL_FRACTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoints {
    pub start: Point2, // cathode
    pub mid: Point2,   // anode
    pub end: Point2,   // collector
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Accelerating,
    Drifting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    elapsed: f32,
    phase_offset: f32,
    position: Point2,
}

impl ParticleState {
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn phase_offset(&self) -> f32 {
        self.phase_offset
    }

    pub fn position(&self) -> Point2 {
        self.position
    }
}

/// The fixed path shared by every electron of a scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronPath {
    waypoints: Waypoints,
    config: MotionConfig,
}

impl ElectronPath {
    pub fn new(waypoints: Waypoints, config: MotionConfig) -> Self {
        Self { waypoints, config }
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Creates a particle at the start of its timer. Its position is already
    /// on the path, at the point its phase offset selects.
    pub fn spawn(&self, phase_offset: f32) -> ParticleState {
        let mut state = ParticleState {
            elapsed: 0.0,
            phase_offset,
            position: self.waypoints.start,
        };
        state.position = self.position_at(self.phase_of(&state));
        state
    }

    /// Advances `state` by `dt * speed` and returns the new position.
    /// At zero speed the particle is frozen: neither its timer nor its position move.
    pub fn update(&self, state: &mut ParticleState, dt: f32, speed: f32) -> Point2 {
        if speed == 0.0 {
            return state.position;
        }

        state.elapsed += dt * speed;
        state.position = self.position_at(self.phase_of(state));
        state.position
    }

    /// Normalized cycle phase in [0, 1).
    pub fn phase_of(&self, state: &ParticleState) -> f32 {
        let cycle_time = self.config.cycle_time;
        let effective_time = (state.elapsed + state.phase_offset).rem_euclid(cycle_time);
        let phase = effective_time / cycle_time;
        // rem_euclid can round up to exactly cycle_time for tiny negative inputs
        if phase >= 1.0 {
            0.0
        } else {
            phase
        }
    }

    pub fn motion_phase(&self, state: &ParticleState) -> MotionPhase {
        self.motion_phase_at(self.phase_of(state))
    }

    pub fn motion_phase_at(&self, phase: f32) -> MotionPhase {
        if phase < self.config.accel_fraction {
            MotionPhase::Accelerating
        } else {
            MotionPhase::Drifting
        }
    }

    /// Position on the path for a normalized phase.
    pub fn position_at(&self, phase: f32) -> Point2 {
        let accel = self.config.accel_fraction;
        let Waypoints { start, mid, end } = self.waypoints;

        match self.motion_phase_at(phase) {
            MotionPhase::Accelerating => {
                let t = phase / accel;
                start + (mid - start) * (t * t)
            }
            MotionPhase::Drifting => {
                let t = (phase - accel) / (1.0 - accel);
                mid + (end - mid) * t
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: Point2, b: Point2) -> bool {
        (a - b).length() < EPSILON
    }

    fn tube_path() -> ElectronPath {
        ElectronPath::new(
            Waypoints {
                start: pt2(-3.2, 0.0),
                mid: pt2(0.0, 0.0),
                end: pt2(3.0, 0.0),
            },
            MotionConfig::default(),
        )
    }

    fn state_with_elapsed(path: &ElectronPath, elapsed: f32, offset: f32) -> ParticleState {
        let mut state = path.spawn(offset);
        path.update(&mut state, elapsed, 1.0);
        state
    }

    mod config_tests {
        use super::*;

        #[test]
        fn test_motion_config_validation() {
            let tests = vec![
                // (cycle_time, accel_fraction, valid)
                (3.0, 0.5, true),
                (0.1, 0.01, true),
                (0.0, 0.5, false),
                (-1.0, 0.5, false),
                (3.0, 0.0, false),
                (3.0, 1.0, false),
                (3.0, 1.5, false),
                (f32::NAN, 0.5, false),
            ];

            for (cycle_time, accel_fraction, valid) in tests {
                let result = MotionConfig::new(cycle_time, accel_fraction);
                assert_eq!(
                    result.is_ok(),
                    valid,
                    "Failed for cycle_time:{}, accel_fraction:{}",
                    cycle_time,
                    accel_fraction
                );
            }
        }
    }

    mod update_tests {
        use super::*;

        #[test]
        fn test_acceleration_quarter_cycle() {
            let path = tube_path();
            let state = state_with_elapsed(&path, 0.75, 0.0);
            assert!((path.phase_of(&state) - 0.25).abs() < EPSILON);
            assert_eq!(path.motion_phase(&state), MotionPhase::Accelerating);
            assert!(approx_eq(state.position(), pt2(-2.4, 0.0)));
        }

        #[test]
        fn test_drift_three_quarter_cycle() {
            let path = tube_path();
            let state = state_with_elapsed(&path, 2.25, 0.0);
            assert!((path.phase_of(&state) - 0.75).abs() < EPSILON);
            assert_eq!(path.motion_phase(&state), MotionPhase::Drifting);
            assert!(approx_eq(state.position(), pt2(1.5, 0.0)));
        }

        #[test]
        fn test_accumulates_scaled_time() {
            let path = tube_path();
            let mut state = path.spawn(0.0);
            for _ in 0..10 {
                path.update(&mut state, 0.05, 1.5);
            }
            assert!((state.elapsed() - 0.75).abs() < EPSILON);
        }

        #[test]
        fn test_freeze_at_zero_speed() {
            let path = tube_path();
            let mut state = state_with_elapsed(&path, 1.1, 0.4);
            let frozen = state.clone();

            for _ in 0..20 {
                let position = path.update(&mut state, 1.0 / 30.0, 0.0);
                assert_eq!(position, frozen.position());
            }
            assert_eq!(state, frozen);
        }

        #[test]
        fn test_phase_offset_staggers_particles() {
            let path = tube_path();
            // an offset of 0.75 puts a fresh particle where elapsed 0.75 would
            let staggered = path.spawn(0.75);
            assert!(approx_eq(staggered.position(), pt2(-2.4, 0.0)));

            let fresh = path.spawn(0.0);
            assert!(approx_eq(fresh.position(), pt2(-3.2, 0.0)));
        }

        #[test]
        fn test_periodicity() {
            let path = tube_path();
            let cycle = path.config().cycle_time();
            for elapsed in [0.1, 0.9, 1.5, 2.2, 2.95] {
                let a = state_with_elapsed(&path, elapsed, 0.3);
                let b = state_with_elapsed(&path, elapsed + cycle, 0.3);
                assert!(
                    approx_eq(a.position(), b.position()),
                    "Failed for elapsed:{}",
                    elapsed
                );
            }
        }
    }

    mod phase_tests {
        use super::*;

        #[test]
        fn test_phase_always_in_unit_interval() {
            let path = tube_path();
            let mut state = path.spawn(2.9);
            for _ in 0..500 {
                path.update(&mut state, 0.037, 2.0);
                let phase = path.phase_of(&state);
                assert!((0.0..1.0).contains(&phase), "phase out of range: {}", phase);
            }
        }

        #[test]
        fn test_segment_formulas() {
            let path = tube_path();
            let Waypoints { start, mid, end } = *path.waypoints();
            let accel = path.config().accel_fraction();

            for i in 0..100 {
                let phase = i as f32 / 100.0;
                let expected = if phase < accel {
                    let t = phase / accel;
                    start + (mid - start) * t * t
                } else {
                    let t = (phase - accel) / (1.0 - accel);
                    mid + (end - mid) * t
                };
                assert!(
                    approx_eq(path.position_at(phase), expected),
                    "Failed for phase:{}",
                    phase
                );
            }
        }

        #[test]
        fn test_continuous_at_anode() {
            let path = tube_path();
            let accel = path.config().accel_fraction();
            let at_anode = path.position_at(accel);
            assert!(approx_eq(at_anode, path.waypoints().mid));

            let just_before = path.position_at(accel - 1e-5);
            assert!(approx_eq(just_before, at_anode));
        }

        #[test]
        fn test_wraps_to_cathode() {
            let path = tube_path();
            let near_end = path.position_at(1.0 - 1e-6);
            assert!(approx_eq(near_end, path.waypoints().end));
            assert!(approx_eq(path.position_at(0.0), path.waypoints().start));
        }

        #[test]
        fn test_position_stays_on_polyline() {
            let path = ElectronPath::new(
                Waypoints {
                    start: pt2(-3.0, 1.0),
                    mid: pt2(0.0, -1.0),
                    end: pt2(2.0, 2.0),
                },
                MotionConfig::new(2.0, 0.3).unwrap(),
            );
            let Waypoints { start, mid, end } = *path.waypoints();

            let on_segment = |p: Point2, a: Point2, b: Point2| {
                let ab = b - a;
                let t = (p - a).dot(ab) / ab.length_squared();
                (0.0 - EPSILON..=1.0 + EPSILON).contains(&t) && approx_eq(a + ab * t, p)
            };

            for i in 0..200 {
                let p = path.position_at(i as f32 / 200.0);
                assert!(on_segment(p, start, mid) || on_segment(p, mid, end));
            }
        }
    }
}
