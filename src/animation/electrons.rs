// src/animation/electrons.rs
//
// A group of electrons sharing one path, each with its own timer and phase offset.

use log::debug;
use nannou::prelude::*;
use rand::Rng;

use super::motion::{ElectronPath, ParticleState};

#[derive(Debug, Clone)]
pub struct ElectronCloud {
    path: ElectronPath,
    particles: Vec<ParticleState>,
}

impl ElectronCloud {
    /// Phase offsets are drawn uniformly from [0, cycle_time) so the electrons
    /// are staggered along the path. Pass a seeded rng for reproducible output.
    pub fn spawn<R: Rng>(path: ElectronPath, count: usize, rng: &mut R) -> Self {
        let cycle_time = path.config().cycle_time();
        let particles: Vec<ParticleState> = (0..count)
            .map(|_| path.spawn(rng.gen_range(0.0..cycle_time)))
            .collect();

        debug!("Spawned {} electrons (cycle time {})", count, cycle_time);

        Self { path, particles }
    }

    /// One tick for every electron, in order. `speed` is the current voltage.
    pub fn update(&mut self, dt: f32, speed: f32) {
        for particle in self.particles.iter_mut() {
            self.path.update(particle, dt, speed);
        }
    }

    pub fn positions(&self) -> Vec<Point2> {
        self.particles.iter().map(|p| p.position()).collect()
    }

    pub fn particles(&self) -> &[ParticleState] {
        &self.particles
    }

    pub fn path(&self) -> &ElectronPath {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
