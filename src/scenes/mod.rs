pub mod collision;
pub mod frank_hertz;
pub mod stage;

pub use stage::{ElectronSetup, ObjectSnapshot, ObjectState, Snapshot, Stage};

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::{Error, Result};

pub const SCENE_NAMES: [&str; 2] = [frank_hertz::NAME, collision::NAME];

/// Builds the scene named in the config. Electron phase offsets come from
/// an rng seeded with `scene.seed`, so renders are reproducible.
pub fn build(config: &Config) -> Result<Stage> {
    let name = config.scene.name.as_str();
    info!("Building scene '{}'", name);

    match name {
        frank_hertz::NAME => {
            let mut rng = StdRng::seed_from_u64(config.scene.seed);
            Ok(frank_hertz::build(
                config.motion_config()?,
                config.scene.electron_count,
                config.scene.initial_voltage,
                &mut rng,
            ))
        }
        collision::NAME => Ok(collision::build()),
        other => Err(Error::UnknownScene(other.to_string())),
    }
}
