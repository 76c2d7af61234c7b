pub mod electrons;
pub mod motion;
pub mod timeline;

pub use electrons::ElectronCloud;
pub use motion::{ElectronPath, MotionConfig, MotionPhase, ParticleState, Waypoints};
pub use timeline::{Animation, ScheduledStep, Step, Timeline};
