pub mod animation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod scenes;
pub mod services;
pub mod utilities;

pub use error::{Error, Result};
