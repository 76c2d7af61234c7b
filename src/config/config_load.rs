// src/config/config_load.rs
//
// loading to config.toml

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::config_types::*;
use crate::animation::MotionConfig;
use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub style: StyleConfig,
    pub scene: SceneConfig,
    pub motion: MotionSettings,
    pub output: OutputConfig,
}

impl Config {
    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(Path::new("config.toml"))
    }

    fn load_from_exe_dir() -> Option<Result<Self>> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");

        if config_path.exists() {
            Some(Self::load_from_path(&config_path))
        } else {
            None
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.motion_config()?;

        if self.rendering.fps == 0 {
            return Err(Error::InvalidConfig("rendering.fps must be at least 1".into()));
        }
        if self.rendering.frame_width <= 0.0 {
            return Err(Error::InvalidConfig(
                "rendering.frame_width must be positive".into(),
            ));
        }
        if self.scene.initial_voltage < 0.0 {
            return Err(Error::InvalidConfig(
                "scene.initial_voltage must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn motion_config(&self) -> Result<MotionConfig> {
        MotionConfig::new(self.motion.cycle_time, self.motion.accel_fraction)
    }

    /// Fixed simulation step in seconds.
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.rendering.fps as f32
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        if Path::new(&self.output.directory).is_absolute() {
            PathBuf::from(&self.output.directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .map(|exe_dir| exe_dir.join(&self.output.directory))
                .unwrap_or_else(|| PathBuf::from(&self.output.directory))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [window]
        width = 1280
        height = 720

        [rendering]
        frame_width = 14.222
        fps = 30
        arc_resolution = 48

        [style]
        default_stroke_weight = 4.0

        [scene]
        name = "frank_hertz"
        seed = 7

        [motion]
        cycle_time = 3.0
        accel_fraction = 0.5

        [output]
        directory = "frames"
        format = "jpg"
    "#;

    #[test]
    fn test_parse_with_defaults() {
        let config = Config::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.scene.name, "frank_hertz");
        assert_eq!(config.scene.electron_count, 10);
        assert_eq!(config.scene.initial_voltage, 1.0);
        assert_eq!(config.style.background, [0.0, 0.0, 0.0]);
        assert_eq!(config.output.format, ImageFormat::Jpg);
        assert_eq!(config.output.frame_limit, 0);
        assert!(!config.output.record_on_start);
        assert!((config.frame_duration() - 1.0 / 30.0).abs() < 1e-6);

        let motion = config.motion_config().unwrap();
        assert_eq!(motion.cycle_time(), 3.0);
        assert_eq!(motion.accel_fraction(), 0.5);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let tests = vec![
            ("accel_fraction = 0.5", "accel_fraction = 1.0"),
            ("cycle_time = 3.0", "cycle_time = 0.0"),
            ("fps = 30", "fps = 0"),
            ("frame_width = 14.222", "frame_width = -1.0"),
            ("seed = 7", "seed = 7\ninitial_voltage = -2.0"),
        ];

        for (from, to) in tests {
            let content = SAMPLE.replace(from, to);
            match Config::from_toml_str(&content) {
                Err(Error::InvalidConfig(_)) => {}
                other => panic!("Expected InvalidConfig for '{}', got {:?}", to, other),
            }
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = Config::from_toml_str("[window\nwidth = ");
        assert!(matches!(result, Err(Error::Parse(_))));

        let missing_section = SAMPLE.replace("[motion]", "[unused]");
        assert!(matches!(
            Config::from_toml_str(&missing_section),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_path(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_absolute_output_dir() {
        let mut config = Config::from_toml_str(SAMPLE).unwrap();
        config.output.directory = "/tmp/frames".to_string();
        assert_eq!(config.resolve_output_dir(), PathBuf::from("/tmp/frames"));
    }
}
