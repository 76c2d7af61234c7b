// src/services/frame_recorder.rs
// FrameRecorder writes rendered frames to a numbered image sequence for video editing.
// Encoding happens on nannou's capture threads so the update loop isn't blocked.

use log::{info, warn};
use nannou::window::Window;
use std::path::{Path, PathBuf};

use crate::config::ImageFormat;
use crate::error::Result;

pub struct FrameRecorder {
    output_dir: PathBuf,
    format: ImageFormat,
    frame_limit: u32, // 0 = unlimited
    frames_written: u32,
    is_recording: bool,
}

impl FrameRecorder {
    pub fn new(output_dir: &Path, format: ImageFormat, frame_limit: u32) -> Result<Self> {
        // Ensure output directory exists
        std::fs::create_dir_all(output_dir)?;

        Ok(Self {
            output_dir: output_dir.to_path_buf(),
            format,
            frame_limit,
            frames_written: 0,
            is_recording: false,
        })
    }

    pub fn toggle_recording(&mut self) {
        if self.is_recording {
            self.stop();
        } else {
            self.start();
        }
    }

    pub fn start(&mut self) {
        if self.limit_reached() {
            warn!(
                "Frame limit of {} reached, not recording",
                self.frame_limit
            );
            return;
        }
        self.is_recording = true;
        info!("Recording frames to {}", self.output_dir.display());
    }

    pub fn stop(&mut self) {
        if self.is_recording {
            self.is_recording = false;
            info!("Recording stopped after {} frames", self.frames_written);
        }
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn frames_written(&self) -> u32 {
        self.frames_written
    }

    fn limit_reached(&self) -> bool {
        self.frame_limit != 0 && self.frames_written >= self.frame_limit
    }

    pub fn frame_path(&self, frame_number: u32) -> PathBuf {
        self.output_dir.join(format!(
            "frame_{:05}.{}",
            frame_number,
            self.format.extension()
        ))
    }

    /// Reserves the path for the next frame, or None when not recording.
    /// Recording stops by itself once the frame limit is hit.
    pub fn next_frame_path(&mut self) -> Option<PathBuf> {
        if !self.is_recording {
            return None;
        }
        if self.limit_reached() {
            info!("Frame limit of {} reached", self.frame_limit);
            self.stop();
            return None;
        }

        self.frames_written += 1;
        Some(self.frame_path(self.frames_written))
    }

    /// Queues a capture of the window's next frame.
    pub fn capture_frame(&mut self, window: &Window) {
        if let Some(path) = self.next_frame_path() {
            window.capture_frame(path);
        }
    }
}
