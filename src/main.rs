// src/main.rs
use log::{error, info, warn};
use nannou::prelude::*;
use std::time::Instant;

use frankhertz::{
    config::Config,
    render::SceneRenderer,
    scenes::{self, Stage},
    services::FrameRecorder,
};

struct Model {
    // Scene
    stage: Stage,
    renderer: SceneRenderer,
    background: Rgb,
    frame_duration: f32,

    // Frame recording:
    frame_recorder: FrameRecorder,
    exit_on_finish: bool,
    exit_requested: bool,

    // FPS
    last_update: Instant,
    fps: f32,

    // Debug overlay
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).exit(exit).run();
}

fn fail(message: &str, err: frankhertz::Error) -> ! {
    error!("{}: {}", message, err);
    std::process::exit(1);
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().unwrap_or_else(|e| fail("Failed to load config", e));

    let stage = scenes::build(&config).unwrap_or_else(|e| fail("Failed to build scene", e));

    let mut frame_recorder = FrameRecorder::new(
        &config.resolve_output_dir(),
        config.output.format,
        config.output.frame_limit,
    )
    .unwrap_or_else(|e| fail("Failed to create frame recorder", e));
    if config.output.record_on_start {
        frame_recorder.start();
    }

    // Create window
    let window = app
        .new_window()
        .title(format!("frankhertz {}", stage.name()))
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build();
    if let Err(e) = window {
        error!("Failed to create window: {:?}", e);
        std::process::exit(1);
    }

    let renderer = SceneRenderer::new(
        config.window.width,
        config.rendering.frame_width,
        config.rendering.arc_resolution,
        config.style.default_stroke_weight,
    );

    let [r, g, b] = config.style.background;
    info!(
        "Playing '{}' ({:.1}s at {} fps)",
        stage.name(),
        stage.timeline().duration(),
        config.rendering.fps
    );

    Model {
        stage,
        renderer,
        background: rgb(r, g, b),
        frame_duration: config.frame_duration(),

        frame_recorder,
        exit_on_finish: config.output.exit_on_finish,
        exit_requested: false,

        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        Key::R => model.frame_recorder.toggle_recording(),
        // Restart the scene from the top
        Key::Home => {
            info!("Restarting '{}'", model.stage.name());
            model.stage.reset();
        }
        // Graceful quit that waits for queued captures in the exit handler
        Key::Q => {
            info!(
                "Quitting after {} frames",
                model.frame_recorder.frames_written()
            );
            model.frame_recorder.stop();
            model.exit_requested = true;
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32().max(f32::EPSILON);
    }

    if model.exit_requested {
        app.quit();
        return;
    }

    if model.stage.is_finished() {
        if model.exit_on_finish {
            model.frame_recorder.stop();
            model.exit_requested = true;
        }
        return;
    }

    // The scene advances by one fixed step per frame so captured
    // sequences play back at the configured rate.
    model.stage.tick(model.frame_duration);

    if model.frame_recorder.is_recording() {
        model.frame_recorder.capture_frame(&app.main_window());
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    let snapshot = model.stage.snapshot();
    model.renderer.draw_snapshot(&draw, &snapshot);

    if model.debug_flag {
        draw_debug_overlay(app, &draw, model, snapshot.time, snapshot.voltage);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        warn!("Failed to draw frame: {:?}", e);
    }
}

fn draw_debug_overlay(app: &App, draw: &Draw, model: &Model, time: f32, voltage: f32) {
    let win = app.window_rect();

    // Draw (+,+) axes
    draw.line()
        .points(pt2(0.0, 0.0), pt2(50.0, 0.0))
        .color(RED)
        .stroke_weight(1.0);
    draw.line()
        .points(pt2(0.0, 0.0), pt2(0.0, 50.0))
        .color(BLUE)
        .stroke_weight(1.0);

    let recording = if model.frame_recorder.is_recording() {
        format!("REC {}", model.frame_recorder.frames_written())
    } else {
        String::new()
    };
    let text = format!(
        "FPS: {:.1}\nt = {:.2}s  V = {:.1}\n{}",
        model.fps, time, voltage, recording
    );
    draw.text(&text)
        .x_y(win.left() + 120.0, win.top() - 40.0)
        .color(RED);
}

// Wait for queued frame captures to finish writing before the process exits
fn exit(app: &App, model: Model) {
    if model.frame_recorder.frames_written() == 0 {
        return;
    }
    info!("Waiting for captured frames to be written");
    if app.main_window().await_capture_frame_jobs().is_err() {
        warn!("Timed out waiting for frame captures");
    }
}
