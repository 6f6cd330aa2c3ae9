mod config;
mod frame_loop;
mod input;
mod movement;
mod report;
mod scene;

use anyhow::Context;
use backend::diag::DiagnosticLog;
use backend::pacing::FramePacer;
use backend::pixels::PixelBuffer;
use backend::system::System;
use clap::Parser;
use log::{info, warn};

use crate::config::{Cli, Config};
use crate::scene::Scene;

fn open_diagnostic_log(config: &Config) -> anyhow::Result<Option<DiagnosticLog>> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(None);
    };
    let log = DiagnosticLog::create(path)
        .with_context(|| format!("cannot open diagnostic log {}", path.display()))?;
    Ok(Some(log))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_cli(&Cli::parse());
    info!("starting with {config:?}");

    let diag = open_diagnostic_log(&config).unwrap_or_else(|e| {
        warn!("{e:#}, running without it");
        None
    });
    let note = |text: &str| {
        if let Some(diag) = &diag {
            diag.note(text);
        }
    };

    note(&report::window_opening(config.screen_w, config.screen_h));
    let mut system = match System::new(config.title, config.screen_w, config.screen_h) {
        Ok(s) => s,
        Err(msg) => panic!("Game initialization failure: {msg}"),
    };
    note("OK\n");
    note(&report::renderer_info(&system.renderer_info()));

    let mut frame = PixelBuffer::new(config.screen_w, config.screen_h);
    let mut scene = Scene::new(&config);
    let mut pacer = FramePacer::new(config.frame_interval);

    let trace = |text: &str| {
        if config.trace_position {
            note(text);
        }
    };
    match frame_loop::run(&mut system, &mut scene, &mut frame, &mut pacer, trace) {
        Ok(frames) => info!("bye after {frames} frames"),
        Err(msg) => panic!("Presentation failure: {msg}"),
    }
}
