use std::path::PathBuf;
use std::time::Duration;

use backend::pixels::Color;
use clap::{Parser, ValueEnum};

pub const DEFAULT_LOG_FILE: &str = "log.txt";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 800x800, debug LED and diagnostic log
    Tall,
    /// 800x400, no debug LED
    Wide,
}

#[derive(Parser, Debug)]
#[command(name = "hjkl", about = "Move a square around with h, j, k and l")]
pub struct Cli {
    /// Screen layout and colors
    #[arg(long, value_enum, default_value_t = Preset::Tall)]
    pub preset: Preset,

    /// Diagnostic log file, truncated at start
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Do not write a diagnostic log
    #[arg(long, conflicts_with = "log_file")]
    pub no_log: bool,

    /// Append the square position to the diagnostic log on every move
    #[arg(long)]
    pub trace_position: bool,

    /// Target frame interval in milliseconds
    #[arg(long)]
    pub frame_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub title: &'static str,
    pub screen_w: usize,
    pub screen_h: usize,
    pub background: Color,
    pub me_color: Color,
    pub led_normal: Color,
    pub led_wrapped: Color,
    pub debug_led: bool,
    pub frame_interval: Duration,
    pub log_file: Option<PathBuf>,
    pub trace_position: bool,
}

impl Config {
    pub fn tall() -> Config {
        Config {
            title: "h,j,k,l",
            screen_w: 800,
            screen_h: 800,
            background: Color(0x111100FF),
            me_color: Color(0x22FF00FF),
            led_normal: Color(0x00FF0000),
            led_wrapped: Color(0xFF000000),
            debug_led: true,
            frame_interval: Duration::from_millis(15),
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            trace_position: false,
        }
    }

    pub fn wide() -> Config {
        Config {
            title: "h,j,k,l",
            screen_w: 800,
            screen_h: 400,
            background: Color(0x000000FF),
            me_color: Color(0xFFAA00FF),
            led_normal: Color(0x00FF0000),
            led_wrapped: Color(0xFF000000),
            debug_led: false,
            frame_interval: Duration::from_millis(15),
            log_file: None,
            trace_position: false,
        }
    }

    pub fn preset(preset: Preset) -> Config {
        match preset {
            Preset::Tall => Config::tall(),
            Preset::Wide => Config::wide(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Config {
        let mut config = Config::preset(cli.preset);
        if cli.no_log {
            config.log_file = None;
        } else if let Some(path) = &cli.log_file {
            config.log_file = Some(path.clone());
        }
        if let Some(ms) = cli.frame_ms {
            config.frame_interval = Duration::from_millis(ms);
        }
        config.trace_position = cli.trace_position;
        config
    }
}
