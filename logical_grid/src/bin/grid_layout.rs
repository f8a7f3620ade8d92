// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Lay out a grid described by a JSON scene file, and print the preferred size and the
//! bounds of every visible component as JSON. See [`r3bl_logical_grid::Scene`] for the
//! format of the scene file.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use miette::IntoDiagnostic;
use r3bl_logical_grid::{CommonResult, DisplayPreference, LayoutError, Scene,
                        TracingConfig, WriterConfig, init_tracing, throws};
use tracing_core::LevelFilter;

#[derive(Debug, Parser)]
#[command(bin_name = "grid_layout")]
#[command(about = "📐 Lay out a logical grid described by a JSON scene file")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(value_name = "scene.json", help = "Path to the scene file")]
    pub scene_file: PathBuf,

    #[arg(long, short = 'w', help = "Container width, overrides the scene's size")]
    pub width: Option<i32>,

    #[arg(long, short = 'H', help = "Container height, overrides the scene's size")]
    pub height: Option<i32>,

    #[arg(long, short = 'p', help = "Only print the preferred size (at --width, if given)")]
    pub pref_only: bool,

    #[arg(long, short = 'l', help = "Log to this file, in addition to stderr")]
    pub log_file: Option<String>,

    #[arg(long, value_enum, default_value_t = LogLevel::Off, help = "Log level")]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[allow(clippy::needless_return)]
fn main() -> CommonResult<()> {
    throws!({
        let cli_arg = CLIArg::parse();

        // Logs go to stderr, stdout is reserved for the JSON output.
        if cli_arg.log_level != LogLevel::Off {
            let writer_config = match cli_arg.log_file.clone() {
                Some(path) => WriterConfig::DisplayAndFile(DisplayPreference::Stderr, path),
                None => WriterConfig::Display(DisplayPreference::Stderr),
            };
            init_tracing(
                TracingConfig::new_display(DisplayPreference::Stderr)
                    .with_writer_config(writer_config)
                    .with_level_filter(cli_arg.log_level.into()),
            )?;
            // % is Display, ? is Debug.
            tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
        }

        let json = std::fs::read_to_string(&cli_arg.scene_file).map_err(|err| {
            LayoutError::InvalidScene {
                reason: format!("{}: {err}", cli_arg.scene_file.display()),
            }
        })?;
        let scene = Scene::try_from_json_str(&json)?;

        let output = if cli_arg.pref_only {
            serde_json::to_string_pretty(&scene.pref_size(cli_arg.width)?)
        } else {
            serde_json::to_string_pretty(&scene.layout(cli_arg.width, cli_arg.height)?)
        }
        .into_diagnostic()?;
        println!("{output}");
    });
}
