// Copyright 2025 the Bezedit Authors
// SPDX-License-Identifier: Apache-2.0

//! Bezedit: an interactive cubic bezier path editing core
//!
//! A [`path::BezierPath`] is edited through an [`editing::EditSession`],
//! which keeps the anchors in the object's local space while editing,
//! draws handles through a host [`canvas::Canvas`], and rebuilds the
//! path geometry after every change.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

pub mod canvas;
pub mod config;
pub mod editing;
pub mod error;
pub mod geometry;
pub mod model;
pub mod path;
pub mod script;
pub mod settings;
pub mod theme;

use canvas::SceneCanvas;
use config::EditorConfig;
use editing::EditSession;
use path::BezierPath;

/// Entry point for the headless driver
pub fn run() -> Result<()> {
    // Can be controlled via RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bezedit=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = handle_command_line_args()?;

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::default(),
    };
    let path = load_path(&args.path)?;

    let commands = match &args.script {
        Some(script) => {
            let text = std::fs::read_to_string(script)
                .with_context(|| format!("Failed to read script {}", script.display()))?;
            script::parse_script(&text)
                .with_context(|| format!("Failed to parse script {}", script.display()))?
        }
        None => Vec::new(),
    };

    let mut session = EditSession::with_config(SceneCanvas::new(), config);
    session.activate(path);
    let report = script::execute(&mut session, &commands);
    tracing::info!(
        "Script finished: {} applied, {} rejected",
        report.applied,
        report.rejected
    );

    let Some(path) = session.deactivate() else {
        bail!("Edit session ended without a path");
    };
    println!("{}", path.path_data());
    println!("{}", path.to_json()?);
    Ok(())
}

struct Args {
    path: PathBuf,
    script: Option<PathBuf>,
    config: Option<PathBuf>,
}

const USAGE: &str = "Usage: bezedit <path.json|path.txt> [script] [--config cfg.toml]";

/// Handle command-line arguments: a path file, an optional script and
/// an optional config file
fn handle_command_line_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut config = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let Some(value) = args.next() else {
                bail!("--config needs a file\n{}", USAGE);
            };
            config = Some(PathBuf::from(value));
        } else {
            positional.push(PathBuf::from(arg));
        }
    }

    let mut positional = positional.into_iter();
    let Some(path) = positional.next() else {
        bail!(USAGE);
    };
    let script = positional.next();
    if positional.next().is_some() {
        bail!("Too many arguments\n{}", USAGE);
    }

    Ok(Args {
        path,
        script,
        config,
    })
}

/// Load a path from JSON, or from path data if the file is not JSON
fn load_path(file: &Path) -> Result<BezierPath> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read path file {}", file.display()))?;

    let path = if text.trim_start().starts_with('{') {
        BezierPath::from_json(&text)
    } else {
        BezierPath::from_path_data(&text)
    }
    .with_context(|| format!("Failed to load path from {}", file.display()))?;

    tracing::info!("Loaded path {} from {}", path.id, file.display());
    Ok(path)
}
