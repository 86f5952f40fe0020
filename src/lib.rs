//! Trellis: a layout and connection-routing engine for UML class diagrams.
//!
//! Given a list of typed class records (name, attributes, operations,
//! relationships, notes), trellis sizes and places class boxes on a
//! canvas, routes connectors with UML-correct terminal glyphs, merges
//! shared-parent inheritance edges into generalization trees, places
//! annotation notes without overlap, and projects the result to SVG.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod render;
pub mod text;

use clap::Parser;
use log::{debug, info, trace};
use std::fs;

pub use config::{AppConfig, RenderOptions};
pub use error::{ConfigError, RenderError, TrellisError};
pub use model::ClassSpec;
pub use render::{Scene, render};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Path to the input JSON file with class definitions
    #[arg(help = "Path to the input file")]
    pub file: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Optional TOML file with styling options
    #[arg(short, long)]
    pub config: Option<String>,
}

pub fn run(cfg: &Config) -> Result<(), TrellisError> {
    info!(
        input_path = cfg.file,
        output_path = cfg.output;
        "Rendering class diagram",
    );

    // Reading input file
    let content = fs::read_to_string(&cfg.file)?;
    trace!(content; "File content");

    // Parsing the class records
    info!("Parsing class definitions");
    let classes: Vec<ClassSpec> = serde_json::from_str(&content)?;
    debug!(classes_len = classes.len(); "Parsed class definitions");

    // Styling options come from the TOML config when given
    let options = match &cfg.config {
        Some(path) => AppConfig::load(path)?.render,
        None => RenderOptions::default(),
    };

    // Layout and routing
    info!("Calculating diagram layout");
    let scene = render::render(&classes, &options)?;
    debug!(
        boxes_len = scene.boxes().len(),
        connectors_len = scene.connectors().len(),
        generalizations_len = scene.generalizations().len(),
        notes_len = scene.notes().len();
        "Scene assembled",
    );

    // Export the scene
    info!("Exporting diagram to SVG");
    let svg_exporter = export::svg::Svg::new(&cfg.output);
    svg_exporter.write_document(scene.to_svg_document())?;

    info!(output_file = cfg.output; "SVG exported successfully to");

    Ok(())
}
