//! Exporters: SVG file output and the PlantUML text projection.

pub mod plantuml;
pub mod svg;
