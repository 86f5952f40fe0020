use crate::error::TrellisError;
use log::{error, info};
use std::{fs::File, io::Write};
use svg::Document;

/// Writes rendered SVG documents to disk.
pub struct Svg {
    pub file_name: String,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
        }
    }

    /// Writes an SVG document to the configured file
    pub fn write_document(&self, doc: Document) -> Result<(), TrellisError> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(TrellisError::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(TrellisError::Io(err));
        }

        Ok(())
    }
}
