//! Text measurement for box sizing.
//!
//! Measurement goes through a shared cosmic-text `FontSystem`; creating a
//! font system is expensive, so one instance is reused for the whole
//! process behind a mutex. Measurement is read-only and renders nothing.

use crate::geometry::{Insets, Size};
use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use std::sync::{Arc, Mutex};

/// Font family used for measurement and rendering.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";

/// Hard cap on measured text width. Longer lines report this width and are
/// expected to clip when drawn; no wrapping is performed.
pub const MAX_BOX_WIDTH: f32 = 250.0;

/// Horizontal padding added on each side of a measured text block.
pub const TEXT_H_PADDING: f32 = 10.0;

/// Vertical padding added above and below a measured text block.
pub const TEXT_V_PADDING: f32 = 6.0;

/// Conversion from point-size to pixels at standard DPI.
const PX_PER_POINT: f32 = 1.33;

/// Line height as a multiple of the pixel font size.
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Measures text dimensions using real font metrics.
///
/// Maintains a reusable `FontSystem` instance to avoid expensive recreation.
pub struct TextMeasurer {
    font_system: Arc<Mutex<FontSystem>>,
}

impl Default for TextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Arc::new(Mutex::new(FontSystem::new())),
        }
    }

    /// Returns the fixed height of one text line at the given font size.
    pub fn line_height(&self, font_size: u16) -> f32 {
        font_size as f32 * PX_PER_POINT * LINE_HEIGHT_FACTOR
    }

    /// Measures a single line of text in pixels, without padding.
    ///
    /// The reported width never exceeds [`MAX_BOX_WIDTH`]. When the font
    /// system produces no layout runs (e.g. no fonts installed), a
    /// character-count estimate keeps measurement deterministic.
    pub fn measure_line(&self, text: &str, font_size: u16) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().unwrap();

        let font_size_px = font_size as f32 * PX_PER_POINT;
        let line_height = font_size_px * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size_px, line_height);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(DEFAULT_FONT_FAMILY));

        // Unlimited buffer size so the line is measured unwrapped.
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            // Estimate when no glyph layout is available.
            max_width = text.len() as f32 * (font_size_px * 0.55);
            total_height = line_height;
        } else {
            for run in &layout_runs {
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += line_height;
            }
        }

        Size::new(max_width.min(MAX_BOX_WIDTH), total_height)
    }

    /// Measures a multi-line block, including the fixed block padding.
    ///
    /// Width is the widest line plus horizontal padding, capped at
    /// [`MAX_BOX_WIDTH`]; height is one [`line_height`](Self::line_height)
    /// per line (blank lines included) plus vertical padding. Empty text
    /// measures as zero with no padding at all.
    pub fn measure_block(&self, text: &str, font_size: u16) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let line_height = self.line_height(font_size);
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        for line in text.lines() {
            let line_size = self.measure_line(line, font_size);
            max_width = max_width.max(line_size.width());
            total_height += line_height;
        }

        let padded =
            Size::new(max_width, total_height).add_padding(Insets::symmetric(TEXT_H_PADDING, TEXT_V_PADDING));

        Size::new(padded.width().min(MAX_BOX_WIDTH), padded.height())
    }
}

lazy_static::lazy_static! {
    /// Shared measurer used by all drawables in this process.
    pub static ref TEXT_MEASURER: TextMeasurer = TextMeasurer::new();
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn block_width_never_exceeds_the_cap(text in "[a-zA-Z0-9 ]{0,300}") {
            let size = TEXT_MEASURER.measure_block(&text, 12);
            prop_assert!(size.width() <= MAX_BOX_WIDTH);
        }
    }
}
