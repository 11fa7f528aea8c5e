//! Vertical metrics
//!
//! Hosts do not all report the advanced `measureText` fields. Missing ones
//! are replaced by constants taken from a typical sans-serif face, scaled by
//! the font size, so baselines stay stable across hosts.

use fos_canvas::{TextMeasure, TextMetrics};

/// Fallback font bounding box ascent per 100px of font size
pub const FALLBACK_FONT_ASCENT: f64 = 91.0;
/// Fallback font bounding box descent per 100px of font size
pub const FALLBACK_FONT_DESCENT: f64 = 21.0;
/// Fallback actual bounding box ascent per 100px of font size
pub const FALLBACK_ACTUAL_ASCENT: f64 = 71.58203125;
/// Fallback actual bounding box descent per 100px of font size
pub const FALLBACK_ACTUAL_DESCENT: f64 = 0.0;

/// Glyph measured to obtain line metrics
pub const METRICS_PROBE: &str = "M";

fn scaled(per_hundred: f64, font_size: f64) -> f64 {
    per_hundred * font_size / 100.0
}

/// Ascent and descent used to place a baseline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    pub ascent: f64,
    pub descent: f64,
}

impl VerticalMetrics {
    /// Resolve from a measurement: font box, else actual box, else fallback
    pub fn resolve(metrics: &TextMetrics, font_size: f64) -> Self {
        let ascent = metrics
            .font_bounding_box_ascent
            .or(metrics.actual_bounding_box_ascent)
            .unwrap_or_else(|| scaled(FALLBACK_FONT_ASCENT, font_size));
        let descent = metrics
            .font_bounding_box_descent
            .or(metrics.actual_bounding_box_descent)
            .unwrap_or_else(|| scaled(FALLBACK_FONT_DESCENT, font_size));
        Self { ascent, descent }
    }

    /// Offset from the top of a line slot to its alphabetic baseline
    pub fn offset_y(&self, font_size: f64, line_height: f64) -> f64 {
        let line_height = if line_height > 0.0 { line_height } else { 1.0 };
        (self.ascent - self.descent) / 2.0 + font_size * line_height / 2.0
    }
}

/// Baseline offset inside a line slot for the given measurement
pub fn resolve_offset_y(metrics: &TextMetrics, font_size: f64, line_height: f64) -> f64 {
    VerticalMetrics::resolve(metrics, font_size).offset_y(font_size, line_height)
}

/// Measure the probe glyph and resolve its baseline offset
pub fn measure_offset_y<M: TextMeasure + ?Sized>(
    measure: &M,
    font: &str,
    font_size: f64,
    line_height: f64,
) -> f64 {
    let metrics = measure.measure_text(METRICS_PROBE, font);
    resolve_offset_y(&metrics, font_size, line_height)
}

/// Size of a string with every advanced metric filled in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasuredSize {
    pub width: f64,
    /// Always the font size
    pub height: f64,
    pub font_bounding_box_ascent: f64,
    pub font_bounding_box_descent: f64,
    pub actual_bounding_box_ascent: f64,
    pub actual_bounding_box_descent: f64,
}

impl MeasuredSize {
    /// Measure `text` and substitute fallbacks for absent fields
    pub fn measure<M: TextMeasure + ?Sized>(
        measure: &M,
        text: &str,
        font: &str,
        font_size: f64,
    ) -> Self {
        let metrics = measure.measure_text(text, font);
        Self {
            width: metrics.width,
            height: font_size,
            font_bounding_box_ascent: metrics
                .font_bounding_box_ascent
                .unwrap_or_else(|| scaled(FALLBACK_FONT_ASCENT, font_size)),
            font_bounding_box_descent: metrics
                .font_bounding_box_descent
                .unwrap_or_else(|| scaled(FALLBACK_FONT_DESCENT, font_size)),
            actual_bounding_box_ascent: metrics
                .actual_bounding_box_ascent
                .unwrap_or_else(|| scaled(FALLBACK_ACTUAL_ASCENT, font_size)),
            actual_bounding_box_descent: metrics
                .actual_bounding_box_descent
                .unwrap_or_else(|| scaled(FALLBACK_ACTUAL_DESCENT, font_size)),
        }
    }
}
