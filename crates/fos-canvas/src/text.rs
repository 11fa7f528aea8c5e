//! Text Measurement
//!
//! Canvas 2D `measureText` contract. Hosts differ in which advanced metrics
//! they report, so everything beyond `width` is optional.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

/// Text metrics
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Advance width of the measured text
    pub width: f64,
    pub font_bounding_box_ascent: Option<f64>,
    pub font_bounding_box_descent: Option<f64>,
    pub actual_bounding_box_ascent: Option<f64>,
    pub actual_bounding_box_descent: Option<f64>,
}

impl TextMetrics {
    /// Metrics carrying only an advance width
    pub fn with_width(width: f64) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }
}

/// Text measurement
pub trait TextMeasure {
    /// Measure `text` drawn with the CSS `font` shorthand
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        (**self).measure_text(text, font)
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        (**self).measure_text(text, font)
    }
}

/// Canvas default when a font string carries no pixel size
const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Extract the pixel size from a CSS font shorthand (`"italic bold 12px Arial"`)
pub fn font_size_px(font: &str) -> Option<f64> {
    font.split_whitespace()
        .find_map(|part| part.strip_suffix("px"))
        .and_then(|size| size.parse::<f64>().ok())
}

/// Deterministic measurer with a fixed advance per grapheme cluster.
///
/// Advances are expressed in em, so the pixel width scales with the size in
/// the font string. Advanced metrics are reported only when configured,
/// which lets callers exercise both complete and incomplete backends.
#[derive(Debug, Clone)]
pub struct FixedAdvance {
    /// Default advance in em
    advance: f64,
    /// Per-grapheme advance overrides in em
    overrides: HashMap<String, f64>,
    /// Font bounding box (ascent, descent) in em
    font_box: Option<(f64, f64)>,
    /// Actual bounding box (ascent, descent) in em
    actual_box: Option<(f64, f64)>,
}

impl FixedAdvance {
    /// Create a measurer where every grapheme advances `advance` em
    pub fn new(advance: f64) -> Self {
        Self {
            advance,
            overrides: HashMap::new(),
            font_box: None,
            actual_box: None,
        }
    }

    /// Override the advance of one grapheme
    pub fn with_glyph(mut self, grapheme: &str, advance: f64) -> Self {
        self.overrides.insert(grapheme.to_string(), advance);
        self
    }

    /// Report `fontBoundingBoxAscent/Descent`
    pub fn with_font_box(mut self, ascent: f64, descent: f64) -> Self {
        self.font_box = Some((ascent, descent));
        self
    }

    /// Report `actualBoundingBoxAscent/Descent`
    pub fn with_actual_box(mut self, ascent: f64, descent: f64) -> Self {
        self.actual_box = Some((ascent, descent));
        self
    }

    fn advance_of(&self, grapheme: &str) -> f64 {
        self.overrides.get(grapheme).copied().unwrap_or(self.advance)
    }
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl TextMeasure for FixedAdvance {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        let size = font_size_px(font).unwrap_or(DEFAULT_FONT_SIZE);
        let em: f64 = text.graphemes(true).map(|g| self.advance_of(g)).sum();
        TextMetrics {
            width: em * size,
            font_bounding_box_ascent: self.font_box.map(|(a, _)| a * size),
            font_bounding_box_descent: self.font_box.map(|(_, d)| d * size),
            actual_bounding_box_ascent: self.actual_box.map(|(a, _)| a * size),
            actual_bounding_box_descent: self.actual_box.map(|(_, d)| d * size),
        }
    }
}
