//! Text layout module

mod ellipsis;
mod justify;
mod line;
mod paragraph;
mod tokenize;

pub use ellipsis::{longest_prefix, truncate, ELLIPSIS};
pub use justify::{compute_word_gap, should_justify, word_gap_starts};
pub use line::{BrokenLine, LineBreaker};
pub use paragraph::ParagraphLayout;
pub use tokenize::{tokenize, Token};

use unicode_segmentation::UnicodeSegmentation;

use crate::style::StyleConfig;

/// A laid out line of text
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOutLine {
    /// Text drawn for this line, ellipsis included
    pub text: String,
    /// Advance width including letter spacing
    pub width: f64,
    /// Last line of its paragraph (never justified)
    pub last_in_paragraph: bool,
    /// This line received the ellipsis
    pub truncated: bool,
}

impl LaidOutLine {
    pub fn new(text: impl Into<String>, width: f64, last_in_paragraph: bool) -> Self {
        Self {
            text: text.into(),
            width,
            last_in_paragraph,
            truncated: false,
        }
    }

    /// Number of grapheme clusters in the line
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }
}

/// Complete text layout result
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    /// Lines of text
    pub lines: Vec<LaidOutLine>,
    /// Width of the widest line
    pub text_width: f64,
    /// Height of one line of text (the font size)
    pub text_height: f64,
    /// Height of one line slot
    pub line_height_px: f64,
    /// Box width, fixed or sized to content
    pub width: f64,
    /// Box height, fixed or sized to content
    pub height: f64,
    pub padding: f64,
    /// Box width inside the padding
    pub available_width: f64,
    /// CSS font shorthand the lines were measured with
    pub font: String,
}

impl TextLayout {
    /// Derive box dimensions from the laid out lines
    pub fn new(style: &StyleConfig, font: String, lines: Vec<LaidOutLine>) -> Self {
        let padding = style.padding;
        let line_height_px = style.line_height_px();
        let text_width = lines.iter().map(|line| line.width).fold(0.0, f64::max);
        let width = style.width.fixed().unwrap_or(text_width + padding * 2.0);
        let height = style
            .height
            .fixed()
            .unwrap_or(lines.len() as f64 * line_height_px + padding * 2.0);

        Self {
            lines,
            text_width,
            text_height: style.font_size,
            line_height_px,
            width,
            height,
            padding,
            available_width: width - padding * 2.0,
            font,
        }
    }

    /// Create empty layout
    pub fn empty(style: &StyleConfig) -> Self {
        Self::new(style, style.font_string(), Vec::new())
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line carrying the ellipsis, if truncation happened
    pub fn truncated_line(&self) -> Option<&LaidOutLine> {
        self.lines.iter().find(|line| line.truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_box_size() {
        let style = StyleConfig::new().font_size(20.0).padding(5.0);
        let lines = vec![
            LaidOutLine::new("ab", 20.0, true),
            LaidOutLine::new("abcd", 40.0, true),
        ];
        let layout = TextLayout::new(&style, style.font_string(), lines);
        assert_eq!(layout.text_width, 40.0);
        assert_eq!(layout.text_height, 20.0);
        assert_eq!(layout.width, 50.0);
        assert_eq!(layout.height, 50.0);
        assert_eq!(layout.available_width, 40.0);
    }

    #[test]
    fn test_fixed_box_size() {
        let style = StyleConfig::new().width(200.0).height(100.0).padding(10.0);
        let layout = TextLayout::empty(&style);
        assert!(layout.is_empty());
        assert_eq!(layout.width, 200.0);
        assert_eq!(layout.height, 100.0);
        assert_eq!(layout.available_width, 180.0);
        assert!(layout.truncated_line().is_none());
    }
}
