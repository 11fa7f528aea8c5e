//! Text Decorations
//!
//! Underline and line-through, parsed from the `textDecoration` attribute
//! and stroked once per line as straight segments.

use std::fmt;
use std::str::FromStr;

use fos_canvas::{Context2D, Paint, StateGuard};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Result, TextError};

/// Text decoration line type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecorationLine {
    /// Below the baseline
    Underline,
    /// Through the middle of the glyphs (strikethrough)
    LineThrough,
}

impl TextDecorationLine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underline => "underline",
            Self::LineThrough => "line-through",
        }
    }
}

/// Decoration lines of a text block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDecoration {
    /// Which lines to draw
    pub lines: Vec<TextDecorationLine>,
}

impl TextDecoration {
    /// Create a new text decoration
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an underline
    pub fn underline(mut self) -> Self {
        if !self.lines.contains(&TextDecorationLine::Underline) {
            self.lines.push(TextDecorationLine::Underline);
        }
        self
    }

    /// Add strikethrough
    pub fn line_through(mut self) -> Self {
        if !self.lines.contains(&TextDecorationLine::LineThrough) {
            self.lines.push(TextDecorationLine::LineThrough);
        }
        self
    }

    /// Check if has underline
    pub fn has_underline(&self) -> bool {
        self.lines.contains(&TextDecorationLine::Underline)
    }

    /// Check if has line-through
    pub fn has_line_through(&self) -> bool {
        self.lines.contains(&TextDecorationLine::LineThrough)
    }

    /// Check if has any decoration
    pub fn has_any(&self) -> bool {
        !self.lines.is_empty()
    }
}

impl FromStr for TextDecoration {
    type Err = TextError;

    /// Space-separated keywords: `"underline line-through"`, `""`, `"none"`
    fn from_str(value: &str) -> Result<Self> {
        value
            .split_whitespace()
            .try_fold(Self::new(), |decoration, keyword| {
                match keyword.to_ascii_lowercase().as_str() {
                    "underline" => Ok(decoration.underline()),
                    "line-through" => Ok(decoration.line_through()),
                    "none" => Ok(decoration),
                    _ => Err(TextError::InvalidValue {
                        field: "textDecoration",
                        value: value.to_string(),
                    }),
                }
            })
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keywords: Vec<&str> = self.lines.iter().map(TextDecorationLine::as_str).collect();
        f.write_str(&keywords.join(" "))
    }
}

impl Serialize for TextDecoration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TextDecoration {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        let value = Option::<String>::deserialize(d)?;
        value
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

/// Decoration geometry for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationGeometry {
    /// X position
    pub x: f64,
    /// Y position
    pub y: f64,
    /// Length of line
    pub width: f64,
    /// Thickness
    pub thickness: f64,
    /// Decoration type
    pub line_type: TextDecorationLine,
}

/// Calculate decoration segments for one line, underline first.
///
/// Lines sit a quarter font size (rounded) below or above the baseline and
/// are `font_size / 15` thick. `width` is rounded to whole pixels.
pub fn calculate_decorations(
    decoration: &TextDecoration,
    x: f64,
    baseline: f64,
    width: f64,
    font_size: f64,
) -> Vec<DecorationGeometry> {
    let offset = (font_size / 4.0).round();
    let thickness = font_size / 15.0;

    let mut geometries = Vec::new();
    if decoration.has_underline() {
        geometries.push(DecorationGeometry {
            x,
            y: baseline + offset,
            width: width.round(),
            thickness,
            line_type: TextDecorationLine::Underline,
        });
    }
    if decoration.has_line_through() {
        geometries.push(DecorationGeometry {
            x,
            y: baseline - offset,
            width: width.round(),
            thickness,
            line_type: TextDecorationLine::LineThrough,
        });
    }
    geometries
}

/// Stroke decoration segments with the text fill
pub fn draw_decorations(ctx: &mut dyn Context2D, geometries: &[DecorationGeometry], paint: Option<&Paint>) {
    for geom in geometries {
        let mut ctx = StateGuard::new(&mut *ctx);
        ctx.begin_path();
        ctx.move_to(geom.x, geom.y);
        ctx.line_to(geom.x + geom.width, geom.y);
        ctx.set_line_width(geom.thickness);
        if let Some(paint) = paint {
            ctx.set_stroke_style(paint);
        }
        ctx.stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_canvas::{FixedAdvance, TraceContext};

    #[test]
    fn test_text_decoration() {
        let deco = TextDecoration::new().underline().underline();
        assert!(deco.has_underline());
        assert!(!deco.has_line_through());
        assert_eq!(deco.lines.len(), 1);
    }

    #[test]
    fn test_decoration_parse() {
        let deco: TextDecoration = "line-through underline".parse().unwrap();
        assert!(deco.has_underline() && deco.has_line_through());
        assert_eq!(deco.to_string(), "line-through underline");

        assert!(!"".parse::<TextDecoration>().unwrap().has_any());
        assert!(!"none".parse::<TextDecoration>().unwrap().has_any());
        assert!("overline".parse::<TextDecoration>().is_err());
    }

    #[test]
    fn test_decoration_geometry() {
        let deco = TextDecoration::new().line_through().underline();
        let geometries = calculate_decorations(&deco, 0.0, 68.0, 199.6, 80.0);

        assert_eq!(geometries.len(), 2);
        assert_eq!(geometries[0].line_type, TextDecorationLine::Underline);
        assert_eq!(geometries[0].y, 88.0);
        assert_eq!(geometries[1].y, 48.0);
        assert_eq!(geometries[1].width, 200.0);
    }

    #[test]
    fn test_draw_decorations() {
        let mut ctx = TraceContext::new(FixedAdvance::default());
        let deco = TextDecoration::new().underline();
        let geometries = calculate_decorations(&deco, 10.0, 17.0, 40.0, 30.0);
        draw_decorations(&mut ctx, &geometries, Some(&Paint::color("red")));
        assert_eq!(
            ctx.trace(),
            "save();beginPath();moveTo(10,25);lineTo(50,25);lineWidth=2;strokeStyle=red;stroke();restore();"
        );
    }

    #[test]
    fn test_deserialize_null() {
        let deco: TextDecoration = serde_json::from_str("null").unwrap();
        assert!(!deco.has_any());
    }
}
