//! Text style configuration
//!
//! `StyleConfig` is the immutable input of a layout pass. It deserializes
//! from the camelCase attribute bag scene-graph hosts use (`fontSize`,
//! `letterSpacing`, `textDecoration: "underline line-through"`,
//! `width: "auto"`), and every keyword is resolved into a closed enum once
//! at construction.

use std::fmt;
use std::str::FromStr;

use fos_canvas::{Direction, Paint};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::render::TextDecoration;
use crate::{Result, TextError};

/// Keyword enums parsed case-insensitively and (de)serialized as strings
macro_rules! keyword_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($(#[$vmeta:meta])* $variant:ident => $keyword:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword),+
                }
            }
        }

        impl FromStr for $name {
            type Err = TextError;

            fn from_str(value: &str) -> Result<Self> {
                match value.trim().to_ascii_lowercase().as_str() {
                    $($keyword => Ok(Self::$variant),)+
                    _ => Err(TextError::InvalidValue {
                        field: $field,
                        value: value.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
                let value = String::deserialize(d)?;
                value.parse().map_err(de::Error::custom)
            }
        }
    };
}

keyword_enum!(
    /// Where lines may break
    WrapMode, "wrap" {
        #[default]
        Word => "word",
        Char => "char",
        None => "none",
    }
);

keyword_enum!(
    /// Horizontal alignment of each line inside the box
    TextAlign, "align" {
        #[default]
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
    }
);

keyword_enum!(
    /// Vertical alignment of the line block inside the box
    VerticalAlign, "verticalAlign" {
        #[default]
        Top => "top",
        Middle => "middle",
        Bottom => "bottom",
    }
);

keyword_enum!(
    /// Text direction
    TextDirection, "direction" {
        #[default]
        Inherit => "inherit",
        Ltr => "ltr",
        Rtl => "rtl",
    }
);

impl TextDirection {
    pub fn to_canvas(self) -> Direction {
        match self {
            Self::Inherit => Direction::Inherit,
            Self::Ltr => Direction::Ltr,
            Self::Rtl => Direction::Rtl,
        }
    }
}

/// Box dimension: fixed pixels or sized to content
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Dimension {
    #[default]
    Auto,
    Px(f64),
}

impl Dimension {
    /// Fixed size, if any. Non-finite sizes count as auto.
    pub fn fixed(&self) -> Option<f64> {
        match *self {
            Self::Px(px) if px.is_finite() => Some(px),
            _ => None,
        }
    }

    pub fn is_auto(&self) -> bool {
        self.fixed().is_none()
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

impl<T: Into<Dimension>> From<Option<T>> for Dimension {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl Serialize for Dimension {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.fixed() {
            Some(px) => serializer.serialize_f64(px),
            None => serializer.serialize_str("auto"),
        }
    }
}

struct DimensionVisitor;

impl<'de> Visitor<'de> for DimensionVisitor {
    type Value = Dimension;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, \"auto\" or null")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Dimension, E> {
        Ok(Dimension::Px(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Dimension, E> {
        Ok(Dimension::Px(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Dimension, E> {
        Ok(Dimension::Px(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Dimension, E> {
        if v.eq_ignore_ascii_case("auto") {
            Ok(Dimension::Auto)
        } else {
            v.trim()
                .trim_end_matches("px")
                .parse()
                .map(Dimension::Px)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Dimension, E> {
        Ok(Dimension::Auto)
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Dimension, E> {
        Ok(Dimension::Auto)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<Dimension, D::Error> {
        d.deserialize_any(DimensionVisitor)
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_any(DimensionVisitor)
    }
}

/// Style of one text block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    /// Comma-separated font families
    pub font_family: String,
    /// Font size in pixels
    pub font_size: f64,
    /// `normal`, `italic`, `bold`, ...
    pub font_style: String,
    /// `normal`, `small-caps`
    pub font_variant: String,
    /// Line height as a multiple of the font size
    pub line_height: f64,
    /// Extra advance after every grapheme, in pixels
    pub letter_spacing: f64,
    pub wrap: WrapMode,
    pub ellipsis: bool,
    pub align: TextAlign,
    pub vertical_align: VerticalAlign,
    pub direction: TextDirection,
    pub text_decoration: TextDecoration,
    pub padding: f64,
    pub width: Dimension,
    pub height: Dimension,
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: f64,
    /// Draw the stroke first and the fill over it
    pub fill_after_stroke_enabled: bool,
    /// When false the stroke width ignores the node's scale
    pub stroke_scale_enabled: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 12.0,
            font_style: "normal".to_string(),
            font_variant: "normal".to_string(),
            line_height: 1.0,
            letter_spacing: 0.0,
            wrap: WrapMode::Word,
            ellipsis: false,
            align: TextAlign::Left,
            vertical_align: VerticalAlign::Top,
            direction: TextDirection::Inherit,
            text_decoration: TextDecoration::default(),
            padding: 0.0,
            width: Dimension::Auto,
            height: Dimension::Auto,
            fill: Some(Paint::color("black")),
            stroke: None,
            stroke_width: 2.0,
            fill_after_stroke_enabled: false,
            stroke_scale_enabled: true,
        }
    }
}

impl StyleConfig {
    /// Create the default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a style from a JSON attribute object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_style(mut self, style: impl Into<String>) -> Self {
        self.font_style = style.into();
        self
    }

    pub fn font_variant(mut self, variant: impl Into<String>) -> Self {
        self.font_variant = variant.into();
        self
    }

    pub fn line_height(mut self, multiplier: f64) -> Self {
        self.line_height = multiplier;
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn ellipsis(mut self, ellipsis: bool) -> Self {
        self.ellipsis = ellipsis;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    pub fn direction(mut self, direction: TextDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn decoration(mut self, decoration: TextDecoration) -> Self {
        self.text_decoration = decoration;
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = height.into();
        self
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.fill = Some(paint.into());
        self
    }

    pub fn no_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    pub fn stroke(mut self, paint: impl Into<Paint>) -> Self {
        self.stroke = Some(paint.into());
        self
    }

    pub fn stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn fill_after_stroke(mut self, enabled: bool) -> Self {
        self.fill_after_stroke_enabled = enabled;
        self
    }

    pub fn stroke_scale(mut self, enabled: bool) -> Self {
        self.stroke_scale_enabled = enabled;
        self
    }

    /// Line height multiplier, with unset or non-positive values meaning 1
    pub fn effective_line_height(&self) -> f64 {
        if self.line_height > 0.0 { self.line_height } else { 1.0 }
    }

    /// Height of one line slot in pixels
    pub fn line_height_px(&self) -> f64 {
        self.effective_line_height() * self.font_size
    }

    /// Width available to text inside the padding, `None` when auto
    pub fn max_width(&self) -> Option<f64> {
        self.width.fixed().map(|w| w - self.padding * 2.0)
    }

    /// Height available to text inside the padding, `None` when auto
    pub fn max_height(&self) -> Option<f64> {
        self.height.fixed().map(|h| h - self.padding * 2.0)
    }

    /// CSS font shorthand: `"{style} {variant} {size}px {families}"`
    pub fn font_string(&self) -> String {
        format!(
            "{} {} {}px {}",
            self.font_style,
            self.font_variant,
            self.font_size,
            normalize_font_family(&self.font_family)
        )
    }
}

/// Quote multi-word family names that are not quoted yet
fn normalize_font_family(family: &str) -> String {
    family
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            let quoted = name.starts_with('"') || name.starts_with('\'');
            if name.contains(' ') && !quoted {
                format!("\"{name}\"")
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
