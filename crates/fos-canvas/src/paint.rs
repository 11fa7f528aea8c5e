//! Fill and stroke paints
//!
//! Solid colors, gradients and patterns handed to `fillStyle`/`strokeStyle`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fill or stroke style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Paint {
    /// CSS color string (`"#555"`, `"black"`, `"rgba(0,0,0,0.4)"`)
    Color(String),
    Gradient(Gradient),
    Pattern(Pattern),
}

impl Paint {
    pub fn color(color: impl Into<String>) -> Self {
        Self::Color(color.into())
    }
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Self::Color(color.to_string())
    }
}

impl fmt::Display for Paint {
    /// Value as a canvas reports it back when read
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => f.write_str(c),
            Self::Gradient(_) => f.write_str("[object CanvasGradient]"),
            Self::Pattern(_) => f.write_str("[object CanvasPattern]"),
        }
    }
}

/// Gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub gradient_type: GradientType,
    pub stops: Vec<ColorStop>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GradientType {
    Linear { x0: f64, y0: f64, x1: f64, y1: f64 },
    Radial { x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

impl Gradient {
    /// Linear gradient from `(x0, y0)` to `(x1, y1)`
    pub fn linear(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            gradient_type: GradientType::Linear { x0, y0, x1, y1 },
            stops: Vec::new(),
        }
    }

    /// Radial gradient between two circles
    pub fn radial(x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64) -> Self {
        Self {
            gradient_type: GradientType::Radial { x0, y0, r0, x1, y1, r1 },
            stops: Vec::new(),
        }
    }

    /// Add a color stop at `offset` in `[0, 1]`
    pub fn add_color_stop(mut self, offset: f64, color: impl Into<String>) -> Self {
        self.stops.push(ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color: color.into(),
        });
        self
    }
}

/// Pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pattern {
    /// Image source the host resolves (URL or asset id)
    pub image: String,
    #[serde(default)]
    pub repetition: PatternRepetition,
    /// Pattern transform: offset, scale and rotation in degrees
    #[serde(default)]
    pub offset: (f64, f64),
    #[serde(default = "unit_scale")]
    pub scale: (f64, f64),
    #[serde(default)]
    pub rotation: f64,
}

fn unit_scale() -> (f64, f64) {
    (1.0, 1.0)
}

impl Pattern {
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            repetition: PatternRepetition::default(),
            offset: (0.0, 0.0),
            scale: unit_scale(),
            rotation: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternRepetition {
    #[default]
    Repeat,
    RepeatX,
    RepeatY,
    NoRepeat,
}
