//! Canvas 2D Rendering Context
//!
//! The drawing surface contract text rendering is replayed into. Hosts plug
//! their own surface in by implementing [`Context2D`]; the engine never owns
//! pixels.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::paint::Paint;
use crate::text::TextMeasure;

/// Text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }
}

/// Text baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Hanging => "hanging",
            Self::Middle => "middle",
            Self::Alphabetic => "alphabetic",
            Self::Ideographic => "ideographic",
            Self::Bottom => "bottom",
        }
    }
}

/// Text direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Inherit,
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inherit => "inherit",
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TextBaseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas 2D drawing surface.
///
/// Mirrors the subset of `CanvasRenderingContext2D` that text rendering
/// needs. Setters take effect until the matching [`Context2D::restore`].
pub trait Context2D: TextMeasure {
    // State management

    /// Push the current state
    fn save(&mut self);

    /// Pop the last pushed state
    fn restore(&mut self);

    // Transforms

    fn translate(&mut self, x: f64, y: f64);

    fn rotate(&mut self, angle: f64);

    fn scale(&mut self, x: f64, y: f64);

    // Styles

    fn set_font(&mut self, font: &str);

    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn set_text_align(&mut self, align: TextAlign);

    fn set_direction(&mut self, direction: Direction);

    /// Letter spacing in pixels, applied by the surface when drawing a run
    fn set_letter_spacing(&mut self, spacing: f64);

    fn set_fill_style(&mut self, paint: &Paint);

    fn set_stroke_style(&mut self, paint: &Paint);

    fn set_line_width(&mut self, width: f64);

    fn set_miter_limit(&mut self, limit: f64);

    fn set_global_alpha(&mut self, alpha: f64);

    // Text

    fn fill_text(&mut self, text: &str, x: f64, y: f64);

    fn stroke_text(&mut self, text: &str, x: f64, y: f64);

    // Paths

    fn begin_path(&mut self);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn stroke(&mut self);
}

/// Scoped `save()`/`restore()` pair.
///
/// `save()` is issued on construction and `restore()` when the guard is
/// dropped, so the surface state is restored on every exit path.
pub struct StateGuard<'a, C: Context2D + ?Sized> {
    ctx: &'a mut C,
}

impl<'a, C: Context2D + ?Sized> StateGuard<'a, C> {
    /// Save the context state until the guard is dropped
    pub fn new(ctx: &'a mut C) -> Self {
        ctx.save();
        Self { ctx }
    }
}

impl<C: Context2D + ?Sized> Deref for StateGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.ctx
    }
}

impl<C: Context2D + ?Sized> DerefMut for StateGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.ctx
    }
}

impl<C: Context2D + ?Sized> Drop for StateGuard<'_, C> {
    fn drop(&mut self) {
        self.ctx.restore();
    }
}
