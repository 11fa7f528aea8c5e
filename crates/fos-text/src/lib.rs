//! fOS Text - Rich-text layout and run emission
//!
//! This crate lays text out inside a box and replays it onto a canvas:
//! - Style configuration (font, wrap, align, decoration, paint)
//! - Metrics fallback for hosts with incomplete `measureText`
//! - Tokenizing and greedy line breaking (word, char, none)
//! - Ellipsis truncation under width and height budgets
//! - Justification by word-gap stretching
//! - Run emission with letter spacing, direction, decorations and
//!   per-character hooks
//! - `TextNode`, a retained node caching its layout

pub mod content;
pub mod layout;
pub mod metrics;
pub mod node;
pub mod render;
pub mod style;

pub use content::TextContent;
pub use layout::{LaidOutLine, ParagraphLayout, TextLayout, ELLIPSIS};
pub use metrics::{resolve_offset_y, MeasuredSize, VerticalMetrics};
pub use node::{Rect, TextAttrs, TextNode};
pub use render::{
    emit, CharHook, CharScope, CharacterRun, DrawState, EmitOptions, TextDecoration,
    TextDecorationLine,
};
pub use style::{Dimension, StyleConfig, TextAlign, TextDirection, VerticalAlign, WrapMode};

/// Text configuration error types
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid text configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TextError>;
