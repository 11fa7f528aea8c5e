//! fOS Canvas - Canvas 2D backend contract
//!
//! The drawing-surface side of text rendering:
//! - `Context2D` trait mirroring `CanvasRenderingContext2D`
//! - `TextMeasure` and `TextMetrics` with optional advanced metrics
//! - Paints (colors, gradients, patterns)
//! - `StateGuard` for scoped save/restore
//! - `TraceContext`, a recording context that renders call traces

pub mod context2d;
pub mod paint;
pub mod text;
pub mod trace;

pub use context2d::{Context2D, Direction, StateGuard, TextAlign, TextBaseline};
pub use paint::{ColorStop, Gradient, GradientType, Paint, Pattern, PatternRepetition};
pub use text::{font_size_px, FixedAdvance, TextMeasure, TextMetrics};
pub use trace::{TraceArg, TraceContext, TraceRecord};
