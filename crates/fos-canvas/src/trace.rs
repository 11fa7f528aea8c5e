//! Recording context
//!
//! A [`Context2D`] that draws nothing and records every call instead. The
//! record renders as a `;`-joined trace (`save();font=12px Arial;fillText(hi,0,10);`)
//! which is handy for debugging a host integration and for asserting draw
//! output in tests.

use std::fmt::Write as _;

use crate::context2d::{Context2D, Direction, TextAlign, TextBaseline};
use crate::paint::Paint;
use crate::text::{TextMeasure, TextMetrics};

/// Argument of a recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum TraceArg {
    Text(String),
    Number(f64),
}

/// One recorded operation
#[derive(Debug, Clone, PartialEq)]
pub enum TraceRecord {
    /// Method call: `name(args)`
    Call { name: &'static str, args: Vec<TraceArg> },
    /// Property assignment: `name=value`
    Set { name: &'static str, value: String },
}

/// How numbers and arguments are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TraceFormat {
    /// Numbers rounded to three decimals
    Full,
    /// Numbers rounded to integers
    Rounded,
    /// Operation names only
    Relaxed,
}

/// Recording 2D context
#[derive(Debug, Clone)]
pub struct TraceContext<M: TextMeasure> {
    measure: M,
    records: Vec<TraceRecord>,
    depth: usize,
}

impl<M: TextMeasure> TraceContext<M> {
    /// Create a recording context measuring text with `measure`
    pub fn new(measure: M) -> Self {
        Self {
            measure,
            records: Vec::new(),
            depth: 0,
        }
    }

    /// Recorded operations, oldest first
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Number of `save()` calls not yet matched by `restore()`
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Trace with numbers rounded to three decimals
    pub fn trace(&self) -> String {
        self.render(TraceFormat::Full)
    }

    /// Trace with numbers rounded to integers
    pub fn trace_rounded(&self) -> String {
        self.render(TraceFormat::Rounded)
    }

    /// Trace with operation names only: `fillText();fillStyle;`
    pub fn trace_relaxed(&self) -> String {
        self.render(TraceFormat::Relaxed)
    }

    /// Recorded `fillText` calls as `(text, x, y)`
    pub fn filled_text(&self) -> Vec<(String, f64, f64)> {
        self.records
            .iter()
            .filter_map(|record| match record {
                TraceRecord::Call { name: "fillText", args } => match args.as_slice() {
                    [TraceArg::Text(text), TraceArg::Number(x), TraceArg::Number(y)] => {
                        Some((text.clone(), *x, *y))
                    }
                    _ => None,
                },
                _ => None,
            })
            .collect()
    }

    fn render(&self, format: TraceFormat) -> String {
        let mut out = String::new();
        for record in &self.records {
            match record {
                TraceRecord::Call { name, args } => {
                    out.push_str(name);
                    out.push('(');
                    if format != TraceFormat::Relaxed {
                        for (i, arg) in args.iter().enumerate() {
                            if i > 0 {
                                out.push(',');
                            }
                            match arg {
                                TraceArg::Text(text) => out.push_str(text),
                                TraceArg::Number(n) => {
                                    let _ = write!(out, "{}", format_number(*n, format));
                                }
                            }
                        }
                    }
                    out.push_str(");");
                }
                TraceRecord::Set { name, value } => {
                    out.push_str(name);
                    if format != TraceFormat::Relaxed {
                        out.push('=');
                        out.push_str(value);
                    }
                    out.push(';');
                }
            }
        }
        out
    }

    fn call(&mut self, name: &'static str, args: Vec<TraceArg>) {
        self.records.push(TraceRecord::Call { name, args });
    }

    fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.records.push(TraceRecord::Set { name, value: value.into() });
    }

    fn numbers(&mut self, name: &'static str, values: &[f64]) {
        let args = values.iter().map(|v| TraceArg::Number(*v)).collect();
        self.call(name, args);
    }

    fn text_call(&mut self, name: &'static str, text: &str, x: f64, y: f64) {
        self.call(
            name,
            vec![
                TraceArg::Text(text.to_string()),
                TraceArg::Number(x),
                TraceArg::Number(y),
            ],
        );
    }
}

fn format_number(value: f64, format: TraceFormat) -> String {
    let rounded = match format {
        TraceFormat::Rounded => value.round(),
        _ => (value * 1000.0).round() / 1000.0,
    };
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    rounded.to_string()
}

fn format_px(value: f64) -> String {
    format!("{}px", format_number(value, TraceFormat::Full))
}

impl<M: TextMeasure> TextMeasure for TraceContext<M> {
    fn measure_text(&self, text: &str, font: &str) -> TextMetrics {
        self.measure.measure_text(text, font)
    }
}

impl<M: TextMeasure> Context2D for TraceContext<M> {
    fn save(&mut self) {
        self.depth += 1;
        self.call("save", Vec::new());
    }

    fn restore(&mut self) {
        if self.depth == 0 {
            tracing::warn!("restore() without matching save()");
        } else {
            self.depth -= 1;
        }
        self.call("restore", Vec::new());
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.numbers("translate", &[x, y]);
    }

    fn rotate(&mut self, angle: f64) {
        self.numbers("rotate", &[angle]);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.numbers("scale", &[x, y]);
    }

    fn set_font(&mut self, font: &str) {
        self.set("font", font);
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.set("textBaseline", baseline.as_str());
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.set("textAlign", align.as_str());
    }

    fn set_direction(&mut self, direction: Direction) {
        self.set("direction", direction.as_str());
    }

    fn set_letter_spacing(&mut self, spacing: f64) {
        self.set("letterSpacing", format_px(spacing));
    }

    fn set_fill_style(&mut self, paint: &Paint) {
        self.set("fillStyle", paint.to_string());
    }

    fn set_stroke_style(&mut self, paint: &Paint) {
        self.set("strokeStyle", paint.to_string());
    }

    fn set_line_width(&mut self, width: f64) {
        self.set("lineWidth", format_number(width, TraceFormat::Full));
    }

    fn set_miter_limit(&mut self, limit: f64) {
        self.set("miterLimit", format_number(limit, TraceFormat::Full));
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.set("globalAlpha", format_number(alpha, TraceFormat::Full));
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.text_call("fillText", text, x, y);
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        self.text_call("strokeText", text, x, y);
    }

    fn begin_path(&mut self) {
        self.call("beginPath", Vec::new());
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.numbers("moveTo", &[x, y]);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.numbers("lineTo", &[x, y]);
    }

    fn stroke(&mut self) {
        self.call("stroke", Vec::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixedAdvance;

    fn context() -> TraceContext<FixedAdvance> {
        TraceContext::new(FixedAdvance::default())
    }

    #[test]
    fn test_trace_formats() {
        let mut ctx = context();
        ctx.save();
        ctx.set_fill_style(&Paint::color("black"));
        ctx.fill_text("B", 13.3399, 16.9344);
        ctx.restore();

        assert_eq!(ctx.trace(), "save();fillStyle=black;fillText(B,13.34,16.934);restore();");
        assert_eq!(ctx.trace_rounded(), "save();fillStyle=black;fillText(B,13,17);restore();");
        assert_eq!(ctx.trace_relaxed(), "save();fillStyle;fillText();restore();");
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        let mut ctx = context();
        ctx.translate(-0.0001, 0.0);
        assert_eq!(ctx.trace(), "translate(0,0);");
    }

    #[test]
    fn test_letter_spacing_setter() {
        let mut ctx = context();
        ctx.set_letter_spacing(2.0);
        assert_eq!(ctx.trace(), "letterSpacing=2px;");
    }

    #[test]
    fn test_depth_tracking() {
        let mut ctx = context();
        ctx.save();
        ctx.save();
        assert_eq!(ctx.depth(), 2);
        ctx.restore();
        ctx.restore();
        ctx.restore();
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_filled_text() {
        let mut ctx = context();
        ctx.fill_text("A", 0.0, 17.0);
        ctx.stroke_text("A", 0.0, 17.0);
        ctx.fill_text("B", 10.0, 17.0);
        assert_eq!(
            ctx.filled_text(),
            vec![("A".to_string(), 0.0, 17.0), ("B".to_string(), 10.0, 17.0)]
        );
    }

    #[test]
    fn test_measure_delegates() {
        let ctx = context();
        assert_eq!(ctx.measure_text("ab", "20px Arial").width, 20.0);
    }
}
