//! Paint state applied to each drawn run

use fos_canvas::{Context2D, Paint};

use crate::style::StyleConfig;

/// Fill and stroke settings, applied right before every draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    /// Effective stroke width, already corrected for node scale
    pub stroke_width: f64,
    pub fill_after_stroke: bool,
}

impl DrawState {
    /// Paint state of a style drawn at `scale_factor`
    pub fn from_style(style: &StyleConfig, scale_factor: f64) -> Self {
        let stroke_width = if style.stroke_scale_enabled {
            style.stroke_width
        } else {
            style.stroke_width / scale_factor
        };
        Self {
            fill: style.fill.clone(),
            stroke: style.stroke.clone(),
            stroke_width,
            fill_after_stroke: style.fill_after_stroke_enabled,
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.stroke = Some(paint);
        self
    }

    /// Fill and stroke `text` at `(x, y)`
    pub fn draw_run(&self, ctx: &mut dyn Context2D, text: &str, x: f64, y: f64) {
        if self.fill_after_stroke {
            self.stroke_run(ctx, text, x, y);
            self.fill_run(ctx, text, x, y);
        } else {
            self.fill_run(ctx, text, x, y);
            self.stroke_run(ctx, text, x, y);
        }
    }

    fn fill_run(&self, ctx: &mut dyn Context2D, text: &str, x: f64, y: f64) {
        if let Some(fill) = &self.fill {
            ctx.set_fill_style(fill);
            ctx.fill_text(text, x, y);
        }
    }

    fn stroke_run(&self, ctx: &mut dyn Context2D, text: &str, x: f64, y: f64) {
        let Some(stroke) = &self.stroke else {
            return;
        };
        if self.stroke_width <= 0.0 {
            return;
        }
        ctx.set_line_width(self.stroke_width);
        ctx.set_stroke_style(stroke);
        ctx.set_miter_limit(2.0);
        ctx.stroke_text(text, x, y);
    }
}
