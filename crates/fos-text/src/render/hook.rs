//! Per-character hooks
//!
//! A hook runs once per grapheme, between a `save()` and the matching
//! `restore()` that also enclose the glyph's own draw. Whatever the hook does
//! to the context therefore affects that glyph only.

use fos_canvas::{Context2D, Paint};

use super::DrawState;

/// One grapheme about to be drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterRun<'a> {
    /// Grapheme cluster
    pub grapheme: &'a str,
    /// Grapheme index across all rendered lines
    pub index: usize,
    pub x: f64,
    /// Baseline
    pub y: f64,
    pub line: usize,
    /// Grapheme index within the line
    pub column: usize,
    pub is_last_in_line: bool,
    /// Advance of the grapheme without letter spacing
    pub width: f64,
}

/// Narrow handle on the context, valid for one glyph
pub struct CharScope<'a> {
    ctx: &'a mut dyn Context2D,
    fill: Option<Paint>,
    stroke: Option<Paint>,
}

impl<'a> CharScope<'a> {
    pub(crate) fn new(ctx: &'a mut dyn Context2D) -> Self {
        Self {
            ctx,
            fill: None,
            stroke: None,
        }
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.ctx.translate(x, y);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle);
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        self.ctx.scale(x, y);
    }

    pub fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    /// Fill this glyph with `paint` instead of the text fill
    pub fn set_fill(&mut self, paint: impl Into<Paint>) {
        self.fill = Some(paint.into());
    }

    /// Stroke this glyph with `paint` instead of the text stroke
    pub fn set_stroke(&mut self, paint: impl Into<Paint>) {
        self.stroke = Some(paint.into());
    }

    /// Paint state for this glyph with the overrides applied
    pub(crate) fn into_draw_state(self, base: &DrawState) -> DrawState {
        let mut state = base.clone();
        if let Some(fill) = self.fill {
            state = state.with_fill(fill);
        }
        if let Some(stroke) = self.stroke {
            state = state.with_stroke(stroke);
        }
        state
    }
}

/// Per-character customization
pub trait CharHook {
    fn on_char(&mut self, run: &CharacterRun<'_>, scope: &mut CharScope<'_>);
}

impl<F> CharHook for F
where
    F: FnMut(&CharacterRun<'_>, &mut CharScope<'_>),
{
    fn on_char(&mut self, run: &CharacterRun<'_>, scope: &mut CharScope<'_>) {
        self(run, scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleConfig;
    use fos_canvas::{FixedAdvance, TraceContext};

    #[test]
    fn test_scope_forwards_transforms() {
        let mut ctx = TraceContext::new(FixedAdvance::default());
        let mut scope = CharScope::new(&mut ctx);
        scope.translate(0.0, 10.0);
        scope.rotate(0.5);
        scope.scale(2.0, 2.0);
        scope.set_global_alpha(0.5);
        drop(scope);
        assert_eq!(ctx.trace(), "translate(0,10);rotate(0.5);scale(2,2);globalAlpha=0.5;");
    }

    #[test]
    fn test_scope_overrides_paint() {
        let mut ctx = TraceContext::new(FixedAdvance::default());
        let mut scope = CharScope::new(&mut ctx);
        scope.set_fill("red");
        let base = DrawState::from_style(&StyleConfig::default(), 1.0);
        let state = scope.into_draw_state(&base);
        assert_eq!(state.fill, Some(Paint::color("red")));
        assert_eq!(base.fill, Some(Paint::color("black")));
    }

    #[test]
    fn test_closure_hook() {
        let mut seen = Vec::new();
        let mut hook = |run: &CharacterRun<'_>, _scope: &mut CharScope<'_>| {
            seen.push(run.grapheme.to_string());
        };
        let mut ctx = TraceContext::new(FixedAdvance::default());
        let run = CharacterRun {
            grapheme: "A",
            index: 0,
            x: 0.0,
            y: 0.0,
            line: 0,
            column: 0,
            is_last_in_line: true,
            width: 5.0,
        };
        hook.on_char(&run, &mut CharScope::new(&mut ctx));
        assert_eq!(seen, vec!["A"]);
    }
}
