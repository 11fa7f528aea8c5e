//! Run emission
//!
//! Replays a [`TextLayout`] onto a [`Context2D`]. Lines are drawn as whole
//! runs unless letter spacing, justification or a hook needs every glyph
//! placed on its own.

use fos_canvas::{Context2D, StateGuard, TextAlign as CanvasAlign, TextBaseline, TextMeasure};
use unicode_segmentation::UnicodeSegmentation;

use super::decorations::{calculate_decorations, draw_decorations};
use super::{CharHook, CharScope, CharacterRun, DrawState};
use crate::layout::{compute_word_gap, should_justify, word_gap_starts, LaidOutLine, TextLayout};
use crate::metrics::measure_offset_y;
use crate::style::{StyleConfig, TextAlign, TextDirection, VerticalAlign};

/// Per-pass emission parameters supplied by the scene graph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitOptions {
    /// Absolute scale of the node (sx, sy)
    pub absolute_scale: (f64, f64),
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            absolute_scale: (1.0, 1.0),
        }
    }
}

impl EmitOptions {
    pub fn with_scale(sx: f64, sy: f64) -> Self {
        Self {
            absolute_scale: (sx, sy),
        }
    }

    /// Geometric mean of the absolute scale, 1 when degenerate
    pub fn scale_factor(&self) -> f64 {
        let (sx, sy) = self.absolute_scale;
        let factor = (sx * sy).abs().sqrt();
        if factor.is_finite() && factor > 0.0 { factor } else { 1.0 }
    }
}

/// Everything a line needs that is fixed for the whole pass
struct Pass<'a> {
    layout: &'a TextLayout,
    style: &'a StyleConfig,
    state: DrawState,
    offset_y: f64,
    rtl: bool,
}

/// Draw `layout` onto `ctx`
pub fn emit(
    layout: &TextLayout,
    style: &StyleConfig,
    ctx: &mut dyn Context2D,
    mut hook: Option<&mut dyn CharHook>,
    options: &EmitOptions,
) {
    if layout.is_empty() {
        return;
    }

    let mut ctx = StateGuard::new(ctx);
    let rtl = style.direction == TextDirection::Rtl;
    if rtl {
        ctx.set_direction(style.direction.to_canvas());
    }
    ctx.set_font(&layout.font);
    ctx.set_text_baseline(TextBaseline::Alphabetic);
    ctx.set_text_align(CanvasAlign::Left);

    let padding = layout.padding;
    let lines_height = layout.line_count() as f64 * layout.line_height_px;
    let align_y = match style.vertical_align {
        VerticalAlign::Top => 0.0,
        VerticalAlign::Middle => (layout.height - lines_height - padding * 2.0) / 2.0,
        VerticalAlign::Bottom => layout.height - lines_height - padding * 2.0,
    };
    ctx.translate(padding, align_y + padding);

    let pass = Pass {
        layout,
        style,
        state: DrawState::from_style(style, options.scale_factor()),
        offset_y: measure_offset_y(&*ctx, &layout.font, style.font_size, style.line_height),
        rtl,
    };

    let mut index = 0;
    for (n, line) in layout.lines.iter().enumerate() {
        let mut line_ctx = StateGuard::new(&mut *ctx);
        pass.emit_line(&mut *line_ctx, n, line, index, hook.as_deref_mut());
        index += line.grapheme_count();
    }

    tracing::trace!(lines = layout.line_count(), "text emitted");
}

impl Pass<'_> {
    fn emit_line(
        &self,
        ctx: &mut dyn Context2D,
        n: usize,
        line: &LaidOutLine,
        first_index: usize,
        hook: Option<&mut (dyn CharHook + '_)>,
    ) {
        let layout = self.layout;
        let style = self.style;
        let available = layout.available_width;
        let baseline = self.offset_y + n as f64 * layout.line_height_px;
        let justify = should_justify(style.align, line, layout);

        let x = match style.align {
            TextAlign::Right => available - line.width,
            TextAlign::Center => (available - line.width) / 2.0,
            TextAlign::Left | TextAlign::Justify => 0.0,
        };

        if style.text_decoration.has_any() {
            let span = if justify { available } else { line.width };
            let geometries =
                calculate_decorations(&style.text_decoration, x, baseline, span, style.font_size);
            draw_decorations(ctx, &geometries, style.fill.as_ref());
        }

        let spaced = style.letter_spacing != 0.0;
        let per_glyph = (spaced && !self.rtl) || style.align == TextAlign::Justify || hook.is_some();
        if !per_glyph {
            if spaced {
                ctx.set_letter_spacing(style.letter_spacing);
            }
            self.state.draw_run(ctx, &line.text, x, baseline);
            return;
        }

        let gap = if justify {
            compute_word_gap(&line.text, line.width, available)
        } else {
            0.0
        };
        let gap_starts = if gap != 0.0 {
            word_gap_starts(&line.text)
        } else {
            Vec::new()
        };
        let right_edge = x + if justify { available } else { line.width };

        self.emit_glyphs(
            ctx,
            GlyphLine {
                line,
                n,
                first_index,
                x,
                right_edge,
                baseline,
                gap,
                gap_starts: &gap_starts,
            },
            hook,
        );
    }

    fn emit_glyphs(
        &self,
        ctx: &mut dyn Context2D,
        glyphs: GlyphLine<'_>,
        mut hook: Option<&mut (dyn CharHook + '_)>,
    ) {
        let graphemes: Vec<&str> = glyphs.line.text.graphemes(true).collect();
        let last = graphemes.len().saturating_sub(1);
        let letter_spacing = self.style.letter_spacing;
        let font = &self.layout.font;

        let mut pen = 0.0;
        for (column, grapheme) in graphemes.iter().copied().enumerate() {
            if glyphs.gap_starts.contains(&column) {
                pen += glyphs.gap;
            }
            let width = ctx.measure_text(grapheme, font).width;
            let gx = if self.rtl {
                glyphs.right_edge - pen - width
            } else {
                glyphs.x + pen
            };

            match hook.as_deref_mut() {
                Some(hook) => {
                    let run = CharacterRun {
                        grapheme,
                        index: glyphs.first_index + column,
                        x: gx,
                        y: glyphs.baseline,
                        line: glyphs.n,
                        column,
                        is_last_in_line: column == last,
                        width,
                    };
                    let mut glyph_ctx = StateGuard::new(&mut *ctx);
                    let mut scope = CharScope::new(&mut *glyph_ctx);
                    hook.on_char(&run, &mut scope);
                    let state = scope.into_draw_state(&self.state);
                    state.draw_run(&mut *glyph_ctx, grapheme, gx, glyphs.baseline);
                }
                None => self.state.draw_run(ctx, grapheme, gx, glyphs.baseline),
            }

            pen += width + letter_spacing;
        }
    }
}

/// Placement of one line drawn glyph by glyph
struct GlyphLine<'a> {
    line: &'a LaidOutLine,
    n: usize,
    first_index: usize,
    x: f64,
    right_edge: f64,
    baseline: f64,
    gap: f64,
    gap_starts: &'a [usize],
}
