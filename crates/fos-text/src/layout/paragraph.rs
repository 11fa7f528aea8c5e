//! Paragraph layout

use fos_canvas::TextMeasure;
use unicode_segmentation::UnicodeSegmentation;

use super::{longest_prefix, tokenize, truncate, LaidOutLine, LineBreaker, TextLayout};
use crate::style::{StyleConfig, TextAlign, WrapMode};

/// Paragraph layout engine
pub struct ParagraphLayout<'a> {
    style: &'a StyleConfig,
}

/// Lines committed so far and the height they use
struct LineSink {
    lines: Vec<LaidOutLine>,
    used_height: f64,
    line_height: f64,
    max_height: Option<f64>,
}

impl LineSink {
    /// Commit a line; returns true once no further line fits the height
    fn push(&mut self, line: LaidOutLine) -> bool {
        self.lines.push(line);
        self.used_height += self.line_height;
        self.max_height
            .is_some_and(|max| self.used_height + self.line_height > max)
    }

    /// Replace the last line with its ellipsis-truncated form
    fn truncate_last(&mut self, max_width: Option<f64>, mode: WrapMode, width_of: &impl Fn(&str) -> f64) {
        if let Some(last) = self.lines.last_mut() {
            let text = truncate(&last.text, max_width, mode, width_of);
            tracing::trace!(from = %last.text, to = %text, "line truncated");
            last.width = width_of(&text);
            last.text = text;
            last.last_in_paragraph = true;
            last.truncated = true;
        }
    }
}

impl<'a> ParagraphLayout<'a> {
    /// Create a layout pass for `style`
    pub fn new(style: &'a StyleConfig) -> Self {
        Self { style }
    }

    /// Layout text, measuring with `measure`
    pub fn layout<M: TextMeasure + ?Sized>(&self, text: &str, measure: &M) -> TextLayout {
        let style = self.style;
        if !(style.font_size.is_finite() && style.font_size > 0.0) {
            tracing::warn!(font_size = style.font_size, "degenerate font size");
        }

        let font = style.font_string();
        if text.is_empty() {
            return TextLayout::new(style, font, Vec::new());
        }

        let letter_spacing = style.letter_spacing;
        let width_of = |s: &str| {
            measure.measure_text(s, &font).width + letter_spacing * s.graphemes(true).count() as f64
        };
        let lines = self.break_text(text, &width_of);

        let truncated = lines.iter().any(|line| line.truncated);
        tracing::debug!(lines = lines.len(), truncated, font = %font, "text laid out");
        TextLayout::new(style, font, lines)
    }

    fn break_text(&self, text: &str, width_of: &impl Fn(&str) -> f64) -> Vec<LaidOutLine> {
        let style = self.style;
        let max_width = style.max_width();
        let trim_both = style.wrap == WrapMode::Word || style.align == TextAlign::Justify;

        let mut sink = LineSink {
            lines: Vec::new(),
            used_height: 0.0,
            line_height: style.line_height_px(),
            max_height: style.max_height(),
        };

        let paragraphs: Vec<&str> = text
            .split('\n')
            .map(|p| p.strip_suffix('\r').unwrap_or(p))
            .collect();

        'paragraphs: for (index, &paragraph) in paragraphs.iter().enumerate() {
            let more_paragraphs = index + 1 < paragraphs.len();

            if style.wrap == WrapMode::None {
                let line = if trim_both { paragraph.trim() } else { paragraph };
                let width = width_of(line);
                let overflow = max_width.filter(|max| width > *max);

                let exhausted = match overflow {
                    Some(max) if style.ellipsis => {
                        let text = truncate(line, Some(max), WrapMode::None, width_of);
                        let width = width_of(&text);
                        sink.lines.push(LaidOutLine {
                            text,
                            width,
                            last_in_paragraph: true,
                            truncated: true,
                        });
                        break 'paragraphs;
                    }
                    Some(max) => {
                        let clipped = longest_prefix(line, max, width_of).trim_end();
                        sink.push(LaidOutLine::new(clipped, width_of(clipped), true))
                    }
                    None => sink.push(LaidOutLine::new(line, width, true)),
                };

                if exhausted {
                    if style.ellipsis && more_paragraphs {
                        sink.truncate_last(max_width, style.wrap, width_of);
                    }
                    break;
                }
                continue;
            }

            let tokens = tokenize(paragraph, style.wrap);
            if tokens.is_empty() {
                if sink.push(LaidOutLine::new("", 0.0, true)) {
                    if style.ellipsis && more_paragraphs {
                        sink.truncate_last(max_width, style.wrap, width_of);
                    }
                    break;
                }
                continue;
            }

            let mut breaker = LineBreaker::new(tokens, max_width, width_of)
                .trim_both(trim_both)
                .peekable();
            while let Some(line) = breaker.next() {
                let last_in_paragraph = breaker.peek().is_none();
                let exhausted = sink.push(LaidOutLine::new(line.text, line.width, last_in_paragraph));
                if exhausted {
                    if style.ellipsis && (!last_in_paragraph || more_paragraphs) {
                        sink.truncate_last(max_width, style.wrap, width_of);
                    }
                    break 'paragraphs;
                }
            }
        }

        sink.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fos_canvas::FixedAdvance;

    fn texts(layout: &TextLayout) -> Vec<&str> {
        layout.lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn test_empty_text() {
        let style = StyleConfig::new().width(100.0);
        let layout = ParagraphLayout::new(&style).layout("", &FixedAdvance::default());
        assert!(layout.is_empty());
        assert_eq!(layout.text_width, 0.0);
    }

    #[test]
    fn test_explicit_newlines() {
        let style = StyleConfig::new();
        let layout = ParagraphLayout::new(&style).layout("one\r\n\ntwo", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["one", "", "two"]);
        assert!(layout.lines.iter().all(|line| line.last_in_paragraph));
    }

    #[test]
    fn test_word_wrap_marks_paragraph_ends() {
        // 5px per char
        let style = StyleConfig::new().font_size(10.0).width(30.0);
        let layout = ParagraphLayout::new(&style).layout("aaa bbb ccc\nddd", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["aaa", "bbb", "ccc", "ddd"]);
        let ends: Vec<bool> = layout.lines.iter().map(|line| line.last_in_paragraph).collect();
        assert_eq!(ends, vec![false, false, true, true]);
    }

    #[test]
    fn test_no_wrap_clip_continues() {
        let style = StyleConfig::new().font_size(10.0).width(30.0).wrap(WrapMode::None);
        let layout = ParagraphLayout::new(&style).layout("abcdefgh\nxy", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["abcdef", "xy"]);
        assert!(layout.truncated_line().is_none());
    }

    #[test]
    fn test_no_wrap_ellipsis_stops() {
        let style = StyleConfig::new()
            .font_size(10.0)
            .width(30.0)
            .wrap(WrapMode::None)
            .ellipsis(true);
        let layout = ParagraphLayout::new(&style).layout("abcdefgh\nxy", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["abcde…"]);
        assert!(layout.lines[0].truncated);
    }

    #[test]
    fn test_height_budget_without_ellipsis_drops_rest() {
        let style = StyleConfig::new().font_size(10.0).width(30.0).height(25.0);
        let layout = ParagraphLayout::new(&style).layout("aaa bbb ccc ddd", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["aaa", "bbb"]);
        assert!(layout.truncated_line().is_none());
    }

    #[test]
    fn test_at_least_one_line() {
        let style = StyleConfig::new().font_size(10.0).width(30.0).height(2.0);
        let layout = ParagraphLayout::new(&style).layout("aaa bbb", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["aaa"]);
    }

    #[test]
    fn test_empty_paragraph_triggers_ellipsis() {
        let style = StyleConfig::new().font_size(10.0).width(50.0).height(10.0).ellipsis(true);
        let layout = ParagraphLayout::new(&style).layout("\nmore", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["…"]);
        assert!(layout.lines[0].truncated);
    }

    #[test]
    fn test_justify_trims_char_lines() {
        let style = StyleConfig::new()
            .font_size(10.0)
            .wrap(WrapMode::Char)
            .align(TextAlign::Justify);
        let layout = ParagraphLayout::new(&style).layout("  ab  ", &FixedAdvance::default());
        assert_eq!(texts(&layout), vec!["ab"]);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let style = StyleConfig::new().font_size(14.0).width(100.0).height(60.0).ellipsis(true);
        let text = "All the world's a stage, merely players.\nThey have their exits";
        let measure = FixedAdvance::default();
        let pass = ParagraphLayout::new(&style);
        assert_eq!(pass.layout(text, &measure), pass.layout(text, &measure));
    }
}
