//! Justification by word-gap stretching

use unicode_segmentation::UnicodeSegmentation;

use super::{LaidOutLine, TextLayout};
use crate::style::TextAlign;

/// Grapheme indices where a whitespace run between words begins
pub fn word_gap_starts(line: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut prev_is_space = true;
    for (index, grapheme) in line.graphemes(true).enumerate() {
        let is_space = grapheme.chars().all(char::is_whitespace);
        if is_space && !prev_is_space {
            starts.push(index);
        }
        prev_is_space = is_space;
    }
    starts
}

/// Extra advance added at each word gap so the line spans `available_width`
pub fn compute_word_gap(line: &str, line_width: f64, available_width: f64) -> f64 {
    let gaps = word_gap_starts(line.trim_end()).len();
    if gaps == 0 {
        return 0.0;
    }
    (available_width - line_width) / gaps as f64
}

/// Justify only inner lines of paragraphs in multi-line layouts
pub fn should_justify(align: TextAlign, line: &LaidOutLine, layout: &TextLayout) -> bool {
    align == TextAlign::Justify && !line.last_in_paragraph && layout.line_count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleConfig;

    #[test]
    fn test_gap_starts() {
        assert_eq!(word_gap_starts("aaa bbb  ccc"), vec![3, 7]);
        assert_eq!(word_gap_starts(" lead"), Vec::<usize>::new());
        assert_eq!(word_gap_starts("single"), Vec::<usize>::new());
    }

    #[test]
    fn test_compute_word_gap() {
        assert_eq!(compute_word_gap("aaa bbb ccc ddd eee", 95.0, 100.0), 1.25);
        assert_eq!(compute_word_gap("single", 30.0, 100.0), 0.0);
    }

    #[test]
    fn test_should_justify() {
        let style = StyleConfig::new().align(TextAlign::Justify);
        let lines = vec![
            LaidOutLine::new("aaa bbb", 35.0, false),
            LaidOutLine::new("ccc", 15.0, true),
        ];
        let layout = TextLayout::new(&style, style.font_string(), lines);
        assert!(should_justify(style.align, &layout.lines[0], &layout));
        assert!(!should_justify(style.align, &layout.lines[1], &layout));
        assert!(!should_justify(TextAlign::Left, &layout.lines[0], &layout));

        // a single line is never stretched
        let single = TextLayout::new(&style, style.font_string(), vec![LaidOutLine::new("aaa bbb", 35.0, false)]);
        assert!(!should_justify(style.align, &single.lines[0], &single));
    }
}
