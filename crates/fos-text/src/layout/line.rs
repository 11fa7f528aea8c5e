//! Greedy line breaking

use std::iter::Peekable;
use std::vec;

use super::tokenize::Token;

/// A committed line and its measured width
#[derive(Debug, Clone, PartialEq)]
pub struct BrokenLine {
    pub text: String,
    pub width: f64,
}

/// Greedy line breaker over the tokens of one paragraph.
///
/// Tokens are appended while `width(line + token) <= max_width`, where the
/// line already carries the whitespace of earlier tokens. A token that does
/// not fit on an empty line is placed alone, unsplit.
pub struct LineBreaker<'a, F> {
    tokens: Peekable<vec::IntoIter<Token<'a>>>,
    max_width: Option<f64>,
    trim_both: bool,
    width_of: F,
}

impl<'a, F: Fn(&str) -> f64> LineBreaker<'a, F> {
    /// Break `tokens` into lines no wider than `max_width` (`None` never breaks)
    pub fn new(tokens: Vec<Token<'a>>, max_width: Option<f64>, width_of: F) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            max_width,
            trim_both: false,
            width_of,
        }
    }

    /// Trim every line on both sides instead of only at wrap boundaries
    pub fn trim_both(mut self, trim_both: bool) -> Self {
        self.trim_both = trim_both;
        self
    }

    fn fits(&self, line: &str, token: &Token<'_>) -> bool {
        match self.max_width {
            Some(max_width) => {
                let mut candidate = String::with_capacity(line.len() + token.text.len());
                candidate.push_str(line);
                candidate.push_str(token.text);
                (self.width_of)(&candidate) <= max_width
            }
            None => true,
        }
    }
}

impl<F: Fn(&str) -> f64> Iterator for LineBreaker<'_, F> {
    type Item = BrokenLine;

    fn next(&mut self) -> Option<BrokenLine> {
        let mut line = String::new();
        let mut placed = false;

        while let Some(&token) = self.tokens.peek() {
            if placed && !self.fits(&line, &token) {
                break;
            }
            line.push_str(token.text);
            line.push_str(token.trailing);
            placed = true;
            self.tokens.next();
        }

        if !placed {
            return None;
        }

        let wrapped = self.tokens.peek().is_some();
        let text = if self.trim_both {
            line.trim()
        } else if wrapped {
            line.trim_end()
        } else {
            line.as_str()
        };
        let width = (self.width_of)(text);
        tracing::trace!(text, width, wrapped, "line committed");

        Some(BrokenLine {
            text: text.to_string(),
            width,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tokenize;
    use crate::style::WrapMode;

    /// 10px per char
    fn width_of(text: &str) -> f64 {
        text.chars().count() as f64 * 10.0
    }

    fn lines(text: &str, wrap: WrapMode, max_width: Option<f64>, trim_both: bool) -> Vec<String> {
        LineBreaker::new(tokenize(text, wrap), max_width, width_of)
            .trim_both(trim_both)
            .map(|line| line.text)
            .collect()
    }

    #[test]
    fn test_greedy_word_wrap() {
        assert_eq!(
            lines("aaa bbb ccc ddd", WrapMode::Word, Some(70.0), true),
            vec!["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn test_fit_ignores_token_trailing_space() {
        // "aaa bbb" is exactly 70px; the space after it does not count
        assert_eq!(
            lines("aaa bbb ccc", WrapMode::Word, Some(70.0), true),
            vec!["aaa bbb", "ccc"]
        );
    }

    #[test]
    fn test_oversized_token_placed_alone() {
        assert_eq!(
            lines("a verylongword b", WrapMode::Word, Some(50.0), true),
            vec!["a", "verylongword", "b"]
        );
    }

    #[test]
    fn test_char_wrap_trims_only_at_boundaries() {
        assert_eq!(
            lines("abc de ", WrapMode::Char, Some(40.0), false),
            vec!["abc", "de "]
        );
    }

    #[test]
    fn test_unbounded_width_is_one_line() {
        assert_eq!(
            lines("aaa bbb ccc ddd", WrapMode::Word, None, true),
            vec!["aaa bbb ccc ddd"]
        );
    }

    #[test]
    fn test_break_after_dash() {
        assert_eq!(
            lines("well-known", WrapMode::Word, Some(60.0), true),
            vec!["well-", "known"]
        );
    }

    #[test]
    fn test_widths_are_measured_after_trim() {
        let widths: Vec<f64> = LineBreaker::new(tokenize("ab cd ef", WrapMode::Word), Some(50.0), width_of)
            .trim_both(true)
            .map(|line| line.width)
            .collect();
        assert_eq!(widths, vec![50.0, 20.0]);
    }
}
