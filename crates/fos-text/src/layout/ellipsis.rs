//! Ellipsis truncation

use unicode_segmentation::UnicodeSegmentation;

use crate::style::WrapMode;

/// Horizontal ellipsis appended to truncated lines
pub const ELLIPSIS: &str = "…";

/// Shrink `line` until it plus an ellipsis fits `max_width`.
///
/// Word mode drops trailing words first and only then shrinks by grapheme.
/// Trailing whitespace of the kept text is trimmed before the ellipsis is
/// appended. When nothing fits the result is the ellipsis alone.
pub fn truncate(
    line: &str,
    max_width: Option<f64>,
    mode: WrapMode,
    width_of: impl Fn(&str) -> f64,
) -> String {
    let Some(max_width) = max_width else {
        return format!("{line}{ELLIPSIS}");
    };
    let with_ellipsis = |kept: &str| format!("{}{ELLIPSIS}", kept.trim_end());
    let fits = |kept: &str| width_of(&with_ellipsis(kept)) <= max_width;

    let mut kept = line.trim_end();
    if mode == WrapMode::Word {
        while !fits(kept) {
            match kept.rfind(char::is_whitespace) {
                Some(index) => kept = kept[..index].trim_end(),
                None => break,
            }
        }
    }

    let mut boundaries: Vec<usize> = kept.grapheme_indices(true).map(|(i, _)| i).collect();
    while !fits(kept) {
        match boundaries.pop() {
            Some(index) => kept = &kept[..index],
            None => break,
        }
    }

    if kept.trim_end().is_empty() {
        return ELLIPSIS.to_string();
    }
    with_ellipsis(kept)
}

/// Longest grapheme prefix of `text` no wider than `max_width`
pub fn longest_prefix(text: &str, max_width: f64, width_of: impl Fn(&str) -> f64) -> &str {
    let mut ends: Vec<usize> = text
        .grapheme_indices(true)
        .map(|(i, grapheme)| i + grapheme.len())
        .collect();
    ends.insert(0, 0);

    // ends[low] always fits
    let (mut low, mut high) = (0, ends.len() - 1);
    while low < high {
        let mid = (low + high).div_ceil(2);
        if width_of(&text[..ends[mid]]) <= max_width {
            low = mid;
        } else {
            high = mid - 1;
        }
    }
    &text[..ends[low]]
}
