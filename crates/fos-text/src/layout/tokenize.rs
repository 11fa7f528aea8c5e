//! Break-candidate tokens

use unicode_segmentation::UnicodeSegmentation;

use crate::style::WrapMode;

/// A unit the line breaker never splits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Visible part, empty for leading whitespace
    pub text: &'a str,
    /// Whitespace following `text`
    pub trailing: &'a str,
}

impl<'a> Token<'a> {
    fn new(text: &'a str, trailing: &'a str) -> Self {
        Self { text, trailing }
    }
}

/// Split one paragraph into tokens for the given wrap mode
pub fn tokenize(paragraph: &str, wrap: WrapMode) -> Vec<Token<'_>> {
    if paragraph.is_empty() {
        return Vec::new();
    }
    match wrap {
        WrapMode::Word => words(paragraph),
        WrapMode::Char => graphemes(paragraph),
        WrapMode::None => vec![Token::new(paragraph, "")],
    }
}

/// Words end at whitespace or right after a dash
fn words(paragraph: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = paragraph.char_indices().peekable();

    while let Some(&(start, _)) = chars.peek() {
        let mut word_end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c.is_whitespace() {
                break;
            }
            chars.next();
            word_end = i + c.len_utf8();
            if c == '-' {
                break;
            }
        }

        let mut space_end = word_end;
        while let Some(&(i, c)) = chars.peek() {
            if !c.is_whitespace() {
                break;
            }
            chars.next();
            space_end = i + c.len_utf8();
        }

        tokens.push(Token::new(
            &paragraph[start..word_end],
            &paragraph[word_end..space_end],
        ));
    }

    tokens
}

/// One token per grapheme cluster, whitespace attached to the previous one
fn graphemes(paragraph: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut trailing_start = 0;

    for (i, grapheme) in paragraph.grapheme_indices(true) {
        let end = i + grapheme.len();
        if grapheme.chars().all(char::is_whitespace) {
            match tokens.last_mut() {
                Some(last) => last.trailing = &paragraph[trailing_start..end],
                None => {
                    trailing_start = i;
                    tokens.push(Token::new("", &paragraph[i..end]));
                }
            }
        } else {
            tokens.push(Token::new(grapheme, ""));
            trailing_start = end;
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<(&'a str, &'a str)> {
        tokens.iter().map(|t| (t.text, t.trailing)).collect()
    }

    #[test]
    fn test_word_tokens() {
        let tokens = tokenize("Hello  world foo", WrapMode::Word);
        assert_eq!(
            texts(&tokens),
            vec![("Hello", "  "), ("world", " "), ("foo", "")]
        );
    }

    #[test]
    fn test_leading_whitespace_token() {
        let tokens = tokenize(" world's a", WrapMode::Word);
        assert_eq!(texts(&tokens), vec![("", " "), ("world's", " "), ("a", "")]);
    }

    #[test]
    fn test_dash_ends_word() {
        let tokens = tokenize("well-known fact", WrapMode::Word);
        assert_eq!(
            texts(&tokens),
            vec![("well-", ""), ("known", " "), ("fact", "")]
        );
    }

    #[test]
    fn test_char_tokens_keep_clusters() {
        let tokens = tokenize("a 👨‍👩‍👧b", WrapMode::Char);
        assert_eq!(texts(&tokens), vec![("a", " "), ("👨‍👩‍👧", ""), ("b", "")]);
    }

    #[test]
    fn test_char_leading_whitespace() {
        let tokens = tokenize("  ab", WrapMode::Char);
        assert_eq!(texts(&tokens), vec![("", "  "), ("a", ""), ("b", "")]);
    }

    #[test]
    fn test_none_is_one_token() {
        let tokens = tokenize("Hello foo bar", WrapMode::None);
        assert_eq!(texts(&tokens), vec![("Hello foo bar", "")]);
    }

    #[test]
    fn test_empty_paragraph() {
        assert!(tokenize("", WrapMode::Word).is_empty());
    }

    #[test]
    fn test_tokens_cover_paragraph() {
        let paragraph = "  All the world's a stage,  merely players";
        for mode in [WrapMode::Word, WrapMode::Char, WrapMode::None] {
            let joined: String = tokenize(paragraph, mode)
                .iter()
                .map(|t| format!("{}{}", t.text, t.trailing))
                .collect();
            assert_eq!(joined, paragraph);
        }
    }
}
