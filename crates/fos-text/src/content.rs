//! Text content coercion
//!
//! Hosts hand over whatever value sits in the `text` attribute. Numbers and
//! booleans are stringified, missing values become the empty string.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Text of a node, always a string once coerced
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextContent(String);

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TextContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TextContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TextContent {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<String> for TextContent {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&String> for TextContent {
    fn from(text: &String) -> Self {
        Self(text.clone())
    }
}

impl From<char> for TextContent {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl From<bool> for TextContent {
    fn from(value: bool) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for TextContent {
    fn from(value: f64) -> Self {
        Self(number_to_string(value))
    }
}

impl From<f32> for TextContent {
    fn from(value: f32) -> Self {
        Self(number_to_string(f64::from(value)))
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for TextContent {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

from_integer!(i32, i64, u32, u64, usize);

impl<T: Into<TextContent>> From<Option<T>> for TextContent {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Number formatting the way script hosts print them (`5`, `0.5`, `Infinity`)
fn number_to_string(value: f64) -> String {
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl Serialize for TextContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

struct TextContentVisitor;

impl<'de> Visitor<'de> for TextContentVisitor {
    type Value = TextContent;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<TextContent, E> {
        Ok(TextContent::from(v))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<TextContent, E> {
        Ok(TextContent(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<TextContent, E> {
        Ok(TextContent::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<TextContent, E> {
        Ok(TextContent::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<TextContent, E> {
        Ok(TextContent::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<TextContent, E> {
        Ok(TextContent::from(v))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<TextContent, E> {
        Ok(TextContent::default())
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<TextContent, E> {
        Ok(TextContent::default())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> std::result::Result<TextContent, D::Error> {
        d.deserialize_any(TextContentVisitor)
    }
}

impl<'de> Deserialize<'de> for TextContent {
    fn deserialize<D: Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        d.deserialize_any(TextContentVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_values() {
        assert_eq!(TextContent::from(0).as_str(), "0");
        assert_eq!(TextContent::from(true).as_str(), "true");
        assert_eq!(TextContent::from(false).as_str(), "false");
        assert_eq!(TextContent::from(None::<&str>).as_str(), "");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(TextContent::from(5.0).as_str(), "5");
        assert_eq!(TextContent::from(0.5).as_str(), "0.5");
        assert_eq!(TextContent::from(-0.0).as_str(), "0");
        assert_eq!(TextContent::from(f64::INFINITY).as_str(), "Infinity");
    }

    #[test]
    fn test_deserialize_any_scalar() {
        let values: Vec<TextContent> =
            serde_json::from_str(r#"["hi", 5, 2.5, true, null]"#).unwrap();
        let values: Vec<&str> = values.iter().map(TextContent::as_str).collect();
        assert_eq!(values, vec!["hi", "5", "2.5", "true", ""]);
    }
}
