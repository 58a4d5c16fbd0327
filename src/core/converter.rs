//! Layout converter
//!
//! Converts text typed on the Latin layout into the Georgian letters the same
//! keys produce, and back. Direction is inferred from the text itself: any
//! Georgian character flips the whole string to Georgian → Latin.

use std::fmt;
use std::str::FromStr;

use crate::data::constants::is_georgian_char;
use crate::data::layout::{lookup_georgian, lookup_latin};
use crate::utils::error::KaengError;

/// Which table is applied to a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionDirection {
    /// Latin keys → Georgian letters
    LatinToGeorgian,
    /// Georgian letters → Latin keys
    GeorgianToLatin,
}

impl ConversionDirection {
    pub fn opposite(self) -> Self {
        match self {
            ConversionDirection::LatinToGeorgian => ConversionDirection::GeorgianToLatin,
            ConversionDirection::GeorgianToLatin => ConversionDirection::LatinToGeorgian,
        }
    }

    /// Short name used by the CLI and bindings
    pub fn as_str(self) -> &'static str {
        match self {
            ConversionDirection::LatinToGeorgian => "en-ka",
            ConversionDirection::GeorgianToLatin => "ka-en",
        }
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionDirection {
    type Err = KaengError;

    /// Accepts `en-ka`/`latin-to-georgian`/`ka` and `ka-en`/`georgian-to-latin`/`en`.
    /// A lone language code names the target.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en-ka" | "latin-to-georgian" | "ka" => Ok(ConversionDirection::LatinToGeorgian),
            "ka-en" | "georgian-to-latin" | "en" => Ok(ConversionDirection::GeorgianToLatin),
            other => Err(KaengError::invalid(format!("unknown direction '{}'", other))),
        }
    }
}

/// Conversion options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Forced direction; `None` detects it from the text
    pub direction: Option<ConversionDirection>,
    /// Copy non-empty output to the clipboard after each conversion
    pub auto_copy: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            direction: None,
            auto_copy: true,
        }
    }
}

impl ConvertOptions {
    /// Detect direction per call (default)
    pub fn auto() -> Self {
        Self::default()
    }

    /// Always convert in the given direction
    pub fn forced(direction: ConversionDirection) -> Self {
        Self {
            direction: Some(direction),
            ..Default::default()
        }
    }
}

/// Detect the direction a piece of text should be converted in
///
/// Returns [`ConversionDirection::GeorgianToLatin`] as soon as one character
/// of the Georgian block (U+10A0..=U+10FF) is present, otherwise
/// [`ConversionDirection::LatinToGeorgian`] (including for empty text).
pub fn detect_direction(text: &str) -> ConversionDirection {
    if text.chars().any(is_georgian_char) {
        ConversionDirection::GeorgianToLatin
    } else {
        ConversionDirection::LatinToGeorgian
    }
}

/// Convert a single character in the given direction
///
/// Latin → Georgian tries the exact character first so `S,T,R,W,C,Z` keep
/// their own letters, then its lowercase form. Georgian → Latin does no case
/// folding. Unmapped characters are returned unchanged.
pub fn convert_char(c: char, direction: ConversionDirection) -> char {
    match direction {
        ConversionDirection::GeorgianToLatin => lookup_georgian(c).unwrap_or(c),
        ConversionDirection::LatinToGeorgian => lookup_latin(c)
            .or_else(|| lowercase_single(c).and_then(lookup_latin))
            .unwrap_or(c),
    }
}

/// Lowercase form of `c` when it is a single character
pub(crate) fn lowercase_single(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l != c => Some(l),
        _ => None,
    }
}

/// Convert text in a fixed direction
pub fn convert_with_direction(text: &str, direction: ConversionDirection) -> String {
    text.chars().map(|c| convert_char(c, direction)).collect()
}

/// Convert text, detecting the direction from its content
pub fn convert(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let direction = detect_direction(text);
    log::debug!("converting {} chars as {}", text.chars().count(), direction);
    convert_with_direction(text, direction)
}

/// Convert text according to options
pub fn convert_with_options(text: &str, options: &ConvertOptions) -> String {
    match options.direction {
        Some(direction) => convert_with_direction(text, direction),
        None => convert(text),
    }
}

/// Stateless converter handle for collaborators and bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutConverter;

impl LayoutConverter {
    pub fn new() -> Self {
        Self
    }

    pub fn detect_direction(&self, text: &str) -> ConversionDirection {
        detect_direction(text)
    }

    pub fn convert(&self, text: &str) -> String {
        convert(text)
    }

    pub fn convert_with_options(&self, text: &str, options: &ConvertOptions) -> String {
        convert_with_options(text, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_direction_empty() {
        assert_eq!(detect_direction(""), ConversionDirection::LatinToGeorgian);
    }

    #[test]
    fn test_detect_direction_presence() {
        assert_eq!(
            detect_direction("hello world 123"),
            ConversionDirection::LatinToGeorgian
        );
        assert_eq!(
            detect_direction("hello ა world"),
            ConversionDirection::GeorgianToLatin
        );
        // Asomtavruli, start of the block
        assert_eq!(
            detect_direction("\u{10A0}"),
            ConversionDirection::GeorgianToLatin
        );
    }

    #[test]
    fn test_convert_empty() {
        assert_eq!(convert(""), "");
    }

    #[test]
    fn test_convert_gamarjoba() {
        assert_eq!(convert("gamarjoba"), "გამარჯობა");
        assert_eq!(convert("გამარჯობა"), "gamarjoba");
    }

    #[test]
    fn test_special_uppercase() {
        let cases = [
            ("S", "შ"),
            ("T", "თ"),
            ("R", "ღ"),
            ("W", "ჭ"),
            ("C", "ჩ"),
            ("Z", "ძ"),
        ];
        for (input, expected) in cases {
            assert_eq!(convert(input), expected, "input {}", input);
        }
        assert_eq!(convert("s"), "ს");
        assert_eq!(convert("z"), "ზ");
    }

    #[test]
    fn test_lowercase_fallback() {
        assert_eq!(convert("Q"), "ქ");
        assert_eq!(convert("Q"), convert("q"));
        assert_eq!(convert("GAMA"), "გამა");
        // R keeps its own letter even inside an uppercase word
        assert_eq!(convert("GAMARJOBA"), "გამაღჯობა");
    }

    #[test]
    fn test_reverse_has_no_case_folding() {
        assert_eq!(convert("შ"), "S");
        assert_eq!(convert("ს"), "s");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(convert("123, !?"), "123, !?");
        assert_eq!(convert("a1 b2"), "ა1 ბ2");
        // ჟ has no key in the table
        assert_eq!(convert("ჟა"), "ჟa");
    }

    #[test]
    fn test_mixed_input_is_georgian_to_latin() {
        // Georgian present: Latin letters have no reverse entry and pass through
        assert_eq!(convert("abc გ"), "abc g");
    }

    #[test]
    fn test_length_preserved() {
        let inputs = ["", "gamarjoba", "İstanbul", "ǅ x", "emoji 😀 ok", "ʼn"];
        for input in inputs {
            assert_eq!(
                convert(input).chars().count(),
                input.chars().count(),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_round_trip_lowercase() {
        for c in 'a'..='z' {
            let s = c.to_string();
            assert_eq!(convert(&convert(&s)), s);
        }
    }

    #[test]
    fn test_forced_direction() {
        let opts = ConvertOptions::forced(ConversionDirection::GeorgianToLatin);
        assert_eq!(convert_with_options("abc", &opts), "abc");
        let opts = ConvertOptions::forced(ConversionDirection::LatinToGeorgian);
        assert_eq!(convert_with_options("abc გ", &opts), "აბც გ");
        assert_eq!(convert_with_options("gza", &ConvertOptions::auto()), "გზა");
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(
            "en-ka".parse::<ConversionDirection>(),
            Ok(ConversionDirection::LatinToGeorgian)
        );
        assert_eq!(
            "Georgian-To-Latin".parse::<ConversionDirection>(),
            Ok(ConversionDirection::GeorgianToLatin)
        );
        assert!("sideways".parse::<ConversionDirection>().is_err());
        assert_eq!(
            ConversionDirection::LatinToGeorgian.opposite(),
            ConversionDirection::GeorgianToLatin
        );
    }

    #[test]
    fn test_layout_converter_handle() {
        let converter = LayoutConverter::new();
        assert_eq!(converter.convert("gza"), "გზა");
        assert_eq!(
            converter.detect_direction("გზა"),
            ConversionDirection::GeorgianToLatin
        );
    }
}
