//! Conversion diagnostics
//!
//! Conversion never fails, but some inputs convert differently from what the
//! typist probably meant. `check_text` reports those spots without
//! converting anything:
//!
//! - Latin letters inside text that will be read as Georgian (they pass
//!   through unchanged, because direction is decided once per string)
//! - Uppercase keys without their own Georgian letter, folded to lowercase
//! - Georgian letters that no key produces
//!
//! ## Example
//!
//! ```rust
//! use kaeng::diagnostics::{check_text, DiagnosticKind};
//!
//! let result = check_text("gamarjoba მეგობარო");
//! assert_eq!(result.diagnostics[0].kind, DiagnosticKind::MixedScript);
//! ```

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::core::converter::{detect_direction, lowercase_single, ConversionDirection};
use crate::data::constants::is_georgian_char;
use crate::data::layout::{lookup_georgian, lookup_latin};

lazy_static! {
    /// Runs of ASCII letters
    static ref LATIN_RUN: Regex = Regex::new(r"[A-Za-z]+").unwrap();
}

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticLevel {
    /// Informational note
    Info,
    /// Warning - output probably differs from what was intended
    Warning,
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticLevel::Info => write!(f, "info"),
            DiagnosticLevel::Warning => write!(f, "warning"),
        }
    }
}

/// What a diagnostic is about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Latin letters in text converted Georgian → Latin
    MixedScript,
    /// Uppercase key folded to its lowercase mapping
    CaseFolded,
    /// Georgian-block character with no key in the layout
    Unmapped,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MixedScript => write!(f, "mixed script"),
            DiagnosticKind::CaseFolded => write!(f, "case folded"),
            DiagnosticKind::Unmapped => write!(f, "unmapped"),
        }
    }
}

/// A single diagnostic message
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub kind: DiagnosticKind,
    /// Human-readable message
    pub message: String,
    /// Line number (1-indexed)
    pub line: Option<usize>,
    /// Column number in characters (1-indexed)
    pub column: Option<usize>,
    /// Relevant source text
    pub source_text: Option<String>,
    /// Suggested fix
    pub suggestion: Option<String>,
}

impl Diagnostic {
    pub fn new(level: DiagnosticLevel, kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            level,
            kind,
            message: message.into(),
            line: None,
            column: None,
            source_text: None,
            suggestion: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    pub fn with_source(mut self, text: impl Into<String>) -> Self {
        self.source_text = Some(text.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.level, self.kind, self.message)?;

        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "\n  --> line {}:{}", line, col)?;
        }

        if let Some(ref source) = self.source_text {
            write!(f, "\n  |\n  | {}", source)?;
        }

        if let Some(ref suggestion) = self.suggestion {
            write!(f, "\n  = help: {}", suggestion)?;
        }

        Ok(())
    }
}

/// Check result with summary
#[derive(Debug)]
pub struct CheckResult {
    /// Direction the text would be converted in
    pub direction: ConversionDirection,
    pub diagnostics: Vec<Diagnostic>,
    pub warnings: usize,
    pub infos: usize,
}

impl CheckResult {
    pub fn new(direction: ConversionDirection) -> Self {
        Self {
            direction,
            diagnostics: Vec::new(),
            warnings: 0,
            infos: 0,
        }
    }

    pub fn add(&mut self, diag: Diagnostic) {
        match diag.level {
            DiagnosticLevel::Warning => self.warnings += 1,
            DiagnosticLevel::Info => self.infos += 1,
        }
        self.diagnostics.push(diag);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.warnings > 0 {
            parts.push(plural(self.warnings, "warning"));
        }
        if self.infos > 0 {
            parts.push(plural(self.infos, "note"));
        }
        if parts.is_empty() {
            "no issues found".to_string()
        } else {
            parts.join(", ")
        }
    }
}

fn plural(count: usize, word: &str) -> String {
    format!("{} {}{}", count, word, if count == 1 { "" } else { "s" })
}

/// Check text for spots where conversion may surprise the typist
pub fn check_text(input: &str) -> CheckResult {
    let direction = detect_direction(input);
    let mut result = CheckResult::new(direction);

    for (line_idx, line) in input.lines().enumerate() {
        let line_no = line_idx + 1;
        match direction {
            ConversionDirection::GeorgianToLatin => {
                check_latin_runs(line, line_no, &mut result);
                check_unmapped_georgian(line, line_no, &mut result);
            }
            ConversionDirection::LatinToGeorgian => {
                check_case_folding(line, line_no, &mut result);
            }
        }
    }

    result
}

/// Character column (1-indexed) of a byte offset
fn column_at(line: &str, byte_offset: usize) -> usize {
    line[..byte_offset].chars().count() + 1
}

fn check_latin_runs(line: &str, line_no: usize, result: &mut CheckResult) {
    for run in LATIN_RUN.find_iter(line) {
        result.add(
            Diagnostic::new(
                DiagnosticLevel::Warning,
                DiagnosticKind::MixedScript,
                format!(
                    "'{}' stays Latin: the text contains Georgian, so it is converted Georgian → Latin",
                    run.as_str()
                ),
            )
            .with_location(line_no, column_at(line, run.start()))
            .with_source(line)
            .with_suggestion("convert the Latin and Georgian parts separately"),
        );
    }
}

fn check_unmapped_georgian(line: &str, line_no: usize, result: &mut CheckResult) {
    for (offset, c) in line.char_indices() {
        if is_georgian_char(c) && lookup_georgian(c).is_none() {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    DiagnosticKind::Unmapped,
                    format!("'{}' (U+{:04X}) has no key in the layout", c, c as u32),
                )
                .with_location(line_no, column_at(line, offset)),
            );
        }
    }
}

fn check_case_folding(line: &str, line_no: usize, result: &mut CheckResult) {
    for (offset, c) in line.char_indices() {
        if lookup_latin(c).is_some() {
            continue;
        }
        // Same fold as convert_char
        let Some(lower) = lowercase_single(c) else {
            continue;
        };
        if let Some(georgian) = lookup_latin(lower) {
            result.add(
                Diagnostic::new(
                    DiagnosticLevel::Info,
                    DiagnosticKind::CaseFolded,
                    format!("'{}' has no letter of its own, typed as '{}' → '{}'", c, lower, georgian),
                )
                .with_location(line_no, column_at(line, offset)),
            );
        }
    }
}

/// Render a check result for terminal output
pub fn format_diagnostics(result: &CheckResult, use_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&format!("direction: {}\n", result.direction));

    for diag in &result.diagnostics {
        let (color, reset) = if use_color {
            (level_color(diag.level), "\x1b[0m")
        } else {
            ("", "")
        };
        out.push_str(&format!("{}{}{}", color, diag.level, reset));
        // Drop the level prefix already written in color
        let rendered = diag.to_string();
        let rest = rendered
            .strip_prefix(&diag.level.to_string())
            .unwrap_or(&rendered);
        out.push_str(rest);
        out.push('\n');
    }

    out.push_str(&result.summary());
    out
}

fn level_color(level: DiagnosticLevel) -> &'static str {
    match level {
        DiagnosticLevel::Warning => "\x1b[33m",
        DiagnosticLevel::Info => "\x1b[36m",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_latin() {
        let result = check_text("gamarjoba");
        assert_eq!(result.direction, ConversionDirection::LatinToGeorgian);
        assert!(result.is_empty());
        assert_eq!(result.summary(), "no issues found");
    }

    #[test]
    fn test_mixed_script_runs() {
        let result = check_text("hello გამარჯობა world");
        assert_eq!(result.warnings, 2);
        let first = &result.diagnostics[0];
        assert_eq!(first.kind, DiagnosticKind::MixedScript);
        assert_eq!(first.column, Some(1));
        assert_eq!(result.diagnostics[1].column, Some(17));
    }

    #[test]
    fn test_case_folded() {
        let result = check_text("Gza Sakartvelo");
        // G and nothing else: S has its own letter
        assert_eq!(result.infos, 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::CaseFolded);
        assert_eq!(result.diagnostics[0].column, Some(1));
    }

    #[test]
    fn test_case_folded_beyond_ascii() {
        // KELVIN SIGN lowercases to 'k', which converts to 'კ'
        let result = check_text("\u{212A}a");
        assert_eq!(crate::convert("\u{212A}a"), "კა");
        assert_eq!(result.infos, 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::CaseFolded);
        assert!(result.diagnostics[0].message.contains("'k' → 'კ'"));
    }

    #[test]
    fn test_case_fold_needs_single_lowercase() {
        // 'İ' lowercases to two chars, so it passes through unreported
        let result = check_text("İ");
        assert_eq!(crate::convert("İ"), "İ");
        assert!(result.is_empty());
    }

    #[test]
    fn test_levels_only_warn_or_note() {
        let result = check_text("hello ჟ");
        assert!(result
            .diagnostics
            .iter()
            .all(|d| matches!(d.level, DiagnosticLevel::Info | DiagnosticLevel::Warning)));
        assert_eq!(result.summary(), "1 warning, 1 note");
    }

    #[test]
    fn test_unmapped_georgian() {
        let result = check_text("ჟურნალი");
        assert_eq!(result.infos, 1);
        assert_eq!(result.diagnostics[0].kind, DiagnosticKind::Unmapped);
        assert!(result.diagnostics[0].message.contains("U+10DF"));
    }

    #[test]
    fn test_line_numbers() {
        let result = check_text("ა\nbad\nბ");
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].line, Some(2));
    }

    #[test]
    fn test_format_without_color() {
        let result = check_text("x ა");
        let out = format_diagnostics(&result, false);
        assert!(out.starts_with("direction: ka-en"));
        assert!(out.contains("warning[mixed script]"));
        assert!(out.ends_with("1 warning"));
        assert!(!out.contains("\x1b["));
    }
}
