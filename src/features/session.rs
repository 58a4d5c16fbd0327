//! Converter session
//!
//! The input/output surface around the converter: every input change is
//! converted and, when enabled, the result is copied to the clipboard. The
//! clipboard is passed in at construction, so the session runs the same
//! against the OS clipboard, a WASM host, or a test double.

use crate::core::converter::{convert_with_options, ConvertOptions};
use crate::utils::clipboard::{copy_to_clipboard, read_from_clipboard, Clipboard};

pub struct ConverterSession<C: Clipboard> {
    clipboard: C,
    options: ConvertOptions,
    input: String,
    output: String,
    last_copy: Option<bool>,
}

impl<C: Clipboard> ConverterSession<C> {
    /// Create a session and run the initial conversion of the empty input
    pub fn new(clipboard: C, options: ConvertOptions) -> Self {
        let mut session = Self {
            clipboard,
            options,
            input: String::new(),
            output: String::new(),
            last_copy: None,
        };
        session.handle_conversion();
        session
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Result of the most recent auto-copy, `None` if none was attempted
    pub fn last_copy(&self) -> Option<bool> {
        self.last_copy
    }

    /// Replace the input and convert it
    pub fn handle_input(&mut self, text: &str) -> &str {
        self.input.clear();
        self.input.push_str(text);
        self.handle_conversion();
        &self.output
    }

    /// Take the input from the clipboard; `false` if it could not be read
    pub fn handle_paste(&mut self) -> bool {
        match read_from_clipboard(&self.clipboard) {
            Some(text) => {
                self.input = text;
                self.handle_conversion();
                true
            }
            None => false,
        }
    }

    pub fn handle_clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.last_copy = None;
    }

    fn handle_conversion(&mut self) {
        self.output = convert_with_options(&self.input, &self.options);
        self.last_copy = if self.options.auto_copy && !self.output.is_empty() {
            Some(copy_to_clipboard(&self.clipboard, &self.output))
        } else {
            None
        };
    }
}
