//! # kaeng
//!
//! Bidirectional Georgian ⇄ English keyboard layout converter written in Rust.
//!
//! Text typed on the Latin layout is turned into the Georgian letters the
//! same keys produce, and Georgian text is turned back into the keys that
//! typed it.
//!
//! ## Features
//!
//! - **Automatic direction**: any Georgian character means Georgian → Latin
//! - **Shift letters**: `S,T,R,W,C,Z` map to `შ,თ,ღ,ჭ,ჩ,ძ`; other uppercase keys fold to lowercase
//! - **Pass-through**: digits, punctuation and unmapped letters are kept as is
//! - **Diagnostics**: report mixed-script input before converting
//! - **Collaborators**: clipboard, preference storage, share links, visitor counter
//! - **WASM Support**: Compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use kaeng::{convert, detect_direction, ConversionDirection};
//!
//! assert_eq!(convert("gamarjoba"), "გამარჯობა");
//! assert_eq!(convert("გამარჯობა"), "gamarjoba");
//! assert_eq!(convert("Sen"), "შენ");
//! assert_eq!(detect_direction("abc"), ConversionDirection::LatinToGeorgian);
//! ```
//!
//! ### Session with clipboard
//!
//! ```rust
//! use kaeng::{ConvertOptions, ConverterSession, MemoryClipboard};
//!
//! let mut session = ConverterSession::new(MemoryClipboard::new(), ConvertOptions::default());
//! session.handle_input("gza");
//! assert_eq!(session.clipboard().contents().as_deref(), Some("გზა"));
//! ```

/// Core conversion modules
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Feature modules - collaborators around the converter
pub mod features;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core conversion functions
pub use crate::core::converter::{
    convert, convert_char, convert_with_direction, convert_with_options, detect_direction,
    ConversionDirection, ConvertOptions, LayoutConverter,
};

// Re-export data modules
pub use data::constants;
pub use data::layout;

// Re-export feature modules
pub use features::session::{self, ConverterSession};
pub use features::share::{self, build_share_url, SharePlatform};
pub use features::theme::{self, Theme, ThemeManager};
pub use features::visitors::{self, VisitCounts, VisitPayload, VisitorCounter};

// Re-export utilities
pub use utils::clipboard::{Clipboard, MemoryClipboard, NoopClipboard};
pub use utils::diagnostics::{self, check_text};
pub use utils::error::{KaengError, KaengResult};
pub use utils::storage::{FileStore, KeyValueStore, MemoryStore};

/// Convert text and report the direction that was used
pub fn convert_auto(input: &str) -> (String, ConversionDirection) {
    let direction = detect_direction(input);
    (convert_with_direction(input, direction), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_auto_latin() {
        let (result, direction) = convert_auto("gza");
        assert_eq!(direction, ConversionDirection::LatinToGeorgian);
        assert_eq!(result, "გზა");
    }

    #[test]
    fn test_convert_auto_georgian() {
        let (result, direction) = convert_auto("გზა");
        assert_eq!(direction, ConversionDirection::GeorgianToLatin);
        assert_eq!(result, "gza");
    }

    #[test]
    fn test_convert_auto_empty() {
        let (result, direction) = convert_auto("");
        assert_eq!(direction, ConversionDirection::LatinToGeorgian);
        assert!(result.is_empty());
    }
}
