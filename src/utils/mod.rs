//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Diagnostics for inputs that convert unexpectedly
//! - Clipboard and storage abstractions
//! - Error types and result types

pub mod clipboard;
pub mod diagnostics;
pub mod error;
pub mod storage;

// Re-export commonly used items
pub use clipboard::{
    copy_to_clipboard, read_from_clipboard, Clipboard, MemoryClipboard, NoopClipboard,
};
pub use diagnostics::{
    check_text, format_diagnostics, CheckResult, Diagnostic, DiagnosticKind, DiagnosticLevel,
};
pub use error::{KaengError, KaengResult};
pub use storage::{default_store_path, FileStore, KeyValueStore, MemoryStore};

#[cfg(all(feature = "clipboard", not(target_arch = "wasm32")))]
pub use clipboard::SystemClipboard;
