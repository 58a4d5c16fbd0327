//! Clipboard access
//!
//! The converter reads its input from and writes its output to a clipboard
//! supplied by the caller. `Clipboard` keeps that boundary explicit:
//! - `SystemClipboard`: the OS clipboard through `arboard` (feature `clipboard`)
//! - `MemoryClipboard`: in-process buffer (testing, WASM hosts)
//! - `NoopClipboard`: every access fails with `NotSupported`
//!
//! Failures never reach the converter. [`copy_to_clipboard`] and
//! [`read_from_clipboard`] log them and collapse them into `bool`/`Option`.

use std::sync::Mutex;

use crate::utils::error::{KaengError, KaengResult};

/// Trait for reading and writing clipboard text
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text
    fn read_text(&self) -> KaengResult<String>;

    /// Replace the clipboard text
    fn write_text(&self, text: &str) -> KaengResult<()>;
}

/// Write text to the clipboard, reporting only success or failure
pub fn copy_to_clipboard(clipboard: &dyn Clipboard, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            log::error!("Failed to copy to clipboard: {}", err);
            false
        }
    }
}

/// Read text from the clipboard, `None` on any failure
pub fn read_from_clipboard(clipboard: &dyn Clipboard) -> Option<String> {
    match clipboard.read_text() {
        Ok(text) => Some(text),
        Err(err) => {
            log::error!("Failed to read from clipboard: {}", err);
            None
        }
    }
}

impl<C: Clipboard + ?Sized> Clipboard for &C {
    fn read_text(&self) -> KaengResult<String> {
        (**self).read_text()
    }

    fn write_text(&self, text: &str) -> KaengResult<()> {
        (**self).write_text(text)
    }
}

/// In-memory clipboard
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Mutex::new(Some(text.to_string())),
        }
    }

    /// Current contents, `None` if nothing was ever written
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&self) -> KaengResult<String> {
        let guard = self
            .contents
            .lock()
            .map_err(|_| KaengError::clipboard("clipboard lock poisoned"))?;
        guard
            .clone()
            .ok_or_else(|| KaengError::clipboard("clipboard is empty"))
    }

    fn write_text(&self, text: &str) -> KaengResult<()> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| KaengError::clipboard("clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that is never available
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopClipboard;

impl Clipboard for NoopClipboard {
    fn read_text(&self) -> KaengResult<String> {
        Err(KaengError::not_supported("clipboard"))
    }

    fn write_text(&self, _text: &str) -> KaengResult<()> {
        Err(KaengError::not_supported("clipboard"))
    }
}

/// OS clipboard
///
/// `arboard::Clipboard` is not `Sync`, so a fresh handle is opened per access.
#[cfg(all(feature = "clipboard", not(target_arch = "wasm32")))]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[cfg(all(feature = "clipboard", not(target_arch = "wasm32")))]
impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    fn open() -> KaengResult<arboard::Clipboard> {
        arboard::Clipboard::new().map_err(|e| KaengError::clipboard(e.to_string()))
    }
}

#[cfg(all(feature = "clipboard", not(target_arch = "wasm32")))]
impl Clipboard for SystemClipboard {
    fn read_text(&self) -> KaengResult<String> {
        Self::open()?
            .get_text()
            .map_err(|e| KaengError::clipboard(e.to_string()))
    }

    fn write_text(&self, text: &str) -> KaengResult<()> {
        Self::open()?
            .set_text(text.to_string())
            .map_err(|e| KaengError::clipboard(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_round() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.read_text().is_err());
        assert!(copy_to_clipboard(&clipboard, "გზა"));
        assert_eq!(read_from_clipboard(&clipboard), Some("გზა".to_string()));
        assert_eq!(clipboard.contents(), Some("გზა".to_string()));
    }

    #[test]
    fn test_noop_clipboard_swallowed() {
        assert!(!copy_to_clipboard(&NoopClipboard, "text"));
        assert_eq!(read_from_clipboard(&NoopClipboard), None);
    }

    #[test]
    fn test_clipboard_by_reference() {
        let clipboard = MemoryClipboard::with_text("abc");
        let borrowed = &clipboard;
        assert_eq!(borrowed.read_text(), Ok("abc".to_string()));
    }
}
