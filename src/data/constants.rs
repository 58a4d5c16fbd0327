//! Shared constants: script ranges, storage keys, endpoints and UI strings

/// First code point of the Georgian Unicode block
pub const GEORGIAN_BLOCK_START: char = '\u{10A0}';

/// Last code point of the Georgian Unicode block
pub const GEORGIAN_BLOCK_END: char = '\u{10FF}';

/// Check whether a character lies in the Georgian block (U+10A0..=U+10FF)
#[inline]
pub fn is_georgian_char(c: char) -> bool {
    (GEORGIAN_BLOCK_START..=GEORGIAN_BLOCK_END).contains(&c)
}

/// Storage key for the light/dark theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visitor counter service
pub const VISITOR_API_BASE: &str = "https://visitor.6developer.com";

/// Placeholder shown while the visitor count is loading
pub const VISITOR_LOADING_TEXT: &str = "...";

/// Shown in place of the visitor count when the service fails ("error")
pub const VISITOR_ERROR_TEXT: &str = "შეცდომა";

/// Application title used in share links
pub const PAGE_TITLE: &str = "Ka ⇄ Eng კლავიატურის ავტომატური კონვერტორი";

/// Shown when copying the page link fails ("could not copy the link")
pub const COPY_LINK_FAILED_TEXT: &str = "ვერ მოხერხდა ბმულის კოპირება";

/// Feedback after a successful copy ("copied")
pub const COPIED_TEXT: &str = "დაკოპირდა";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_georgian_block_bounds() {
        assert!(is_georgian_char('\u{10A0}'));
        assert!(is_georgian_char('\u{10FF}'));
        assert!(is_georgian_char('ა'));
        assert!(!is_georgian_char('\u{109F}'));
        assert!(!is_georgian_char('\u{1100}'));
        assert!(!is_georgian_char('a'));
    }
}
