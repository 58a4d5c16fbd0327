//! Data layer - Static mappings and constants
//!
//! This module contains all static data used for layout conversion:
//! - The Latin → Georgian key table and its derived reverse
//! - Unicode ranges, storage keys and user-facing strings

pub mod constants;
pub mod layout;

// Re-export commonly used items
pub use constants::{
    is_georgian_char, GEORGIAN_BLOCK_END, GEORGIAN_BLOCK_START, PAGE_TITLE, THEME_STORAGE_KEY,
    VISITOR_API_BASE, VISITOR_ERROR_TEXT,
};
pub use layout::{
    forward_pairs, is_special_uppercase, lookup_georgian, lookup_latin, EN_TO_KA, KA_TO_EN,
    SPECIAL_UPPERCASE,
};
