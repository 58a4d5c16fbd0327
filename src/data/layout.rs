//! Georgian ⇄ English keyboard layout tables
//!
//! The forward table pairs every Latin key with the Georgian letter produced
//! by the same physical key under the Georgian layout. The reverse table is
//! always derived from the forward one so the two can never drift apart.

use fxhash::FxHashMap;
use lazy_static::lazy_static;
use phf::phf_map;

/// Latin keyboard character to Georgian letter
///
/// 26 lowercase keys plus the six shift-modified keys that produce
/// additional Georgian letters.
pub static EN_TO_KA: phf::Map<char, char> = phf_map! {
    // Lowercase letters
    'q' => 'ქ',
    'w' => 'წ',
    'e' => 'ე',
    'r' => 'რ',
    't' => 'ტ',
    'y' => 'ყ',
    'u' => 'უ',
    'i' => 'ი',
    'o' => 'ო',
    'p' => 'პ',
    'a' => 'ა',
    's' => 'ს',
    'd' => 'დ',
    'f' => 'ფ',
    'g' => 'გ',
    'h' => 'ჰ',
    'j' => 'ჯ',
    'k' => 'კ',
    'l' => 'ლ',
    'z' => 'ზ',
    'x' => 'ხ',
    'c' => 'ც',
    'v' => 'ვ',
    'b' => 'ბ',
    'n' => 'ნ',
    'm' => 'მ',

    // Shift-modified keys
    'S' => 'შ',
    'T' => 'თ',
    'R' => 'ღ',
    'W' => 'ჭ',
    'C' => 'ჩ',
    'Z' => 'ძ',
};

/// Uppercase keys with their own Georgian letter
pub const SPECIAL_UPPERCASE: [char; 6] = ['S', 'T', 'R', 'W', 'C', 'Z'];

lazy_static! {
    /// Georgian letter to Latin keyboard character, inverted from [`EN_TO_KA`]
    pub static ref KA_TO_EN: FxHashMap<char, char> = EN_TO_KA
        .entries()
        .map(|(&latin, &georgian)| (georgian, latin))
        .collect();
}

/// Look up a Latin character with exact case
#[inline]
pub fn lookup_latin(c: char) -> Option<char> {
    EN_TO_KA.get(&c).copied()
}

/// Look up a Georgian letter
#[inline]
pub fn lookup_georgian(c: char) -> Option<char> {
    KA_TO_EN.get(&c).copied()
}

/// Check whether an uppercase key has its own Georgian letter
pub fn is_special_uppercase(c: char) -> bool {
    SPECIAL_UPPERCASE.contains(&c)
}

/// Iterate over all (Latin, Georgian) pairs of the forward table
pub fn forward_pairs() -> impl Iterator<Item = (char, char)> {
    EN_TO_KA.entries().map(|(&latin, &georgian)| (latin, georgian))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_forward_table_size() {
        assert_eq!(EN_TO_KA.len(), 32);
        for c in 'a'..='z' {
            assert!(EN_TO_KA.contains_key(&c), "missing key {}", c);
        }
        for c in SPECIAL_UPPERCASE {
            assert!(EN_TO_KA.contains_key(&c), "missing key {}", c);
        }
    }

    #[test]
    fn test_forward_table_injective() {
        let values: HashSet<char> = EN_TO_KA.values().copied().collect();
        assert_eq!(values.len(), EN_TO_KA.len());
        assert_eq!(KA_TO_EN.len(), EN_TO_KA.len());
    }

    #[test]
    fn test_reverse_table_consistent() {
        for (latin, georgian) in forward_pairs() {
            assert_eq!(lookup_georgian(georgian), Some(latin));
        }
    }

    #[test]
    fn test_special_uppercase_lookup() {
        assert_eq!(lookup_latin('S'), Some('შ'));
        assert_eq!(lookup_latin('s'), Some('ს'));
        assert_eq!(lookup_latin('Q'), None);
        assert!(is_special_uppercase('Z'));
        assert!(!is_special_uppercase('Q'));
        assert!(!is_special_uppercase('z'));
    }

    #[test]
    fn test_values_in_georgian_block() {
        for (_, georgian) in forward_pairs() {
            assert!(crate::data::constants::is_georgian_char(georgian));
        }
    }
}
