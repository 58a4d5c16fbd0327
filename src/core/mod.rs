//! Core conversion module
//!
//! Direction detection and per-character substitution between the Latin
//! and Georgian keyboard layouts. Pure functions, no I/O.

pub mod converter;

pub use converter::{
    convert, convert_char, convert_with_direction, convert_with_options, detect_direction,
    ConversionDirection, ConvertOptions, LayoutConverter,
};
