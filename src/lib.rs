//! # strkit
//!
//! Stateless string utilities with byte-wise ASCII semantics.
//!
//! ## Features
//! - Paragraph reflow: [`wrap`] text to a width and [`unwrap`] it back
//! - Trimming, alignment, case conversion, replacement and tokenizing
//! - Prefix/suffix matching and counting under a [`Case`] policy
//! - Best-effort and strict numeric parsing, byte sizes, binary strings and ordinals
//!
//! Count and limit parameters use `0` to mean "unlimited".

pub mod case;
pub mod check;
pub mod convert;
pub mod error;
pub mod manipulate;
pub mod reflow;

pub use case::Case;
pub use check::{
    MatchPolicy, begin_with, compare, count, end_with, is_abbreviation_of, word_is_among,
};
pub use convert::{
    decimal_to_binary_string, get_ordinal, is_number, ordinal_suffix, parse_double, parse_number,
    to_double, to_human_size, to_number,
};
pub use error::ParseNumberError;
pub use manipulate::{
    calign, capitalize, decapitalize, lalign, ltrim, ralign, replace, replace_inplace, rtrim,
    split, strip, to_lower, to_upper, trim,
};
pub use reflow::{DEFAULT_WHITESPACE, DEFAULT_WIDTH, WhitespaceSet, WrapOptions, unwrap, wrap};
