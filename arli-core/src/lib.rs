//! Arabic typographic localization for Latin-formatted text
//!
//! `arli-core` rewrites digits, dates, number separators, punctuation,
//! tatweel runs and a handful of honorific phrases into their Arabic-script
//! forms. The whole job is a fixed pipeline of independent, toggleable
//! stages applied to one string:
//!
//! 1. date reordering (day/month swap)
//! 2. date localization (Arabic date separator)
//! 3. number separators (Arabic thousands and decimal separators)
//! 4. digits (Arabic-Indic glyphs)
//! 5. punctuation
//! 6. tatweel collapsing and ligature substitution
//!
//! The [`analysis`] module measures how much of a string falls in an
//! Arabic character class.
//!
//! # Example
//!
//! ```rust
//! use arli_core::{transform, PartialOptions};
//!
//! assert_eq!(transform("999,555,333.0000000", None), "٩٩٩٬٥٥٥٬٣٣٣٫٠٠٠٠٠٠٠");
//!
//! let options = PartialOptions {
//!     digit: Some(false),
//!     ..PartialOptions::default()
//! };
//! assert_eq!(transform("0123456789", Some(&options)), "0123456789");
//! ```

pub mod analysis;
pub mod api;
pub mod stages;
pub mod tables;

pub use analysis::{count, count_rest, extract, has, how, how_rest, remove, CharClass};
pub use api::{
    transform, transform_str, transforming, DateFormat, Error, Input, InputPolicy, LigatureDepth,
    Options, OptionsBuilder, PartialOptions, Result, TatweelMode, Transformer,
};
pub use stages::{
    collapse_tatweel, localize_dates, localize_digits, localize_number_separators,
    localize_punctuation, reorder_dates, substitute_ligatures, Pipeline, Stage,
};
pub use tables::patterns::escape_literal;
pub use tables::{Ligature, DIGITS, LIGATURES, PUNCTUATION};

/// Semantic version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
