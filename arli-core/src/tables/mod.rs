//! Static substitution tables
//!
//! Every table here is immutable and process-wide. The compiled patterns are
//! built on first use and only read afterwards.

pub mod constants;
pub mod digits;
pub mod ligatures;
pub mod patterns;
pub mod punctuation;

pub use constants::{
    ARABIC_DATE_SEPARATOR, ARABIC_DECIMAL_SEPARATOR, ARABIC_TATWEEL, ARABIC_THOUSANDS_SEPARATOR,
};
pub use digits::{arabic_indic_digit, DIGITS};
pub use ligatures::{Ligature, LIGATURES};
pub use punctuation::{arabic_punctuation, PUNCTUATION};
