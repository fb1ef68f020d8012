//! Compiled date, number and tatweel patterns
//!
//! Every pattern is plain `regex`, so matching is linear in the input.
//! Patterns only find candidates: maximal runs of digits joined by
//! separators. Field ranges, repeated separators and number shapes are
//! checked by the stages on each candidate.

use std::sync::OnceLock;

use regex::Regex;

/// Three digit runs joined by date separators
///
/// Groups: 1 first field, 2 separator, 3 second field, 4 separator, 5 year.
/// Each field is a whole digit run, so a candidate never starts or ends
/// inside a longer number.
pub fn date_candidate() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"(\d+)([/.\-,])(\d+)([/.\-,])(\d+)"))
}

/// Digit runs joined by single `,` or `.`
pub fn number_candidate() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"\d+(?:[.,]\d+)*"))
}

/// A whole number with comma thousands grouping and an optional decimal part
pub fn grouped_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"^\d{1,3}(?:,\d{3})+(?:\.\d+)?$"))
}

/// A whole plain decimal number
pub fn decimal_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"^\d+\.\d+$"))
}

/// Runs of two or more tatweel characters
pub fn tatweel_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| compile(r"\x{0640}{2,}"))
}

/// Escape a literal so it can be embedded in a pattern
///
/// The stages themselves never compile caller-supplied text; this is for
/// callers that build their own patterns around table phrases.
pub fn escape_literal(literal: &str) -> String {
    regex::escape(literal)
}

// Patterns are fixed at compile time; a failure here is a programming error.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}
