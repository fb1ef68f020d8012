//! Punctuation localization

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::tables::arabic_punctuation;

/// Replace Latin punctuation with Arabic forms, except marks in `exclude`
///
/// Exclusion is per mark: an excluded mark is never converted, wherever it
/// occurs.
pub fn localize_punctuation<'a>(text: &'a str, exclude: &BTreeSet<char>) -> Cow<'a, str> {
    let convert = |ch: char| {
        if exclude.contains(&ch) {
            None
        } else {
            arabic_punctuation(ch)
        }
    };

    if !text.chars().any(|ch| convert(ch).is_some()) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(text.chars().map(|ch| convert(ch).unwrap_or(ch)).collect())
}
