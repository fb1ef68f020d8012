//! Digit localization

use std::borrow::Cow;

use crate::tables::arabic_indic_digit;

/// Replace every ASCII digit with its Arabic-Indic glyph
///
/// Digits that are already Arabic-Indic are left alone, which makes the
/// stage idempotent.
pub fn localize_digits(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .map(|ch| arabic_indic_digit(ch).unwrap_or(ch))
            .collect(),
    )
}
