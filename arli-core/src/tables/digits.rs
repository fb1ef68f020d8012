//! ASCII digit to Arabic-Indic digit table

/// Arabic-Indic digit glyphs indexed by the ASCII digit value
pub const DIGITS: [char; 10] = [
    '\u{0660}', // ٠
    '\u{0661}', // ١
    '\u{0662}', // ٢
    '\u{0663}', // ٣
    '\u{0664}', // ٤
    '\u{0665}', // ٥
    '\u{0666}', // ٦
    '\u{0667}', // ٧
    '\u{0668}', // ٨
    '\u{0669}', // ٩
];

/// Map an ASCII digit to its Arabic-Indic glyph
///
/// Returns `None` for anything outside `'0'..='9'`, including digits that
/// are already Arabic-Indic.
#[inline]
pub fn arabic_indic_digit(ch: char) -> Option<char> {
    if ch.is_ascii_digit() {
        Some(DIGITS[(ch as u8 - b'0') as usize])
    } else {
        None
    }
}
