//! Latin to Arabic punctuation table

/// Latin punctuation marks paired positionally with their Arabic forms
pub const PUNCTUATION: [(char, char); 6] = [
    (',', '\u{060C}'), // ARABIC COMMA
    (';', '\u{061B}'), // ARABIC SEMICOLON
    ('?', '\u{061F}'), // ARABIC QUESTION MARK
    ('(', '\u{FD3E}'), // ORNATE LEFT PARENTHESIS
    (')', '\u{FD3F}'), // ORNATE RIGHT PARENTHESIS
    ('%', '\u{066A}'), // ARABIC PERCENT SIGN
];

/// Look up the Arabic form of a Latin punctuation mark
#[inline]
pub fn arabic_punctuation(ch: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|(latin, _)| *latin == ch)
        .map(|(_, arabic)| *arabic)
}
