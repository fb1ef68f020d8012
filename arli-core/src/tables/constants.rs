//! Single-character Arabic typographic marks

/// ARABIC DATE SEPARATOR (U+060D)
pub const ARABIC_DATE_SEPARATOR: char = '\u{060D}';

/// ARABIC DECIMAL SEPARATOR (U+066B)
pub const ARABIC_DECIMAL_SEPARATOR: char = '\u{066B}';

/// ARABIC THOUSANDS SEPARATOR (U+066C)
pub const ARABIC_THOUSANDS_SEPARATOR: char = '\u{066C}';

/// ARABIC TATWEEL (U+0640), the elongation character
pub const ARABIC_TATWEEL: char = '\u{0640}';
