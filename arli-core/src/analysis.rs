//! Character-class analysis
//!
//! Counting, testing, extracting and removing Arabic characters. Every
//! function takes the same [`Input`] values as [`crate::transform`]; input
//! that is not string-like yields `0`, `false` or an empty string.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::api::{Error, Input};
use crate::tables::patterns::compile;

/// A set of Arabic code points to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharClass {
    /// Arabic characters, U+0621..U+0652 (`char`)
    #[default]
    Arabic,
    /// Arabic letters without harakat or tatweel (`letter`)
    Letter,
    /// Letters, tatweel and harakat (`strict`)
    Strict,
    /// The whole Arabic block, U+0600..U+06FF (`all`)
    All,
    /// The Arabic block plus both presentation-form blocks (`every`)
    Every,
    /// Harakat, U+064B..U+0652 (`punct`)
    Punct,
    /// Arabic-Indic digits, U+0660..U+0669 (`digit`)
    Digit,
}

impl CharClass {
    /// Every class, in table order
    pub const ALL: [CharClass; 7] = [
        CharClass::Arabic,
        CharClass::Letter,
        CharClass::Strict,
        CharClass::All,
        CharClass::Every,
        CharClass::Punct,
        CharClass::Digit,
    ];

    /// External name of the class
    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Arabic => "char",
            CharClass::Letter => "letter",
            CharClass::Strict => "strict",
            CharClass::All => "all",
            CharClass::Every => "every",
            CharClass::Punct => "punct",
            CharClass::Digit => "digit",
        }
    }

    fn ranges(&self) -> &'static str {
        match self {
            CharClass::Arabic => r"\x{0621}-\x{0652}",
            CharClass::Letter => r"\x{0621}-\x{063A}\x{0641}-\x{064A}",
            CharClass::Strict => r"\x{0621}-\x{063A}\x{0640}-\x{0652}",
            CharClass::All => r"\x{0600}-\x{06FF}",
            CharClass::Every => r"\x{0600}-\x{06FF}\x{FB50}-\x{FDFF}\x{FE70}-\x{FEFF}",
            CharClass::Punct => r"\x{064B}-\x{0652}",
            CharClass::Digit => r"\x{0660}-\x{0669}",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }

    fn patterns(&self) -> &'static (Regex, Regex) {
        static TABLE: OnceLock<Vec<(Regex, Regex)>> = OnceLock::new();
        let table = TABLE.get_or_init(|| {
            CharClass::ALL
                .iter()
                .map(|class| {
                    let ranges = class.ranges();
                    (
                        compile(&format!("[{ranges}]")),
                        compile(&format!("[^{ranges}]")),
                    )
                })
                .collect()
        });
        &table[self.index()]
    }

    /// Pattern matching one character of this class
    pub fn pattern(&self) -> &'static Regex {
        &self.patterns().0
    }

    /// Pattern matching one character outside this class
    pub fn negated(&self) -> &'static Regex {
        &self.patterns().1
    }
}

impl FromStr for CharClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "arabic" => Ok(CharClass::Arabic),
            "letter" => Ok(CharClass::Letter),
            "strict" => Ok(CharClass::Strict),
            "all" => Ok(CharClass::All),
            "every" => Ok(CharClass::Every),
            "punct" => Ok(CharClass::Punct),
            "digit" => Ok(CharClass::Digit),
            _ => Err(Error::InvalidOption {
                option: "charClass",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of characters in the class
pub fn count(input: impl Into<Input>, class: CharClass) -> usize {
    let input = input.into();
    input
        .as_transformable()
        .map_or(0, |text| class.pattern().find_iter(text).count())
}

/// Number of characters outside the class
pub fn count_rest(input: impl Into<Input>, class: CharClass) -> usize {
    let input = input.into();
    input
        .as_transformable()
        .map_or(0, |text| class.negated().find_iter(text).count())
}

/// Only the characters of the class, in order
pub fn extract(input: impl Into<Input>, class: CharClass) -> String {
    let input = input.into();
    input.as_transformable().map_or_else(String::new, |text| {
        class.negated().replace_all(text, "").into_owned()
    })
}

/// Whether any character of the class occurs
pub fn has(input: impl Into<Input>, class: CharClass) -> bool {
    let input = input.into();
    input
        .as_transformable()
        .is_some_and(|text| class.pattern().is_match(text))
}

/// Percentage of characters in the class
pub fn how(input: impl Into<Input>, class: CharClass) -> f64 {
    let input = input.into();
    let Some(text) = input.as_transformable() else {
        return 0.0;
    };

    let total = text.chars().count();
    let matched = class.pattern().find_iter(text).count();
    if total == 0 || matched == 0 {
        return 0.0;
    }

    matched as f64 / total as f64 * 100.0
}

/// Percentage of characters outside the class
///
/// Always `100 - how`, so input that is not string-like gives `100`.
pub fn how_rest(input: impl Into<Input>, class: CharClass) -> f64 {
    100.0 - how(input, class)
}

/// The text with every character of the class removed
pub fn remove(input: impl Into<Input>, class: CharClass) -> String {
    let input = input.into();
    input.as_transformable().map_or_else(String::new, |text| {
        class.pattern().replace_all(text, "").into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn test_count() {
        assert_eq!(count("Hello! مرحبا", CharClass::Arabic), 5);
        assert_eq!(count("Hello!", CharClass::Arabic), 0);
        assert_eq!(count("Hello مرحبا ١٢٣", CharClass::Digit), 3);
    }

    #[test]
    fn test_count_rest() {
        assert_eq!(count_rest("Hello!", CharClass::Arabic), 6);
        assert_eq!(count_rest("Hello! مرحبا", CharClass::Arabic), 7);
        assert_eq!(count_rest("Hello! مرحبا ١٢٣", CharClass::Digit), 13);
    }

    #[test]
    fn test_extract() {
        assert_eq!(extract("Hello مرحبا", CharClass::Arabic), "مرحبا");
        assert_eq!(extract("Hello مرحبا ١٢٣", CharClass::Digit), "١٢٣");
    }

    #[test]
    fn test_has() {
        assert!(has("Hello مرحبا", CharClass::Arabic));
        assert!(!has("Hello مرحبا", CharClass::Digit));
        assert!(!has("Hello", CharClass::Every));
    }

    #[test]
    fn test_how() {
        assert!(close(how("Hello مرحبا", CharClass::Arabic), 45.45454545454545));
        // Arabic comma and Extended Arabic-Indic digits sit outside the default class
        assert!(close(
            how("Hello مرحبا،،،، ۱۲۳", CharClass::Arabic),
            26.31578947368421
        ));
        assert_eq!(how("Hello", CharClass::Arabic), 0.0);
    }

    #[test]
    fn test_how_rest() {
        assert!(close(how_rest("Hello مرحبا", CharClass::Arabic), 54.54545454545455));
        assert!(close(
            how_rest("Hello مرحبا،،،، ۱۲۳", CharClass::Arabic),
            73.6842105263158
        ));
    }

    #[test]
    fn test_remove() {
        assert_eq!(remove("Hello مرحبا", CharClass::Arabic), "Hello ");
        assert_eq!(remove("Hello مرحبا ١٢٣", CharClass::Digit), "Hello مرحبا ");
    }

    #[test]
    fn test_classes_differ_on_marks() {
        // tatweel and a fatha
        let text = "مـَ";
        assert_eq!(count(text, CharClass::Letter), 1);
        assert_eq!(count(text, CharClass::Strict), 3);
        assert_eq!(count(text, CharClass::Punct), 1);
        assert_eq!(count("،ﷺ", CharClass::All), 1);
        assert_eq!(count("،ﷺ", CharClass::Every), 2);
    }

    #[test]
    fn test_rejected_input() {
        for input in [Input::Absent, json!(12).into(), "".into(), "undefined".into()] {
            assert_eq!(count(input.clone(), CharClass::Arabic), 0);
            assert_eq!(count_rest(input.clone(), CharClass::Arabic), 0);
            assert_eq!(extract(input.clone(), CharClass::Arabic), "");
            assert!(!has(input.clone(), CharClass::Arabic));
            assert_eq!(how(input.clone(), CharClass::Arabic), 0.0);
            assert_eq!(how_rest(input.clone(), CharClass::Arabic), 100.0);
            assert_eq!(remove(input, CharClass::Arabic), "");
        }
    }

    #[test]
    fn test_json_string_value() {
        assert_eq!(count(json!("مرحبا"), CharClass::Arabic), 5);
    }

    #[test]
    fn test_char_class_names() {
        for class in CharClass::ALL {
            assert_eq!(class.to_string().parse::<CharClass>().unwrap(), class);
        }
        assert_eq!("ARABIC".parse::<CharClass>().unwrap(), CharClass::Arabic);
        assert_eq!(CharClass::default(), CharClass::Arabic);
        assert!(matches!(
            "latin".parse::<CharClass>(),
            Err(Error::InvalidOption { option: "charClass", .. })
        ));
    }

    #[test]
    fn test_patterns_match_single_characters() {
        for class in CharClass::ALL {
            assert!(!class.pattern().is_match("abc"));
            assert!(class.negated().is_match("a"));
        }
    }
}
