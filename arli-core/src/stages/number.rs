//! Thousands and decimal separator localization

use std::borrow::Cow;

use crate::stages::{rewrite_tokens, Token};
use crate::tables::{patterns, ARABIC_DECIMAL_SEPARATOR, ARABIC_THOUSANDS_SEPARATOR};

/// Replace number separators with their Arabic forms
///
/// A number is a maximal run of digits joined by `,` and `.`. Grouped
/// numbers (`1,234,567.89`, no leading zero) get the Arabic thousands
/// separator for every comma and the decimal separator for the point. Plain
/// decimals (`3.14`) get the decimal separator. Anything else, and any
/// number directly preceded or followed by a `.`, is left alone.
pub fn localize_number_separators(text: &str) -> Cow<'_, str> {
    rewrite_tokens(patterns::number_candidate(), text, |caps| {
        let Some(token) = caps.get(0) else {
            return Token::Skip(usize::MAX);
        };
        let number = token.as_str();
        let touches_point = text[..token.start()].ends_with('.')
            || text[token.end()..].starts_with('.');

        if touches_point {
            Token::Skip(token.end())
        } else if !number.starts_with('0') && patterns::grouped_number().is_match(number) {
            Token::Replace(
                number
                    .chars()
                    .map(|ch| match ch {
                        ',' => ARABIC_THOUSANDS_SEPARATOR,
                        '.' => ARABIC_DECIMAL_SEPARATOR,
                        other => other,
                    })
                    .collect(),
            )
        } else if patterns::decimal_number().is_match(number) {
            Token::Replace(number.replacen('.', &ARABIC_DECIMAL_SEPARATOR.to_string(), 1))
        } else {
            Token::Skip(token.end())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouped_number_with_decimal() {
        assert_eq!(
            localize_number_separators("999,555,333.0000000"),
            "999٬555٬333٫0000000"
        );
    }

    #[test]
    fn test_grouped_number() {
        assert_eq!(localize_number_separators("1,234"), "1٬234");
        assert_eq!(
            localize_number_separators("pay 12,500 now"),
            "pay 12٬500 now"
        );
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(localize_number_separators("pi = 3.14"), "pi = 3٫14");
        assert_eq!(localize_number_separators("0.5"), "0٫5");
    }

    #[test]
    fn test_non_numbers_untouched() {
        assert_eq!(localize_number_separators("a, b. c"), "a, b. c");
        assert_eq!(localize_number_separators("1,23"), "1,23");
        assert_eq!(localize_number_separators("1.2.3"), "1.2.3");
        assert!(matches!(
            localize_number_separators("1234"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_point_next_to_number() {
        assert_eq!(localize_number_separators("costs 3.14."), "costs 3.14.");
        assert_eq!(localize_number_separators(".5 and .1,000"), ".5 and .1,000");
        assert_eq!(localize_number_separators("012,345"), "012,345");
    }

    #[test]
    fn test_numbers_at_the_end_of_large_input() {
        let mut text = "1 ".repeat(500_000);
        text.push_str("3.14 and 1,000");
        let result = localize_number_separators(&text);
        assert!(result.ends_with("1 3٫14 and 1٬000"));
    }

    #[test]
    fn test_multiple_numbers() {
        assert_eq!(
            localize_number_separators("1,000 and 2.5 and 3,000.75"),
            "1٬000 and 2٫5 and 3٬000٫75"
        );
    }
}
