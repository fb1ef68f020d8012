//! Date reordering and localization

use std::borrow::Cow;

use regex::Captures;

use crate::api::DateFormat;
use crate::stages::{chain, rewrite_tokens, Token};
use crate::tables::{patterns, ARABIC_DATE_SEPARATOR};

/// Field order of a date token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    DayFirst,
    MonthFirst,
}

/// Swap day and month so every date token ends up in `target` order
///
/// With `DateFormat::Dmy` the tokens shaped like `MM/DD/YYYY` are swapped;
/// with `DateFormat::Mdy` those shaped like `DD/MM/YYYY` are. Separators and
/// years are kept. `DateFormat::All` leaves the text alone.
pub fn reorder_dates(text: &str, target: DateFormat) -> Cow<'_, str> {
    let source = match target {
        DateFormat::All => return Cow::Borrowed(text),
        DateFormat::Dmy => Order::MonthFirst,
        DateFormat::Mdy => Order::DayFirst,
    };

    rewrite_tokens(patterns::date_candidate(), text, |caps| {
        if is_date(caps, source) {
            Token::Replace(format!(
                "{}{}{}{}{}",
                &caps[3], &caps[2], &caps[1], &caps[4], &caps[5]
            ))
        } else {
            resume_after_first_field(caps)
        }
    })
}

/// Rewrite date tokens with the Arabic date separator
///
/// Field order is preserved. With `DateFormat::All` the day-first pass runs
/// before the month-first pass, so a token that fits both shapes (both
/// fields 12 or less) is claimed by the day-first pattern.
pub fn localize_dates(text: &str, from: DateFormat) -> Cow<'_, str> {
    let mut value = Cow::Borrowed(text);

    if matches!(from, DateFormat::All | DateFormat::Dmy) {
        value = chain(value, |text| with_arabic_separator(text, Order::DayFirst));
    }

    if matches!(from, DateFormat::All | DateFormat::Mdy) {
        value = chain(value, |text| with_arabic_separator(text, Order::MonthFirst));
    }

    value
}

fn with_arabic_separator(text: &str, order: Order) -> Cow<'_, str> {
    rewrite_tokens(patterns::date_candidate(), text, |caps| {
        if is_date(caps, order) {
            Token::Replace(format!(
                "{}{sep}{}{sep}{}",
                &caps[1],
                &caps[3],
                &caps[5],
                sep = ARABIC_DATE_SEPARATOR
            ))
        } else {
            resume_after_first_field(caps)
        }
    })
}

/// A rejected candidate may still end in a date starting at its second field
fn resume_after_first_field(caps: &Captures<'_>) -> Token {
    match caps.get(3) {
        Some(second) => Token::Skip(second.start()),
        None => Token::Skip(usize::MAX),
    }
}

fn is_date(caps: &Captures<'_>, order: Order) -> bool {
    if caps[2] != caps[4] || !is_year(&caps[5]) {
        return false;
    }

    match order {
        Order::DayFirst => is_day(&caps[1]) && is_month(&caps[3]),
        Order::MonthFirst => is_month(&caps[1]) && is_day(&caps[3]),
    }
}

/// Two ASCII digits, 01 to 31
fn is_day(field: &str) -> bool {
    two_digit_value(field).is_some_and(|day| (1..=31).contains(&day))
}

/// Two ASCII digits, 01 to 12
fn is_month(field: &str) -> bool {
    two_digit_value(field).is_some_and(|month| (1..=12).contains(&month))
}

/// Two or four ASCII digits
fn is_year(field: &str) -> bool {
    matches!(field.len(), 2 | 4) && field.bytes().all(|b| b.is_ascii_digit())
}

fn two_digit_value(field: &str) -> Option<u8> {
    match field.as_bytes() {
        &[tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => Some((tens - b'0') * 10 + (ones - b'0')),
        _ => None,
    }
}
