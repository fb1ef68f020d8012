//! Tatweel (elongation) handling

use std::borrow::Cow;

use crate::api::TatweelMode;
use crate::tables::{patterns, ARABIC_TATWEEL};

/// Collapse or delete tatweel characters according to `mode`
pub fn collapse_tatweel(text: &str, mode: TatweelMode) -> Cow<'_, str> {
    match mode {
        TatweelMode::Extra => {
            let single = ARABIC_TATWEEL.to_string();
            patterns::tatweel_run().replace_all(text, regex::NoExpand(&single))
        }
        TatweelMode::All if text.contains(ARABIC_TATWEEL) => {
            Cow::Owned(text.replace(ARABIC_TATWEEL, ""))
        }
        TatweelMode::All | TatweelMode::None => Cow::Borrowed(text),
    }
}
