//! Transformation stages and the pipeline that orders them
//!
//! Each stage is a pure function from text to text. The [`Pipeline`] picks
//! the stages enabled by an [`Options`] record and threads a single working
//! string through them in a fixed order. Later stages see the output of
//! earlier ones: date detection must happen before digits stop being ASCII,
//! and number separators before punctuation claims the commas.

pub mod date;
pub mod digit;
pub mod ligature;
pub mod number;
pub mod punctuation;
pub mod tatweel;

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, Regex};

use crate::api::{DateFormat, Options, TatweelMode};

pub use date::{localize_dates, reorder_dates};
pub use digit::localize_digits;
pub use ligature::substitute_ligatures;
pub use number::localize_number_separators;
pub use punctuation::localize_punctuation;
pub use tatweel::collapse_tatweel;

/// One step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Trim surrounding whitespace
    Clean,
    /// Swap day and month into the target order
    DateReorder,
    /// Rewrite date tokens with the Arabic date separator
    DateLocalization,
    /// Arabic thousands and decimal separators
    NumberSeparators,
    /// Arabic-Indic digits
    Digits,
    /// Arabic punctuation
    Punctuation,
    /// Collapse or delete tatweel
    Tatweel,
    /// Honorific ligatures
    Ligatures,
}

impl Stage {
    /// Every stage in execution order
    pub const ALL: [Stage; 8] = [
        Stage::Clean,
        Stage::DateReorder,
        Stage::DateLocalization,
        Stage::NumberSeparators,
        Stage::Digits,
        Stage::Punctuation,
        Stage::Tatweel,
        Stage::Ligatures,
    ];

    /// Short stable name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Clean => "clean",
            Stage::DateReorder => "date-reorder",
            Stage::DateLocalization => "date-localization",
            Stage::NumberSeparators => "number-separators",
            Stage::Digits => "digits",
            Stage::Punctuation => "punctuation",
            Stage::Tatweel => "tatweel",
            Stage::Ligatures => "ligatures",
        }
    }

    /// Whether `options` turn this stage on
    pub fn is_enabled(&self, options: &Options) -> bool {
        match self {
            Stage::Clean => options.clean,
            Stage::DateReorder => options.date_to != DateFormat::All,
            Stage::DateLocalization => options.localizes_dates(),
            Stage::NumberSeparators => options.number_sep,
            Stage::Digits => options.digit,
            Stage::Punctuation => options.punc,
            Stage::Tatweel => options.remove_tatweel != TatweelMode::None,
            Stage::Ligatures => options.ligatures,
        }
    }

    /// Run this stage regardless of whether it is enabled
    pub fn apply<'a>(&self, text: &'a str, options: &Options) -> Cow<'a, str> {
        match self {
            Stage::Clean => Cow::Borrowed(text.trim()),
            Stage::DateReorder => reorder_dates(text, options.date_to),
            Stage::DateLocalization => localize_dates(text, options.date_from),
            Stage::NumberSeparators => localize_number_separators(text),
            Stage::Digits => localize_digits(text),
            Stage::Punctuation => localize_punctuation(text, &options.exclude_punc),
            Stage::Tatweel => collapse_tatweel(text, options.remove_tatweel),
            Stage::Ligatures => {
                substitute_ligatures(text, options.ligatures_deep, &options.exclude_ligatures)
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The enabled stages for one options record, in execution order
#[derive(Debug, Clone)]
pub struct Pipeline {
    options: Options,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Resolve which stages `options` enable
    pub fn new(options: Options) -> Self {
        let stages = Stage::ALL
            .into_iter()
            .filter(|stage| stage.is_enabled(&options))
            .collect();

        Self { options, stages }
    }

    /// The options this pipeline was built from
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Enabled stages in execution order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Thread `text` through every enabled stage
    pub fn run(&self, text: &str) -> String {
        let mut value = text.to_owned();

        for stage in &self.stages {
            let changed = match stage.apply(&value, &self.options) {
                Cow::Owned(changed) => Some(changed),
                Cow::Borrowed(slice) if slice.len() != value.len() => Some(slice.to_owned()),
                Cow::Borrowed(_) => None,
            };

            if let Some(changed) = changed {
                log::trace!(
                    "stage {} rewrote {} bytes into {} bytes",
                    stage,
                    value.len(),
                    changed.len()
                );
                value = changed;
            }
        }

        value
    }
}

/// Keep `value` unless `f` produced new text
pub(crate) fn chain<'a, F>(value: Cow<'a, str>, f: F) -> Cow<'a, str>
where
    F: for<'b> FnOnce(&'b str) -> Cow<'b, str>,
{
    let changed = match f(&*value) {
        Cow::Owned(changed) => Some(changed),
        Cow::Borrowed(_) => None,
    };

    match changed {
        Some(changed) => Cow::Owned(changed),
        None => value,
    }
}

/// What to do with one candidate found by [`rewrite_tokens`]
pub(crate) enum Token {
    /// Replace the candidate with this text
    Replace(String),
    /// Keep the candidate and search again from this byte offset
    Skip(usize),
}

/// Rewrite the candidates `re` finds, left to right, in one linear scan
///
/// A skipped candidate may name an offset inside itself to resume from, so
/// a valid token overlapping a rejected one is still found. Allocates only
/// when something is replaced.
pub(crate) fn rewrite_tokens<'t, F>(re: &Regex, text: &'t str, mut decide: F) -> Cow<'t, str>
where
    F: FnMut(&Captures<'t>) -> Token,
{
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = re.captures_at(text, pos) else {
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        match decide(&caps) {
            Token::Replace(replacement) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len()));
                buf.push_str(&text[copied..whole.start()]);
                buf.push_str(&replacement);
                copied = whole.end();
                pos = whole.end().max(whole.start() + 1);
            }
            Token::Skip(next) if next > whole.start() && text.is_char_boundary(next) => {
                pos = next;
            }
            Token::Skip(_) => {
                pos = whole.end().max(whole.start() + 1);
            }
        }

        while pos < text.len() && !text.is_char_boundary(pos) {
            pos += 1;
        }
    }

    match out {
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(text),
    }
}
