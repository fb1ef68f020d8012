//! Configuration API for the transform pipeline

use crate::api::Error;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Date token ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateFormat {
    /// Both orderings
    #[default]
    #[serde(rename = "all", alias = "ALL")]
    All,
    /// Day, month, year
    #[serde(rename = "DMY", alias = "dmy")]
    Dmy,
    /// Month, day, year
    #[serde(rename = "MDY", alias = "mdy")]
    Mdy,
}

impl DateFormat {
    /// External name of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            DateFormat::All => "all",
            DateFormat::Dmy => "DMY",
            DateFormat::Mdy => "MDY",
        }
    }
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(DateFormat::All),
            "dmy" => Ok(DateFormat::Dmy),
            "mdy" => Ok(DateFormat::Mdy),
            _ => Err(Error::InvalidOption {
                option: "dateFrom/dateTo",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do with tatweel (elongation) characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TatweelMode {
    /// Collapse runs of two or more into a single tatweel
    #[default]
    Extra,
    /// Delete every tatweel
    All,
    /// Leave tatweel untouched
    None,
}

impl TatweelMode {
    /// External name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            TatweelMode::Extra => "extra",
            TatweelMode::All => "all",
            TatweelMode::None => "none",
        }
    }
}

impl FromStr for TatweelMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "extra" => Ok(TatweelMode::Extra),
            "all" => Ok(TatweelMode::All),
            "none" => Ok(TatweelMode::None),
            _ => Err(Error::InvalidOption {
                option: "removeTatweel",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for TatweelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Precision of ligature substitution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LigatureDepth {
    /// Standard glyph for every phrase (`1`)
    #[default]
    Standard,
    /// More specific glyph where the table has one (`2`)
    Deep,
}

impl TryFrom<u8> for LigatureDepth {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LigatureDepth::Standard),
            2 => Ok(LigatureDepth::Deep),
            _ => Err(Error::InvalidOption {
                option: "ligaturesDeep",
                value: value.to_string(),
            }),
        }
    }
}

impl From<LigatureDepth> for u8 {
    fn from(depth: LigatureDepth) -> Self {
        match depth {
            LigatureDepth::Standard => 1,
            LigatureDepth::Deep => 2,
        }
    }
}

impl FromStr for LigatureDepth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidOption {
            option: "ligaturesDeep",
            value: s.to_string(),
        };
        let value: u8 = s.trim().parse().map_err(|_| invalid())?;
        LigatureDepth::try_from(value).map_err(|_| invalid())
    }
}

impl fmt::Display for LigatureDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Resolved pipeline options
///
/// Built once per call from a default record and an optional
/// [`PartialOptions`] overlay; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    pub(crate) clean: bool,
    pub(crate) date: bool,
    pub(crate) date_from: DateFormat,
    pub(crate) date_to: DateFormat,
    pub(crate) digit: bool,
    pub(crate) number_sep: bool,
    pub(crate) punc: bool,
    pub(crate) exclude_punc: BTreeSet<char>,
    pub(crate) remove_tatweel: TatweelMode,
    pub(crate) ligatures: bool,
    pub(crate) ligatures_deep: LigatureDepth,
    pub(crate) exclude_ligatures: BTreeSet<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            clean: true,
            date: true,
            date_from: DateFormat::All,
            date_to: DateFormat::All,
            digit: true,
            number_sep: true,
            punc: true,
            exclude_punc: BTreeSet::new(),
            remove_tatweel: TatweelMode::Extra,
            ligatures: true,
            ligatures_deep: LigatureDepth::Standard,
            exclude_ligatures: BTreeSet::new(),
        }
    }
}

impl Options {
    /// Defaults for the unchecked entry point: every stage off
    pub fn reversed() -> Self {
        Self {
            clean: false,
            date: false,
            digit: false,
            number_sep: false,
            punc: false,
            remove_tatweel: TatweelMode::None,
            ligatures: false,
            ..Self::default()
        }
    }

    /// Create a builder starting from [`Options::default`]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Overlay the fields set in `partial`, keeping every other field
    pub fn merge(&self, partial: &PartialOptions) -> Options {
        Options {
            clean: partial.clean.unwrap_or(self.clean),
            date: partial.date.unwrap_or(self.date),
            date_from: partial.date_from.unwrap_or(self.date_from),
            date_to: partial.date_to.unwrap_or(self.date_to),
            digit: partial.digit.unwrap_or(self.digit),
            number_sep: partial.number_sep.unwrap_or(self.number_sep),
            punc: partial.punc.unwrap_or(self.punc),
            exclude_punc: partial
                .exclude_punc
                .clone()
                .unwrap_or_else(|| self.exclude_punc.clone()),
            remove_tatweel: partial.remove_tatweel.unwrap_or(self.remove_tatweel),
            ligatures: partial.ligatures.unwrap_or(self.ligatures),
            ligatures_deep: partial.ligatures_deep.unwrap_or(self.ligatures_deep),
            exclude_ligatures: partial
                .exclude_ligatures
                .clone()
                .unwrap_or_else(|| self.exclude_ligatures.clone()),
        }
    }

    /// Serialize as a TOML document
    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Trim surrounding whitespace before any stage runs
    pub fn clean(&self) -> bool {
        self.clean
    }

    /// Localize date tokens (also requires [`Options::digit`])
    pub fn date(&self) -> bool {
        self.date
    }

    /// Which date orderings to localize
    pub fn date_from(&self) -> DateFormat {
        self.date_from
    }

    /// Target ordering for date reordering; `All` leaves order alone
    pub fn date_to(&self) -> DateFormat {
        self.date_to
    }

    /// Replace ASCII digits with Arabic-Indic digits
    pub fn digit(&self) -> bool {
        self.digit
    }

    /// Replace thousands and decimal separators
    pub fn number_sep(&self) -> bool {
        self.number_sep
    }

    /// Replace Latin punctuation
    pub fn punc(&self) -> bool {
        self.punc
    }

    /// Punctuation marks left untouched
    pub fn exclude_punc(&self) -> &BTreeSet<char> {
        &self.exclude_punc
    }

    /// Tatweel handling
    pub fn remove_tatweel(&self) -> TatweelMode {
        self.remove_tatweel
    }

    /// Replace honorific phrases with ligatures
    pub fn ligatures(&self) -> bool {
        self.ligatures
    }

    /// Ligature precision
    pub fn ligatures_deep(&self) -> LigatureDepth {
        self.ligatures_deep
    }

    /// Phrases left untouched
    pub fn exclude_ligatures(&self) -> &BTreeSet<String> {
        &self.exclude_ligatures
    }

    /// Whether date localization actually runs
    ///
    /// Arabic date rendering implies Arabic digits, so `date` without
    /// `digit` is suppressed.
    pub fn localizes_dates(&self) -> bool {
        self.date && self.digit
    }
}

/// Options where every field may be absent
///
/// Deserialized from caller-supplied configuration. Unknown keys are ignored.
/// The keys `number`, `char` and `dash` from older configuration surfaces are
/// accepted as aliases of `digit`, `punc` and `removeTatweel`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<DateFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<DateFormat>,
    #[serde(alias = "number", skip_serializing_if = "Option::is_none")]
    pub digit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_sep: Option<bool>,
    #[serde(alias = "char", skip_serializing_if = "Option::is_none")]
    pub punc: Option<bool>,
    #[serde(
        deserialize_with = "deserialize_char_set",
        skip_serializing_if = "Option::is_none"
    )]
    pub exclude_punc: Option<BTreeSet<char>>,
    #[serde(alias = "dash", skip_serializing_if = "Option::is_none")]
    pub remove_tatweel: Option<TatweelMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligatures: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ligatures_deep: Option<LigatureDepth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_ligatures: Option<BTreeSet<String>>,
}

impl PartialOptions {
    /// Create an empty overlay
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parse from a JSON document
    pub fn from_json_str(s: &str) -> Result<Self, Error> {
        serde_json::from_str(s).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read from an already decoded JSON value
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, Error> {
        Self::deserialize(value).map_err(|e| Error::Config(e.to_string()))
    }

    /// Overlay `later` on top of `self`; fields set in `later` win
    pub fn overlay(&self, later: &PartialOptions) -> PartialOptions {
        PartialOptions {
            clean: later.clean.or(self.clean),
            date: later.date.or(self.date),
            date_from: later.date_from.or(self.date_from),
            date_to: later.date_to.or(self.date_to),
            digit: later.digit.or(self.digit),
            number_sep: later.number_sep.or(self.number_sep),
            punc: later.punc.or(self.punc),
            exclude_punc: later
                .exclude_punc
                .clone()
                .or_else(|| self.exclude_punc.clone()),
            remove_tatweel: later.remove_tatweel.or(self.remove_tatweel),
            ligatures: later.ligatures.or(self.ligatures),
            ligatures_deep: later.ligatures_deep.or(self.ligatures_deep),
            exclude_ligatures: later
                .exclude_ligatures
                .clone()
                .or_else(|| self.exclude_ligatures.clone()),
        }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == PartialOptions::default()
    }
}

/// `excludePunc` may be a string of marks or a list of strings
#[derive(Deserialize)]
#[serde(untagged)]
enum CharList {
    Text(String),
    List(Vec<String>),
}

fn deserialize_char_set<'de, D>(deserializer: D) -> Result<Option<BTreeSet<char>>, D::Error>
where
    D: Deserializer<'de>,
{
    let list = Option::<CharList>::deserialize(deserializer)?;
    Ok(list.map(|list| match list {
        CharList::Text(text) => text.chars().collect(),
        CharList::List(items) => items.iter().flat_map(|item| item.chars()).collect(),
    }))
}

/// Fluent builder for [`Options`]
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Create a builder starting from [`Options::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder starting from [`Options::reversed`]
    pub fn reversed() -> Self {
        Self {
            options: Options::reversed(),
        }
    }

    /// Trim surrounding whitespace
    pub fn clean(mut self, enabled: bool) -> Self {
        self.options.clean = enabled;
        self
    }

    /// Localize date tokens
    pub fn date(mut self, enabled: bool) -> Self {
        self.options.date = enabled;
        self
    }

    /// Which date orderings to localize
    pub fn date_from(mut self, format: DateFormat) -> Self {
        self.options.date_from = format;
        self
    }

    /// Target date ordering
    pub fn date_to(mut self, format: DateFormat) -> Self {
        self.options.date_to = format;
        self
    }

    /// Localize digits
    pub fn digit(mut self, enabled: bool) -> Self {
        self.options.digit = enabled;
        self
    }

    /// Localize number separators
    pub fn number_sep(mut self, enabled: bool) -> Self {
        self.options.number_sep = enabled;
        self
    }

    /// Localize punctuation
    pub fn punc(mut self, enabled: bool) -> Self {
        self.options.punc = enabled;
        self
    }

    /// Leave these punctuation marks untouched
    pub fn exclude_punc(mut self, marks: impl IntoIterator<Item = char>) -> Self {
        self.options.exclude_punc = marks.into_iter().collect();
        self
    }

    /// Tatweel handling
    pub fn remove_tatweel(mut self, mode: TatweelMode) -> Self {
        self.options.remove_tatweel = mode;
        self
    }

    /// Substitute ligatures
    pub fn ligatures(mut self, enabled: bool) -> Self {
        self.options.ligatures = enabled;
        self
    }

    /// Ligature precision
    pub fn ligatures_deep(mut self, depth: LigatureDepth) -> Self {
        self.options.ligatures_deep = depth;
        self
    }

    /// Leave these phrases untouched
    pub fn exclude_ligatures<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_ligatures = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Apply a partial overlay on top of what has been set so far
    pub fn merge(mut self, partial: &PartialOptions) -> Self {
        self.options = self.options.merge(partial);
        self
    }

    /// Build the options
    pub fn build(self) -> Options {
        self.options
    }
}
