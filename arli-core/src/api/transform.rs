//! Entry points
//!
//! Two entry points share one pipeline. [`transform`] validates its input
//! strictly and starts from [`Options::default`]; [`transforming`] passes
//! rejected input through and starts from [`Options::reversed`], so callers
//! opt in to each stage.

use crate::api::{Input, InputPolicy, Options, OptionsBuilder, PartialOptions};
use crate::stages::{Pipeline, Stage};

/// Reusable transformation handle
///
/// Holds resolved options and an input policy. Cheap to share between
/// threads: applying it never mutates anything.
#[derive(Debug, Clone)]
pub struct Transformer {
    pipeline: Pipeline,
    policy: InputPolicy,
}

impl Transformer {
    /// Checked transformer with the given options
    pub fn new(options: Options) -> Self {
        Self::with_policy(options, InputPolicy::Checked)
    }

    /// Transformer with an explicit input policy
    pub fn with_policy(options: Options, policy: InputPolicy) -> Self {
        Self {
            pipeline: Pipeline::new(options),
            policy,
        }
    }

    /// Resolved options
    pub fn options(&self) -> &Options {
        self.pipeline.options()
    }

    /// Input policy
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Stages that will run, in order
    pub fn stages(&self) -> &[Stage] {
        self.pipeline.stages()
    }

    /// Transform one value
    ///
    /// Never fails. Input that is not string-like yields an empty string
    /// under [`InputPolicy::Checked`] and its plain string form under
    /// [`InputPolicy::Unchecked`].
    pub fn apply(&self, input: impl Into<Input>) -> String {
        let input = input.into();

        match input.as_transformable() {
            Some(text) => self.pipeline.run(text),
            None => {
                log::debug!("input is not string-like ({:?} policy)", self.policy);
                match self.policy {
                    InputPolicy::Checked => String::new(),
                    InputPolicy::Unchecked => input.to_display_string().into_owned(),
                }
            }
        }
    }
}

impl Default for Transformer {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

/// Transform a value into its Arabic typographic form
///
/// `options` are merged field by field over [`Options::default`]. Input that
/// is absent, empty, `"undefined"` or not textual yields an empty string.
pub fn transform(input: impl Into<Input>, options: Option<&PartialOptions>) -> String {
    let options = resolve(OptionsBuilder::new(), options);
    Transformer::with_policy(options, InputPolicy::Checked).apply(input)
}

/// Like [`transform`], but every stage starts disabled
///
/// `options` are merged over [`Options::reversed`]. Input that is not
/// string-like is returned as its plain string form instead of being
/// dropped.
pub fn transforming(input: impl Into<Input>, options: Option<&PartialOptions>) -> String {
    let options = resolve(OptionsBuilder::reversed(), options);
    Transformer::with_policy(options, InputPolicy::Unchecked).apply(input)
}

/// Run the pipeline over text that has already been accepted
pub fn transform_str(text: &str, options: &Options) -> String {
    Pipeline::new(options.clone()).run(text)
}

fn resolve(builder: OptionsBuilder, options: Option<&PartialOptions>) -> Options {
    match options {
        Some(partial) => builder.merge(partial).build(),
        None => builder.build(),
    }
}
