//! Generate config command implementation

use anyhow::Context;
use arli_core::Options;
use clap::Args;
use std::path::PathBuf;

use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file; delete any line to keep its default");
        println!("2. Validate your configuration:");
        println!("   arli validate --config {}", self.output.display());
        println!("3. Use it for transforming:");
        println!(
            "   arli transform --config {} \"12/05/1989\"",
            self.output.display()
        );

        Ok(())
    }

    /// Commented TOML listing every option at its default
    pub fn generate_template() -> String {
        let defaults = Options::default();
        let list = |items: Vec<String>| {
            items
                .iter()
                .map(|item| format!("{item:?}"))
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            r#"# arli configuration
# Every key is optional. Missing keys fall back to the defaults shown here.

# Trim leading and trailing whitespace before anything else
clean = {clean}

# Rewrite dates such as 12/05/1989 with the Arabic date separator
# (only applies while `digit` is enabled)
date = {date}

# Ordering of dates in the input: "all", "DMY" or "MDY"
dateFrom = "{date_from}"

# Reorder dates into "DMY" or "MDY"; "all" keeps them as written
dateTo = "{date_to}"

# Arabic-Indic digits
digit = {digit}

# Arabic thousands and decimal separators
numberSep = {number_sep}

# Arabic punctuation for , ; ? ( ) %
punc = {punc}

# Marks to leave untouched, e.g. "?%"
excludePunc = [{exclude_punc}]

# Tatweel: "extra" collapses runs, "all" deletes every one, "none" keeps them
removeTatweel = "{remove_tatweel}"

# Honorific ligatures
ligatures = {ligatures}

# 1 for the standard glyphs, 2 for the more specific ones where available
ligaturesDeep = {ligatures_deep}

# Phrases to leave untouched
excludeLigatures = [{exclude_ligatures}]
"#,
            clean = defaults.clean(),
            date = defaults.date(),
            date_from = defaults.date_from(),
            date_to = defaults.date_to(),
            digit = defaults.digit(),
            number_sep = defaults.number_sep(),
            punc = defaults.punc(),
            exclude_punc = list(defaults.exclude_punc().iter().map(char::to_string).collect()),
            remove_tatweel = defaults.remove_tatweel(),
            ligatures = defaults.ligatures(),
            ligatures_deep = defaults.ligatures_deep(),
            exclude_ligatures = list(defaults.exclude_ligatures().iter().cloned().collect()),
        )
    }
}
