//! Transform command implementation

use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use arli_core::{DateFormat, LigatureDepth, PartialOptions, TatweelMode};
use clap::{ArgAction, Args};

use crate::config::load_partial_options;
use crate::error::{CliError, CliResult};
use crate::input::{read_stdin, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};

/// Arguments for the transform command
#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Text to transform (default: --input FILE, then stdin)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML, or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start with every stage disabled and pass rejected input through
    #[arg(long)]
    pub reversed: bool,

    /// Trim surrounding whitespace
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub clean: Option<bool>,

    /// Localize date separators
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub date: Option<bool>,

    /// Arabic-Indic digits
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub digit: Option<bool>,

    /// Arabic thousands and decimal separators
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub number_sep: Option<bool>,

    /// Arabic punctuation
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub punc: Option<bool>,

    /// Honorific ligatures
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub ligatures: Option<bool>,

    /// Order of the dates in the input: all, DMY or MDY
    #[arg(long, value_name = "FORMAT")]
    pub date_from: Option<DateFormat>,

    /// Reorder dates into: all (keep), DMY or MDY
    #[arg(long, value_name = "FORMAT")]
    pub date_to: Option<DateFormat>,

    /// Tatweel handling: extra, all or none
    #[arg(long, value_name = "MODE")]
    pub tatweel: Option<TatweelMode>,

    /// Ligature precision: 1 or 2
    #[arg(long, value_name = "DEPTH")]
    pub ligatures_deep: Option<LigatureDepth>,

    /// Punctuation marks to leave alone
    #[arg(long, value_name = "CHARS")]
    pub exclude_punc: Option<String>,

    /// Phrase to leave alone (repeatable)
    #[arg(long = "exclude-ligature", value_name = "PHRASE")]
    pub exclude_ligatures: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// The transformed text followed by a newline
    Text,
    /// JSON object with input, output and version
    Json,
}

impl TransformArgs {
    /// Execute the transform command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let options = self.resolve_options()?;
        let text = self.read_text()?;
        log::info!("Transforming {} bytes", text.len());

        let output = if self.reversed {
            arli_core::transforming(text.as_str(), Some(&options))
        } else {
            arli_core::transform(text.as_str(), Some(&options))
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        formatter.write_result(&text, &output)?;
        formatter.finish()?;

        Ok(())
    }

    /// Configuration file overlaid with command-line flags
    pub fn resolve_options(&self) -> Result<PartialOptions> {
        let from_file = match &self.config {
            Some(path) => load_partial_options(path)?,
            None => PartialOptions::new(),
        };

        Ok(from_file.overlay(&self.flag_options()))
    }

    /// Options set directly on the command line
    pub fn flag_options(&self) -> PartialOptions {
        PartialOptions {
            clean: self.clean,
            date: self.date,
            date_from: self.date_from,
            date_to: self.date_to,
            digit: self.digit,
            number_sep: self.number_sep,
            punc: self.punc,
            exclude_punc: self
                .exclude_punc
                .as_ref()
                .map(|marks| marks.chars().collect()),
            remove_tatweel: self.tatweel,
            ligatures: self.ligatures,
            ligatures_deep: self.ligatures_deep,
            exclude_ligatures: if self.exclude_ligatures.is_empty() {
                None
            } else {
                Some(self.exclude_ligatures.iter().cloned().collect())
            },
        }
    }

    fn read_text(&self) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.input {
            return FileReader::read_text(path);
        }

        if io::stdin().is_terminal() {
            return Err(CliError::NoInput.into());
        }

        read_stdin()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
