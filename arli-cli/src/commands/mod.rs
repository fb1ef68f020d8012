//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod generate_config;
pub mod list;
pub mod transform;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Localize text into its Arabic typographic form
    Transform(transform::TransformArgs),

    /// Print the built-in substitution tables
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration template with every option at its default
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// ASCII digits and their Arabic-Indic forms
    Digits,

    /// Punctuation marks and their Arabic forms
    Punctuation,

    /// Honorific phrases and their ligature glyphs
    Ligatures,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Transform(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = std::io::stdout();
                list::print_table(*subcommand, &mut stdout.lock())
            }
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
