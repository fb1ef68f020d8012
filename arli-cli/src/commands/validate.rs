//! Validate command implementation

use arli_core::Options;
use clap::Args;
use std::path::PathBuf;

use crate::config::load_partial_options;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        match load_partial_options(&self.config) {
            Ok(partial) => {
                let options = Options::default().merge(&partial);
                println!("✓ Configuration is valid!");
                if partial.is_empty() {
                    println!("  No options set; defaults apply");
                } else {
                    println!("  Resolved options:");
                    for line in options.to_toml_string()?.lines() {
                        println!("    {line}");
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
