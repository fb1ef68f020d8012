//! List command implementation

use std::io::Write;

use arli_core::{DIGITS, LIGATURES, PUNCTUATION};

use super::ListCommands;
use crate::error::CliResult;

/// Write one of the static tables, one entry per line
pub fn print_table<W: Write>(table: ListCommands, out: &mut W) -> CliResult<()> {
    match table {
        ListCommands::Digits => {
            for (ascii, arabic) in ('0'..='9').zip(DIGITS) {
                writeln!(out, "{ascii}\t{arabic}\tU+{:04X}", arabic as u32)?;
            }
        }
        ListCommands::Punctuation => {
            for (latin, arabic) in PUNCTUATION {
                writeln!(out, "{latin}\t{arabic}\tU+{:04X}", arabic as u32)?;
            }
        }
        ListCommands::Ligatures => {
            for ligature in LIGATURES {
                match ligature.deep_glyph {
                    Some(deep) => writeln!(
                        out,
                        "{}\t{}\tU+{:04X}\tdeep {}\tU+{:04X}",
                        ligature.phrase,
                        ligature.glyph,
                        ligature.glyph as u32,
                        deep,
                        deep as u32
                    )?,
                    None => writeln!(
                        out,
                        "{}\t{}\tU+{:04X}",
                        ligature.phrase,
                        ligature.glyph,
                        ligature.glyph as u32
                    )?,
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: ListCommands) -> String {
        let mut buffer = Vec::new();
        print_table(table, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_list_digits() {
        let output = render(ListCommands::Digits);
        assert_eq!(output.lines().count(), 10);
        assert!(output.starts_with("0\t٠\tU+0660\n"));
        assert!(output.ends_with("9\t٩\tU+0669\n"));
    }

    #[test]
    fn test_list_punctuation() {
        let output = render(ListCommands::Punctuation);
        assert_eq!(output.lines().count(), PUNCTUATION.len());
        assert!(output.contains("?\t؟\tU+061F"));
        assert!(output.contains("%\t٪\tU+066A"));
    }

    #[test]
    fn test_list_ligatures() {
        let output = render(ListCommands::Ligatures);
        assert_eq!(output.lines().count(), LIGATURES.len());
        assert!(output.contains("جل جلاله\t\u{FDFB}\tU+FDFB\n"));
        assert!(output.contains("deep \u{FD47}\tU+FD47"));
    }
}
