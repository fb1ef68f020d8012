//! Honorific phrase ligatures
//!
//! Each entry maps a multi-word Arabic phrase to a single glyph. Some phrases
//! also have a more specific glyph, used when the deep ligature depth is
//! requested.

use crate::api::LigatureDepth;

/// A phrase and the glyphs that may replace it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ligature {
    /// The phrase as it appears in running text
    pub phrase: &'static str,
    /// Glyph used at the standard depth
    pub glyph: char,
    /// Glyph used at the deep depth, when one exists
    pub deep_glyph: Option<char>,
}

impl Ligature {
    /// Glyph for the requested depth, falling back to the standard glyph
    #[inline]
    pub fn glyph_for(&self, depth: LigatureDepth) -> char {
        match depth {
            LigatureDepth::Deep => self.deep_glyph.unwrap_or(self.glyph),
            LigatureDepth::Standard => self.glyph,
        }
    }
}

/// Ligature table, applied in this order
pub const LIGATURES: [Ligature; 5] = [
    // Sallallahou Alayhe Wassallam
    Ligature {
        phrase: "صلى الله عليه و سلم",
        glyph: '\u{FDFA}',
        deep_glyph: None,
    },
    // Jalla Jalalouhou
    Ligature {
        phrase: "جل جلاله",
        glyph: '\u{FDFB}',
        deep_glyph: None,
    },
    // Alayhe Assallam
    Ligature {
        phrase: "عليه السلام",
        glyph: '\u{0611}',
        deep_glyph: Some('\u{FD47}'),
    },
    // Rahmatu Allahi Alayhe
    Ligature {
        phrase: "رحمة الله عليه",
        glyph: '\u{0612}',
        deep_glyph: Some('\u{FD40}'),
    },
    // Radi Allahou Anhu
    Ligature {
        phrase: "رضي الله عنه",
        glyph: '\u{0613}',
        deep_glyph: Some('\u{FD41}'),
    },
];
