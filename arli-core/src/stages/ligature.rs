//! Honorific phrase ligatures

use std::borrow::Cow;
use std::collections::BTreeSet;

use crate::api::LigatureDepth;
use crate::tables::LIGATURES;

/// Replace known honorific phrases with their ligature glyphs
///
/// Phrases are matched literally. A phrase listed in `exclude` is never
/// replaced.
pub fn substitute_ligatures<'a>(
    text: &'a str,
    depth: LigatureDepth,
    exclude: &BTreeSet<String>,
) -> Cow<'a, str> {
    let mut value = Cow::Borrowed(text);

    for ligature in LIGATURES.iter().filter(|l| !exclude.contains(l.phrase)) {
        if value.contains(ligature.phrase) {
            let mut buf = [0u8; 4];
            let glyph = ligature.glyph_for(depth).encode_utf8(&mut buf);
            value = Cow::Owned(value.replace(ligature.phrase, glyph));
        }
    }

    value
}
