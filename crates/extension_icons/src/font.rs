//! Font resolution for the icon glyph.
//!
//! An ordered list of system font paths is probed; the first path that
//! exists is loaded as an outline font. When no candidate exists or loading
//! fails, rendering degrades to a builtin 8x16 bitmap glyph, so a font is
//! always available.

use std::fs;
use std::path::PathBuf;

use ab_glyph::FontVec;

/// Candidate font files probed in order (macOS, Linux, Windows conventions).
const FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "C:\\Windows\\Fonts\\Arial.ttf",
];

pub const BUILTIN_GLYPH_WIDTH: u32 = 8;
pub const BUILTIN_GLYPH_HEIGHT: u32 = 16;

/// Builtin bitmap glyph for 'K' (the VGA codepage 437 shape), one byte per
/// row, MSB = leftmost pixel. Drawn at its fixed size regardless of the
/// requested font size.
pub const BUILTIN_GLYPH_K: [u8; BUILTIN_GLYPH_HEIGHT as usize] = [
    0x00, 0x00, 0xE6, 0x66, 0x66, 0x6C, 0x78, 0x78, 0x6C, 0x66, 0x66, 0xE6, 0x00, 0x00, 0x00, 0x00,
];

/// Outcome of a font lookup. Resolution cannot fail, only degrade.
pub enum ResolvedFont {
    /// Outline font loaded from a system path.
    Outline(FontVec),
    /// The builtin bitmap glyph.
    Builtin,
}

/// Ordered font lookup: candidate paths first, the builtin bitmap glyph as
/// the guaranteed default.
pub struct FontPolicy {
    candidates: Vec<PathBuf>,
}

impl Default for FontPolicy {
    fn default() -> Self {
        Self {
            candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
        }
    }
}

impl FontPolicy {
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Load the first candidate path that exists. A read or parse failure on
    /// that path falls back to the builtin glyph rather than trying further
    /// candidates, matching the all-or-nothing loading of the original tool.
    pub fn resolve(&self) -> ResolvedFont {
        let Some(path) = self.candidates.iter().find(|p| p.exists()) else {
            log::warn!("no candidate font path exists, using builtin glyph");
            return ResolvedFont::Builtin;
        };

        let loaded = fs::read(path)
            .map_err(anyhow::Error::from)
            .and_then(|data| FontVec::try_from_vec(data).map_err(anyhow::Error::from));
        match loaded {
            Ok(font) => ResolvedFont::Outline(font),
            Err(err) => {
                log::warn!("failed to load font {}: {err}, using builtin glyph", path.display());
                ResolvedFont::Builtin
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_candidate_list_resolves_to_builtin() {
        let policy = FontPolicy::with_candidates(Vec::new());
        assert!(matches!(policy.resolve(), ResolvedFont::Builtin));
    }

    #[test]
    fn missing_candidates_resolve_to_builtin() {
        let policy = FontPolicy::with_candidates(vec![
            PathBuf::from("/nonexistent/fonts/first.ttf"),
            PathBuf::from("/nonexistent/fonts/second.ttf"),
        ]);
        assert!(matches!(policy.resolve(), ResolvedFont::Builtin));
    }

    #[test]
    fn unparsable_candidate_resolves_to_builtin() {
        let path = std::env::temp_dir().join(format!("not_a_font_{}.ttf", std::process::id()));
        fs::write(&path, b"this is not a font file").unwrap();
        let policy = FontPolicy::with_candidates(vec![path.clone()]);
        assert!(matches!(policy.resolve(), ResolvedFont::Builtin));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn builtin_glyph_has_ink_rows_with_a_left_stem() {
        // The VGA 'K' carries ink in rows 2..=11, all sharing the vertical stem.
        for row in 0..BUILTIN_GLYPH_K.len() {
            if (2..=11).contains(&row) {
                assert_ne!(BUILTIN_GLYPH_K[row], 0, "row {row} should carry ink");
                assert_eq!(BUILTIN_GLYPH_K[row] & 0x60, 0x60, "row {row} should carry the stem");
            } else {
                assert_eq!(BUILTIN_GLYPH_K[row], 0, "row {row} should be empty");
            }
        }
    }
}
