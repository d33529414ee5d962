//! Glyph ramp definitions for ASCII rendering.

use crate::error::{AsciiError, Result};

/// Standard glyph ramp (11 levels).
/// Characters ordered from most ink (`$`) to blank (space).
/// Works well on light backgrounds.
pub const STANDARD_RAMP: &[char] = &['$', '@', 'B', '%', '#', '*', '+', '=', ',', '.', ' '];

/// An ordered, non-empty sequence of glyphs from darkest to lightest.
///
/// Index 0 carries the most ink; the last entry is the lightest (usually blank).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamp {
    chars: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from characters ordered darkest to lightest.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Result<Self> {
        let chars: Vec<char> = chars.into_iter().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyRamp);
        }
        Ok(Self { chars })
    }

    /// The standard 11-level ramp `"$@B%#*+=,. "`.
    pub fn standard() -> Self {
        Self {
            chars: STANDARD_RAMP.to_vec(),
        }
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of levels in the ramp. Always at least 1.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Never true for a constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyph at `index`, clamped to the last entry.
    pub fn glyph(&self, index: usize) -> char {
        self.chars[index.min(self.chars.len() - 1)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_ramp_order() {
        let ramp = GlyphRamp::standard();
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp.glyph(0), '$');
        assert_eq!(ramp.glyph(10), ' ');
        assert_eq!(ramp.chars().iter().collect::<String>(), "$@B%#*+=,. ");
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(matches!(GlyphRamp::new("".chars()), Err(AsciiError::EmptyRamp)));
    }

    #[test]
    fn test_glyph_index_clamped() {
        let ramp = GlyphRamp::new("ab".chars()).unwrap();
        assert_eq!(ramp.glyph(5), 'b');
    }
}
