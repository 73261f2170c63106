//! Studio name normalization
//!
//! Catalog credits and cached subsidiary lists spell the same studio in
//! different ways ("Bethesda Game Studios", "bethesda game studios LLC").
//! Both sides of a membership comparison go through the same normalization
//! so spelling variants land on the same token.

use regex::Regex;

/// Lower-cases and trims a raw parent-studio query into cache-key form.
///
/// Every lookup, write, and comparison uses this form, so queries differing
/// only in case or surrounding whitespace resolve to the same entry.
pub fn normalize_studio_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reduces a studio name to a comparison token: lower-case, strip one
/// trailing corporate suffix, then drop every non-alphanumeric character.
#[derive(Debug, Clone)]
pub struct StudioNameNormalizer {
    suffix_pattern: Regex,
}

impl StudioNameNormalizer {
    pub fn new() -> Result<Self, regex::Error> {
        // Matches a single trailing suffix token. Replacement runs once, so
        // "foo games studios" keeps "games" after "studios" is stripped.
        let suffix_pattern =
            Regex::new(r"[\s,]+(?:inc|llc|ltd|studios?|entertainment|games?|interactive)\.?\s*$")?;
        Ok(Self { suffix_pattern })
    }

    pub fn normalize(&self, name: &str) -> String {
        let lowered = name.trim().to_lowercase();
        let stripped = self.suffix_pattern.replace(&lowered, "");
        stripped
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    }
}
