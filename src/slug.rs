//! Slug generation.
//!
//! Converts a source field value (usually the title) into a URL-safe
//! identifier, the way the studio does when the editor hits "generate".

use crate::schema::options::SlugOptions;
use deunicode::deunicode;

/// Convert text to a URL-safe slug, truncated to `max_length` characters.
///
/// Lowercases, transliterates non-ASCII to ASCII, collapses every run of
/// non-alphanumeric characters into a single hyphen, and trims hyphens
/// from both ends. Truncation never leaves a trailing hyphen.
///
/// | Input | Output |
/// |-------|--------|
/// | `"Hello, World!"` | `"hello-world"` |
/// | `"Æther & Øre"` | `"aether-ore"` |
pub fn slugify(text: &str, max_length: u32) -> String {
    let ascii = deunicode(text).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_hyphen = false;
    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.len() > max_length as usize {
        slug.truncate(max_length as usize);
    }
    slug.trim_end_matches('-').to_string()
}

impl SlugOptions {
    /// Generate a slug from the source field's value per these options.
    pub fn generate(&self, source_value: &str) -> String {
        slugify(source_value, self.max_length)
    }
}
