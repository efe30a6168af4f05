// src/shared/slug.rs

use std::sync::OnceLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

fn whitespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s").expect("valid whitespace regex"))
}

fn invalid_chars_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9_-]").expect("valid charset regex"))
}

fn separator_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([-_]){2,}").expect("valid separator regex"))
}

/// URL-safe, ASCII-only identifier derived from a human-readable title.
///
/// - lowercases and strips diacritics (`Café` -> `cafe`)
/// - whitespace becomes `-`
/// - anything outside `[a-z0-9_-]` is dropped
/// - leading/trailing `-`/`_` are trimmed
/// - runs of separators collapse to a single one
///
/// Pure and idempotent: `slugify(&slugify(t)) == slugify(t)`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let folded: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();

    let dashed = whitespace_re().replace_all(&folded, "-");
    let cleaned = invalid_chars_re().replace_all(&dashed, "");
    let trimmed = cleaned.trim_matches(|c: char| c == '-' || c == '_');

    separator_run_re().replace_all(trimmed, "$1").into_owned()
}

/// Slug that is never empty.
///
/// Titles made only of symbols (`"C++"` survives, `"!!!"` does not) fall back
/// to their code points so the result stays deterministic.
pub fn slug_for(title: &str) -> String {
    let slug = slugify(title);
    if !slug.is_empty() {
        return slug;
    }

    let codes: Vec<String> = title
        .trim()
        .chars()
        .map(|c| format!("{:x}", c as u32))
        .collect();

    if codes.is_empty() {
        "untitled".to_string()
    } else {
        codes.join("-")
    }
}

/// Lookup key for a slug taken from a URL. Stored slugs are lowercase.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().to_lowercase()
}
