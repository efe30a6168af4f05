// src/shared/text_match.rs

use regex::RegexBuilder;
use std::str::FromStr;

/// Case-insensitive matching used by stores that cannot push search down to
/// the database. The strategy is picked once, when the store is built.
pub trait TextMatcher: Send + Sync {
    /// Case-insensitive substring match.
    fn contains(&self, haystack: &str, needle: &str) -> bool;

    /// Case-insensitive equality.
    fn equals(&self, left: &str, right: &str) -> bool;
}

/// Unicode case folding via `to_lowercase`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeCaseFold;

impl TextMatcher for NativeCaseFold {
    fn contains(&self, haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    fn equals(&self, left: &str, right: &str) -> bool {
        left.to_lowercase() == right.to_lowercase()
    }
}

/// Emulates SQL `ILIKE`: the needle becomes a `%needle%` pattern which is
/// translated to a case-insensitive regex (`%` -> `.*`, `_` -> `.`).
#[derive(Debug, Clone, Copy, Default)]
pub struct LikePattern;

impl LikePattern {
    /// A backslash escapes the next character, as in SQL `LIKE`.
    fn like_to_regex(pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() + pattern.len() / 2 + 2);
        out.push('^');
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            match c {
                '%' => out.push_str(".*"),
                '_' => out.push('.'),
                '\\' => {
                    if let Some(next) = chars.next() {
                        out.push_str(&regex::escape(&next.to_string()));
                    }
                }
                other => out.push_str(&regex::escape(&other.to_string())),
            }
        }
        out.push('$');
        out
    }

    fn ilike(input: &str, pattern: &str) -> bool {
        match RegexBuilder::new(&Self::like_to_regex(pattern))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
        {
            Ok(re) => re.is_match(input),
            Err(e) => {
                tracing::warn!("invalid ILIKE pattern {:?}: {}", pattern, e);
                false
            }
        }
    }

    /// Wildcards in user input are matched literally.
    pub fn escape_like(value: &str) -> String {
        let mut out = String::with_capacity(value.len());
        for c in value.chars() {
            if matches!(c, '%' | '_' | '\\') {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }
}

impl TextMatcher for LikePattern {
    fn contains(&self, haystack: &str, needle: &str) -> bool {
        Self::ilike(haystack, &format!("%{}%", Self::escape_like(needle)))
    }

    fn equals(&self, left: &str, right: &str) -> bool {
        Self::ilike(left, &Self::escape_like(right))
    }
}

/// Blank search terms mean "no filter".
pub fn normalize_search(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextMatcherKind {
    #[default]
    Native,
    Pattern,
}

impl TextMatcherKind {
    pub fn build(self) -> Box<dyn TextMatcher> {
        match self {
            TextMatcherKind::Native => Box::new(NativeCaseFold),
            TextMatcherKind::Pattern => Box::new(LikePattern),
        }
    }
}

impl FromStr for TextMatcherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(TextMatcherKind::Native),
            "pattern" | "ilike" | "regex" => Ok(TextMatcherKind::Pattern),
            other => Err(format!("unknown text matcher: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matchers() -> Vec<Box<dyn TextMatcher>> {
        vec![
            TextMatcherKind::Native.build(),
            TextMatcherKind::Pattern.build(),
        ]
    }

    #[test]
    fn substring_is_case_insensitive() {
        for m in matchers() {
            assert!(m.contains("Portfolio Website", "folio"));
            assert!(m.contains("Portfolio Website", "WEB"));
            assert!(!m.contains("Portfolio Website", "mobile"));
        }
    }

    #[test]
    fn equality_is_case_insensitive() {
        for m in matchers() {
            assert!(m.equals("Foo", "FOO"));
            assert!(m.equals("c#", "C#"));
            assert!(!m.equals("Foo", "Foobar"));
        }
    }

    #[test]
    fn wildcards_in_input_are_literal() {
        let m = LikePattern;
        assert!(!m.equals("100 percent", "100%"));
        assert!(m.equals("100%", "100%"));
        assert!(!m.equals("a-b", "a_b"));
        assert!(m.contains("snake_case", "E_C"));
    }

    #[test]
    fn like_translation() {
        assert!(LikePattern::ilike("Hello World", "%world"));
        assert!(LikePattern::ilike("Hello", "h_llo"));
        assert!(!LikePattern::ilike("Hello", "h_lo"));
    }

    #[test]
    fn blank_search_is_dropped() {
        assert_eq!(normalize_search(Some("   ".into())), None);
        assert_eq!(normalize_search(Some(" re ".into())), Some("re".into()));
        assert_eq!(normalize_search(None), None);
    }

    #[test]
    fn parses_kind() {
        assert_eq!("native".parse::<TextMatcherKind>(), Ok(TextMatcherKind::Native));
        assert_eq!("Pattern".parse::<TextMatcherKind>(), Ok(TextMatcherKind::Pattern));
        assert!("fuzzy".parse::<TextMatcherKind>().is_err());
    }
}
