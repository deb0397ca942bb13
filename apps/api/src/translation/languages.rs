//! Supported translation targets: wire code → display name.

use std::collections::BTreeMap;

pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("spanish", "Spanish"),
    ("french", "French"),
    ("german", "German"),
    ("italian", "Italian"),
    ("portuguese", "Portuguese"),
    ("chinese", "Chinese (Simplified)"),
    ("japanese", "Japanese"),
    ("korean", "Korean"),
    ("arabic", "Arabic"),
    ("hindi", "Hindi"),
    ("russian", "Russian"),
    ("dutch", "Dutch"),
    ("swedish", "Swedish"),
    ("norwegian", "Norwegian"),
    ("danish", "Danish"),
];

pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

pub fn language_map() -> BTreeMap<&'static str, &'static str> {
    SUPPORTED_LANGUAGES.iter().copied().collect()
}

/// Comma-separated codes, for validation messages.
pub fn supported_codes() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, _)| *code)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifteen_languages() {
        assert_eq!(SUPPORTED_LANGUAGES.len(), 15);
        assert_eq!(language_map().len(), 15);
    }

    #[test]
    fn test_language_name_lookup() {
        assert_eq!(language_name("chinese"), Some("Chinese (Simplified)"));
        assert_eq!(language_name("Spanish"), None);
        assert_eq!(language_name("klingon"), None);
    }

    #[test]
    fn test_supported_codes_lists_all() {
        let codes = supported_codes();
        assert!(codes.starts_with("spanish, french"));
        assert!(codes.ends_with("danish"));
    }
}
