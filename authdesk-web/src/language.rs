use std::collections::HashMap;

/// Language used when the browser preference is unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "ja",
            LanguageInfo {
                code: "ja",
                flag: "🇯🇵",
                translation: include_str!("../translations/ja.json"),
                native_name: "日本語",
            },
        ),
    ])
}

/// Pick the supported language matching a BCP 47 tag such as `ja-JP`.
pub fn resolve_language(tag: &str) -> &'static str {
    let primary = tag.split(['-', '_']).next().unwrap_or_default();
    supported_languages()
        .into_keys()
        .find(|code| code.eq_ignore_ascii_case(primary))
        .unwrap_or(DEFAULT_LANGUAGE)
}
