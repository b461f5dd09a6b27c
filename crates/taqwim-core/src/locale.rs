//! Language detection and locale-prefixed paths.
//!
//! Arabic pages live under an `/ar` path prefix; English pages have none.

use crate::models::Language;

const ARABIC_PREFIX: &str = "/ar";

/// Picks the display language for a request.
///
/// The `/ar` path prefix wins, then a stored preference if it names a
/// supported language, then the browser's language tag. English otherwise.
///
/// # Examples
///
/// ```rust
/// use taqwim_core::{locale::detect_language, Language};
///
/// assert_eq!(detect_language(Some("/ar/feed"), None, None), Language::Arabic);
/// assert_eq!(detect_language(Some("/feed"), Some("ar"), None), Language::Arabic);
/// assert_eq!(detect_language(Some("/feed"), Some("fr"), Some("ar-EG")), Language::Arabic);
/// assert_eq!(detect_language(None, None, Some("en-US")), Language::English);
/// ```
pub fn detect_language(
    path: Option<&str>,
    stored: Option<&str>,
    browser_tag: Option<&str>,
) -> Language {
    if path.is_some_and(has_arabic_prefix) {
        return Language::Arabic;
    }

    if let Some(language) = stored.and_then(|s| match s {
        "en" => Some(Language::English),
        "ar" => Some(Language::Arabic),
        _ => None,
    }) {
        return language;
    }

    match browser_tag.and_then(Language::from_tag) {
        Some(Language::Arabic) => Language::Arabic,
        _ => Language::English,
    }
}

/// Rewrites `path` so it points at the same page in `target`.
///
/// # Examples
///
/// ```rust
/// use taqwim_core::{locale::localized_path, Language};
///
/// assert_eq!(localized_path("/feed", Language::Arabic), "/ar/feed");
/// assert_eq!(localized_path("/ar/feed", Language::English), "/feed");
/// assert_eq!(localized_path("/ar", Language::English), "/");
/// ```
pub fn localized_path(path: &str, target: Language) -> String {
    let is_arabic = has_arabic_prefix(path);
    match target {
        Language::Arabic if is_arabic => path.to_string(),
        Language::Arabic if path == "/" => ARABIC_PREFIX.to_string(),
        Language::Arabic => format!("{ARABIC_PREFIX}{path}"),
        Language::English if is_arabic => {
            let rest = &path[ARABIC_PREFIX.len()..];
            if rest.is_empty() {
                "/".to_string()
            } else {
                rest.to_string()
            }
        }
        Language::English => path.to_string(),
    }
}

fn has_arabic_prefix(path: &str) -> bool {
    path.strip_prefix(ARABIC_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
