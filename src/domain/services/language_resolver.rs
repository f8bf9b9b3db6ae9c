use std::cmp::Ordering;
use std::collections::HashSet;

/// Quality assigned to header entries without a usable `q` parameter
const DEFAULT_QUALITY: f32 = 1.0;

/// Normalizes a language code: trims, lowercases and turns `_` into `-`.
///
/// `normalize(normalize(x)) == normalize(x)` for every input.
pub fn normalize(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// One entry of a language preference header
#[derive(Debug, Clone, PartialEq)]
struct LanguagePreference {
    code: String,
    quality: f32,
}

impl LanguagePreference {
    /// Parses `code[;q=value][;other=...]`. Returns `None` for an empty code.
    fn parse(entry: &str) -> Option<Self> {
        let mut parts = entry.split(';');
        let code = normalize(parts.next()?);
        if code.is_empty() {
            return None;
        }

        let quality = parts
            .filter_map(|param| {
                let (name, value) = param.split_once('=')?;
                name.trim().eq_ignore_ascii_case("q").then(|| value.trim())
            })
            .next()
            .and_then(|value| value.parse::<f32>().ok())
            .filter(|quality| quality.is_finite())
            .unwrap_or(DEFAULT_QUALITY);

        Some(Self { code, quality })
    }
}

/// Negotiates the language to serve from request signals.
///
/// Built once at startup from the configured default language and supported
/// set; both are normalized here so later lookups compare plain strings.
/// Nothing in here fails: bad input simply doesn't match.
#[derive(Debug, Clone)]
pub struct LanguageResolver {
    default_language: String,
    supported: Vec<String>,
    supported_set: HashSet<String>,
}

impl LanguageResolver {
    pub fn new<I, S>(default_language: &str, supported_languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let default_language = normalize(default_language);

        let mut supported = Vec::new();
        let mut supported_set = HashSet::new();
        for code in supported_languages {
            let code = normalize(code.as_ref());
            if !code.is_empty() && supported_set.insert(code.clone()) {
                supported.push(code);
            }
        }

        // The default goes first only when the configuration didn't list it
        if supported_set.insert(default_language.clone()) {
            supported.insert(0, default_language.clone());
        }

        Self {
            default_language,
            supported,
            supported_set,
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Supported languages in configuration order
    pub fn supported_languages(&self) -> &[String] {
        &self.supported
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.supported_set.contains(&normalize(code))
    }

    /// Returns the highest-quality supported language in a preference header.
    ///
    /// Entries are ordered by descending quality; ties keep header order.
    pub fn parse_preference_header(&self, header: &str) -> Option<String> {
        let mut preferences: Vec<LanguagePreference> =
            header.split(',').filter_map(LanguagePreference::parse).collect();

        preferences.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));

        preferences
            .into_iter()
            .find(|preference| self.supported_set.contains(&preference.code))
            .map(|preference| preference.code)
    }

    /// Picks the language for a request.
    ///
    /// A supported explicit parameter always wins over the header, whatever
    /// quality the header assigns; the default language is the last resort.
    pub fn resolve(&self, explicit: Option<&str>, preference_header: Option<&str>) -> String {
        if let Some(code) = explicit.map(normalize).filter(|code| !code.is_empty()) {
            if self.supported_set.contains(&code) {
                return code;
            }
        }

        preference_header
            .and_then(|header| self.parse_preference_header(header))
            .unwrap_or_else(|| self.default_language.clone())
    }
}
