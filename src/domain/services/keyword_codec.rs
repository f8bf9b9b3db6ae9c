//! Text encoding of keyword lists for the translation store.
//!
//! Keywords are persisted as a JSON array in a text column. Reads are
//! lenient: rows written as plain comma-separated text still decode.

/// Encodes keywords as a JSON array string
pub fn encode_keywords(keywords: &[String]) -> String {
    serde_json::to_string(keywords).unwrap_or_else(|_| "[]".to_string())
}

/// Decodes a stored keyword column back into a list
pub fn decode_keywords(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<String>>(trimmed) {
        Ok(keywords) => keywords,
        Err(_) => trimmed
            .split(',')
            .map(str::trim)
            .filter(|keyword| !keyword.is_empty())
            .map(str::to_string)
            .collect(),
    }
}
