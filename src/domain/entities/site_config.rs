use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language-independent metadata shared by one or more domains
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub id: i64,
    /// Arbitrary structured link map
    pub links: Value,
    /// Arbitrary structured permission map
    pub permissions: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Canonical form of a hostname for domain lookups: lowercase, no port, no trailing dot
pub fn normalize_hostname(host: &str) -> String {
    let host = host.trim().to_lowercase();
    let stripped = if let Some(rest) = host.strip_prefix('[') {
        // [v6] o [v6]:puerto
        match rest.split_once(']') {
            Some((address, tail)) if tail.is_empty() || tail.strip_prefix(':').is_some_and(is_port) => {
                Some(address.to_string())
            },
            _ => None,
        }
    } else if host.matches(':').count() == 1 {
        host.rsplit_once(':')
            .filter(|(_, port)| is_port(port))
            .map(|(name, _)| name.to_string())
    } else {
        // IPv6 sin corchetes: no hay puerto que quitar
        None
    };
    let host = stripped.unwrap_or(host);
    host.trim_end_matches('.').to_string()
}

fn is_port(port: &str) -> bool {
    !port.is_empty() && port.chars().all(|c| c.is_ascii_digit())
}
