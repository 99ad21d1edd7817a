//! Display fields of a memorial detail page.
//!
//! Draft-authored memorials keep their details in the free-form `content`
//! payload; after-pay memorials use plain columns. The profile reads both.

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Timestamp;

use super::Memorial;

/// Epitaph shown when the memorial has none.
pub const DEFAULT_EPITAPH: &str = "Gone but not forgotten.";

/// Placeholder for unknown platform or years.
pub const UNKNOWN: &str = "—";

/// Resolved display fields for one memorial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemorialProfile {
    pub gamertag: String,
    pub platform: String,
    pub years: String,
    pub epitaph: String,
    pub badges: Vec<String>,
    pub avatar: Option<String>,
    pub shown_at: Option<Timestamp>,
}

impl MemorialProfile {
    pub fn from_memorial(memorial: &Memorial) -> Self {
        let gamertag = memorial
            .content_str("gamertag")
            .or(non_blank(&memorial.title))
            .or(non_blank(&memorial.name))
            .or(non_blank(&memorial.slug))
            .unwrap_or("Unknown")
            .to_string();

        let platform = memorial
            .content_str("platform")
            .or(non_blank(&memorial.game))
            .unwrap_or(UNKNOWN)
            .to_string();

        let years = memorial
            .content_str("years")
            .or_else(|| memorial.content_str("period"))
            .or(non_blank(&memorial.years))
            .unwrap_or(UNKNOWN)
            .to_string();

        let epitaph = memorial
            .content_str("epitaph")
            .or_else(|| memorial.content_str("message"))
            .unwrap_or(DEFAULT_EPITAPH)
            .to_string();

        let badges = memorial
            .content
            .as_ref()
            .and_then(|c| c.get("badges"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            gamertag,
            platform,
            years,
            epitaph,
            badges,
            avatar: memorial.content_str("avatar").map(String::from),
            shown_at: memorial.shown_at(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
