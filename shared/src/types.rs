//! Core shared types and identifiers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use uuid::Uuid;

use crate::errors::SharedError;

static SESSION_ID: OnceLock<SessionId> = OnceLock::new();

/// Identifier for one run of the application, stamped on every log line
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the session ID for this process, creating it on first use
    pub fn current() -> &'static SessionId {
        SESSION_ID.get_or_init(SessionId::new)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short form keeps log lines readable
        let full = self.0.simple().to_string();
        write!(f, "{}", &full[..8])
    }
}

/// Unique, time-ordered identifier of a quote
///
/// Stored as a plain string so histories written with older id formats still load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(String);

impl QuoteId {
    /// Generate a new id; UUIDv7 embeds the creation time so ids sort chronologically
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for QuoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for QuoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Paver product from the static catalog
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaverModel {
    pub id: String,
    pub name: String,
    /// Dimensions in centimeters, informational only
    pub length: u32,
    pub width: u32,
    pub thickness: u32,
    /// Units covering one square meter at zero waste
    pub pavers_per_m2: f64,
}

impl PaverModel {
    pub fn dimensions_label(&self) -> String {
        format!("{}x{}x{} cm", self.length, self.width, self.thickness)
    }
}

/// A computed quote. Numeric fields are only ever produced together by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: QuoteId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    /// Area in square meters
    pub area: f64,
    /// Waste margin in percent
    pub margin: u32,
    pub model: PaverModel,
    pub total_pavers: u64,
    pub unit_price: f64,
    pub total_value: f64,
}

/// Language used for prompts, fallback text and share messages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en")]
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::PtBr => write!(f, "pt-BR"),
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(SharedError::InvalidConfig {
                field: "locale".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_ids_are_unique() {
        let first = QuoteId::new();
        let second = QuoteId::new();

        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("pt_br".parse::<Locale>().unwrap(), Locale::PtBr);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_quote_serializes_camel_case_with_millis() {
        let quote = Quote {
            id: QuoteId::from("1700000000000"),
            timestamp: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
            area: 10.0,
            margin: 5,
            model: PaverModel {
                id: "16-faces".to_string(),
                name: "Paver 16 Faces".to_string(),
                length: 24,
                width: 10,
                thickness: 6,
                pavers_per_m2: 42.0,
            },
            total_pavers: 441,
            unit_price: 1.1,
            total_value: 485.1,
        };

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["id"], "1700000000000");
        assert_eq!(json["timestamp"], 1_700_000_000_000i64);
        assert_eq!(json["totalPavers"], 441);
        assert_eq!(json["model"]["paversPerM2"], 42.0);

        let back: Quote = serde_json::from_value(json).unwrap();
        assert_eq!(back, quote);
    }
}
