//! Quoter-specific data types

use serde::{Deserialize, Serialize};
use shared::{Locale, Quote, QuoteId};

/// Storage key holding the serialized history
pub const HISTORY_KEY: &str = "concre7_history";

/// Storage key holding the saved unit price
pub const UNIT_PRICE_KEY: &str = "concre7_unit_price";

/// Input sent to the tip collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipRequest {
    pub area: f64,
    pub total_units: u64,
    pub model_name: String,
    pub locale: Locale,
}

impl TipRequest {
    pub fn for_quote(quote: &Quote, locale: Locale) -> Self {
        Self {
            area: quote.area,
            total_units: quote.total_pavers,
            model_name: quote.model.name.clone(),
            locale,
        }
    }
}

/// Where the displayed tip text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipSource {
    Service,
    Fallback,
}

/// Result of a tip fetch, always displayable
#[derive(Debug, Clone, PartialEq)]
pub struct TipOutcome {
    pub quote_id: QuoteId,
    pub text: String,
    pub source: TipSource,
}
