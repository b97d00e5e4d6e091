//! Best-effort tip retrieval with fallback

use std::sync::Arc;
use std::time::Duration;

use shared::{Locale, Quote, session_warn};
use tokio::task::JoinHandle;

use crate::core::messages;
use crate::error::TipFetchError;
use crate::traits::TipProvider;
use crate::types::{TipOutcome, TipRequest, TipSource};

pub const DEFAULT_TIP_TIMEOUT: Duration = Duration::from_secs(8);

/// Strip whitespace and wrapping quotes the model sometimes adds
pub fn clean_tip(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_matches(|c: char| c == '"' || c == '“' || c == '”')
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Fetch a tip, substituting the localized fallback on any failure or timeout
pub async fn fetch_tip_or_fallback<T: TipProvider + ?Sized>(
    provider: &T,
    quote: &Quote,
    locale: Locale,
    timeout: Duration,
) -> TipOutcome {
    let request = TipRequest::for_quote(quote, locale);

    let result = match tokio::time::timeout(timeout, provider.fetch_tip(&request)).await {
        Ok(result) => result.and_then(|raw| clean_tip(&raw).ok_or(TipFetchError::EmptyResponse)),
        Err(_) => Err(TipFetchError::Timeout {
            millis: timeout.as_millis() as u64,
        }),
    };

    match result {
        Ok(text) => TipOutcome {
            quote_id: quote.id.clone(),
            text,
            source: TipSource::Service,
        },
        Err(e) => {
            session_warn!("Tip unavailable, using fallback: {}", e);
            fallback_outcome(quote, locale)
        }
    }
}

/// Localized fallback tip for a quote, used when no tip service is reachable
pub fn fallback_outcome(quote: &Quote, locale: Locale) -> TipOutcome {
    TipOutcome {
        quote_id: quote.id.clone(),
        text: messages::fallback_tip(locale).to_string(),
        source: TipSource::Fallback,
    }
}

/// Start a tip fetch in the background; the caller keeps going and awaits when ready
pub fn spawn_tip_fetch(
    provider: Arc<dyn TipProvider>,
    quote: Quote,
    locale: Locale,
    timeout: Duration,
) -> JoinHandle<TipOutcome> {
    tokio::spawn(async move { fetch_tip_or_fallback(provider.as_ref(), &quote, locale, timeout).await })
}
