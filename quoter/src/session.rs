//! Quote session: the single actor driving state, persistence and tips
//!
//! The session owns the [`AppState`] and applies the pure update functions to
//! it, then performs the side effects each update calls for. A quote is
//! recorded and persisted before its tip fetch is started, so a slow or failing
//! tip service can never hold up or corrupt the history.

use std::sync::Arc;
use std::time::Duration;

use shared::{Locale, Quote, QuoteId, find_model, session_debug, session_info};
use tokio::task::JoinHandle;
use url::Url;

use crate::core::{AppState, share};
use crate::error::{QuoterError, QuoterResult};
use crate::services::{load_history, load_unit_price, save_history, save_unit_price, spawn_tip_fetch};
use crate::traits::{KeyValueStore, TipProvider};
use crate::types::TipOutcome;

pub struct QuoteSession<S: KeyValueStore> {
    state: AppState,
    store: S,
    tips: Arc<dyn TipProvider>,
    tip_timeout: Duration,
}

impl<S: KeyValueStore> QuoteSession<S> {
    /// Restore persisted history and unit price, falling back to defaults
    pub async fn start(
        store: S,
        tips: Arc<dyn TipProvider>,
        locale: Locale,
        tip_timeout: Duration,
    ) -> Self {
        let history = load_history(&store).await;
        let unit_price = load_unit_price(&store).await;

        session_debug!(
            "Session restored: {} quote(s), unit price {:.2}",
            history.len(),
            unit_price
        );

        Self {
            state: AppState::new(history, unit_price, locale),
            store,
            tips,
            tip_timeout,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Compute, display, record and persist a quote
    ///
    /// Invalid input leaves both state and storage untouched.
    pub async fn submit(&mut self, area_input: &str) -> QuoterResult<Quote> {
        let (next, quote) = self
            .state
            .clone()
            .submit(area_input)
            .map_err(|(_, e)| QuoterError::from(e))?;
        self.state = next;

        save_history(&self.store, &self.state.history).await?;

        session_info!(
            "📐 Quote {}: {} m² of {} +{}% = {} units",
            quote.id,
            quote.area,
            quote.model.name,
            quote.margin,
            quote.total_pavers
        );
        Ok(quote)
    }

    /// Start the tip fetch for a recorded quote in the background
    pub fn begin_tip(&self, quote: &Quote) -> JoinHandle<TipOutcome> {
        spawn_tip_fetch(
            Arc::clone(&self.tips),
            quote.clone(),
            self.state.locale,
            self.tip_timeout,
        )
    }

    /// Attach a finished tip; outcomes for a quote no longer displayed are ignored
    pub fn apply_tip(&mut self, outcome: TipOutcome) {
        self.state = self.state.clone().apply_tip(&outcome.quote_id, outcome.text);
    }

    pub fn skip_tip(&mut self) {
        self.state = self.state.clone().clear_tip();
    }

    pub fn select_model(&mut self, model_id: &str) -> QuoterResult<()> {
        let model = find_model(model_id)?;
        self.state = self.state.clone().select_model(model)?;
        Ok(())
    }

    pub fn set_margin(&mut self, margin: u32) -> QuoterResult<()> {
        self.state = self.state.clone().set_margin(margin)?;
        Ok(())
    }

    /// Validate, persist and apply a new unit price
    pub async fn save_unit_price(&mut self, price: f64) -> QuoterResult<f64> {
        let next = self.state.clone().set_unit_price(price)?;
        let saved = save_unit_price(&self.store, price).await?;
        self.state = next;
        session_info!("💲 Unit price saved: {:.2}", saved);
        Ok(saved)
    }

    /// Remove a quote from history and persist; unknown ids are a no-op
    pub async fn delete(&mut self, id: &QuoteId) -> QuoterResult<Option<Quote>> {
        let (next, removed) = self.state.clone().delete_quote(id);
        self.state = next;
        save_history(&self.store, &self.state.history).await?;

        match &removed {
            Some(_) => {
                session_info!("🗑️  Deleted quote {}", id);
            }
            None => {
                session_debug!("Quote {} not in history, nothing deleted", id);
            }
        }
        Ok(removed)
    }

    /// Display a quote from history
    pub fn show(&mut self, id: &QuoteId) -> QuoterResult<&Quote> {
        let quote = self
            .state
            .history
            .get(id)
            .cloned()
            .ok_or_else(|| QuoterError::QuoteNotFound { id: id.to_string() })?;
        self.state = self.state.clone().show_quote(quote);
        self.current()
    }

    /// Display the newest history entry
    pub fn show_latest(&mut self) -> QuoterResult<&Quote> {
        let id = self
            .state
            .history
            .latest()
            .map(|q| q.id.clone())
            .ok_or(QuoterError::NoQuoteDisplayed)?;
        self.show(&id)
    }

    pub fn current(&self) -> QuoterResult<&Quote> {
        self.state.current.as_ref().ok_or(QuoterError::NoQuoteDisplayed)
    }

    /// Clipboard text for the displayed quote
    pub fn share_message(&self) -> QuoterResult<String> {
        Ok(share::format_quote_message(self.current()?, self.state.locale))
    }

    /// Messaging deep link for the displayed quote
    pub fn share_link(&self) -> QuoterResult<Url> {
        Ok(share::whatsapp_link(self.current()?, self.state.locale)?)
    }
}
