//! Application state and its pure update functions
//!
//! Every update consumes the current state and returns the next one. Nothing
//! here performs I/O; the session layer persists and fetches tips around it.

use shared::{
    DEFAULT_MARGIN, DEFAULT_UNIT_PRICE, Locale, PaverModel, Quote, QuoteId, SharedError,
    SharedResult, default_model,
};

use crate::core::engine::{compute_quote, parse_area, recompute_quote};
use crate::core::history::History;
use crate::core::messages;

/// Progress of the tip attached to the displayed quote
#[derive(Clone, Debug, PartialEq, Default)]
pub enum TipStatus {
    #[default]
    Idle,
    Pending { quote_id: QuoteId },
    Ready { quote_id: QuoteId, text: String },
}

/// Everything the calculator needs between user actions
#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub selected_model: PaverModel,
    pub margin: u32,
    pub unit_price: f64,
    pub locale: Locale,
    pub history: History,
    /// Quote currently on screen, if any
    pub current: Option<Quote>,
    pub tip: TipStatus,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(History::new(), DEFAULT_UNIT_PRICE, Locale::default())
    }
}

/// A unit price saved from settings must be a finite amount above zero
pub fn validate_saved_unit_price(unit_price: f64) -> SharedResult<f64> {
    if !unit_price.is_finite() || unit_price <= 0.0 {
        return Err(SharedError::invalid_input(
            "unit price",
            unit_price,
            "must be greater than zero",
        ));
    }
    Ok(unit_price)
}

impl AppState {
    pub fn new(history: History, unit_price: f64, locale: Locale) -> Self {
        Self {
            selected_model: default_model().clone(),
            margin: DEFAULT_MARGIN,
            unit_price,
            locale,
            history,
            current: None,
            tip: TipStatus::Idle,
        }
    }

    /// Compute a quote from the raw area input and record it
    ///
    /// On invalid input the state is returned untouched alongside the error.
    pub fn submit(self, area_input: &str) -> Result<(Self, Quote), (Self, SharedError)> {
        let computed = parse_area(area_input).and_then(|area| {
            compute_quote(area, &self.selected_model, self.margin, self.unit_price)
        });

        match computed {
            Ok(quote) => {
                let mut next = self;
                next.history.record(quote.clone());
                next.tip = TipStatus::Pending {
                    quote_id: quote.id.clone(),
                };
                next.current = Some(quote.clone());
                Ok((next, quote))
            }
            Err(e) => Err((self, e)),
        }
    }

    pub fn select_model(self, model: &PaverModel) -> SharedResult<Self> {
        let mut next = self;
        next.selected_model = model.clone();
        next.refresh_current()
    }

    pub fn set_margin(self, margin: u32) -> SharedResult<Self> {
        let mut next = self;
        next.margin = margin;
        next.refresh_current()
    }

    /// Apply a unit price saved from settings
    pub fn set_unit_price(self, unit_price: f64) -> SharedResult<Self> {
        let unit_price = validate_saved_unit_price(unit_price)?;
        let mut next = self;
        next.unit_price = unit_price;
        next.refresh_current()
    }

    /// Show an existing quote (e.g. picked from history) without recording it again
    pub fn show_quote(self, quote: Quote) -> Self {
        Self {
            current: Some(quote),
            tip: TipStatus::Idle,
            ..self
        }
    }

    /// Drop any pending or shown tip
    pub fn clear_tip(self) -> Self {
        Self {
            tip: TipStatus::Idle,
            ..self
        }
    }

    pub fn delete_quote(self, id: &QuoteId) -> (Self, Option<Quote>) {
        let mut next = self;
        let removed = next.history.delete(id);
        (next, removed)
    }

    /// Attach a tip to the displayed quote; tips for any other quote are dropped
    pub fn apply_tip(self, quote_id: &QuoteId, text: String) -> Self {
        let matches_current = self.current.as_ref().is_some_and(|q| &q.id == quote_id);
        if !matches_current {
            return self;
        }
        Self {
            tip: TipStatus::Ready {
                quote_id: quote_id.clone(),
                text,
            },
            ..self
        }
    }

    /// Text to show in the tip box, if any
    pub fn tip_text(&self) -> Option<&str> {
        match &self.tip {
            TipStatus::Idle => None,
            TipStatus::Pending { .. } => Some(messages::tip_placeholder(self.locale)),
            TipStatus::Ready { text, .. } => Some(text.as_str()),
        }
    }

    // Live preview: the displayed quote follows model, margin and price changes.
    // History keeps the numbers as they were recorded.
    fn refresh_current(mut self) -> SharedResult<Self> {
        if let Some(quote) = self.current.take() {
            self.current = Some(recompute_quote(
                &quote,
                &self.selected_model,
                self.margin,
                self.unit_price,
            )?);
        }
        Ok(self)
    }
}
