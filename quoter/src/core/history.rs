//! Bounded, newest-first collection of quotes

use shared::{HISTORY_CAPACITY, Quote, QuoteId};

/// Quote history, newest first, never longer than `HISTORY_CAPACITY`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<Quote>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-ordered entries (newest first), truncating to capacity
    pub fn from_entries(mut entries: Vec<Quote>) -> Self {
        entries.truncate(HISTORY_CAPACITY);
        Self { entries }
    }

    /// Prepend a quote, evicting the oldest entries beyond capacity
    ///
    /// Returns the evicted quotes, oldest last.
    pub fn record(&mut self, quote: Quote) -> Vec<Quote> {
        self.entries.insert(0, quote);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.split_off(HISTORY_CAPACITY)
        } else {
            Vec::new()
        }
    }

    /// Remove the quote with this id. Returns it if it was present.
    pub fn delete(&mut self, id: &QuoteId) -> Option<Quote> {
        let position = self.entries.iter().position(|q| &q.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn get(&self, id: &QuoteId) -> Option<&Quote> {
        self.entries.iter().find(|q| &q.id == id)
    }

    pub fn latest(&self) -> Option<&Quote> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Quote> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
