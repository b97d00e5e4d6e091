//! Persistence of the quote history
//!
//! The whole sequence is serialized on every write; there is no incremental diffing.

use shared::{Quote, session_debug, session_warn};

use crate::core::History;
use crate::error::{QuoterError, QuoterResult};
use crate::traits::KeyValueStore;
use crate::types::HISTORY_KEY;

/// Read the history key, degrading to an empty history on any problem
pub async fn load_history<S: KeyValueStore + ?Sized>(store: &S) -> History {
    let raw = match store.get(HISTORY_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return History::new(),
        Err(e) => {
            session_warn!("Could not read history, starting empty: {}", e);
            return History::new();
        }
    };

    match serde_json::from_str::<Vec<Quote>>(&raw) {
        Ok(entries) => {
            session_debug!("Loaded {} quote(s) from history", entries.len());
            History::from_entries(entries)
        }
        Err(e) => {
            session_warn!("Stored history is malformed, starting empty: {}", e);
            History::new()
        }
    }
}

/// Write the full history under its key
pub async fn save_history<S: KeyValueStore + ?Sized>(store: &S, history: &History) -> QuoterResult<()> {
    let json = serde_json::to_string(history.as_slice())
        .map_err(|e| QuoterError::persistence(HISTORY_KEY, e))?;
    store.set(HISTORY_KEY, &json).await
}
