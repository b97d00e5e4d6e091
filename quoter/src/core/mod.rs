//! Pure quote logic: computation, history, application state and formatting

pub mod engine;
pub mod history;
pub mod messages;
pub mod share;
pub mod state;

pub use engine::{compute_quote, parse_area, recompute_quote};
pub use history::History;
pub use state::{AppState, TipStatus, validate_saved_unit_price};
