//! Paver quote calculator
//!
//! Computes how many pavers an area needs (with a waste margin) and what they
//! cost, keeps a bounded history of quotes in a key-value store and decorates
//! each new quote with a best-effort installation tip.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::QuoterConfig;
pub use core::{AppState, History, TipStatus, compute_quote, parse_area, recompute_quote};
pub use error::{QuoterError, QuoterResult, TipFetchError};
pub use session::QuoteSession;
pub use traits::*;
pub use types::*;
