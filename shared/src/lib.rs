//! Shared types for the Concre7 paver quote calculator
//!
//! Holds the domain records, the static catalog and the logging setup used by
//! every crate in the workspace.

pub mod catalog;
pub mod errors;
pub mod logging;
pub mod types;

pub use catalog::{
    DEFAULT_MARGIN, DEFAULT_UNIT_PRICE, HISTORY_CAPACITY, SUGGESTED_MARGINS, default_model,
    find_model, paver_models,
};
pub use errors::*;
pub use types::*;
