//! Quoter services implementations

pub mod file_store;
pub mod gemini_tip;
pub mod history_store;
pub mod price_store;
pub mod tips;

#[cfg(test)]
pub mod tests;

pub use file_store::*;
pub use gemini_tip::*;
pub use history_store::*;
pub use price_store::*;
pub use tips::*;
