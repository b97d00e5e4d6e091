//! Trait definitions for dependency injection
//!
//! The session talks to storage and to the tip service only through these
//! traits, so tests can swap in mockall mocks or temporary directories.

use async_trait::async_trait;

use crate::error::{QuoterResult, TipFetchError};
use crate::types::TipRequest;

/// Opaque key-value storage for persisted application data
#[mockall::automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, `None` if it was never written
    async fn get(&self, key: &str) -> QuoterResult<Option<String>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &str) -> QuoterResult<()>;

    /// Remove `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> QuoterResult<()>;
}

/// External text-completion collaborator producing installation tips
#[mockall::automock]
#[async_trait]
pub trait TipProvider: Send + Sync {
    /// Ask for a short tip about the quoted installation
    async fn fetch_tip(&self, request: &TipRequest) -> Result<String, TipFetchError>;
}
