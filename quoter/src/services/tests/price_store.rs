//! Tests for the persisted unit price

use shared::DEFAULT_UNIT_PRICE;
use tempfile::TempDir;
use tokio_test::{assert_err, assert_ok};

use crate::services::file_store::FileKeyValueStore;
use crate::services::price_store::{load_unit_price, save_unit_price};
use crate::traits::{KeyValueStore, MockKeyValueStore};
use crate::types::UNIT_PRICE_KEY;

#[tokio::test]
async fn test_missing_price_uses_default() {
    let mut store = MockKeyValueStore::new();
    store.expect_get().returning(|_| Ok(None));

    assert_eq!(load_unit_price(&store).await, DEFAULT_UNIT_PRICE);
}

#[tokio::test]
async fn test_invalid_stored_prices_use_default() {
    for raw in ["abc", "0", "-2.5", "NaN", ""] {
        let mut store = MockKeyValueStore::new();
        let value = raw.to_string();
        store
            .expect_get()
            .returning(move |_| Ok(Some(value.clone())));

        assert_eq!(
            load_unit_price(&store).await,
            DEFAULT_UNIT_PRICE,
            "stored {raw:?} should fall back"
        );
    }
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::with_base_dir(dir.path());

    let saved = assert_ok!(save_unit_price(&store, 1.35).await);
    assert_eq!(saved, 1.35);
    assert_eq!(load_unit_price(&store).await, 1.35);
}

#[tokio::test]
async fn test_rejected_price_is_not_written() {
    let mut store = MockKeyValueStore::new();
    store.expect_set().times(0);

    for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = save_unit_price(&store, price).await.unwrap_err();
        assert!(err.is_invalid_input(), "price {price} should be invalid input");
    }
}

#[tokio::test]
async fn test_rejected_price_keeps_previous_value() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::with_base_dir(dir.path());

    assert_ok!(save_unit_price(&store, 1.20).await);
    assert_err!(save_unit_price(&store, 0.0).await);

    assert_eq!(store.get(UNIT_PRICE_KEY).await.unwrap().as_deref(), Some("1.2"));
    assert_eq!(load_unit_price(&store).await, 1.20);
}
