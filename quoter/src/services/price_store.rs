//! Persisted unit price setting

use shared::{DEFAULT_UNIT_PRICE, session_warn};

use crate::core::validate_saved_unit_price;
use crate::error::QuoterResult;
use crate::traits::KeyValueStore;
use crate::types::UNIT_PRICE_KEY;

/// Read the saved unit price; absent, malformed or non-positive values give the default
pub async fn load_unit_price<S: KeyValueStore + ?Sized>(store: &S) -> f64 {
    let raw = match store.get(UNIT_PRICE_KEY).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return DEFAULT_UNIT_PRICE,
        Err(e) => {
            session_warn!("Could not read unit price, using default: {}", e);
            return DEFAULT_UNIT_PRICE;
        }
    };

    match raw.trim().parse::<f64>() {
        Ok(price) if validate_saved_unit_price(price).is_ok() => price,
        _ => {
            session_warn!("Stored unit price '{}' is invalid, using default", raw.trim());
            DEFAULT_UNIT_PRICE
        }
    }
}

/// Validate and persist a unit price. Rejected values leave the stored one untouched.
pub async fn save_unit_price<S: KeyValueStore + ?Sized>(store: &S, price: f64) -> QuoterResult<f64> {
    let price = validate_saved_unit_price(price)?;
    store.set(UNIT_PRICE_KEY, &price.to_string()).await?;
    Ok(price)
}
