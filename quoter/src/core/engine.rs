//! Quote computation (pure functions)

use chrono::{SubsecRound, Utc};
use shared::{PaverModel, Quote, QuoteId, SharedError, SharedResult};

/// Relative slack (in units of machine epsilon) absorbed before rounding up,
/// enough for noise such as 441.00000000000006 and nothing more
const NOISE_EPSILONS: f64 = 4.0;

/// Parse a user-entered area in square meters
///
/// Accepts `.` or a single `,` as decimal separator. Anything that is not a
/// finite number greater than zero is rejected.
pub fn parse_area(input: &str) -> SharedResult<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SharedError::invalid_input("area", input, "area is required"));
    }

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    let area: f64 = normalized
        .parse()
        .map_err(|_| SharedError::invalid_input("area", input, "not a number"))?;

    validate_area(area)?;
    Ok(area)
}

fn validate_area(area: f64) -> SharedResult<()> {
    if !area.is_finite() || area <= 0.0 {
        return Err(SharedError::invalid_input(
            "area",
            area,
            "must be a positive number",
        ));
    }
    Ok(())
}

fn validate_unit_price(unit_price: f64) -> SharedResult<()> {
    if !unit_price.is_finite() || unit_price < 0.0 {
        return Err(SharedError::invalid_input(
            "unit price",
            unit_price,
            "must be zero or more",
        ));
    }
    Ok(())
}

/// Units to buy: coverage plus margin, always rounded up, at least one
///
/// Counts that do not fit in a `u64` are rejected as invalid area.
pub fn total_pavers(area: f64, model: &PaverModel, margin_percent: u32) -> SharedResult<u64> {
    let base = area * model.pavers_per_m2;
    let with_margin = base * (1.0 + f64::from(margin_percent) / 100.0);
    let tolerance = with_margin * NOISE_EPSILONS * f64::EPSILON;
    let units = (with_margin - tolerance).ceil();

    // u64::MAX as f64 rounds up to 2^64, one past the largest count
    if !units.is_finite() || units >= u64::MAX as f64 {
        return Err(SharedError::invalid_input(
            "area",
            area,
            "too large to count in pavers",
        ));
    }
    Ok(units.max(1.0) as u64)
}

/// Price for a given number of units
pub fn total_value(total_pavers: u64, unit_price: f64) -> f64 {
    total_pavers as f64 * unit_price
}

fn checked_total_value(total_pavers: u64, unit_price: f64) -> SharedResult<f64> {
    let value = total_value(total_pavers, unit_price);
    if !value.is_finite() {
        return Err(SharedError::invalid_input(
            "unit price",
            unit_price,
            "total value out of range",
        ));
    }
    Ok(value)
}

/// Compute a new quote. No side effects: recording and persistence belong to the caller.
pub fn compute_quote(
    area: f64,
    model: &PaverModel,
    margin_percent: u32,
    unit_price: f64,
) -> SharedResult<Quote> {
    validate_area(area)?;
    validate_unit_price(unit_price)?;

    let total_pavers = total_pavers(area, model, margin_percent)?;
    let total_value = checked_total_value(total_pavers, unit_price)?;

    Ok(Quote {
        id: QuoteId::new(),
        // Stored as epoch millis
        timestamp: Utc::now().trunc_subsecs(3),
        area,
        margin: margin_percent,
        model: model.clone(),
        total_pavers,
        unit_price,
        total_value,
    })
}

/// Recompute a displayed quote after the model, margin or price changed
///
/// Keeps id, timestamp and area; both totals are derived again together.
pub fn recompute_quote(
    quote: &Quote,
    model: &PaverModel,
    margin_percent: u32,
    unit_price: f64,
) -> SharedResult<Quote> {
    validate_unit_price(unit_price)?;

    let total_pavers = total_pavers(quote.area, model, margin_percent)?;
    let total_value = checked_total_value(total_pavers, unit_price)?;

    Ok(Quote {
        id: quote.id.clone(),
        timestamp: quote.timestamp,
        area: quote.area,
        margin: margin_percent,
        model: model.clone(),
        total_pavers,
        unit_price,
        total_value,
    })
}
