//! Service-specific tests
//!
//! Each service has its own test file; shared helpers live in `common`.

#[cfg(test)]
mod gemini_tip;
#[cfg(test)]
mod price_store;

#[cfg(test)]
pub mod common {
    use shared::{Quote, find_model};

    use crate::core::compute_quote;

    /// 10 m² of 16-faces at 5% margin, 1.10 each: 441 units
    pub fn sample_quote() -> Quote {
        let model = find_model("16-faces").expect("catalog has 16-faces");
        compute_quote(10.0, model, 5, 1.10).expect("valid quote")
    }

    pub fn quote_with_area(area: f64) -> Quote {
        let model = find_model("tijolinho").expect("catalog has tijolinho");
        compute_quote(area, model, 0, 1.10).expect("valid quote")
    }
}
