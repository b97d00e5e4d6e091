//! Test fixtures and data for quoter tests

use std::time::Duration;

/// Standard test data
pub struct TestFixtures;

impl TestFixtures {
    pub const FACES_16: &'static str = "16-faces";
    pub const TIJOLINHO: &'static str = "tijolinho";

    /// 10 m² of 16-faces at 5% waste
    pub const REFERENCE_AREA: &'static str = "10";
    pub const REFERENCE_TOTAL_PAVERS: u64 = 441;
    pub const REFERENCE_TOTAL_VALUE: f64 = 485.10;

    pub const SERVICE_TIP: &'static str = "Compacte a base antes de assentar as peças.";

    pub const TIP_TIMEOUT: Duration = Duration::from_millis(200);

    /// Area inputs that must never produce a quote
    pub fn invalid_areas() -> Vec<&'static str> {
        vec!["", "   ", "abc", "0", "-5", "1,2,3", "NaN", "inf"]
    }
}
