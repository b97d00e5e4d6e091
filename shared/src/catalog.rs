//! Static paver catalog and application defaults

use std::sync::LazyLock;

use crate::errors::{SharedError, SharedResult};
use crate::types::PaverModel;

/// Unit price used until the user saves one (BRL)
pub const DEFAULT_UNIT_PRICE: f64 = 1.10;

/// Waste margin applied when none is chosen (percent)
pub const DEFAULT_MARGIN: u32 = 5;

/// Margins offered to the user: exact, standard, cuts, curves
pub const SUGGESTED_MARGINS: [u32; 4] = [0, 5, 10, 15];

/// Maximum number of quotes kept in history
pub const HISTORY_CAPACITY: usize = 20;

static PAVER_MODELS: LazyLock<Vec<PaverModel>> = LazyLock::new(|| {
    vec![
        PaverModel {
            id: "16-faces".to_string(),
            name: "Paver 16 Faces".to_string(),
            length: 24,
            width: 10,
            thickness: 6,
            pavers_per_m2: 42.0,
        },
        PaverModel {
            id: "tijolinho".to_string(),
            name: "Paver Tijolinho".to_string(),
            length: 20,
            width: 10,
            thickness: 6,
            pavers_per_m2: 50.0,
        },
    ]
});

/// All catalog entries, in display order
pub fn paver_models() -> &'static [PaverModel] {
    &PAVER_MODELS
}

/// First catalog entry, selected at startup
pub fn default_model() -> &'static PaverModel {
    &PAVER_MODELS[0]
}

pub fn find_model(id: &str) -> SharedResult<&'static PaverModel> {
    PAVER_MODELS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| SharedError::UnknownModel { id: id.to_string() })
}
