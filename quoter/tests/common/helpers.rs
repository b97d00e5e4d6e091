//! Test helpers and builder for quote sessions

use std::sync::Arc;

use quoter::services::FileKeyValueStore;
use quoter::*;
use shared::Locale;
use tempfile::TempDir;

use super::fixtures::TestFixtures;

/// Builds a session over a temporary data directory
pub struct SessionBuilder {
    dir: Option<TempDir>,
    tips: MockTipProvider,
    locale: Locale,
}

impl SessionBuilder {
    /// Defaults: fresh directory, pt-BR, tip service that is never called
    pub fn new() -> Self {
        let mut tips = MockTipProvider::new();
        tips.expect_fetch_tip().times(0);
        Self {
            dir: None,
            tips,
            locale: Locale::PtBr,
        }
    }

    /// Reuse an existing data directory, as after an application restart
    pub fn with_dir(mut self, dir: TempDir) -> Self {
        self.dir = Some(dir);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_tip(mut self, text: &'static str) -> Self {
        let mut tips = MockTipProvider::new();
        tips.expect_fetch_tip()
            .returning(move |_| Ok(text.to_string()));
        self.tips = tips;
        self
    }

    pub fn with_failing_tips(mut self, error: TipFetchError) -> Self {
        let mut tips = MockTipProvider::new();
        tips.expect_fetch_tip()
            .returning(move |_| Err(error.clone()));
        self.tips = tips;
        self
    }

    pub async fn build(self) -> (TempDir, QuoteSession<FileKeyValueStore>) {
        let dir = match self.dir {
            Some(dir) => dir,
            None => TempDir::new().unwrap(),
        };
        let store = FileKeyValueStore::with_base_dir(dir.path());
        let session = QuoteSession::start(
            store,
            Arc::new(self.tips),
            self.locale,
            TestFixtures::TIP_TIMEOUT,
        )
        .await;
        (dir, session)
    }
}

/// Assertion helpers
pub struct TestHelpers;

impl TestHelpers {
    /// Raw history file content, if written
    pub fn history_file(dir: &TempDir) -> Option<String> {
        std::fs::read_to_string(dir.path().join(format!("{HISTORY_KEY}.json"))).ok()
    }

    pub fn history_ids(session: &QuoteSession<FileKeyValueStore>) -> Vec<String> {
        session
            .state()
            .history
            .iter()
            .map(|q| q.id.to_string())
            .collect()
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }
}
