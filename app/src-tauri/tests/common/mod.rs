//! FILENAME: tests/common/mod.rs
//! Test harness and fixtures for OneAI backend integration tests.

#![allow(dead_code)]

use app_lib::{AppConfig, AppContext, Entry};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Test harness owning a scratch data directory and an AppContext over it.
pub struct TestHarness {
    pub dir: TempDir,
    pub ctx: Arc<AppContext>,
}

impl TestHarness {
    /// Create a harness with an empty data directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let ctx = Arc::new(
            AppContext::new(AppConfig::default(), dir.path()).expect("default config is valid"),
        );

        // Same wiring as the app: every store change rebuilds the menu plan.
        let weak = Arc::downgrade(&ctx);
        ctx.store.subscribe(move |_| {
            if let Some(ctx) = weak.upgrade() {
                ctx.refresh_menu_plan();
            }
        });
        ctx.refresh_menu_plan();

        TestHarness { dir, ctx }
    }

    /// Create a harness whose entries file already holds `entries`.
    pub fn with_entries(entries: &[Entry]) -> Self {
        let harness = Self::new();
        harness.write_raw(&serde_json::to_string_pretty(entries).unwrap());
        harness.ctx.refresh_menu_plan();
        harness
    }

    pub fn data_dir(&self) -> &Path {
        self.dir.path()
    }

    /// Overwrite the entries file with arbitrary text.
    pub fn write_raw(&self, contents: &str) {
        fs::write(self.ctx.storage_path(), contents).expect("write entries file");
    }

    pub fn read_raw(&self) -> String {
        fs::read_to_string(self.ctx.storage_path()).expect("read entries file")
    }
}

pub fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("1", "Claude", "https://claude.ai"),
        Entry::new("2", "Gemini", "https://gemini.google.com"),
        Entry::new("3", "Perplexity", "https://www.perplexity.ai"),
    ]
}
