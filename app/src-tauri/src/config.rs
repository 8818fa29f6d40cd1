//! FILENAME: app/src-tauri/src/config.rs
// PURPOSE: Fixed application settings (URLs, storage file, window geometry).
// CONTEXT: Packaging settings live in tauri.conf.json; these are the runtime ones.

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const PRODUCT_NAME: &str = "OneAI";
pub const DEFAULT_AI_URL: &str = "https://chat.openai.com/";
pub const LOCAL_INDEX_PAGE: &str = "index.html";
pub const WATCH_DEBOUNCE_MS: u64 = 150;

/// Origin Tauri serves bundled assets from on this platform.
#[cfg(any(windows, target_os = "android"))]
pub const LOCAL_ASSET_ORIGIN: &str = "http://tauri.localhost";
#[cfg(not(any(windows, target_os = "android")))]
pub const LOCAL_ASSET_ORIGIN: &str = "tauri://localhost";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Window title
    pub product_name: String,
    /// Page loaded on launch; its origin is the only remote origin allowed in-window
    pub default_url: String,
    /// Entries file name inside the app data directory
    pub entries_file: String,
    /// Bundled page shown by the "OneAI" menu item
    pub local_index_page: String,
    pub window_width: f64,
    pub window_height: f64,
    /// Quiet period before an external file change rebuilds the menu
    pub watch_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_name: PRODUCT_NAME.to_string(),
            default_url: DEFAULT_AI_URL.to_string(),
            entries_file: store::ENTRIES_FILE_NAME.to_string(),
            local_index_page: LOCAL_INDEX_PAGE.to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            watch_debounce: Duration::from_millis(WATCH_DEBOUNCE_MS),
        }
    }
}

impl AppConfig {
    pub fn default_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.default_url)
    }

    /// Address of the bundled index page, e.g. `tauri://localhost/index.html`.
    pub fn local_index_href(&self) -> String {
        format!("{}/{}", LOCAL_ASSET_ORIGIN, self.local_index_page.trim_start_matches('/'))
    }

    pub fn local_index_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.local_index_href())
    }

    pub fn storage_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.entries_file)
    }
}
