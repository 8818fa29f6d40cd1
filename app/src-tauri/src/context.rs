//! FILENAME: app/src-tauri/src/context.rs
// PURPOSE: Application context owned by the Tauri app (managed state).
// CONTEXT: Created in setup, dropped on exit. Holds the store, navigation
// policy, current menu plan, display state and the file watcher handle.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use navigation::{
    Debouncer, DisplayState, MenuPlan, MenuTarget, NavigationDecision, NavigationError,
    NavigationPolicy,
};
use store::EntryStore;
use url::Url;

use crate::config::AppConfig;
use crate::logging::{log_error, log_info};
use crate::watcher::StorageWatcher;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct AppContext {
    pub config: AppConfig,
    pub store: Arc<EntryStore>,
    pub debouncer: Arc<Debouncer>,
    policy: Mutex<NavigationPolicy>,
    display: Mutex<DisplayState>,
    menu_plan: Mutex<MenuPlan>,
    watcher: Mutex<Option<StorageWatcher>>,
}

impl AppContext {
    pub fn new(config: AppConfig, data_dir: &Path) -> Result<Self, NavigationError> {
        let policy = NavigationPolicy::new(&config.default_url)?
            .with_internal_origin(&config.local_index_href())?;
        let store = EntryStore::open(config.storage_path(data_dir));

        Ok(Self {
            store: Arc::new(store),
            debouncer: Arc::new(Debouncer::new(config.watch_debounce)),
            policy: Mutex::new(policy),
            display: Mutex::new(DisplayState::initial(&config.default_url)),
            menu_plan: Mutex::new(MenuPlan::default()),
            watcher: Mutex::new(None),
            config,
        })
    }

    pub fn storage_path(&self) -> &Path {
        self.store.path()
    }

    /// Re-read the store and replace the current menu plan.
    pub fn refresh_menu_plan(&self) -> MenuPlan {
        let plan = MenuPlan::build(&self.store.get_all());
        *lock(&self.menu_plan) = plan.clone();
        plan
    }

    pub fn menu_plan(&self) -> MenuPlan {
        lock(&self.menu_plan).clone()
    }

    pub fn menu_target(&self, id: &str) -> Option<MenuTarget> {
        lock(&self.menu_plan).target(id).cloned()
    }

    pub fn display(&self) -> DisplayState {
        lock(&self.display).clone()
    }

    /// Resolve a menu action to the URL the window should load and record
    /// the transition. `None` when the URL cannot be parsed (nothing changes).
    pub fn begin_navigation(&self, target: &MenuTarget) -> Option<Url> {
        let parsed = match target {
            MenuTarget::LocalIndex => self.config.local_index_url(),
            MenuTarget::DefaultAi => self.config.default_url(),
            MenuTarget::Website(website) => Url::parse(website),
        };
        let url = match parsed {
            Ok(url) => url,
            Err(e) => {
                log_error!("NAV", "cannot open {:?}: {}", target, e);
                return None;
            }
        };

        lock(&self.policy).expect(&url);
        *lock(&self.display) = DisplayState::after(target, &self.config.default_url);

        log_info!("NAV", "menu navigation to {}", url);
        Some(url)
    }

    /// Trust the shell's own load of `url` (and its redirects) until the
    /// webview reports the page finished.
    pub fn expect_load(&self, url: &Url) {
        lock(&self.policy).expect(url);
    }

    pub fn finish_load(&self) {
        lock(&self.policy).finish_load();
    }

    pub fn decide_navigation(&self, url: &Url) -> NavigationDecision {
        lock(&self.policy).decide_url(url)
    }

    pub fn decide_new_window(&self, url: &Url) -> NavigationDecision {
        lock(&self.policy).decide_new_window(url)
    }

    pub fn set_watcher(&self, watcher: StorageWatcher) {
        *lock(&self.watcher) = Some(watcher);
    }

    /// Drop the watcher handle. Returns whether one was running.
    pub fn release_watcher(&self) -> bool {
        lock(&self.watcher).take().is_some()
    }
}
