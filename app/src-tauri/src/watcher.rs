//! FILENAME: app/src-tauri/src/watcher.rs
//! PURPOSE: Watch the data directory for outside edits to the entries file.
//! CONTEXT: Non-recursive watch, filtered to the entries file name, debounced
//! so a burst of writes publishes a single `ChangeEvent::External`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use navigation::Debouncer;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use store::ChangeEvent;
use tauri::{AppHandle, Manager, Runtime};

use crate::context::AppContext;
use crate::logging::{log_error, log_info, log_warn};

/// True for create/modify/remove events that touch `file_name`.
/// Access events are ignored so reading the file never triggers a rebuild.
pub fn is_storage_event(event: &Event, file_name: &str) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Any | EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name().map_or(false, |n| n == file_name))
}

/// Running watch. Dropping it stops the watch.
pub struct StorageWatcher {
    _inner: RecommendedWatcher,
    dir: PathBuf,
}

impl StorageWatcher {
    /// Watch `dir` and call `on_settled` once a burst of changes to
    /// `file_name` has been quiet for the debouncer window.
    pub fn spawn<F>(
        dir: &Path,
        file_name: &str,
        debouncer: Arc<Debouncer>,
        on_settled: F,
    ) -> notify::Result<Self>
    where
        F: Fn() + Send + Sync + 'static,
    {
        let file_name = file_name.to_string();
        let on_settled = Arc::new(on_settled);

        let mut inner = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) if is_storage_event(&event, &file_name) => {
                let ticket = debouncer.schedule();
                let debouncer = Arc::clone(&debouncer);
                let on_settled = Arc::clone(&on_settled);
                tauri::async_runtime::spawn(async move {
                    tokio::time::sleep(debouncer.window()).await;
                    if debouncer.is_current(ticket) {
                        (*on_settled)();
                    }
                });
            }
            Ok(_) => {}
            Err(e) => log_warn!("WATCH", "watch error: {}", e),
        })?;
        inner.watch(dir, RecursiveMode::NonRecursive)?;

        Ok(Self {
            _inner: inner,
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Start watching the entries file's directory. Failure is logged and the
/// app keeps running without live refresh.
pub fn start<R: Runtime>(app: &AppHandle<R>) {
    let Some(ctx) = app.try_state::<AppContext>() else {
        return;
    };
    let Some(dir) = ctx.storage_path().parent().map(Path::to_path_buf) else {
        log_error!("WATCH", "entries file has no parent directory");
        return;
    };

    let store = Arc::clone(&ctx.store);
    let result = StorageWatcher::spawn(
        &dir,
        &ctx.config.entries_file,
        Arc::clone(&ctx.debouncer),
        move || store.publish(ChangeEvent::External),
    );

    match result {
        Ok(watcher) => {
            log_info!("WATCH", "watching {}", watcher.dir().display());
            ctx.set_watcher(watcher);
        }
        Err(e) => log_error!("WATCH", "failed to start storage watcher: {}", e),
    }
}

/// Release the watcher handle on shutdown.
pub fn stop<R: Runtime>(app: &AppHandle<R>) {
    if let Some(ctx) = app.try_state::<AppContext>() {
        if ctx.release_watcher() {
            log_info!("WATCH", "storage watcher released");
        }
    }
}
