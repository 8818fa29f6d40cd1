//! FILENAME: app/src-tauri/src/lib.rs
// PURPOSE: Main library entry point (Tauri Bridge).
// CONTEXT: Wires the entry store, native menu, main window and file watcher
// into one Tauri app. All shared state lives in AppContext.

use tauri::{AppHandle, Emitter, Manager, RunEvent, Runtime};

pub mod bridge;
pub mod config;
pub mod context;
pub mod logging;
pub mod menu;
pub mod watcher;
pub mod window;

pub use config::AppConfig;
pub use context::AppContext;
pub use logging::{init_log_file, next_seq, write_log, write_log_raw};
pub use store::{ChangeEvent, Entry, EntryDraft};


/// Event emitted to the webview after any change to the entries file.
pub const ENTRIES_CHANGED_EVENT: &str = "entries-changed";

// ============================================================================
// SETUP
// ============================================================================

fn setup_app<R: Runtime>(app: &AppHandle<R>) -> Result<(), Box<dyn std::error::Error>> {
    match app.path().app_log_dir() {
        Ok(dir) => match init_log_file(&dir) {
            Ok(path) => log_info!("SYS", "OneAI starting, log={}", path.display()),
            Err(e) => eprintln!("[LOG_INIT] FAILED: {}, continuing with console-only logging", e),
        },
        Err(e) => eprintln!("[LOG_INIT] No log directory: {}", e),
    }

    let data_dir = app.path().app_data_dir()?;
    std::fs::create_dir_all(&data_dir)?;

    let ctx = AppContext::new(AppConfig::default(), &data_dir)?;
    log_info!("SYS", "entries file: {}", ctx.storage_path().display());
    log_debug!("SYS", "config {}", serde_json::to_string(&ctx.config).unwrap_or_default());

    let handle = app.clone();
    ctx.store.subscribe(move |event| on_entries_changed(&handle, event));
    app.manage(ctx);

    window::create_main_window(app)?;
    menu::rebuild(app);
    watcher::start(app);
    Ok(())
}

/// Store subscriber: rebuild the menu and tell the page to re-render.
fn on_entries_changed<R: Runtime>(app: &AppHandle<R>, event: &ChangeEvent) {
    log_debug!("SYS", "entries changed: {:?}", event);
    menu::rebuild(app);
    if let Err(e) = app.emit(ENTRIES_CHANGED_EVENT, event) {
        log_warn!("SYS", "failed to emit {}: {}", ENTRIES_CHANGED_EVENT, e);
    }
}

// On macOS the app outlives its last window; elsewhere closing it quits.
#[cfg(target_os = "macos")]
fn keep_alive_without_windows(api: &tauri::ExitRequestApi, code: Option<i32>) {
    if code.is_none() {
        api.prevent_exit();
    }
}

#[cfg(not(target_os = "macos"))]
fn keep_alive_without_windows(_api: &tauri::ExitRequestApi, _code: Option<i32>) {}

fn on_run_event<R: Runtime>(app: &AppHandle<R>, event: RunEvent) {
    match event {
        RunEvent::ExitRequested { api, code, .. } => keep_alive_without_windows(&api, code),
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { has_visible_windows, .. } => {
            if !has_visible_windows && app.get_webview_window(window::MAIN_WINDOW).is_none() {
                if let Err(e) = window::create_main_window(app) {
                    log_error!("WIN", "failed to recreate main window: {}", e);
                }
            }
        }
        RunEvent::Exit => {
            watcher::stop(app);
            log_info!("SYS", "OneAI exiting");
        }
        _ => {}
    }
}

// ============================================================================
// ENTRY POINT
// ============================================================================

pub fn run() {
    logging::install_log_bridge(log::LevelFilter::Debug);

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .setup(|app| {
            setup_app(app.handle())?;
            Ok(())
        })
        .on_menu_event(|app, event| menu::handle_menu_event(app, event))
        .invoke_handler(tauri::generate_handler![
            // Entry bridge
            bridge::get_all_entries,
            bridge::create_entry,
            bridge::update_entry,
            bridge::delete_entry,
            // Logging commands
            logging::log_frontend,
            logging::log_frontend_atomic,
            logging::get_next_seq,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app, event| on_run_event(app, event));
}
