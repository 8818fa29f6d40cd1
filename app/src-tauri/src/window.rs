//! FILENAME: app/src-tauri/src/window.rs
//! PURPOSE: Main window creation and navigation routing.
//! CONTEXT: Every in-window navigation is checked against the policy in
//! AppContext; anything refused is handed to the system browser.

use navigation::{MenuTarget, NavigationDecision};
use tauri::webview::{NewWindowResponse, PageLoadEvent};
use tauri::{AppHandle, Manager, Runtime, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tauri_plugin_shell::ShellExt;

use crate::context::AppContext;
use crate::logging::{log_debug, log_error, log_info, log_warn};

pub const MAIN_WINDOW: &str = "main";

type SetupResult<T> = Result<T, Box<dyn std::error::Error>>;

/// Create the single app window showing the default remote page.
pub fn create_main_window<R: Runtime>(app: &AppHandle<R>) -> SetupResult<WebviewWindow<R>> {
    let ctx = app.state::<AppContext>();
    let start = ctx.config.default_url()?;
    ctx.expect_load(&start);

    let nav_app = app.clone();
    let popup_app = app.clone();
    let load_app = app.clone();

    let window = WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::External(start))
        .title(ctx.config.product_name.clone())
        .inner_size(ctx.config.window_width, ctx.config.window_height)
        .on_navigation(move |url| allow_navigation(&nav_app, url))
        .on_new_window(move |url, _features| {
            deny_new_window(&popup_app, &url);
            NewWindowResponse::Deny
        })
        .on_page_load(move |_window, payload| {
            if matches!(payload.event(), PageLoadEvent::Finished) {
                finish_load(&load_app, payload.url());
            }
        })
        .build()?;

    log_info!("WIN", "main window created at {}", ctx.config.default_url);
    Ok(window)
}

fn allow_navigation<R: Runtime>(app: &AppHandle<R>, url: &Url) -> bool {
    let Some(ctx) = app.try_state::<AppContext>() else {
        return false;
    };
    match ctx.decide_navigation(url) {
        NavigationDecision::Allow => true,
        NavigationDecision::OpenExternal => {
            log_info!("NAV", "blocked in-window navigation to {}, opening externally", url);
            open_external(app, url.as_str());
            false
        }
    }
}

fn finish_load<R: Runtime>(app: &AppHandle<R>, url: &Url) {
    if let Some(ctx) = app.try_state::<AppContext>() {
        ctx.finish_load();
        log_debug!("NAV", "page finished loading {}", url);
    }
}

fn deny_new_window<R: Runtime>(app: &AppHandle<R>, url: &Url) {
    let decision = app
        .try_state::<AppContext>()
        .map(|ctx| ctx.decide_new_window(url))
        .unwrap_or(NavigationDecision::OpenExternal);
    if decision == NavigationDecision::OpenExternal {
        log_info!("NAV", "new window for {} denied, opening externally", url);
        open_external(app, url.as_str());
    }
}

/// Open a URL in the OS default browser.
#[allow(deprecated)]
pub fn open_external<R: Runtime>(app: &AppHandle<R>, url: &str) {
    if let Err(e) = app.shell().open(url, None) {
        log_error!("NAV", "failed to open external URL {}: {}", url, e);
    }
}

/// Navigate the main window for a menu action.
pub fn open_target<R: Runtime>(app: &AppHandle<R>, target: &MenuTarget) {
    let Some(url) = app
        .try_state::<AppContext>()
        .and_then(|ctx| ctx.begin_navigation(target))
    else {
        return;
    };

    match app.get_webview_window(MAIN_WINDOW) {
        Some(window) => {
            if let Err(e) = window.navigate(url.clone()) {
                log_error!("NAV", "failed to load {}: {}", url, e);
            }
        }
        None => log_warn!("NAV", "no main window to load {}", url),
    }
}
