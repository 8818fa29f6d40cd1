//! FILENAME: app/src-tauri/src/menu.rs
//! PURPOSE: Native application menu built from the current menu plan.

use navigation::{MenuPlan, MenuSlot};
use tauri::menu::{Menu, MenuEvent, MenuItem, PredefinedMenuItem};
use tauri::{AppHandle, Manager, Runtime};

use crate::context::AppContext;
use crate::logging::{log_debug, log_error, log_warn};
use crate::window;

/// Realize a plan as a Tauri menu.
pub fn build_menu<R: Runtime>(app: &AppHandle<R>, plan: &MenuPlan) -> tauri::Result<Menu<R>> {
    let menu = Menu::new(app)?;
    for slot in plan.slots() {
        match slot {
            MenuSlot::Item { id, label, .. } => {
                let item = MenuItem::with_id(app, id.as_str(), label, true, None::<&str>)?;
                menu.append(&item)?;
            }
            MenuSlot::Separator => {
                menu.append(&PredefinedMenuItem::separator(app)?)?;
            }
        }
    }
    Ok(menu)
}

/// Replace the whole application menu from the store contents.
pub fn rebuild<R: Runtime>(app: &AppHandle<R>) {
    let Some(ctx) = app.try_state::<AppContext>() else {
        log_warn!("MENU", "rebuild requested before context was ready");
        return;
    };
    let plan = ctx.refresh_menu_plan();

    match build_menu(app, &plan).and_then(|menu| app.set_menu(menu)) {
        Ok(_) => log_debug!("MENU", "rebuilt with {} entries", plan.entry_labels().len()),
        Err(e) => log_error!("MENU", "failed to rebuild menu: {}", e),
    }
}

pub fn handle_menu_event<R: Runtime>(app: &AppHandle<R>, event: MenuEvent) {
    let id = event.id().as_ref();
    let Some(ctx) = app.try_state::<AppContext>() else {
        return;
    };
    match ctx.menu_target(id) {
        Some(target) => window::open_target(app, &target),
        None => log_warn!("MENU", "no action for menu id {}", id),
    }
}
