//! FILENAME: core/navigation/src/view.rs
//! PURPOSE: What the main window is showing.

use crate::menu::MenuTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    /// The bundled index page.
    Local,
    /// A remote page: the default AI site or a saved entry.
    Remote(String),
}

impl DisplayState {
    /// State on launch.
    pub fn initial(default_url: &str) -> Self {
        DisplayState::Remote(default_url.to_string())
    }

    /// State after a menu action.
    pub fn after(target: &MenuTarget, default_url: &str) -> Self {
        match target {
            MenuTarget::LocalIndex => DisplayState::Local,
            MenuTarget::DefaultAi => DisplayState::Remote(default_url.to_string()),
            MenuTarget::Website(url) => DisplayState::Remote(url.clone()),
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, DisplayState::Local)
    }
}
