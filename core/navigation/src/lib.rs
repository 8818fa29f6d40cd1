//! FILENAME: core/navigation/src/lib.rs
//! PURPOSE: GUI-free pieces of the OneAI shell.
//! CONTEXT: Which URLs may load inside the window, what the native menu
//! contains, which page the window shows, and the watcher debounce.

pub mod debounce;
pub mod menu;
pub mod policy;
pub mod view;

pub use debounce::Debouncer;
pub use menu::{MenuPlan, MenuSlot, MenuTarget};
pub use policy::{NavigationDecision, NavigationError, NavigationPolicy};
pub use view::DisplayState;
