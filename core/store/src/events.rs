//! FILENAME: core/store/src/events.rs
//! PURPOSE: "Collection changed" notifications.
//! CONTEXT: The menu builder and the UI refresh subscribe here instead of being
//! called from inside each mutation.

use serde::Serialize;
use std::sync::RwLock;

/// What changed in the entries file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChangeEvent {
    Created { id: String },
    Updated { id: String },
    /// `removed` is false when the id was not present (the file is still rewritten).
    Deleted { id: String, removed: bool },
    /// The file changed on disk outside of this store.
    External,
}

type Listener = Box<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Listener list. Listeners run synchronously on the publishing thread.
#[derive(Default)]
pub struct Subscribers {
    listeners: RwLock<Vec<Listener>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        match self.listeners.write() {
            Ok(mut listeners) => listeners.push(Box::new(listener)),
            Err(poisoned) => poisoned.into_inner().push(Box::new(listener)),
        }
    }

    pub fn publish(&self, event: &ChangeEvent) {
        let listeners = match self.listeners.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for listener in listeners.iter() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.read().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.len())
            .finish()
    }
}
