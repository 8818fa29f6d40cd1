//! FILENAME: core/store/src/store.rs
//! PURPOSE: Create/update/delete over the entries file.
//! CONTEXT: Each operation reads the whole file, changes it in memory and
//! writes the whole file back. Failures are logged and turned into
//! `None`/`false`/empty results; nothing is propagated to the caller.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::entry::{Entry, EntryDraft};
use crate::events::{ChangeEvent, Subscribers};
use crate::error::StoreError;
use crate::file::{backup_corrupt, read_entries, write_entries};

/// File-backed entry collection.
///
/// Mutations made through one `EntryStore` are serialized by an internal
/// writer lock. Nothing coordinates with other writers of the same file
/// (another process, another store over the same path, a hand edit); those
/// still race and the last write wins.
pub struct EntryStore {
    path: PathBuf,
    clock: Box<dyn Clock>,
    writer: Mutex<()>,
    subscribers: Subscribers,
}

impl EntryStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }

    pub fn with_clock(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            path: path.into(),
            clock: Box::new(clock),
            writer: Mutex::new(()),
            subscribers: Subscribers::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Register a listener for successful mutations and external changes.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.subscribers.subscribe(listener);
    }

    /// Deliver an event to every subscriber. Used by the file watcher for
    /// [`ChangeEvent::External`].
    pub fn publish(&self, event: ChangeEvent) {
        self.subscribers.publish(&event);
    }

    /// All entries in insertion order; empty when the file is absent or unreadable.
    pub fn get_all(&self) -> Vec<Entry> {
        match read_entries(&self.path) {
            Ok(entries) => entries,
            Err(e) => {
                log::error!(target: "store", "failed to read entries from {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    /// Append a new entry with a fresh id. `None` if the file could not be
    /// read or written. A malformed file is backed up and replaced.
    pub fn create(&self, draft: EntryDraft) -> Option<Entry> {
        let entry = {
            let _writer = self.lock_writer();
            let mut entries = self.load_for_write("create")?;

            let entry = Entry {
                id: self.clock.now_millis().to_string(),
                label: draft.label,
                website: draft.website,
            };
            entries.push(entry.clone());

            if !self.persist(&entries, "create") {
                return None;
            }
            entry
        };

        log::debug!(target: "store", "created entry id={}", entry.id);
        self.publish(ChangeEvent::Created { id: entry.id.clone() });
        Some(entry)
    }

    /// Replace the first entry whose id matches. `None` without touching the
    /// file when the id is unknown.
    pub fn update(&self, entry: Entry) -> Option<Entry> {
        {
            let _writer = self.lock_writer();
            let mut entries = self.load_for_write("update")?;

            let Some(idx) = entries.iter().position(|e| e.id == entry.id) else {
                log::warn!(target: "store", "update skipped, unknown id={}", entry.id);
                return None;
            };
            entries[idx] = entry.clone();

            if !self.persist(&entries, "update") {
                return None;
            }
        }

        log::debug!(target: "store", "updated entry id={}", entry.id);
        self.publish(ChangeEvent::Updated { id: entry.id.clone() });
        Some(entry)
    }

    /// Remove every entry with this id. The file is rewritten even when
    /// nothing matched; the result says whether the collection shrank.
    pub fn delete(&self, id: &str) -> bool {
        let removed = {
            let _writer = self.lock_writer();
            let Some(mut entries) = self.load_for_write("delete") else {
                return false;
            };

            let before = entries.len();
            entries.retain(|e| e.id != id);
            let removed = entries.len() < before;

            if !self.persist(&entries, "delete") {
                return false;
            }
            removed
        };

        log::debug!(target: "store", "deleted id={} removed={}", id, removed);
        self.publish(ChangeEvent::Deleted {
            id: id.to_string(),
            removed,
        });
        removed
    }

    fn lock_writer(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // A document that does not parse counts as an empty collection, as it
    // does for `get_all`; a copy is kept as `<name>.bak` before the mutation
    // replaces it. Any other read failure aborts the mutation.
    fn load_for_write(&self, op: &str) -> Option<Vec<Entry>> {
        match read_entries(&self.path) {
            Ok(entries) => Some(entries),
            Err(StoreError::Parse(e)) => {
                match backup_corrupt(&self.path) {
                    Ok(backup) => log::warn!(target: "store", "{}: {} is malformed ({}), saved a copy to {} and starting empty", op, self.path.display(), e, backup.display()),
                    Err(b) => log::warn!(target: "store", "{}: {} is malformed ({}), backup failed ({}), starting empty", op, self.path.display(), e, b),
                }
                Some(Vec::new())
            }
            Err(e) => {
                log::error!(target: "store", "{} aborted, cannot read {}: {}", op, self.path.display(), e);
                None
            }
        }
    }

    fn persist(&self, entries: &[Entry], op: &str) -> bool {
        match write_entries(&self.path, entries) {
            Ok(()) => true,
            Err(e) => {
                log::error!(target: "store", "{} failed writing {}: {}", op, self.path.display(), e);
                false
            }
        }
    }
}

impl std::fmt::Debug for EntryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntryStore")
            .field("path", &self.path)
            .field("subscribers", &self.subscribers)
            .finish()
    }
}
