//! FILENAME: core/store/src/lib.rs
//! PURPOSE: Entry store for OneAI saved shortcuts.
//! CONTEXT: The whole collection lives in one pretty-printed JSON array on disk.
//! Every call re-reads the file; nothing is cached in memory.

mod clock;
mod entry;
mod error;
mod events;
mod file;
mod store;

pub use clock::{Clock, SystemClock};
pub use entry::{Entry, EntryDraft};
pub use error::StoreError;
pub use events::{ChangeEvent, Subscribers};
pub use file::{read_entries, write_entries};
pub use store::EntryStore;

/// File name of the entries document inside the user-data directory.
pub const ENTRIES_FILE_NAME: &str = "oneai_entries.json";
