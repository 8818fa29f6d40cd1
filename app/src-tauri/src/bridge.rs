//! FILENAME: app/src-tauri/src/bridge.rs
//! PURPOSE: The four entry operations exposed to the bundled page.
//! CONTEXT: Failures come back as `null`/`false`, never as errors. The command
//! wrappers are thin so the bodies can be exercised without a webview.

use store::{Entry, EntryDraft};
use tauri::State;

use crate::context::AppContext;
use crate::logging::{log_enter, log_exit, log_warn};

// ============================================================================
// VALIDATION
// ============================================================================

/// Trim label and website; `None` if either ends up empty.
pub fn normalize_draft(draft: EntryDraft) -> Option<EntryDraft> {
    let label = draft.label.trim();
    let website = draft.website.trim();
    if label.is_empty() || website.is_empty() {
        return None;
    }
    Some(EntryDraft::new(label, website))
}

/// Same presence check for a full entry; the id must be present too.
pub fn normalize_entry(entry: Entry) -> Option<Entry> {
    let id = entry.id.trim();
    if id.is_empty() {
        return None;
    }
    let draft = normalize_draft(EntryDraft::new(entry.label, entry.website))?;
    Some(Entry::new(id, draft.label, draft.website))
}

// ============================================================================
// OPERATIONS
// ============================================================================

pub fn get_all(ctx: &AppContext) -> Vec<Entry> {
    log_enter!("CMD", "get_all_entries");
    let entries = ctx.store.get_all();
    log_exit!("CMD", "get_all_entries", "count={}", entries.len());
    entries
}

pub fn create(ctx: &AppContext, draft: EntryDraft) -> Option<Entry> {
    log_enter!("CMD", "create_entry", "label={:?}", draft.label);
    let Some(draft) = normalize_draft(draft) else {
        log_warn!("CMD", "create_entry rejected: label and website are required");
        return None;
    };
    let created = ctx.store.create(draft);
    log_exit!("CMD", "create_entry", "ok={}", created.is_some());
    created
}

pub fn update(ctx: &AppContext, entry: Entry) -> Option<Entry> {
    log_enter!("CMD", "update_entry", "id={}", entry.id);
    let Some(entry) = normalize_entry(entry) else {
        log_warn!("CMD", "update_entry rejected: id, label and website are required");
        return None;
    };
    let updated = ctx.store.update(entry);
    log_exit!("CMD", "update_entry", "ok={}", updated.is_some());
    updated
}

pub fn delete(ctx: &AppContext, id: &str) -> bool {
    log_enter!("CMD", "delete_entry", "id={}", id);
    let removed = ctx.store.delete(id);
    log_exit!("CMD", "delete_entry", "removed={}", removed);
    removed
}

// ============================================================================
// COMMANDS
// ============================================================================

#[tauri::command]
pub fn get_all_entries(ctx: State<'_, AppContext>) -> Vec<Entry> {
    get_all(&ctx)
}

#[tauri::command]
pub fn create_entry(ctx: State<'_, AppContext>, draft: EntryDraft) -> Option<Entry> {
    create(&ctx, draft)
}

#[tauri::command]
pub fn update_entry(ctx: State<'_, AppContext>, entry: Entry) -> Option<Entry> {
    update(&ctx, entry)
}

#[tauri::command]
pub fn delete_entry(ctx: State<'_, AppContext>, id: String) -> bool {
    delete(&ctx, &id)
}
