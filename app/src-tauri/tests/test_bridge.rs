//! FILENAME: app/src-tauri/tests/test_bridge.rs
//! PURPOSE: Tests for the entry bridge operations and menu refresh.

mod common;

use app_lib::watcher::StorageWatcher;
use app_lib::{bridge, ChangeEvent, Entry, EntryDraft};
use common::{sample_entries, TestHarness};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

// ============================================================================
// CRUD THROUGH THE BRIDGE
// ============================================================================

#[test]
fn test_create_list_delete_scenario() {
    let h = TestHarness::new();
    assert!(bridge::get_all(&h.ctx).is_empty());

    let created = bridge::create(&h.ctx, EntryDraft::new("Claude", "https://claude.ai")).unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.label, "Claude");
    assert_eq!(created.website, "https://claude.ai");

    assert_eq!(bridge::get_all(&h.ctx), vec![created.clone()]);

    assert!(bridge::delete(&h.ctx, &created.id));
    assert!(bridge::get_all(&h.ctx).is_empty());
}

#[test]
fn test_create_rejects_blank_fields() {
    let h = TestHarness::new();
    assert!(bridge::create(&h.ctx, EntryDraft::new("", "https://claude.ai")).is_none());
    assert!(bridge::create(&h.ctx, EntryDraft::new("Claude", "  ")).is_none());
    assert!(!h.ctx.storage_path().exists());
}

#[test]
fn test_update_replaces_entry() {
    let h = TestHarness::with_entries(&sample_entries());

    let updated = bridge::update(&h.ctx, Entry::new("2", "Gemini Pro", "https://gemini.google.com/app"));
    assert_eq!(
        updated,
        Some(Entry::new("2", "Gemini Pro", "https://gemini.google.com/app"))
    );

    let all = bridge::get_all(&h.ctx);
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].label, "Gemini Pro");
}

#[test]
fn test_update_unknown_id_is_noop() {
    let h = TestHarness::with_entries(&sample_entries());
    let before = h.read_raw();

    assert!(bridge::update(&h.ctx, Entry::new("99", "Nope", "https://nope.example")).is_none());
    assert_eq!(h.read_raw(), before);
}

#[test]
fn test_delete_unknown_id_returns_false() {
    let h = TestHarness::with_entries(&sample_entries());
    assert!(!bridge::delete(&h.ctx, "99"));
    assert_eq!(bridge::get_all(&h.ctx), sample_entries());
}

#[test]
fn test_malformed_file_lists_empty_and_accepts_new_entries() {
    let h = TestHarness::new();
    h.write_raw("{ definitely not an array");
    assert!(bridge::get_all(&h.ctx).is_empty());

    let created = bridge::create(&h.ctx, EntryDraft::new("Claude", "https://claude.ai")).unwrap();
    assert_eq!(bridge::get_all(&h.ctx), vec![created]);
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Claude"]);
}

#[test]
fn test_bad_record_is_skipped_and_crud_continues() {
    let h = TestHarness::new();
    h.write_raw(r#"[{"id":"1","label":"Good","website":"https://g.example"},null,{"label":7}]"#);
    h.ctx.refresh_menu_plan();

    assert_eq!(bridge::get_all(&h.ctx)[0], Entry::new("1", "Good", "https://g.example"));
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Good"]);

    bridge::create(&h.ctx, EntryDraft::new("New", "https://n.example")).unwrap();
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Good", "New"]);
}

// ============================================================================
// MENU REFRESH
// ============================================================================

#[test]
fn test_menu_follows_mutations() {
    let h = TestHarness::new();
    assert!(h.ctx.menu_plan().entry_labels().is_empty());

    let claude = bridge::create(&h.ctx, EntryDraft::new("Claude", "https://claude.ai")).unwrap();
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Claude"]);

    bridge::update(&h.ctx, Entry::new(claude.id.clone(), "Claude AI", "https://claude.ai")).unwrap();
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Claude AI"]);

    bridge::delete(&h.ctx, &claude.id);
    assert!(h.ctx.menu_plan().entry_labels().is_empty());
}

#[test]
fn test_menu_skips_entries_without_label() {
    let h = TestHarness::with_entries(&[Entry::new("1", "", "http://x")]);
    let plan = h.ctx.menu_plan();

    assert!(plan.entry_labels().is_empty());
    assert_eq!(plan.slots().len(), 4);
}

#[test]
fn test_menu_reflects_hand_edited_file_after_refresh() {
    let h = TestHarness::new();
    h.write_raw(r#"[{"id":"5","label":"Mistral","website":"https://chat.mistral.ai"}]"#);

    h.ctx.store.publish(app_lib::ChangeEvent::External);
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Mistral"]);
}

// ============================================================================
// WITH THE WATCHER RUNNING
// ============================================================================

#[test]
fn test_crud_round_trip_with_watcher_running() {
    let h = TestHarness::new();
    let settled = Arc::new(AtomicUsize::new(0));

    let store = Arc::clone(&h.ctx.store);
    let counter = Arc::clone(&settled);
    let _watcher = StorageWatcher::spawn(
        h.data_dir(),
        &h.ctx.config.entries_file,
        Arc::clone(&h.ctx.debouncer),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
            store.publish(ChangeEvent::External);
        },
    )
    .expect("start watcher");

    let a = bridge::create(&h.ctx, EntryDraft::new("Claude", "https://claude.ai")).unwrap();
    let b = bridge::create(&h.ctx, EntryDraft::new("Gemini", "https://gemini.google.com")).unwrap();
    let b2 = Entry::new(b.id.clone(), "Gemini Pro", "https://gemini.google.com/app");
    assert_eq!(bridge::update(&h.ctx, b2.clone()), Some(b2.clone()));
    assert!(bridge::delete(&h.ctx, &a.id));
    let c = bridge::create(&h.ctx, EntryDraft::new("Mistral", "https://chat.mistral.ai")).unwrap();

    // Our own writes are seen by the watcher; wait for the burst to settle.
    let deadline = Instant::now() + Duration::from_secs(3);
    while settled.load(Ordering::SeqCst) == 0 && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(20));
    }
    thread::sleep(h.ctx.debouncer.window() * 3);

    assert!(settled.load(Ordering::SeqCst) >= 1);
    assert_eq!(bridge::get_all(&h.ctx), vec![b2, c]);
    assert_eq!(h.ctx.menu_plan().entry_labels(), vec!["Gemini Pro", "Mistral"]);
}
