//! End-to-end list/store scenarios against the in-memory store
//!
//! These exercise the same operation sequences the UI runs: refresh after
//! add, refresh after delete, and mixed flag data that must be filtered
//! rather than fail.

use flickuac::locale::{LabelTable, Language, REQUIRED_LABELS};
use flickuac::store::{LayerStore, MemoryLayerStore, RUN_AS_INVOKER};

#[test]
fn refresh_lists_exactly_the_flagged_values_in_store_order() {
    let mut store = MemoryLayerStore::new();
    store.insert_raw(r"C:\tools\first.exe", "RunAsInvoker");
    store.insert_raw(r"C:\tools\admin.exe", "~ RUNASADMIN");
    store.insert_raw(r"C:\tools\second.exe", "~ HIGHDPIAWARE RunAsInvoker");
    store.insert_raw(r"C:\tools\dpi.exe", "~ HIGHDPIAWARE");

    let listed: Vec<String> = store
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.path)
        .collect();

    assert_eq!(
        listed,
        vec![
            r"C:\tools\first.exe".to_string(),
            r"C:\tools\second.exe".to_string(),
        ]
    );
}

#[test]
fn empty_store_refresh_is_no_entries_not_an_error() {
    let store = MemoryLayerStore::new();
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn add_then_refresh_shows_the_path_once() {
    let mut store = MemoryLayerStore::new();
    store.set_invoker_flag(r"C:\apps\tool.exe").unwrap();

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].path, r"C:\apps\tool.exe");
    assert_eq!(entries[0].flags, RUN_AS_INVOKER);
}

#[test]
fn adding_an_existing_path_overwrites_without_duplication() {
    let mut store = MemoryLayerStore::new();
    store.insert_raw(r"C:\apps\tool.exe", "~ HIGHDPIAWARE");
    store.set_invoker_flag(r"C:\apps\tool.exe").unwrap();
    store.set_invoker_flag(r"C:\apps\tool.exe").unwrap();

    assert_eq!(store.len(), 1);
    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].flags, RUN_AS_INVOKER);
}

#[test]
fn deleting_removes_from_store_and_listing() {
    let mut store = MemoryLayerStore::new();
    store.set_invoker_flag(r"C:\apps\keep.exe").unwrap();
    store.set_invoker_flag(r"C:\apps\drop.exe").unwrap();

    store.remove(r"C:\apps\drop.exe").unwrap();

    let listed: Vec<String> = store
        .entries()
        .unwrap()
        .into_iter()
        .map(|e| e.path)
        .collect();
    assert_eq!(listed, vec![r"C:\apps\keep.exe".to_string()]);

    // A second delete of the same path is a no-op, not a failure
    store.remove(r"C:\apps\drop.exe").unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn superset_flag_data_still_qualifies() {
    let mut store = MemoryLayerStore::new();
    store.insert_raw(r"C:\apps\mixed.exe", "~ HIGHDPIAWARE RunAsInvoker WIN7RTM");

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].flags, "~ HIGHDPIAWARE RunAsInvoker WIN7RTM");
}

#[test]
fn unknown_language_identifiers_never_yield_an_empty_table() {
    for input in ["ko-KR", "Klingon", ""] {
        let table = LabelTable::load(Language::resolve(input)).unwrap();
        for key in REQUIRED_LABELS {
            assert!(!table.get(key).is_empty(), "{key} empty for {input:?}");
        }
    }
}
