use super::*;

// =============================================================
// Token presence
// =============================================================

#[test]
fn empty_store_is_unauthenticated() {
    let session = Session::new(MemoryStore::default());
    assert_eq!(session.token(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn empty_string_token_counts_as_absent() {
    let session = Session::new(MemoryStore::with_value(""));
    assert!(!session.is_authenticated());
}

#[test]
fn any_non_empty_token_authenticates() {
    let session = Session::new(MemoryStore::with_value("QpwL5tke4Pnpja7X4"));
    assert_eq!(session.token().as_deref(), Some("QpwL5tke4Pnpja7X4"));
    assert!(session.is_authenticated());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn sign_in_then_sign_out() {
    let store = MemoryStore::default();
    let session = Session::new(store.clone());
    session.sign_in("tok");
    assert_eq!(store.read().as_deref(), Some("tok"));
    session.sign_out();
    assert_eq!(store.read(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn sign_in_ignores_empty_token() {
    let store = MemoryStore::with_value("old");
    let session = Session::new(store.clone());
    session.sign_in("");
    assert_eq!(store.read().as_deref(), Some("old"));
}

#[test]
fn reads_are_not_cached() {
    let store = MemoryStore::default();
    let session = Session::new(store.clone());
    assert!(!session.is_authenticated());
    store.write("set-elsewhere");
    assert!(session.is_authenticated());
}

#[test]
fn browser_session_outside_wasm_is_empty() {
    assert!(!Session::browser().is_authenticated());
}

#[test]
fn debug_output_hides_token() {
    let session = Session::new(MemoryStore::with_value("secret"));
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret"));
    assert!(rendered.contains("authenticated: true"));
}
