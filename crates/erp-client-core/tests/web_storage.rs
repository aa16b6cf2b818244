//! Runs in a real browser to check the session survives in local storage.
//! From the folder "crates/erp-client-core" run one of the following
//! - `wasm-pack test --headless --firefox`
//! - `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use erp_client_core::{BrowserStore, KeyValueStore, SessionStore};
use erp_shared::{
    const_config::session::SESSION_STORAGE_KEY,
    session::Session,
    uac::{Department, Role},
};
use wasm_bindgen_test::wasm_bindgen_test;
use wasm_bindgen_test::wasm_bindgen_test_configure;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
    // Arrange
    let store = SessionStore::new(BrowserStore);
    let session = Session::new(
        "clerk-1".try_into().unwrap(),
        Role::Member(Department::Sales),
        "abc123".into(),
    );
    store.clear().unwrap();

    // Act
    store.save(&session).unwrap();

    // Assert - a second handle sees the same value
    assert_eq!(SessionStore::new(BrowserStore).load(), Some(session));

    store.clear().unwrap();
    store.clear().unwrap();
    assert_eq!(store.load(), None);
}

#[wasm_bindgen_test]
fn garbage_in_local_storage_is_logged_out() {
    BrowserStore
        .set(SESSION_STORAGE_KEY, "definitely not a session")
        .unwrap();

    let store = SessionStore::new(BrowserStore);

    assert_eq!(store.load(), None);
    store.clear().unwrap();
}
