use super::*;

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::new().get(), None);
}

#[test]
fn memory_store_set_then_clear() {
    let store = MemoryTokenStore::new();
    store.set("abc");
    assert_eq!(store.get().as_deref(), Some("abc"));
    store.set("def");
    assert_eq!(store.get().as_deref(), Some("def"));
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_with_token_is_seeded() {
    let store = MemoryTokenStore::with_token("seed");
    assert_eq!(store.get().as_deref(), Some("seed"));
}

#[test]
fn auth_token_key_matches_browser_storage_key() {
    assert_eq!(AUTH_TOKEN_KEY, "auth_token");
}
