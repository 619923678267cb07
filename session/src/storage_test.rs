use super::*;

#[test]
fn load_token_reads_token_key() {
    let storage = MemoryStorage::with_item("token", "T0");
    assert_eq!(load_token(&storage), Some(BearerToken::new("T0")));
}

#[test]
fn load_token_ignores_blank_values() {
    assert_eq!(load_token(&MemoryStorage::default()), None);
    assert_eq!(load_token(&MemoryStorage::with_item("token", "   ")), None);
}

#[test]
fn persist_then_forget_round_trips_through_key() {
    let storage = MemoryStorage::default();
    persist_token(&storage, &BearerToken::new("T1")).expect("persist");
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T1"));

    forget_token(&storage).expect("forget");
    assert_eq!(storage.get_item(TOKEN_KEY), None);
}

#[test]
fn clones_share_the_same_items() {
    let storage = MemoryStorage::default();
    let other = storage.clone();
    storage.set_item("k", "v").expect("set");
    assert_eq!(other.get_item("k").as_deref(), Some("v"));
}
