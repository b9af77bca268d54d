use lawha_core::settings::{
    load_settings, reset_settings, save_settings, FileStore, MemoryStore, Settings, SettingsStore,
    SETTINGS_KEY,
};
use pretty_assertions::assert_eq;

#[test]
fn load_from_empty_store_yields_defaults() {
    let store = MemoryStore::new();
    assert_eq!(load_settings(&store), Settings::default());
}

#[test]
fn save_then_load_round_trips() {
    let mut store = MemoryStore::new();
    let mut settings = Settings::default();
    settings.behavior.hide_on_word_complete = true;
    settings.data.max_history_items = 7;
    save_settings(&mut store, &settings).unwrap();
    assert_eq!(load_settings(&store), settings);
}

#[test]
fn corrupted_blob_loads_as_defaults() {
    let mut store = MemoryStore::new();
    store.set(SETTINGS_KEY, "{\"theme\": [1,2,").unwrap();
    assert_eq!(load_settings(&store), Settings::default());
}

#[test]
fn partially_corrupted_blob_recovers_the_good_half() {
    let mut store = MemoryStore::new();
    store
        .set(
            SETTINGS_KEY,
            r#"{"behavior": {"stickyKeys": true}, "unknownJunk": 42}"#,
        )
        .unwrap();
    let settings = load_settings(&store);
    assert!(settings.behavior.sticky_keys);
    assert_eq!(settings.sound, Settings::default().sound);
}

#[test]
fn reset_removes_the_blob() {
    let mut store = MemoryStore::new();
    let mut settings = Settings::default();
    settings.behavior.sticky_keys = true;
    save_settings(&mut store, &settings).unwrap();

    let defaults = reset_settings(&mut store).unwrap();
    assert_eq!(defaults, Settings::default());
    assert_eq!(store.get(SETTINGS_KEY).unwrap(), None);
    assert_eq!(load_settings(&store), Settings::default());
}

#[test]
fn file_store_round_trips_on_disk() {
    let root = std::env::temp_dir().join(format!("lawha-store-test-{}", std::process::id()));
    let mut store = FileStore::with_root(root.clone()).unwrap();

    let mut settings = Settings::default();
    settings.sound.master_volume = 12;
    save_settings(&mut store, &settings).unwrap();
    assert_eq!(load_settings(&store), settings);

    store.remove(SETTINGS_KEY).unwrap();
    assert_eq!(store.get(SETTINGS_KEY).unwrap(), None);

    std::fs::remove_dir_all(root).unwrap();
}
