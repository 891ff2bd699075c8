//! Integration tests for preference storage and theme persistence

use reportdesk::ThemeMode;
use reportdesk::storage::PreferenceStore;
use reportdesk::theme::{THEME_KEY, load_theme, toggle_theme};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("reportdesk-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

mod storage_tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let dir = scratch_dir("set-get");
        let store = PreferenceStore::at(&dir);

        store.set("theme", "dark").expect("Failed to set preference");
        assert_eq!(store.get("theme"), Some("dark".to_string()));

        std::fs::remove_dir_all(dir).expect("Failed to clean up");
    }

    #[test]
    fn test_get_missing_key() {
        let store = PreferenceStore::at(scratch_dir("missing"));
        assert_eq!(store.get("nothing"), None);
    }

    #[test]
    fn test_value_survives_a_new_store() {
        let dir = scratch_dir("reopen");
        PreferenceStore::at(&dir)
            .set(THEME_KEY, "light")
            .expect("Failed to set");

        // a later session opens its own store over the same directory
        let reopened = PreferenceStore::at(&dir);
        assert_eq!(reopened.get(THEME_KEY), Some("light".to_string()));
        assert_eq!(load_theme(&reopened), ThemeMode::Light);

        std::fs::remove_dir_all(dir).expect("Failed to clean up");
    }

    #[test]
    fn test_keys_with_special_characters() {
        let dir = scratch_dir("special");
        let store = PreferenceStore::at(&dir);

        store.set("user:preferences:theme", "dark").expect("Failed to set");
        assert_eq!(store.get("user:preferences:theme"), Some("dark".to_string()));
        assert!(dir.join("user_preferences_theme.json").exists());

        std::fs::remove_dir_all(dir).expect("Failed to clean up");
    }
}

mod theme_tests {
    use super::*;

    #[test]
    fn test_missing_preference_loads_auto() {
        let store = PreferenceStore::at(scratch_dir("theme-default"));
        assert_eq!(load_theme(&store), ThemeMode::Auto);
    }

    #[test]
    fn test_unknown_preference_loads_auto() {
        let dir = scratch_dir("theme-unknown");
        let store = PreferenceStore::at(&dir);
        store.set(THEME_KEY, "sepia").expect("Failed to set");

        assert_eq!(load_theme(&store), ThemeMode::Auto);

        std::fs::remove_dir_all(dir).expect("Failed to clean up");
    }

    #[test]
    fn test_toggle_persists_and_never_writes_auto() {
        let dir = scratch_dir("theme-toggle");
        let store = PreferenceStore::at(&dir);

        let mut mode = load_theme(&store);
        for expected in [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Dark] {
            mode = toggle_theme(&store, mode);
            assert_eq!(mode, expected);
            let stored = store.get(THEME_KEY).expect("theme should be stored");
            assert_ne!(stored, "auto");
            assert_eq!(stored, expected.as_str());
            assert_eq!(load_theme(&store), expected);
        }

        std::fs::remove_dir_all(dir).expect("Failed to clean up");
    }

    #[test]
    fn test_toggle_survives_unwritable_store() {
        let dir = scratch_dir("theme-unwritable");
        std::fs::create_dir_all(dir.parent().expect("scratch dir has a parent"))
            .expect("Failed to create parent");
        // a file where the store directory should be
        std::fs::write(&dir, "not a directory").expect("Failed to create blocker");
        let store = PreferenceStore::at(&dir);

        assert_eq!(toggle_theme(&store, ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(load_theme(&store), ThemeMode::Auto);

        std::fs::remove_file(dir).expect("Failed to clean up");
    }
}
