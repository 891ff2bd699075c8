//! Client-local preference storage
//!
//! One small file per key under the platform data directory, so values
//! survive restarts of the app.

use crate::error::StorageError;
use std::{fs, path::PathBuf};

/// Namespaced key/value store for small string preferences
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    /// Store under the platform data directory
    pub fn new(namespace: &str) -> Self {
        let safe = sanitize_key(namespace);
        let dir = match dirs::data_local_dir() {
            Some(data_dir) => data_dir.join("reportdesk").join(safe),
            None => PathBuf::from("cache").join(safe),
        };
        Self { dir }
    }

    /// Store rooted at an explicit directory
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// Sanitize a key for filesystem use
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .take(64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("theme"), "theme");
        assert_eq!(sanitize_key("user:preferences"), "user_preferences");
        assert_eq!(sanitize_key("../escape"), "___escape");
    }
}
