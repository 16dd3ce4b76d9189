use std::collections::HashMap;

use anyhow::Result;

use super::Storage;

#[derive(Default)]
pub struct InMemoryStorage {
    entries: HashMap<String, String>,
}

impl InMemoryStorage {
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.entries.insert(key.into(), value.into());
        storage
    }
}

impl Storage for InMemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
