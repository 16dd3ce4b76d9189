use anyhow::Result;

pub mod memory;
pub mod sqlite;

/// String key-value storage the task store snapshots into.
///
/// Reads are infallible by contract: unreadable state is reported as
/// absent and the caller degrades to an empty collection.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
