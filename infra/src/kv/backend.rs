//! The untrusted key/value backend the encrypted store wraps (spec §4.1).

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use ns_core::errors::DomainError;

/// Raw byte storage, with no knowledge of encryption or entity shape.
/// Implementations may be swapped for a real datastore without touching
/// `EncryptedKvStore` or any repository.
#[async_trait]
pub trait KvBackend: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError>;

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError>;

    async fn delete(&self, key: &str) -> Result<(), DomainError>;

    /// All entries whose key starts with `prefix`. Repositories use this for
    /// the secondary lookups and listings spec §6 groups under one stable
    /// key per entity map (e.g. scanning `auth:users:` to find a user by
    /// email).
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, DomainError>;
}

/// A process-local backend. Data does not survive a restart; this is the
/// reference backend for development and the test suite (spec §9: services
/// receive their collaborators at construction, no ambient process-wide
/// singleton).
#[derive(Default)]
pub struct InMemoryKvBackend {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryKvBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvBackend for InMemoryKvBackend {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, DomainError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), DomainError> {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), DomainError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<(String, Vec<u8>)>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
