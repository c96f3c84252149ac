//! Storage layer for Registro CLI
//!
//! Persistence goes through the `BlobStore` port: a key-less blob keyed by the
//! store's own location. The default implementation is a JSON file with atomic
//! writes; tests inject an in-memory store instead.

pub mod file_io;
pub mod registrations;

pub use registrations::RegistrationRepository;

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::RegistroResult;

/// Port for the durable blob the registration list is persisted to
pub trait BlobStore {
    /// Read the stored payload, `None` if nothing has been written yet
    fn read(&self) -> RegistroResult<Option<String>>;

    /// Replace the stored payload
    fn write(&self, payload: &str) -> RegistroResult<()>;
}

/// Blob store backed by a single file on disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a file store at the given path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Get the backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl BlobStore for JsonFileStore {
    fn read(&self) -> RegistroResult<Option<String>> {
        file_io::read_string_opt(&self.path)
    }

    fn write(&self, payload: &str) -> RegistroResult<()> {
        file_io::write_atomic(&self.path, payload)
    }
}

/// In-memory blob store, used as a test double for the persistence port
#[derive(Default)]
pub struct MemoryStore {
    payload: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a payload
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }
}

impl BlobStore for MemoryStore {
    fn read(&self) -> RegistroResult<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> RegistroResult<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("blob.json"));

        assert_eq!(store.read().unwrap(), None);

        store.write("[1,2,3]").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);

        store.write("payload").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), "payload");
    }
}
