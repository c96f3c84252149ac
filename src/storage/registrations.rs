//! Registration persistence over the blob port
//!
//! Serializes the full registration list on every mutation and tolerates
//! absent or malformed data on load by falling back to an empty list, so a
//! corrupted file can never prevent the application from starting.

use crate::error::RegistroResult;
use crate::models::Registration;

use super::BlobStore;

/// Repository mapping the registration list onto a blob store
pub struct RegistrationRepository {
    store: Box<dyn BlobStore>,
}

impl RegistrationRepository {
    /// Create a repository over the given blob store
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        Self { store }
    }

    /// Load the persisted registration list
    ///
    /// Absent, unreadable, or malformed data yields an empty list.
    pub fn load(&self) -> Vec<Registration> {
        match self.store.read() {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Persist the full registration list
    pub fn save(&self, registrations: &[Registration]) -> RegistroResult<()> {
        let payload = serde_json::to_string_pretty(registrations)?;
        self.store.write(&payload)
    }
}
