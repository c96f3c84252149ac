//! Registration store
//!
//! Owns the ordered registration collection: creation (validates the draft and
//! assigns identity), idempotent deletion, and read-only listing. The
//! collection is kept newest-first and the full list is persisted through the
//! injected blob store on every mutation. The in-memory collection is the
//! source of truth for the session; a failed write surfaces to the caller but
//! does not roll back the mutation.

use crate::error::{RegistroError, RegistroResult};
use crate::models::{Registration, RegistrationDraft, RegistrationId};
use crate::storage::{BlobStore, RegistrationRepository};

/// Port for the confirmation prompt that gates deletion
///
/// Injecting the prompt keeps deletion logic testable without a blocking UI
/// call.
pub trait ConfirmationPort {
    /// Present the prompt and return whether the user confirmed
    fn confirm(&self, prompt: &str) -> bool;
}

/// Service owning the registration collection
pub struct RegistrationService {
    records: Vec<Registration>,
    repository: RegistrationRepository,
}

impl RegistrationService {
    /// Create a service over the given blob store, loading any persisted data
    ///
    /// Absent or malformed persisted data yields an empty collection.
    pub fn new(store: Box<dyn BlobStore>) -> Self {
        let repository = RegistrationRepository::new(store);
        let records = repository.load();
        Self {
            records,
            repository,
        }
    }

    /// Create a new registration from a validated draft
    ///
    /// Assigns a fresh unique id, prepends the record (newest-first), and
    /// persists the updated collection. Fails with a validation error, leaving
    /// the collection unchanged, if any required field is blank or the amount
    /// is not positive.
    pub fn create(&mut self, draft: RegistrationDraft) -> RegistroResult<Registration> {
        draft
            .validate()
            .map_err(|e| RegistroError::Validation(e.to_string()))?;

        let registration = draft.into_registration(RegistrationId::new());
        self.records.insert(0, registration.clone());
        self.repository.save(&self.records)?;

        Ok(registration)
    }

    /// Delete the registration with the given id
    ///
    /// Returns `true` if a record was removed. Unknown ids are a no-op, not an
    /// error.
    pub fn delete(&mut self, id: &RegistrationId) -> RegistroResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);

        if self.records.len() == before {
            return Ok(false);
        }

        self.repository.save(&self.records)?;
        Ok(true)
    }

    /// Delete a registration after asking the confirmation port
    ///
    /// Returns `false` without touching the collection if the user declines.
    pub fn delete_confirmed(
        &mut self,
        id: &RegistrationId,
        confirmation: &dyn ConfirmationPort,
    ) -> RegistroResult<bool> {
        if !confirmation.confirm("Are you sure you want to delete this registration?") {
            return Ok(false);
        }
        self.delete(id)
    }

    /// Get the full collection, newest-first
    pub fn list(&self) -> &[Registration] {
        &self.records
    }

    /// Number of registrations in the collection
    pub fn count(&self) -> usize {
        self.records.len()
    }
}
