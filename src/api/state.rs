//! Application state - explicit wiring of the record stores.

use std::sync::Arc;

use crate::infra::{
    AdmissionRepository, AdmissionStore, ContactRepository, ContactStore, Database,
    MemoryAdmissionStore, MemoryContactStore,
};

/// Shared state handed to every handler.
///
/// Handlers only see the storage accessors; the database handle is kept
/// for health reporting.
#[derive(Clone)]
pub struct AppState {
    /// Admission inquiry store
    pub admissions: Arc<dyn AdmissionRepository>,
    /// Contact message store
    pub contacts: Arc<dyn ContactRepository>,
    /// Backing database, `None` when running on in-memory stores
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create state from explicitly constructed stores.
    pub fn new(
        admissions: Arc<dyn AdmissionRepository>,
        contacts: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            admissions,
            contacts,
            database: None,
        }
    }

    /// Relational stores sharing one connection pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        Self {
            admissions: Arc::new(AdmissionStore::new(database.get_connection())),
            contacts: Arc::new(ContactStore::new(database.get_connection())),
            database: Some(database),
        }
    }

    /// Fresh, empty in-memory stores.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryAdmissionStore::new()),
            Arc::new(MemoryContactStore::new()),
        )
    }
}
