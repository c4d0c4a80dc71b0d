//! In-memory record stores.
//!
//! Used by `serve --in-memory` and by tests. Each store owns its own
//! table; nothing is shared between the admission and contact slices.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{AdmissionRepository, ContactRepository};
use crate::domain::{Admission, Contact, NewAdmission, NewContact};
use crate::errors::AppResult;

/// Append-only table. Identities start at 1 and follow insertion order.
struct Table<R> {
    rows: RwLock<Vec<R>>,
}

impl<R: Clone> Table<R> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    async fn insert_with(&self, build: impl FnOnce(i64) -> R) -> R {
        // Rows are never removed, so the next identity is len + 1.
        let mut rows = self.rows.write().await;
        let record = build(rows.len() as i64 + 1);
        rows.push(record.clone());
        record
    }

    async fn snapshot(&self) -> Vec<R> {
        self.rows.read().await.clone()
    }
}

/// Admission inquiries kept in process memory
pub struct MemoryAdmissionStore {
    table: Table<Admission>,
}

impl MemoryAdmissionStore {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for MemoryAdmissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdmissionRepository for MemoryAdmissionStore {
    async fn create(&self, admission: NewAdmission) -> AppResult<Admission> {
        let stored = self
            .table
            .insert_with(|id| Admission::from_new(id, admission))
            .await;
        tracing::debug!(id = stored.id, "Admission inquiry stored in memory");
        Ok(stored)
    }

    async fn list_all(&self) -> AppResult<Vec<Admission>> {
        Ok(self.table.snapshot().await)
    }
}

/// Contact messages kept in process memory
pub struct MemoryContactStore {
    table: Table<Contact>,
}

impl MemoryContactStore {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }
}

impl Default for MemoryContactStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MemoryContactStore {
    async fn create(&self, contact: NewContact) -> AppResult<Contact> {
        let stored = self
            .table
            .insert_with(|id| Contact::from_new(id, contact))
            .await;
        tracing::debug!(id = stored.id, "Contact message stored in memory");
        Ok(stored)
    }

    async fn list_all(&self) -> AppResult<Vec<Contact>> {
        Ok(self.table.snapshot().await)
    }
}
