//! Admission storage accessor.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};

use super::base::{ReadRepository, WriteRepository};
use super::entities::admission::{ActiveModel, Entity as AdmissionEntity, Model};
use crate::domain::{Admission, NewAdmission};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage accessor for admission inquiries.
///
/// Implementations own identity assignment: every `create` yields an
/// identity no earlier record of this type has, and never fails on
/// field content.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdmissionRepository: Send + Sync {
    /// Store a new inquiry and return it with its identity
    async fn create(&self, admission: NewAdmission) -> AppResult<Admission>;

    /// Every stored inquiry, in identity order
    async fn list_all(&self) -> AppResult<Vec<Admission>>;
}

/// Relational implementation of AdmissionRepository
pub struct AdmissionStore {
    db: Arc<DatabaseConnection>,
}

impl AdmissionStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl ReadRepository<AdmissionEntity, Model> for AdmissionStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

impl WriteRepository<AdmissionEntity, Model, ActiveModel> for AdmissionStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

#[async_trait]
impl AdmissionRepository for AdmissionStore {
    async fn create(&self, admission: NewAdmission) -> AppResult<Admission> {
        let active_model = ActiveModel {
            id: NotSet,
            full_name: Set(admission.full_name),
            class_applying: Set(admission.class_applying),
            email: Set(admission.email),
            phone: Set(admission.phone),
            address: Set(admission.address),
            message: Set(admission.message),
        };

        let model = self.insert(active_model).await?;
        tracing::debug!(id = model.id, "Admission inquiry stored");

        Ok(Admission::from(model))
    }

    async fn list_all(&self) -> AppResult<Vec<Admission>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(Admission::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::*;
    use crate::errors::AppError;

    /// SQL the store sent, once it has released the connection.
    fn executed_sql(db: Arc<DatabaseConnection>) -> Vec<String> {
        let connection = Arc::try_unwrap(db)
            .ok()
            .expect("store should have released the connection");

        connection
            .into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.sql.clone()))
            .collect()
    }

    fn row(id: i64, full_name: Option<&str>) -> Model {
        Model {
            id,
            full_name: full_name.map(str::to_string),
            class_applying: Some("Grade 5".to_string()),
            email: None,
            phone: None,
            address: None,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, Some("Jo Lee"))]])
            .into_connection();
        let store = AdmissionStore::new(Arc::new(db));

        let created = store
            .create(NewAdmission {
                full_name: Some("Jo Lee".to_string()),
                class_applying: Some("Grade 5".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.full_name.as_deref(), Some("Jo Lee"));
        assert_eq!(created.class_applying.as_deref(), Some("Grade 5"));
    }

    #[tokio::test]
    async fn test_list_all_maps_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(1, Some("A")), row(2, None)]])
            .into_connection();
        let store = AdmissionStore::new(Arc::new(db));

        let admissions = store.list_all().await.unwrap();

        assert_eq!(admissions.len(), 2);
        assert_eq!(admissions[0].id, 1);
        assert_eq!(admissions[1].id, 2);
        assert!(admissions[1].full_name.is_none());
    }

    #[tokio::test]
    async fn test_storage_fault_is_not_recovered() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let store = AdmissionStore::new(Arc::new(db));

        let result = store.create(NewAdmission::default()).await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_insert_leaves_identity_to_the_database() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![row(1, Some("Jo Lee"))]])
                .into_connection(),
        );
        let store = AdmissionStore::new(Arc::clone(&db));

        store
            .create(NewAdmission {
                full_name: Some("Jo Lee".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        drop(store);

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 1);

        let (columns, rest) = sql[0].split_once(" VALUES ").unwrap();
        assert!(columns.starts_with(r#"INSERT INTO "admission""#), "{}", sql[0]);
        assert!(columns.contains(r#""full_name""#), "{}", sql[0]);
        assert!(!columns.contains(r#""id""#), "{}", sql[0]);
        assert!(rest.contains("RETURNING"), "{}", sql[0]);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_identity() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<Model>::new()])
                .into_connection(),
        );
        let store = AdmissionStore::new(Arc::clone(&db));

        store.list_all().await.unwrap();
        drop(store);

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].contains(r#"ORDER BY "admission"."id" ASC"#), "{}", sql[0]);
    }
}
