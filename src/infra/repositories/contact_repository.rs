//! Contact storage accessor.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveValue::NotSet, DatabaseConnection, Set};

use super::base::{ReadRepository, WriteRepository};
use super::entities::contact::{ActiveModel, Entity as ContactEntity, Model};
use crate::domain::{Contact, NewContact};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage accessor for contact messages.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Store a new message and return it with its identity
    async fn create(&self, contact: NewContact) -> AppResult<Contact>;

    /// Every stored message, in identity order
    async fn list_all(&self) -> AppResult<Vec<Contact>>;
}

/// Relational implementation of ContactRepository
pub struct ContactStore {
    db: Arc<DatabaseConnection>,
}

impl ContactStore {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl ReadRepository<ContactEntity, Model> for ContactStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

impl WriteRepository<ContactEntity, Model, ActiveModel> for ContactStore {
    fn db(&self) -> &DatabaseConnection {
        &*self.db
    }
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn create(&self, contact: NewContact) -> AppResult<Contact> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(contact.name),
            email: Set(contact.email),
            phone: Set(contact.phone),
            message: Set(contact.message),
        };

        let model = self.insert(active_model).await?;
        tracing::debug!(id = model.id, "Contact message stored");

        Ok(Contact::from(model))
    }

    async fn list_all(&self) -> AppResult<Vec<Contact>> {
        let models = self.find_all().await?;
        Ok(models.into_iter().map(Contact::from).collect())
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

    #[tokio::test]
    async fn test_create_returns_stored_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![Model {
                id: 5,
                name: Some("Jane Doe".to_string()),
                email: Some("jane@x.com".to_string()),
                phone: Some("555-1000".to_string()),
                message: Some("Hello".to_string()),
            }]])
            .into_connection();
        let store = ContactStore::new(Arc::new(db));

        let new = NewContact {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@x.com".to_string()),
            phone: Some("555-1000".to_string()),
            message: Some("Hello".to_string()),
        };
        let created = store.create(new.clone()).await.unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.fields(), new);
    }

    #[tokio::test]
    async fn test_list_all_on_empty_table() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<Model>::new()])
            .into_connection();
        let store = ContactStore::new(Arc::new(db));

        assert!(store.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_fault_yields_no_partial_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"contact\" does not exist".to_string())])
            .into_connection();
        let store = ContactStore::new(Arc::new(db));

        assert!(matches!(store.list_all().await, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_list_all_orders_by_identity() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<Model>::new()])
                .into_connection(),
        );
        let store = ContactStore::new(Arc::clone(&db));

        store.list_all().await.unwrap();
        drop(store);

        let sql = executed_sql(db);
        assert_eq!(sql.len(), 1);
        assert!(sql[0].contains(r#"ORDER BY "contact"."id" ASC"#), "{}", sql[0]);
    }

    #[tokio::test]
    async fn test_insert_has_no_identity_column() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![Model {
                    id: 1,
                    name: None,
                    email: None,
                    phone: None,
                    message: Some("Hello".to_string()),
                }]])
                .into_connection(),
        );
        let store = ContactStore::new(Arc::clone(&db));

        store
            .create(NewContact {
                message: Some("Hello".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        drop(store);

        let sql = executed_sql(db);
        let (columns, _) = sql[0].split_once(" VALUES ").unwrap();
        assert!(columns.starts_with(r#"INSERT INTO "contact""#), "{}", sql[0]);
        assert!(!columns.contains(r#""id""#), "{}", sql[0]);
    }
}
