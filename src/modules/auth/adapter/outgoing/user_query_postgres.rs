use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserQueryError> {
        model
            .into_domain()
            .map_err(UserQueryError::SerializationError)
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::to_domain).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(UserColumn::Email)))
                    .eq(email.trim().to_lowercase()),
            )
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        user.map(Self::to_domain).transpose()
    }

    async fn find_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<User>, UserQueryError> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let users = UserEntity::find()
            .filter(UserColumn::Id.is_in(user_ids.iter().copied()))
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        users.into_iter().map(Self::to_domain).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    fn user_model(id: Uuid) -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id,
            name: "Abebe".to_string(),
            email: "abebe@example.com".to_string(),
            phone: "0911000000".to_string(),
            password_hash: "hashed".to_string(),
            region: "addis_ababa".to_string(),
            language: "amharic".to_string(),
            role: "user".to_string(),
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn find_by_id_maps_enums() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(id)]])
            .into_connection();

        let user = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.region.as_str(), "addis_ababa");
        assert!(!user.role.is_admin());
    }

    #[tokio::test]
    async fn find_by_id_returns_none_when_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_id(Uuid::new_v4())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn corrupt_role_is_a_serialization_error() {
        let id = Uuid::new_v4();
        let mut model = user_model(id);
        model.role = "superuser".to_string();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db)).find_by_id(id).await;

        assert!(matches!(result, Err(UserQueryError::SerializationError(_))));
    }

    #[tokio::test]
    async fn find_by_email_propagates_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let result = UserQueryPostgres::new(Arc::new(db))
            .find_by_email("Abebe@Example.com")
            .await;

        assert!(matches!(
            result,
            Err(UserQueryError::DatabaseError(msg)) if msg.contains("connection timeout")
        ));
    }

    #[tokio::test]
    async fn find_by_ids_skips_query_for_empty_input() {
        // No results queued: any query would fail
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let users = UserQueryPostgres::new(Arc::new(db))
            .find_by_ids(&[])
            .await
            .unwrap();

        assert!(users.is_empty());
    }
}
