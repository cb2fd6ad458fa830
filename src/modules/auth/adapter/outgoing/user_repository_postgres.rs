use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity, Model as UserModel,
};
use crate::modules::auth::application::domain::entities::User;
use crate::modules::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: UserModel) -> Result<User, UserRepositoryError> {
        model
            .into_domain()
            .map_err(UserRepositoryError::SerializationError)
    }

    /// Runs a single `UPDATE ... RETURNING` on one user row.
    async fn update_returning(
        &self,
        user_id: Uuid,
        mut model: UserActiveModel,
    ) -> Result<User, UserRepositoryError> {
        // update_many skips ActiveModelBehavior, so stamp the row here
        model.updated_at = Set(Utc::now().fixed_offset());

        let rows = UserEntity::update_many()
            .set(model)
            .filter(UserColumn::Id.eq(user_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = rows
            .into_iter()
            .next()
            .ok_or(UserRepositoryError::UserNotFound)?;

        Self::to_domain(row)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active_user = UserActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            password_hash: Set(data.password_hash),
            region: Set(data.region.as_str().to_string()),
            language: Set(data.language.as_str().to_string()),
            role: Set(data.role.as_str().to_string()),
            is_verified: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(map_unique_violation)?;

        Self::to_domain(inserted)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError> {
        if data.is_empty() {
            let user = UserEntity::find_by_id(user_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(UserRepositoryError::UserNotFound)?;
            return Self::to_domain(user);
        }

        let mut model = <UserActiveModel as Default>::default();
        if let Some(name) = data.name {
            model.name = Set(name);
        }
        if let Some(phone) = data.phone {
            model.phone = Set(phone);
        }
        if let Some(region) = data.region {
            model.region = Set(region.as_str().to_string());
        }
        if let Some(language) = data.language {
            model.language = Set(language.as_str().to_string());
        }

        self.update_returning(user_id, model).await
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let model = UserActiveModel {
            password_hash: Set(new_password_hash),
            ..Default::default()
        };

        self.update_returning(user_id, model).await.map(|_| ())
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<User, UserRepositoryError> {
        let model = UserActiveModel {
            is_verified: Set(true),
            ..Default::default()
        };

        self.update_returning(user_id, model).await
    }
}

fn map_unique_violation(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();
    if msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
    {
        UserRepositoryError::UserAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}
