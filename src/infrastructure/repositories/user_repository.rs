//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::with_timeout;
use crate::domain::{Credentials, DomainError, UserRepository, UserUpdate};
use crate::infrastructure::auth::verify_password;
use crate::models::user::{ActiveModel, Column, Entity as UserEntity};
use crate::models::User;

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<User, DomainError> {
        with_timeout(async {
            UserEntity::find_by_id(id)
                .one(&self.db)
                .await?
                .ok_or(DomainError::NotFound)
        })
        .await
    }

    async fn update_user(&self, update: UserUpdate) -> Result<(), DomainError> {
        with_timeout(async {
            // Scoped to the addressed row; an unknown id is NotFound.
            let existing = UserEntity::find_by_id(update.id)
                .one(&self.db)
                .await?
                .ok_or(DomainError::NotFound)?;

            let mut active: ActiveModel = existing.into();
            active.first_name = Set(update.first_name);
            active.last_name = Set(update.last_name);
            active.email = Set(update.email);
            active.access_level = Set(update.access_level);
            active.updated_at = Set(chrono::Utc::now().to_rfc3339());
            active.update(&self.db).await?;

            Ok(())
        })
        .await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<Credentials, DomainError> {
        with_timeout(async {
            let user = UserEntity::find()
                .filter(Column::Email.eq(email))
                .one(&self.db)
                .await?
                .ok_or(DomainError::NotFound)?;

            match verify_password(password, &user.password) {
                Ok(true) => Ok(Credentials {
                    id: user.id,
                    password_hash: user.password,
                }),
                Ok(false) => Err(DomainError::IncorrectPassword),
                Err(e) => Err(DomainError::Database(e)),
            }
        })
        .await
    }
}
