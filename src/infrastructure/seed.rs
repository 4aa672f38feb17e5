//! Demo data seeding for local development

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use crate::infrastructure::auth::hash_password;
use crate::models::user;

const DEMO_ADMIN_EMAIL: &str = "owner@example.com";

/// Create the demo owner account unless one already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let existing = user::Entity::find()
        .filter(user::Column::Email.eq(DEMO_ADMIN_EMAIL))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();
    let hash = hash_password("password").map_err(DbErr::Custom)?;

    user::ActiveModel {
        first_name: Set("Site".to_string()),
        last_name: Set("Owner".to_string()),
        email: Set(DEMO_ADMIN_EMAIL.to_string()),
        password: Set(hash),
        access_level: Set(3),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("demo owner account seeded ({})", DEMO_ADMIN_EMAIL);
    Ok(())
}
