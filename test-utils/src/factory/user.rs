//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .platform_id("123456789")
///     .display_name("Gabriel")
///     .username(Some("gabe"))
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    platform_id: String,
    display_name: String,
    username: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - platform_id: `"{id}"` where id is auto-incremented
    /// - display_name: `"User {id}"`
    /// - username: `Some("user{id}")`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            platform_id: id.to_string(),
            display_name: format!("User {}", id),
            username: Some(format!("user{}", id)),
        }
    }

    /// Sets the chat platform ID for the user.
    pub fn platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = platform_id.into();
        self
    }

    /// Sets the display name for the user.
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Sets the handle for the user.
    pub fn username(mut self, username: Option<&str>) -> Self {
        self.username = username.map(str::to_string);
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::NotSet,
            platform_id: ActiveValue::Set(self.platform_id),
            display_name: ActiveValue::Set(self.display_name),
            username: ActiveValue::Set(self.username),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific platform ID.
///
/// Shorthand for `UserFactory::new(db).platform_id(platform_id).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user_with_id(&db, "123456789").await?;
/// ```
pub async fn create_user_with_id(
    db: &DatabaseConnection,
    platform_id: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).platform_id(platform_id).build().await
}
