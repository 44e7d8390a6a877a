//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Users are
//! created lazily when they first book and looked up by their chat platform ID.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the booking service can run it inside a transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or refreshes the display name and handle of the user with the
    /// same platform ID. The row ID and creation time of an existing user are kept.
    ///
    /// # Arguments
    /// - `param` - Normalized platform ID, display name, and optional handle
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            platform_id: ActiveValue::Set(param.platform_id),
            display_name: ActiveValue::Set(param.display_name),
            username: ActiveValue::Set(param.username),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::PlatformId)
                .update_columns([
                    entity::user::Column::DisplayName,
                    entity::user::Column::Username,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their chat platform ID.
    ///
    /// # Arguments
    /// - `platform_id` - Normalized platform ID
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user has booked with that platform ID
    /// - `Err(DbErr)` - Database error during query
    #[cfg(test)]
    pub async fn find_by_platform_id(&self, platform_id: &str) -> Result<Option<User>, DbErr> {
        use sea_orm::{ColumnTrait, QueryFilter};

        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::PlatformId.eq(platform_id))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
