//! Booking factory for creating test booking entities.
//!
//! This module provides factory methods for creating booking entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{Days, Local, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id)
///     .level(11)
///     .slot(9)
///     .cancelled()
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    level: i32,
    date: NaiveDate,
    slot: i32,
    note: Option<String>,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - level: `9`
    /// - date: tomorrow (server local date)
    /// - slot: `id % 24` where id is auto-incremented
    /// - note: `None`
    /// - status: `"active"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Row ID of the owning user
    ///
    /// # Returns
    /// - `BookingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        let today = Local::now().date_naive();
        Self {
            db,
            user_id,
            level: 9,
            date: today.checked_add_days(Days::new(1)).unwrap_or(today),
            slot: (id % 24) as i32,
            note: None,
            status: "active".to_string(),
        }
    }

    /// Sets the floor level.
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets the booking date.
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    /// Sets the slot start hour (0..=23).
    pub fn slot(mut self, slot: i32) -> Self {
        self.slot = slot;
        self
    }

    /// Sets the free-text note.
    pub fn note(mut self, note: Option<&str>) -> Self {
        self.note = note.map(str::to_string);
        self
    }

    /// Marks the booking as cancelled.
    pub fn cancelled(mut self) -> Self {
        self.status = "cancelled".to_string();
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert, including unique index violations
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            level: ActiveValue::Set(self.level),
            date: ActiveValue::Set(self.date),
            slot: ActiveValue::Set(self.slot),
            note: ActiveValue::Set(self.note),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active booking with default values for the given user.
///
/// Shorthand for `BookingFactory::new(db, user_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id).build().await
}
