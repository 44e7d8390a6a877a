//! Booking data repository for database operations.
//!
//! This module provides the `BookingRepository` for reserving, listing, and cancelling
//! bookings. The partial unique index over active `(level, date, slot)` triples is the
//! only guard against double booking; inserts that violate it fail with a `DbErr` the
//! service maps to a conflict.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::{Expr, Query},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

use crate::server::model::booking::{BookingStatus, CreateBookingParam};

/// Repository providing database operations for bookings.
///
/// Generic over the connection so inserts can share a transaction with the user upsert.
pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts one active booking per requested slot in a single statement.
    ///
    /// All rows share the user, level, date and note. If any slot is already held by an
    /// active booking the whole statement fails and nothing is inserted.
    ///
    /// # Arguments
    /// - `user_id` - Row ID of the booking user
    /// - `param` - Validated booking request
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Created bookings ordered by slot
    /// - `Err(DbErr)` - Database error, including unique constraint violations
    pub async fn create_many(
        &self,
        user_id: i32,
        param: &CreateBookingParam,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        if param.slots.is_empty() {
            return Ok(Vec::new());
        }

        let created_at = Utc::now();
        let rows = param.slots.iter().map(|slot| entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            level: ActiveValue::Set(param.level.value()),
            date: ActiveValue::Set(param.date),
            slot: ActiveValue::Set(slot.hour()),
            note: ActiveValue::Set(param.note.clone()),
            status: ActiveValue::Set(BookingStatus::Active.as_str().to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        });

        entity::prelude::Booking::insert_many(rows)
            .exec(self.db)
            .await?;

        let hours: Vec<i32> = param.slots.iter().map(|slot| slot.hour()).collect();

        entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .filter(entity::booking::Column::Level.eq(param.level.value()))
            .filter(entity::booking::Column::Date.eq(param.date))
            .filter(entity::booking::Column::Slot.is_in(hours))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .order_by_asc(entity::booking::Column::Slot)
            .all(self.db)
            .await
    }

    /// Gets active bookings on a floor for one date along with their owners.
    ///
    /// # Arguments
    /// - `level` - Floor level
    /// - `date` - Booking date
    ///
    /// # Returns
    /// - `Ok(Vec<(booking, Option<user>)>)` - Active bookings ordered by slot
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_with_owner_by_date(
        &self,
        level: i32,
        date: NaiveDate,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::booking::Column::Level.eq(level))
            .filter(entity::booking::Column::Date.eq(date))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .order_by_asc(entity::booking::Column::Slot)
            .all(self.db)
            .await
    }

    /// Gets active bookings on a floor within an inclusive date range along with their owners.
    ///
    /// # Arguments
    /// - `level` - Floor level
    /// - `start` - First date of the range
    /// - `end` - Last date of the range
    ///
    /// # Returns
    /// - `Ok(Vec<(booking, Option<user>)>)` - Active bookings ordered by date then slot
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_with_owner_between(
        &self,
        level: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::user::Model>)>, DbErr> {
        entity::prelude::Booking::find()
            .find_also_related(entity::prelude::User)
            .filter(entity::booking::Column::Level.eq(level))
            .filter(entity::booking::Column::Date.between(start, end))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .order_by_asc(entity::booking::Column::Date)
            .order_by_asc(entity::booking::Column::Slot)
            .all(self.db)
            .await
    }

    /// Gets all active bookings held by a user across every floor.
    ///
    /// # Arguments
    /// - `platform_id` - Normalized platform ID of the user
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Active bookings ordered by date then slot (empty for unknown users)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_by_platform_id(
        &self,
        platform_id: &str,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::booking::Relation::User.def(),
            )
            .filter(entity::user::Column::PlatformId.eq(platform_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()))
            .order_by_asc(entity::booking::Column::Date)
            .order_by_asc(entity::booking::Column::Slot)
            .all(self.db)
            .await
    }

    /// Soft-cancels an active booking.
    ///
    /// When `owner` is given the update only matches a booking held by the user with that
    /// platform ID; without it any active booking matches.
    ///
    /// # Arguments
    /// - `id` - Booking ID
    /// - `owner` - Platform ID the booking must belong to, `None` to skip the ownership check
    ///
    /// # Returns
    /// - `Ok(true)` - Booking cancelled
    /// - `Ok(false)` - No active booking matched (missing, already cancelled, or not owned)
    /// - `Err(DbErr)` - Database error during update
    pub async fn cancel(&self, id: i32, owner: Option<&str>) -> Result<bool, DbErr> {
        let mut update = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled.as_str()),
            )
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Active.as_str()));

        if let Some(owner) = owner {
            update = update.filter(
                entity::booking::Column::UserId.in_subquery(
                    Query::select()
                        .column(entity::user::Column::Id)
                        .from(entity::prelude::User)
                        .and_where(entity::user::Column::PlatformId.eq(owner))
                        .to_owned(),
                ),
            );
        }

        let result = update.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
