//! Booking service for business logic.
//!
//! This module provides the `BookingService`, which turns validated booking parameters
//! into repository calls. It owns the rules that need more than one row to decide: the
//! past-date check, the transaction around user upsert and slot inserts, mapping unique
//! index violations to `SlotTaken`, and the admin override on cancellation.

use chrono::{Local, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, user::UserRepository},
    error::{booking::BookingError, AppError},
    model::booking::{
        Availability, Booking, BookingWithOwner, CancelBookingParam, CreateBookingParam, Level,
        UpcomingWindow,
    },
    service::admin::AdminService,
    util::parse::normalize_platform_id,
};

/// Service providing business logic for lounge bookings.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
    pub admins: &'a AdminService,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admins` - Allow-list consulted when cancelling
    ///
    /// # Returns
    /// - `BookingService` - New service instance
    pub fn new(db: &'a DatabaseConnection, admins: &'a AdminService) -> Self {
        Self { db, admins }
    }

    /// Gets slot occupancy for one floor on one date.
    ///
    /// Past dates may be queried.
    ///
    /// # Arguments
    /// - `level` - Floor level
    /// - `date` - Date to inspect
    ///
    /// # Returns
    /// - `Ok(Availability)` - Active bookings with owners for the date
    /// - `Err(AppError::DbErr)` - Database error during query
    /// - `Err(AppError::InternalErr)` - Stored booking data could not be converted
    pub async fn get_availability(
        &self,
        level: Level,
        date: NaiveDate,
    ) -> Result<Availability, AppError> {
        let repo = BookingRepository::new(self.db);

        let booked = repo
            .get_active_with_owner_by_date(level.value(), date)
            .await?
            .into_iter()
            .map(|(booking, owner)| BookingWithOwner::from_entity(booking, owner))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Availability {
            date,
            level,
            booked,
        })
    }

    /// Reserves every requested slot or none of them.
    ///
    /// Upserts the booking user and inserts one booking per slot inside a single
    /// transaction. When any slot is already taken the insert hits the active booking
    /// index and the transaction is rolled back, leaving neither bookings nor a new user.
    ///
    /// # Arguments
    /// - `param` - Validated booking request
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Created bookings ordered by slot
    /// - `Err(AppError::BookingErr(PastDate))` - Date lies before today
    /// - `Err(AppError::BookingErr(SlotTaken))` - At least one slot already held
    /// - `Err(AppError::DbErr)` - Any other database error
    pub async fn create(&self, param: CreateBookingParam) -> Result<Vec<Booking>, AppError> {
        self.create_for_day(param, today()).await
    }

    /// Same as [`create`](Self::create) with an explicit notion of "today".
    pub async fn create_for_day(
        &self,
        param: CreateBookingParam,
        today: NaiveDate,
    ) -> Result<Vec<Booking>, AppError> {
        if param.date < today {
            return Err(BookingError::PastDate.into());
        }

        let txn = self.db.begin().await?;

        let user = UserRepository::new(&txn).upsert(param.user.clone()).await?;

        let created = match BookingRepository::new(&txn)
            .create_many(user.id, &param)
            .await
        {
            Ok(created) => created,
            Err(err) if is_unique_violation(&err) => {
                txn.rollback().await?;
                tracing::debug!(
                    "Booking conflict for user {} on level {} at {}",
                    user.platform_id,
                    param.level.value(),
                    param.date
                );
                return Err(BookingError::SlotTaken.into());
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!(
            "User {} booked {} slot(s) on level {} for {}",
            user.platform_id,
            created.len(),
            param.level.value(),
            param.date
        );

        created.into_iter().map(Booking::from_entity).collect()
    }

    /// Gets every active booking held by a user.
    ///
    /// # Arguments
    /// - `platform_id` - Platform ID of the user, normalized before lookup
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Active bookings ordered by date then slot (empty for unknown users)
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user_bookings(&self, platform_id: &str) -> Result<Vec<Booking>, AppError> {
        let platform_id = normalize_platform_id(platform_id);
        if platform_id.is_empty() {
            return Ok(Vec::new());
        }

        BookingRepository::new(self.db)
            .get_active_by_platform_id(&platform_id)
            .await?
            .into_iter()
            .map(Booking::from_entity)
            .collect()
    }

    /// Gets active bookings on a floor from today through Sunday of next week.
    ///
    /// # Arguments
    /// - `level` - Floor level
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithOwner>)` - Bookings ordered by date then slot
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_upcoming(&self, level: Level) -> Result<Vec<BookingWithOwner>, AppError> {
        self.get_upcoming_for_day(level, today()).await
    }

    /// Same as [`get_upcoming`](Self::get_upcoming) with an explicit notion of "today".
    pub async fn get_upcoming_for_day(
        &self,
        level: Level,
        today: NaiveDate,
    ) -> Result<Vec<BookingWithOwner>, AppError> {
        let window = UpcomingWindow::from_today(today);

        BookingRepository::new(self.db)
            .get_active_with_owner_between(level.value(), window.start, window.end)
            .await?
            .into_iter()
            .map(|(booking, owner)| BookingWithOwner::from_entity(booking, owner))
            .collect()
    }

    /// Cancels a booking on behalf of a user.
    ///
    /// Administrators may cancel any active booking; everyone else only their own.
    ///
    /// # Arguments
    /// - `param` - Booking ID and normalized requester platform ID
    ///
    /// # Returns
    /// - `Ok(())` - Booking cancelled
    /// - `Err(AppError::BookingErr(NotFoundOrUnauthorized))` - Booking missing, already
    ///   cancelled, or held by someone else
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn cancel(&self, param: CancelBookingParam) -> Result<(), AppError> {
        let is_admin = self.admins.is_admin(&param.requester);
        let owner = (!is_admin).then_some(param.requester.as_str());

        let cancelled = BookingRepository::new(self.db)
            .cancel(param.booking_id, owner)
            .await?;

        if !cancelled {
            return Err(BookingError::NotFoundOrUnauthorized.into());
        }

        tracing::info!(
            "Booking {} cancelled by {}{}",
            param.booking_id,
            param.requester,
            if is_admin { " (admin)" } else { "" }
        );

        Ok(())
    }
}

/// Server local date used for the past-date rule and the upcoming window.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
