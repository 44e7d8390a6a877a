//! Booking fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, Utc};
use entity::booking;

/// Default level for booking fixtures.
pub const DEFAULT_LEVEL: i32 = 9;

/// Default slot start hour for booking fixtures.
pub const DEFAULT_SLOT: i32 = 14;

/// Default status for booking fixtures.
pub const DEFAULT_STATUS: &str = "active";

/// Creates a booking entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - user_id: `1`
/// - level: `9`
/// - date: `2030-01-15`
/// - slot: `14`
/// - note: `Some("Study session")`
/// - status: `"active"`
pub fn entity() -> booking::Model {
    entity_builder().build()
}

/// Creates a booking entity builder for customization.
pub fn entity_builder() -> BookingEntityBuilder {
    BookingEntityBuilder::default()
}

/// Builder for creating customized booking entity models.
pub struct BookingEntityBuilder {
    id: i32,
    user_id: i32,
    level: i32,
    date: NaiveDate,
    slot: i32,
    note: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl Default for BookingEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            user_id: 1,
            level: DEFAULT_LEVEL,
            date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap_or_default(),
            slot: DEFAULT_SLOT,
            note: Some("Study session".to_string()),
            status: DEFAULT_STATUS.to_string(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl BookingEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn slot(mut self, slot: i32) -> Self {
        self.slot = slot;
        self
    }

    pub fn note(mut self, note: Option<&str>) -> Self {
        self.note = note.map(str::to_string);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds the booking entity model.
    pub fn build(self) -> booking::Model {
        booking::Model {
            id: self.id,
            user_id: self.user_id,
            level: self.level,
            date: self.date,
            slot: self.slot,
            note: self.note,
            status: self.status,
            created_at: self.created_at,
        }
    }
}
