//! Booking domain models and parameters.
//!
//! Provides the typed building blocks of the reservation space: floor levels, hourly
//! slots and booking status, plus the domain models returned by the booking repository
//! and the parameter types accepted by the booking service. Raw request values are
//! validated here so the service only ever sees well-formed levels, dates and slots.

use std::{collections::BTreeSet, fmt};

use chrono::{Datelike, Days, NaiveDate};

use crate::{
    model::{
        booking::{
            AvailabilityDto, BookedSlotDto, BookingDto, CreateBookingDto, UpcomingBookingDto,
        },
        user::BookingUserDto,
    },
    server::{
        error::{booking::BookingError, internal::InternalError, AppError},
        model::user::{UpsertUserParam, User},
        util::parse::{normalize_platform_id, parse_booking_date},
    },
};

/// Floor level partitioning the booking space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(i32);

impl Level {
    /// Bookable floors.
    pub const ALL: [i32; 3] = [9, 10, 11];

    /// Floor used when a request doesn't name one.
    pub const DEFAULT: Level = Level(9);

    /// Validates a raw level value.
    ///
    /// # Returns
    /// - `Ok(Level)` - Value is one of the bookable floors
    /// - `Err(BookingError::InvalidLevel)` - Any other value
    pub fn new(value: i32) -> Result<Self, BookingError> {
        if Self::ALL.contains(&value) {
            Ok(Self(value))
        } else {
            Err(BookingError::InvalidLevel(value.to_string()))
        }
    }

    /// Validates a level given as text, such as a path segment or query value.
    ///
    /// # Returns
    /// - `Ok(Level)` - Text is a bookable floor number
    /// - `Err(BookingError::InvalidLevel)` - Not a number, or not a bookable floor
    pub fn parse(value: &str) -> Result<Self, BookingError> {
        value
            .trim()
            .parse::<i32>()
            .map_err(|_| BookingError::InvalidLevel(value.to_string()))
            .and_then(Self::new)
    }

    pub fn value(self) -> i32 {
        self.0
    }
}

/// One-hour slot identified by its start hour (0..=23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slot(u8);

impl Slot {
    /// Number of slots in a day.
    pub const PER_DAY: u8 = 24;

    /// Creates a slot from a start hour, returning `None` outside 0..=23.
    pub fn from_hour(hour: i32) -> Option<Self> {
        u8::try_from(hour)
            .ok()
            .filter(|hour| *hour < Self::PER_DAY)
            .map(Self)
    }

    /// Parses a slot label of the form `HH:00`.
    ///
    /// # Arguments
    /// - `value` - Slot label such as `"09:00"` or `"23:00"`
    ///
    /// # Returns
    /// - `Ok(Slot)` - Label names one of the 24 hourly slots
    /// - `Err(BookingError::InvalidSlot)` - Wrong shape, minutes other than `00`, or hour out of range
    pub fn parse(value: &str) -> Result<Self, BookingError> {
        let invalid = || BookingError::InvalidSlot(value.to_string());

        let (hour, minutes) = value.split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minutes != "00" || !hour.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        hour.parse::<i32>()
            .ok()
            .and_then(Self::from_hour)
            .ok_or_else(invalid)
    }

    /// All slots of a day in chronological order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..Self::PER_DAY).map(Self)
    }

    pub fn hour(self) -> i32 {
        i32::from(self.0)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

/// Lifecycle state of a booking. Bookings are never deleted, only cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Active,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A reserved slot on a floor for a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    /// Row ID of the owning user.
    pub user_id: i32,
    pub level: Level,
    pub date: NaiveDate,
    pub slot: Slot,
    pub note: Option<String>,
    pub status: BookingStatus,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking domain model
    /// - `Err(AppError::InternalErr)` - Stored level, slot, or status is outside the
    ///   values the service writes
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let level = Level::new(entity.level).map_err(|_| InternalError::InvalidStoredLevel {
            booking_id: entity.id,
            level: entity.level,
        })?;

        let slot = Slot::from_hour(entity.slot).ok_or(InternalError::InvalidStoredSlot {
            booking_id: entity.id,
            slot: entity.slot,
        })?;

        let status = BookingStatus::from_stored(&entity.status).ok_or_else(|| {
            InternalError::InvalidStoredStatus {
                booking_id: entity.id,
                status: entity.status.clone(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            level,
            date: entity.date,
            slot,
            note: entity.note,
            status,
        })
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            level: self.level.value(),
            date: self.date,
            slot: self.slot.to_string(),
            note: self.note,
            status: self.status.as_str().to_string(),
        }
    }
}

/// Booking loaded together with the user who holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithOwner {
    pub booking: Booking,
    pub owner: User,
}

impl BookingWithOwner {
    /// Converts an entity pair loaded through the user relation.
    ///
    /// # Returns
    /// - `Ok(BookingWithOwner)` - Booking with its owner
    /// - `Err(AppError::InternalErr(MissingBookingOwner))` - The owner row was absent
    /// - `Err(AppError::InternalErr)` - Invalid stored booking data
    pub fn from_entity(
        booking: entity::booking::Model,
        owner: Option<entity::user::Model>,
    ) -> Result<Self, AppError> {
        let owner = owner.ok_or(InternalError::MissingBookingOwner(booking.id))?;

        Ok(Self {
            booking: Booking::from_entity(booking)?,
            owner: User::from_entity(owner),
        })
    }

    pub fn into_booked_slot_dto(self) -> BookedSlotDto {
        BookedSlotDto {
            id: self.booking.id,
            slot: self.booking.slot.to_string(),
            note: self.booking.note,
            display_name: self.owner.display_name,
            username: self.owner.username,
        }
    }

    pub fn into_upcoming_dto(self) -> UpcomingBookingDto {
        UpcomingBookingDto {
            id: self.booking.id,
            date: self.booking.date,
            slot: self.booking.slot.to_string(),
            display_name: self.owner.display_name,
            username: self.owner.username,
        }
    }
}

/// Slot occupancy of one floor on one date.
#[derive(Debug, Clone, PartialEq)]
pub struct Availability {
    pub date: NaiveDate,
    pub level: Level,
    /// Active bookings on the floor for the date, ordered by slot.
    pub booked: Vec<BookingWithOwner>,
}

impl Availability {
    /// Slots of the day that hold no active booking, in chronological order.
    pub fn available_slots(&self) -> Vec<Slot> {
        let taken: BTreeSet<Slot> = self.booked.iter().map(|b| b.booking.slot).collect();
        Slot::all().filter(|slot| !taken.contains(slot)).collect()
    }

    pub fn into_dto(self) -> AvailabilityDto {
        let available = self
            .available_slots()
            .into_iter()
            .map(|slot| slot.to_string())
            .collect();

        AvailabilityDto {
            date: self.date,
            level: self.level.value(),
            available,
            booked: self
                .booked
                .into_iter()
                .map(BookingWithOwner::into_booked_slot_dto)
                .collect(),
        }
    }
}

/// Inclusive date range covered by the upcoming bookings listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpcomingWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl UpcomingWindow {
    /// Builds the window running from `today` through Sunday of the following week.
    pub fn from_today(today: NaiveDate) -> Self {
        let to_this_sunday = 6 - u64::from(today.weekday().num_days_from_monday());
        let end = today
            .checked_add_days(Days::new(to_this_sunday + 7))
            .unwrap_or(NaiveDate::MAX);

        Self { start: today, end }
    }
}

/// Validated request to reserve one or more slots on a floor.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBookingParam {
    pub user: UpsertUserParam,
    pub level: Level,
    pub date: NaiveDate,
    /// Requested slots, deduplicated and in chronological order.
    pub slots: Vec<Slot>,
    pub note: Option<String>,
}

impl CreateBookingParam {
    /// Validates a create request DTO.
    ///
    /// Whether the date lies in the past is checked by the service, which owns the
    /// notion of "today".
    ///
    /// # Returns
    /// - `Ok(CreateBookingParam)` - All fields well formed
    /// - `Err(BookingError::MissingFields)` - No user ID, date, or slots
    /// - `Err(BookingError::InvalidLevel)` - Level outside the bookable floors
    /// - `Err(BookingError::InvalidDate)` - Date not `YYYY-MM-DD`
    /// - `Err(BookingError::InvalidSlot)` - Any slot not `HH:00`
    pub fn from_dto(dto: CreateBookingDto) -> Result<Self, BookingError> {
        let user = dto
            .user
            .ok_or(BookingError::MissingFields)
            .and_then(upsert_param_from_dto)?;

        if dto.date.trim().is_empty() || dto.slots.is_empty() {
            return Err(BookingError::MissingFields);
        }

        let level = Level::new(dto.level)?;
        let date = parse_booking_date(&dto.date)?;
        let slots = dto
            .slots
            .iter()
            .map(|slot| Slot::parse(slot))
            .collect::<Result<BTreeSet<_>, _>>()?
            .into_iter()
            .collect();

        let note = dto
            .note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());

        Ok(Self {
            user,
            level,
            date,
            slots,
            note,
        })
    }
}

/// Builds the user upsert from the identity sent by the web app.
///
/// Falls back to the handle, then the platform ID, when no display name is given.
fn upsert_param_from_dto(dto: BookingUserDto) -> Result<UpsertUserParam, BookingError> {
    let platform_id = normalize_platform_id(&dto.id);
    if platform_id.is_empty() {
        return Err(BookingError::MissingFields);
    }

    let username = dto
        .username
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let display_name = dto
        .display_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(|| username.clone())
        .unwrap_or_else(|| platform_id.clone());

    Ok(UpsertUserParam {
        platform_id,
        display_name,
        username,
    })
}

/// Request to cancel a booking on behalf of a user.
#[derive(Debug, Clone, PartialEq)]
pub struct CancelBookingParam {
    pub booking_id: i32,
    /// Normalized platform ID of the requesting user.
    pub requester: String,
}

impl CancelBookingParam {
    /// # Returns
    /// - `Ok(CancelBookingParam)` - Requester ID present
    /// - `Err(BookingError::MissingRequester)` - No usable requester ID
    pub fn new(booking_id: i32, requester: Option<String>) -> Result<Self, BookingError> {
        let requester = requester
            .map(|id| normalize_platform_id(&id))
            .filter(|id| !id.is_empty())
            .ok_or(BookingError::MissingRequester)?;

        Ok(Self {
            booking_id,
            requester,
        })
    }
}
