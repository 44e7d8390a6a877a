use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::{deserialize_optional_platform_id, BookingUserDto};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateBookingDto {
    #[serde(default)]
    pub user: Option<BookingUserDto>,
    #[serde(default)]
    pub level: i32,
    /// Date in `YYYY-MM-DD` format.
    #[serde(default)]
    pub date: String,
    /// Slot start times in `HH:00` format.
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CancelBookingDto {
    /// Platform ID of the user requesting the cancellation.
    #[serde(default, deserialize_with = "deserialize_optional_platform_id")]
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub level: i32,
    pub date: NaiveDate,
    pub slot: String,
    pub note: Option<String>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreatedBookingsDto {
    pub message: String,
    pub level: i32,
    pub bookings: Vec<BookingDto>,
}

/// An occupied slot with the owner details shown for transparency.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BookedSlotDto {
    pub id: i32,
    pub slot: String,
    pub note: Option<String>,
    pub display_name: String,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AvailabilityDto {
    pub date: NaiveDate,
    pub level: i32,
    pub available: Vec<String>,
    pub booked: Vec<BookedSlotDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpcomingBookingDto {
    pub id: i32,
    pub date: NaiveDate,
    pub slot: String,
    pub display_name: String,
    pub username: Option<String>,
}
