use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq)]
pub enum BookingError {
    /// Level is not one of the bookable floors.
    #[error("Invalid lounge level. Choose 9, 10, or 11.")]
    InvalidLevel(String),

    /// Date is not a real calendar date in `YYYY-MM-DD` form.
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate(String),

    /// Date lies before today.
    #[error("Cannot book dates in the past")]
    PastDate,

    /// Slot is not one of the fixed hourly values.
    #[error("Invalid time slot '{0}'. Use HH:00 between 00:00 and 23:00")]
    InvalidSlot(String),

    /// Request body isn't JSON of the expected shape.
    #[error("{0}")]
    MalformedBody(String),

    /// User, date or slot list is absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// Cancellation request carries no requesting user.
    #[error("User authorization required.")]
    MissingRequester,

    /// At least one requested slot already holds an active booking.
    #[error("One or more slots on this floor are already booked!")]
    SlotTaken,

    /// Booking doesn't exist, is already cancelled, or isn't owned by the requester.
    ///
    /// These cases share one variant so responses don't reveal whether a booking exists.
    #[error("Booking not found or unauthorized.")]
    NotFoundOrUnauthorized,
}

/// Wraps a JSON body rejection so it reaches the client as `{ "error": ... }`
/// with 400 Bad Request, whatever status axum would have picked.
impl From<JsonRejection> for BookingError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection.body_text())
    }
}

/// Converts booking errors into HTTP responses.
///
/// - Validation failures → 400 Bad Request
/// - `SlotTaken` → 409 Conflict
/// - `NotFoundOrUnauthorized` → 404 Not Found
///
/// The error message is returned to the client as-is; details like the rejected value
/// are logged at debug level.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidLevel(_)
            | Self::InvalidDate(_)
            | Self::PastDate
            | Self::InvalidSlot(_)
            | Self::MalformedBody(_)
            | Self::MissingFields
            | Self::MissingRequester => StatusCode::BAD_REQUEST,
            Self::SlotTaken => StatusCode::CONFLICT,
            Self::NotFoundOrUnauthorized => StatusCode::NOT_FOUND,
        };

        tracing::debug!("Booking request rejected: {:?}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
