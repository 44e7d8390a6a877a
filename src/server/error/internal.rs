use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored booking references a level outside the allowed set.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Booking {booking_id} has invalid stored level {level}")]
    InvalidStoredLevel {
        /// ID of the booking row
        booking_id: i32,
        /// The stored level value
        level: i32,
    },

    /// A stored booking slot is not a start hour between 0 and 23.
    #[error("Booking {booking_id} has invalid stored slot {slot}")]
    InvalidStoredSlot {
        /// ID of the booking row
        booking_id: i32,
        /// The stored slot value
        slot: i32,
    },

    /// A stored booking status is neither `active` nor `cancelled`.
    #[error("Booking {booking_id} has invalid stored status '{status}'")]
    InvalidStoredStatus {
        /// ID of the booking row
        booking_id: i32,
        /// The stored status value
        status: String,
    },

    /// A booking row was loaded without its owning user.
    #[error("Booking {0} has no owning user")]
    MissingBookingOwner(i32),
}
