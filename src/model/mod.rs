//! Wire DTOs shared by the HTTP API.
//!
//! These types define the JSON bodies exchanged with the booking web app. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod booking;
pub mod user;
