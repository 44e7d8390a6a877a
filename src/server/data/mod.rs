//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for users and
//! bookings. Repositories use SeaORM entity models internally; the user repository converts
//! to domain models directly while booking rows are converted by the service, which owns
//! the handling of invalid stored data.

pub mod booking;
pub mod user;

#[cfg(test)]
mod test;
