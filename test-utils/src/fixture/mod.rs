//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixture functions create in-memory entity models for unit tests and as default
//! values for tests of entity-to-domain conversions. Unlike factories, fixtures do
//! NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let booking = fixture::booking::entity();
//!
//! let cancelled = fixture::booking::entity_builder()
//!     .status("cancelled")
//!     .build();
//! ```

pub mod booking;
pub mod user;

pub use booking::{entity as booking_entity, entity_builder as booking_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
