//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows into the database, so foreign key
//! relationships must be satisfied (create the user before their bookings).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let booking = factory::booking::create_booking(&db, user.id).await?;
//!
//!     // Create with dependencies
//!     let (user, booking) = factory::helpers::create_booking_with_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let booking = factory::booking::BookingFactory::new(&db, user.id)
//!     .level(10)
//!     .slot(14)
//!     .note(Some("Study group"))
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod helpers;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use user::{create_user, create_user_with_id};
