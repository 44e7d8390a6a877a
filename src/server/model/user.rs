//! User domain models and parameters.
//!
//! Users are created lazily the first time they book and are identified by their chat
//! platform ID. Display name and handle are refreshed on every booking.

/// User known to the booking service.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Row ID of the user.
    pub id: i32,
    /// Normalized chat platform ID.
    pub platform_id: String,
    /// Name shown next to booked slots.
    pub display_name: String,
    /// Optional chat platform handle.
    pub username: Option<String>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            platform_id: entity.platform_id,
            display_name: entity.display_name,
            username: entity.username,
        }
    }
}

/// Parameters for creating a user or refreshing their profile.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertUserParam {
    /// Normalized chat platform ID.
    pub platform_id: String,
    pub display_name: String,
    pub username: Option<String>,
}
