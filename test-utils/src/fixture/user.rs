//! User fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::user;

/// Default test platform ID.
pub const DEFAULT_PLATFORM_ID: &str = "123456789";

/// Default test display name.
pub const DEFAULT_DISPLAY_NAME: &str = "Test User";

/// Default test handle.
pub const DEFAULT_USERNAME: &str = "testuser";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - platform_id: `"123456789"`
/// - display_name: `"Test User"`
/// - username: `Some("testuser")`
/// - created_at: Unix epoch
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    platform_id: String,
    display_name: String,
    username: Option<String>,
    created_at: DateTime<Utc>,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            platform_id: DEFAULT_PLATFORM_ID.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            username: Some(DEFAULT_USERNAME.to_string()),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn platform_id(mut self, platform_id: impl Into<String>) -> Self {
        self.platform_id = platform_id.into();
        self
    }

    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn username(mut self, username: Option<&str>) -> Self {
        self.username = username.map(str::to_string);
        self
    }

    /// Builds the user entity model.
    pub fn build(self) -> user::Model {
        user::Model {
            id: self.id,
            platform_id: self.platform_id,
            display_name: self.display_name,
            username: self.username,
            created_at: self.created_at,
        }
    }
}
