use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Chat platform identity sent by the web app along with a booking.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BookingUserDto {
    /// Chat platform user ID; numeric IDs are accepted and stored as strings.
    #[serde(deserialize_with = "deserialize_platform_id")]
    pub id: String,
    #[serde(default, alias = "first_name")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AdminStatusDto {
    pub is_admin: bool,
}

/// Platform IDs arrive as strings, integers, or floats depending on the client.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlatformId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl RawPlatformId {
    fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Unsigned(value) => value.to_string(),
            Self::Signed(value) => value.to_string(),
            Self::Float(value) => format!("{:.0}", value.trunc()),
        }
    }
}

pub(crate) fn deserialize_platform_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawPlatformId::deserialize(deserializer)?.into_string())
}

pub(crate) fn deserialize_optional_platform_id<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<RawPlatformId>::deserialize(deserializer)?.map(RawPlatformId::into_string))
}
