use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the availability endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AvailabilityParam {
    /// Floor level (9, 10, or 11). Defaults to 9 when absent or empty.
    #[param(value_type = Option<i32>)]
    pub level: Option<String>,
}
