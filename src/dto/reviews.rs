use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rate must be between 1 and 5"))]
    pub rate: i32,
    pub comment: Option<String>,
}
