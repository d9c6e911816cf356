use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Inbound request, also forwarded verbatim to the recognition service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ImageToTextRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Link is required"))]
    pub link: String,
    #[serde(default)]
    pub images: Vec<String>,
}
