use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Address is required"))]
    pub address: String,
}
