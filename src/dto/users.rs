use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        custom(function = "crate::dto::not_blank", message = "Email is required"),
        email(message = "Email format is invalid")
    )]
    pub email: String,
    #[validate(custom(function = "crate::dto::not_blank", message = "Username is required"))]
    pub username: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Username is required"))]
    pub username: String,
}
