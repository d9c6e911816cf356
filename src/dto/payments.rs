use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[validate(custom(function = "crate::dto::not_blank", message = "Status is required"))]
    pub status: String,
    #[validate(range(min = 1, message = "Payment amount must be at least 1"))]
    pub payment_amount: i32,
}
