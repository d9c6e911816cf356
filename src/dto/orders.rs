use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub payment_id: i32,
    pub address_id: i32,
    #[validate(custom(function = "crate::dto::not_blank", message = "Order status is required"))]
    pub order_status: String,
    #[validate(range(min = 1, message = "Total amount must be positive"))]
    pub total_amount: i32,
    #[validate(nested)]
    pub order_items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: i32,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
    #[validate(range(min = 1, message = "Unit price must be positive"))]
    pub unit_price: i32,
}
