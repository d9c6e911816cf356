use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_id: i32,
    pub user_id: i32,
    pub address: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub cart_id: i32,
    pub user_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i32,
    pub user_id: i32,
    pub status: String,
    pub payment_amount: i32,
    pub payment_date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub payment_id: i32,
    pub address_id: i32,
    pub order_status: String,
    pub total_amount: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order_items: Vec<OrderItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub order_item_id: i32,
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub aspects: Vec<CategoryAspect>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAspect {
    pub id: i32,
    pub aspect: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i32,
    pub category_id: Option<i32>,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub thumbnail_caption: Option<String>,
    pub thumbnail_caption_short: Option<String>,
    pub mall: Option<String>,
    pub price: Option<i32>,
    pub stock: i32,
    pub rating: Option<f32>,
    pub coupon: Option<String>,
    pub delivery: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub review_id: i32,
    pub product_id: i32,
    pub rate: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Description {
    pub product_id: i32,
    pub summary_exp: Option<String>,
    pub summary_cook: Option<String>,
    pub summary_store: Option<String>,
    pub caution_allergy1: Option<String>,
    pub caution_allergy2: Option<String>,
    pub caution_store: Option<String>,
    pub size_description: Option<String>,
    pub size_image_url: Option<String>,
    pub ingredient: Option<String>,
    pub nutrition: Option<String>,
    pub review_good_taste: Option<String>,
    pub review_good_taste_num: Option<i32>,
    pub review_good_delivery: Option<String>,
    pub review_good_delivery_num: Option<i32>,
    pub review_bad_taste: Option<String>,
    pub review_bad_taste_num: Option<i32>,
    pub review_bad_delivery: Option<String>,
    pub review_bad_delivery_num: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRank {
    pub product_rank_id: i32,
    pub product_id: i32,
    pub aspect_id: i32,
    pub category_id: i32,
    pub product_rank: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageToText {
    pub id: i32,
    pub link: String,
    pub images: Vec<String>,
    pub texts: Vec<String>,
}
