use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

pub mod address_service;
pub mod aspect_service;
pub mod cart_service;
pub mod category_service;
pub mod description_service;
pub mod image_to_text_service;
pub mod order_service;
pub mod payment_service;
pub mod product_service;
pub mod rank_service;
pub mod review_service;
pub mod user_service;

pub(crate) fn now() -> DateTimeWithTimeZone {
    Utc::now().into()
}
