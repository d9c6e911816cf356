use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRankRequest {
    pub product_rank_id: i32,
    pub product_id: i32,
    pub aspect_id: i32,
    pub category_id: i32,
    pub product_rank: i32,
}

/// Only the rank value is mutable; key fields in the body are ignored.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRankRequest {
    pub product_rank: i32,
}

/// The four path segments identifying a single rank row.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Path)]
pub struct RankKey {
    pub product_rank_id: i32,
    pub product_id: i32,
    pub aspect_id: i32,
    pub category_id: i32,
}

impl RankKey {
    pub fn as_tuple(&self) -> (i32, i32, i32, i32) {
        (
            self.product_rank_id,
            self.product_id,
            self.aspect_id,
            self.category_id,
        )
    }
}
