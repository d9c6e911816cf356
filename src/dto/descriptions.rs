use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DescriptionRequest {
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
}
