use axum::{Router, extract::State, routing::post};

use crate::{
    dto::image_to_text::ImageToTextRequest,
    error::AppResult,
    extract::Json,
    models::ImageToText,
    services::image_to_text_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/process", post(process_input))
}

#[utoipa::path(
    post,
    path = "/image-to-text/process",
    request_body = ImageToTextRequest,
    responses(
        (status = 200, description = "Texts recognised from the images", body = ImageToText),
        (status = 502, description = "Recognition service failed"),
    ),
    tag = "Image to text"
)]
pub async fn process_input(
    State(state): State<AppState>,
    Json(payload): Json<ImageToTextRequest>,
) -> AppResult<Json<ImageToText>> {
    Ok(Json(
        image_to_text_service::process_input(&state, payload).await?,
    ))
}
