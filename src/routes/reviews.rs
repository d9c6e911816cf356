use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::reviews::ReviewRequest,
    error::AppResult,
    extract::{Json, Path},
    models::Review,
    services::review_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{product_id}/review",
            get(list_reviews).post(create_review),
        )
        .route(
            "/{product_id}/review/{review_id}",
            get(get_review).put(update_review).delete(delete_review),
        )
}

#[utoipa::path(
    post,
    path = "/api/product/{product_id}/review",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = ReviewRequest,
    responses(
        (status = 201, description = "Review created", body = Review),
        (status = 400, description = "Rate outside 1..=5"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let review = review_service::create_review(&state, product_id, payload).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

#[utoipa::path(
    get,
    path = "/api/product/{product_id}/review",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Reviews of the product", body = Vec<Review>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(review_service::list_reviews(&state, product_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/product/{product_id}/review/{review_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("review_id" = i32, Path, description = "Review ID"),
    ),
    responses(
        (status = 200, description = "Review", body = Review),
        (status = 404, description = "Product or review not found"),
    ),
    tag = "Reviews"
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path((product_id, review_id)): Path<(i32, i32)>,
) -> AppResult<Json<Review>> {
    Ok(Json(
        review_service::get_review(&state, product_id, review_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/product/{product_id}/review/{review_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("review_id" = i32, Path, description = "Review ID"),
    ),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 404, description = "Product or review not found"),
    ),
    tag = "Reviews"
)]
pub async fn update_review(
    State(state): State<AppState>,
    Path((product_id, review_id)): Path<(i32, i32)>,
    Json(payload): Json<ReviewRequest>,
) -> AppResult<Json<Review>> {
    Ok(Json(
        review_service::update_review(&state, product_id, review_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/product/{product_id}/review/{review_id}",
    params(
        ("product_id" = i32, Path, description = "Product ID"),
        ("review_id" = i32, Path, description = "Review ID"),
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Product or review not found"),
    ),
    tag = "Reviews"
)]
pub async fn delete_review(
    State(state): State<AppState>,
    Path((product_id, review_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    review_service::delete_review(&state, product_id, review_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
