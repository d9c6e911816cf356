use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::ranks::{ProductRankRequest, RankKey, UpdateProductRankRequest},
    error::AppResult,
    extract::{Json, Path},
    models::ProductRank,
    services::rank_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_ranks).post(create_rank))
        .route("/aspect/{aspect_id}", get(list_ranks_by_aspect))
        .route(
            "/{product_rank_id}/{product_id}/{aspect_id}/{category_id}",
            get(get_rank).put(update_rank).delete(delete_rank),
        )
}

#[utoipa::path(
    post,
    path = "/api/rank",
    request_body = ProductRankRequest,
    responses(
        (status = 201, description = "Rank stored", body = ProductRank),
        (status = 409, description = "Rank with this key already exists"),
    ),
    tag = "Ranks"
)]
pub async fn create_rank(
    State(state): State<AppState>,
    Json(payload): Json<ProductRankRequest>,
) -> AppResult<(StatusCode, Json<ProductRank>)> {
    let rank = rank_service::create_rank(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(rank)))
}

#[utoipa::path(
    get,
    path = "/api/rank",
    responses((status = 200, description = "All ranks", body = Vec<ProductRank>)),
    tag = "Ranks"
)]
pub async fn list_ranks(State(state): State<AppState>) -> AppResult<Json<Vec<ProductRank>>> {
    Ok(Json(rank_service::list_ranks(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/rank/aspect/{aspect_id}",
    params(("aspect_id" = i32, Path, description = "Aspect ID")),
    responses((status = 200, description = "Ranks for the aspect, best first", body = Vec<ProductRank>)),
    tag = "Ranks"
)]
pub async fn list_ranks_by_aspect(
    State(state): State<AppState>,
    Path(aspect_id): Path<i32>,
) -> AppResult<Json<Vec<ProductRank>>> {
    Ok(Json(
        rank_service::list_ranks_by_aspect(&state, aspect_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/rank/{product_rank_id}/{product_id}/{aspect_id}/{category_id}",
    params(RankKey),
    responses(
        (status = 200, description = "Rank", body = ProductRank),
        (status = 404, description = "No rank with this key"),
    ),
    tag = "Ranks"
)]
pub async fn get_rank(
    State(state): State<AppState>,
    Path(key): Path<RankKey>,
) -> AppResult<Json<ProductRank>> {
    Ok(Json(rank_service::get_rank(&state, key).await?))
}

#[utoipa::path(
    put,
    path = "/api/rank/{product_rank_id}/{product_id}/{aspect_id}/{category_id}",
    params(RankKey),
    request_body = UpdateProductRankRequest,
    responses(
        (status = 200, description = "Rank value updated", body = ProductRank),
        (status = 404, description = "No rank with this key"),
    ),
    tag = "Ranks"
)]
pub async fn update_rank(
    State(state): State<AppState>,
    Path(key): Path<RankKey>,
    Json(payload): Json<UpdateProductRankRequest>,
) -> AppResult<Json<ProductRank>> {
    Ok(Json(rank_service::update_rank(&state, key, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/rank/{product_rank_id}/{product_id}/{aspect_id}/{category_id}",
    params(RankKey),
    responses(
        (status = 204, description = "Rank deleted"),
        (status = 404, description = "No rank with this key"),
    ),
    tag = "Ranks"
)]
pub async fn delete_rank(
    State(state): State<AppState>,
    Path(key): Path<RankKey>,
) -> AppResult<StatusCode> {
    rank_service::delete_rank(&state, key).await?;
    Ok(StatusCode::NO_CONTENT)
}
