use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::descriptions::DescriptionRequest,
    error::AppResult,
    extract::{Json, Path},
    models::Description,
    services::description_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{product_id}",
        get(get_description)
            .post(create_description)
            .put(update_description)
            .delete(delete_description),
    )
}

#[utoipa::path(
    post,
    path = "/api/descriptions/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = DescriptionRequest,
    responses(
        (status = 201, description = "Description created", body = Description),
        (status = 404, description = "Product not found"),
        (status = 409, description = "Product already has a description"),
    ),
    tag = "Descriptions"
)]
pub async fn create_description(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<DescriptionRequest>,
) -> AppResult<(StatusCode, Json<Description>)> {
    let description =
        description_service::create_description(&state, product_id, payload).await?;
    Ok((StatusCode::CREATED, Json(description)))
}

#[utoipa::path(
    get,
    path = "/api/descriptions/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Description", body = Description),
        (status = 404, description = "Description not found"),
    ),
    tag = "Descriptions"
)]
pub async fn get_description(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Description>> {
    Ok(Json(
        description_service::get_description(&state, product_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/descriptions/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = DescriptionRequest,
    responses(
        (status = 200, description = "Description replaced", body = Description),
        (status = 404, description = "Description not found"),
    ),
    tag = "Descriptions"
)]
pub async fn update_description(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<DescriptionRequest>,
) -> AppResult<Json<Description>> {
    Ok(Json(
        description_service::update_description(&state, product_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/descriptions/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Description deleted"),
        (status = 404, description = "Description not found"),
    ),
    tag = "Descriptions"
)]
pub async fn delete_description(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<StatusCode> {
    description_service::delete_description(&state, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
