use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::categories::{AspectRequest, CategoryRequest},
    error::AppResult,
    extract::{Json, Path},
    models::{Category, CategoryAspect},
    services::{aspect_service, category_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_categories).post(create_category))
        .route(
            "/{category_id}",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route(
            "/{category_id}/aspects",
            get(list_aspects).post(create_aspect),
        )
        .route(
            "/aspects/{aspect_id}",
            get(get_aspect).put(update_aspect).delete(delete_aspect),
        )
}

#[utoipa::path(
    post,
    path = "/api/category",
    request_body = CategoryRequest,
    responses((status = 201, description = "Category created", body = Category)),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let category = category_service::create_category(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[utoipa::path(
    get,
    path = "/api/category",
    responses((status = 200, description = "Categories with their aspects", body = Vec<Category>)),
    tag = "Categories"
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(category_service::list_categories(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/category/{category_id}",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = Category),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Category>> {
    Ok(Json(
        category_service::get_category(&state, category_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/category/{category_id}",
    params(("category_id" = i32, Path, description = "Category ID")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category renamed", body = Category),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> AppResult<Json<Category>> {
    Ok(Json(
        category_service::update_category(&state, category_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/category/{category_id}",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category and its aspects deleted"),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<StatusCode> {
    category_service::delete_category(&state, category_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/category/{category_id}/aspects",
    params(("category_id" = i32, Path, description = "Category ID")),
    request_body = AspectRequest,
    responses(
        (status = 201, description = "Aspect created", body = CategoryAspect),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn create_aspect(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
    Json(payload): Json<AspectRequest>,
) -> AppResult<(StatusCode, Json<CategoryAspect>)> {
    let aspect = aspect_service::create_aspect(&state, category_id, payload).await?;
    Ok((StatusCode::CREATED, Json(aspect)))
}

#[utoipa::path(
    get,
    path = "/api/category/{category_id}/aspects",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Aspects of the category", body = Vec<CategoryAspect>),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn list_aspects(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Vec<CategoryAspect>>> {
    Ok(Json(
        aspect_service::list_aspects(&state, category_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/category/aspects/{aspect_id}",
    params(("aspect_id" = i32, Path, description = "Aspect ID")),
    responses(
        (status = 200, description = "Aspect", body = CategoryAspect),
        (status = 404, description = "Aspect not found"),
    ),
    tag = "Categories"
)]
pub async fn get_aspect(
    State(state): State<AppState>,
    Path(aspect_id): Path<i32>,
) -> AppResult<Json<CategoryAspect>> {
    Ok(Json(aspect_service::get_aspect(&state, aspect_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/category/aspects/{aspect_id}",
    params(("aspect_id" = i32, Path, description = "Aspect ID")),
    request_body = AspectRequest,
    responses(
        (status = 200, description = "Aspect updated", body = CategoryAspect),
        (status = 404, description = "Aspect not found"),
    ),
    tag = "Categories"
)]
pub async fn update_aspect(
    State(state): State<AppState>,
    Path(aspect_id): Path<i32>,
    Json(payload): Json<AspectRequest>,
) -> AppResult<Json<CategoryAspect>> {
    Ok(Json(
        aspect_service::update_aspect(&state, aspect_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/category/aspects/{aspect_id}",
    params(("aspect_id" = i32, Path, description = "Aspect ID")),
    responses(
        (status = 204, description = "Aspect deleted"),
        (status = 404, description = "Aspect not found"),
    ),
    tag = "Categories"
)]
pub async fn delete_aspect(
    State(state): State<AppState>,
    Path(aspect_id): Path<i32>,
) -> AppResult<StatusCode> {
    aspect_service::delete_aspect(&state, aspect_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
