use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::products::{ProductRequest, SearchQuery},
    error::AppResult,
    extract::{Json, Path, Query},
    models::Product,
    routes::reviews,
    services::product_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route(
            "/categories/{category_id}",
            get(list_products_by_category),
        )
        .route(
            "/{product_id}",
            get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
        .merge(reviews::router())
}

#[utoipa::path(
    get,
    path = "/api/product",
    responses((status = 200, description = "All products", body = Vec<Product>)),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(product_service::list_products(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<Json<Product>> {
    Ok(Json(product_service::get_product(&state, product_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/product/categories/{category_id}",
    params(("category_id" = i32, Path, description = "Category ID")),
    responses((status = 200, description = "Products in the category", body = Vec<Product>)),
    tag = "Products"
)]
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i32>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(
        product_service::list_products_by_category(&state, category_id).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/product/search",
    params(SearchQuery),
    responses((status = 200, description = "Products whose name contains the term", body = Vec<Product>)),
    tag = "Products"
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<Vec<Product>>> {
    Ok(Json(
        product_service::search_products_by_name(&state, &query.name).await?,
    ))
}

#[utoipa::path(
    post,
    path = "/api/product",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 404, description = "Category not found"),
    ),
    tag = "Products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = product_service::create_product(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    put,
    path = "/api/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 404, description = "Product or category not found"),
    ),
    tag = "Products"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> AppResult<Json<Product>> {
    Ok(Json(
        product_service::update_product(&state, product_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/product/{product_id}",
    params(("product_id" = i32, Path, description = "Product ID")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found"),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> AppResult<StatusCode> {
    product_service::delete_product(&state, product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
