use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::orders::OrderRequest,
    error::AppResult,
    extract::{Json, Path},
    models::Order,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/order", get(list_orders).post(create_order))
        .route(
            "/{user_id}/order/{order_id}",
            get(get_order).put(update_order).delete(delete_order),
        )
}

#[utoipa::path(
    post,
    path = "/api/user/{user_id}/order",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order placed with its items", body = Order),
        (status = 400, description = "Invalid order or item"),
        (status = 404, description = "User, payment, address or product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    let order = order_service::create_order(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/order",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Orders of the user", body = Vec<Order>),
        (status = 404, description = "User not found"),
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<Order>>> {
    Ok(Json(order_service::list_orders(&state, user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/order/{order_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("order_id" = i32, Path, description = "Order ID"),
    ),
    responses(
        (status = 200, description = "Order with items", body = Order),
        (status = 404, description = "User or order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path((user_id, order_id)): Path<(i32, i32)>,
) -> AppResult<Json<Order>> {
    Ok(Json(order_service::get_order(&state, user_id, order_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/user/{user_id}/order/{order_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("order_id" = i32, Path, description = "Order ID"),
    ),
    request_body = OrderRequest,
    responses(
        (status = 200, description = "Order updated, items replaced", body = Order),
        (status = 404, description = "User, order, payment, address or product not found"),
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<AppState>,
    Path((user_id, order_id)): Path<(i32, i32)>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<Json<Order>> {
    Ok(Json(
        order_service::update_order(&state, user_id, order_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/user/{user_id}/order/{order_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("order_id" = i32, Path, description = "Order ID"),
    ),
    responses(
        (status = 204, description = "Order and its items deleted"),
        (status = 404, description = "User or order not found"),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    Path((user_id, order_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    order_service::delete_order(&state, user_id, order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
