use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::carts::CartRequest,
    error::AppResult,
    extract::{Json, Path},
    models::CartItem,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/cart", get(cart_list).post(add_to_cart))
        .route(
            "/{user_id}/cart/{cart_id}",
            get(get_cart_item)
                .put(update_cart_item)
                .delete(remove_from_cart),
        )
}

#[utoipa::path(
    post,
    path = "/api/user/{user_id}/cart",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = CartRequest,
    responses(
        (status = 201, description = "Product added to the cart", body = CartItem),
        (status = 404, description = "User or product not found"),
        (status = 409, description = "Product already in the cart"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CartRequest>,
) -> AppResult<(StatusCode, Json<CartItem>)> {
    let item = cart_service::add_product_to_cart(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/cart",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Cart contents", body = Vec<CartItem>),
        (status = 404, description = "User not found"),
    ),
    tag = "Cart"
)]
pub async fn cart_list(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<CartItem>>> {
    Ok(Json(cart_service::list_cart_items(&state, user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/cart/{cart_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("cart_id" = i32, Path, description = "Cart row ID"),
    ),
    responses(
        (status = 200, description = "Cart item", body = CartItem),
        (status = 404, description = "User or cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn get_cart_item(
    State(state): State<AppState>,
    Path((user_id, cart_id)): Path<(i32, i32)>,
) -> AppResult<Json<CartItem>> {
    Ok(Json(
        cart_service::get_cart_item(&state, user_id, cart_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/user/{user_id}/cart/{cart_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("cart_id" = i32, Path, description = "Cart row ID"),
    ),
    request_body = CartRequest,
    responses(
        (status = 200, description = "Cart item updated", body = CartItem),
        (status = 404, description = "User, cart item or product not found"),
        (status = 409, description = "Product already in the cart"),
    ),
    tag = "Cart"
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path((user_id, cart_id)): Path<(i32, i32)>,
    Json(payload): Json<CartRequest>,
) -> AppResult<Json<CartItem>> {
    Ok(Json(
        cart_service::update_cart_item(&state, user_id, cart_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/user/{user_id}/cart/{cart_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("cart_id" = i32, Path, description = "Cart row ID"),
    ),
    responses(
        (status = 204, description = "Removed from the cart"),
        (status = 404, description = "User or cart item not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path((user_id, cart_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    cart_service::remove_cart_item(&state, user_id, cart_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
