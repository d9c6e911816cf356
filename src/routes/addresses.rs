use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::addresses::AddressRequest,
    error::AppResult,
    extract::{Json, Path},
    models::Address,
    services::address_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/address",
            get(list_addresses).post(create_address),
        )
        .route(
            "/{user_id}/address/{address_id}",
            get(get_address).put(update_address).delete(delete_address),
        )
}

#[utoipa::path(
    post,
    path = "/api/user/{user_id}/address",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = AddressRequest,
    responses(
        (status = 201, description = "Address created", body = Address),
        (status = 404, description = "User not found"),
    ),
    tag = "Addresses"
)]
pub async fn create_address(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<(StatusCode, Json<Address>)> {
    let address = address_service::create_address(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(address)))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/address",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Addresses of the user", body = Vec<Address>),
        (status = 404, description = "User not found"),
    ),
    tag = "Addresses"
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<Address>>> {
    Ok(Json(address_service::list_addresses(&state, user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/address/{address_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("address_id" = i32, Path, description = "Address ID"),
    ),
    responses(
        (status = 200, description = "Address", body = Address),
        (status = 404, description = "User or address not found"),
    ),
    tag = "Addresses"
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path((user_id, address_id)): Path<(i32, i32)>,
) -> AppResult<Json<Address>> {
    Ok(Json(
        address_service::get_address(&state, user_id, address_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/user/{user_id}/address/{address_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("address_id" = i32, Path, description = "Address ID"),
    ),
    request_body = AddressRequest,
    responses(
        (status = 200, description = "Address updated", body = Address),
        (status = 404, description = "User or address not found"),
    ),
    tag = "Addresses"
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path((user_id, address_id)): Path<(i32, i32)>,
    Json(payload): Json<AddressRequest>,
) -> AppResult<Json<Address>> {
    Ok(Json(
        address_service::update_address(&state, user_id, address_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/user/{user_id}/address/{address_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("address_id" = i32, Path, description = "Address ID"),
    ),
    responses(
        (status = 204, description = "Address deleted"),
        (status = 404, description = "User or address not found"),
    ),
    tag = "Addresses"
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path((user_id, address_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    address_service::delete_address(&state, user_id, address_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
