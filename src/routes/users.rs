use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    error::AppResult,
    extract::{Json, Path},
    models::User,
    routes::{addresses, cart, orders, payments},
    services::user_service,
    state::AppState,
};

/// Users plus every resource scoped under `/{user_id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route(
            "/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .merge(addresses::router())
        .merge(cart::router())
        .merge(payments::router())
        .merge(orders::router())
}

#[utoipa::path(
    post,
    path = "/api/user",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid email or username"),
        (status = 409, description = "Email already taken"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = user_service::create_user(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/user",
    responses((status = 200, description = "All users", body = Vec<User>)),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(user_service::list_users(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::get_user(&state, user_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/user/{user_id}",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    Ok(Json(user_service::update_user(&state, user_id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/user/{user_id}",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User and everything they own deleted"),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<StatusCode> {
    user_service::delete_user(&state, user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
