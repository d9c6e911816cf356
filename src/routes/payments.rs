use axum::{
    Router,
    extract::State,
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::payments::PaymentRequest,
    error::AppResult,
    extract::{Json, Path},
    models::Payment,
    services::payment_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{user_id}/payment",
            get(list_payments).post(create_payment),
        )
        .route(
            "/{user_id}/payment/{payment_id}",
            get(get_payment).put(update_payment).delete(delete_payment),
        )
}

#[utoipa::path(
    post,
    path = "/api/user/{user_id}/payment",
    params(("user_id" = i32, Path, description = "User ID")),
    request_body = PaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 404, description = "User not found"),
    ),
    tag = "Payments"
)]
pub async fn create_payment(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<(StatusCode, Json<Payment>)> {
    let payment = payment_service::create_payment(&state, user_id, payload).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/payment",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Payments of the user", body = Vec<Payment>),
        (status = 404, description = "User not found"),
    ),
    tag = "Payments"
)]
pub async fn list_payments(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<Payment>>> {
    Ok(Json(payment_service::list_payments(&state, user_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{user_id}/payment/{payment_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("payment_id" = i32, Path, description = "Payment ID"),
    ),
    responses(
        (status = 200, description = "Payment", body = Payment),
        (status = 404, description = "User or payment not found"),
    ),
    tag = "Payments"
)]
pub async fn get_payment(
    State(state): State<AppState>,
    Path((user_id, payment_id)): Path<(i32, i32)>,
) -> AppResult<Json<Payment>> {
    Ok(Json(
        payment_service::get_payment(&state, user_id, payment_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/user/{user_id}/payment/{payment_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("payment_id" = i32, Path, description = "Payment ID"),
    ),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Payment updated", body = Payment),
        (status = 404, description = "User or payment not found"),
    ),
    tag = "Payments"
)]
pub async fn update_payment(
    State(state): State<AppState>,
    Path((user_id, payment_id)): Path<(i32, i32)>,
    Json(payload): Json<PaymentRequest>,
) -> AppResult<Json<Payment>> {
    Ok(Json(
        payment_service::update_payment(&state, user_id, payment_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/user/{user_id}/payment/{payment_id}",
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("payment_id" = i32, Path, description = "Payment ID"),
    ),
    responses(
        (status = 204, description = "Payment deleted"),
        (status = 404, description = "User or payment not found"),
    ),
    tag = "Payments"
)]
pub async fn delete_payment(
    State(state): State<AppState>,
    Path((user_id, payment_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    payment_service::delete_payment(&state, user_id, payment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
