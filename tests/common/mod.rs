#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use axum::{Json, Router, http::StatusCode, routing::post};
use foodly_api::{
    clients::image_to_text::ImageToTextClient,
    db::run_migrations,
    dto::{
        addresses::AddressRequest,
        categories::CategoryRequest,
        payments::PaymentRequest,
        products::ProductRequest,
        users::CreateUserRequest,
    },
    models::{Address, Category, Payment, Product, User},
    services::{address_service, category_service, payment_service, product_service, user_service},
    state::AppState,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};

/// Fresh in-memory database with the full schema. One pooled connection keeps
/// every query on the same SQLite memory database.
pub async fn setup_state() -> anyhow::Result<AppState> {
    setup_state_with_upstream("http://127.0.0.1:9/process").await
}

pub async fn setup_state_with_upstream(endpoint: &str) -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;

    let image_to_text = ImageToTextClient::new(endpoint, Duration::from_secs(5))?;
    Ok(AppState { orm, image_to_text })
}

/// Local stand-in for the recognition service.
///
/// `/process` echoes one text per image, `/missing` answers without `texts`,
/// `/broken` answers 500.
pub async fn spawn_upstream() -> anyhow::Result<SocketAddr> {
    let app = Router::new()
        .route("/process", post(echo_texts))
        .route("/missing", post(|| async { Json(json!({ "status": "done" })) }))
        .route(
            "/broken",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model crashed") }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(addr)
}

async fn echo_texts(Json(body): Json<Value>) -> Json<Value> {
    let texts: Vec<String> = body["images"]
        .as_array()
        .map(|images| {
            images
                .iter()
                .filter_map(Value::as_str)
                .map(|image| format!("text of {image}"))
                .collect()
        })
        .unwrap_or_default();
    Json(json!({ "texts": texts }))
}

pub async fn create_user(state: &AppState, email: &str) -> anyhow::Result<User> {
    let username = email.split('@').next().unwrap_or(email).to_string();
    let user = user_service::create_user(
        state,
        CreateUserRequest {
            email: email.to_string(),
            username,
        },
    )
    .await?;
    Ok(user)
}

pub async fn create_address(state: &AppState, user_id: i32) -> anyhow::Result<Address> {
    let address = address_service::create_address(
        state,
        user_id,
        AddressRequest {
            address: "12 Market Street".to_string(),
        },
    )
    .await?;
    Ok(address)
}

pub async fn create_payment(state: &AppState, user_id: i32, amount: i32) -> anyhow::Result<Payment> {
    let payment = payment_service::create_payment(
        state,
        user_id,
        PaymentRequest {
            status: "PAID".to_string(),
            payment_amount: amount,
        },
    )
    .await?;
    Ok(payment)
}

pub async fn create_category(state: &AppState, name: &str) -> anyhow::Result<Category> {
    let category = category_service::create_category(
        state,
        CategoryRequest {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(category)
}

pub fn product_request(category_id: i32, name: &str, price: i32) -> ProductRequest {
    ProductRequest {
        category_id,
        name: name.to_string(),
        thumbnail_url: None,
        thumbnail_caption: None,
        thumbnail_caption_short: None,
        mall: None,
        price: Some(price),
        stock: None,
        rating: None,
        coupon: None,
        delivery: None,
    }
}

pub async fn create_product(
    state: &AppState,
    category_id: i32,
    name: &str,
    price: i32,
) -> anyhow::Result<Product> {
    let product =
        product_service::create_product(state, product_request(category_id, name, price)).await?;
    Ok(product)
}
