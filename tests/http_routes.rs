mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use foodly_api::routes::create_router;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    (status, bytes.to_vec())
}

fn json_of(bytes: &[u8]) -> Value {
    serde_json::from_slice(bytes).expect("json body")
}

#[tokio::test]
async fn user_routes_use_rest_status_codes() -> anyhow::Result<()> {
    let app = create_router(common::setup_state().await?);

    let (status, body) = send(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "http@foodly.dev", "username": "http" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let user = json_of(&body);
    let user_id = user["userId"].as_i64().expect("userId");
    assert_eq!(user["email"], "http@foodly.dev");

    let (status, body) = send(&app, "GET", &format!("/api/user/{user_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["username"], "http");

    let (status, body) = send(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "http@foodly.dev", "username": "again" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(String::from_utf8(body)?, "Email is already taken: http@foodly.dev");

    let (status, body) = send(&app, "DELETE", &format!("/api/user/{user_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, "GET", &format!("/api/user/{user_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        String::from_utf8(body)?,
        format!("User not found with id: {user_id}")
    );
    Ok(())
}

#[tokio::test]
async fn nested_and_composite_routes_resolve() -> anyhow::Result<()> {
    let app = create_router(common::setup_state().await?);

    let (status, body) = send(&app, "POST", "/api/category", Some(json!({ "name": "Soup" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let category_id = json_of(&body)["categoryId"].as_i64().expect("categoryId");

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/category/{category_id}/aspects"),
        Some(json!({ "aspect": "taste" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "POST",
        "/api/product",
        Some(json!({ "categoryId": category_id, "name": "Miso soup", "price": 2500 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let product = json_of(&body);
    let product_id = product["productId"].as_i64().expect("productId");
    assert_eq!(product["stock"], 10);

    let (status, body) = send(&app, "GET", "/api/product/search?name=miso", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).as_array().map(Vec::len), Some(1));

    let (status, body) = send(
        &app,
        "GET",
        &format!("/api/product/categories/{category_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body).as_array().map(Vec::len), Some(1));

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/product/{product_id}/review"),
        Some(json!({ "rate": 4, "comment": "warm" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/descriptions/{product_id}"),
        Some(json!({ "summaryCook": "heat and serve" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/descriptions/{product_id}"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "POST",
        "/api/rank",
        Some(json!({
            "productRankId": 1,
            "productId": product_id,
            "aspectId": 1,
            "categoryId": category_id,
            "productRank": 5
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        &app,
        "PUT",
        &format!("/api/rank/1/{product_id}/1/{category_id}"),
        Some(json!({ "productRank": 8 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["productRank"], 8);

    let (status, body) = send(&app, "GET", "/api/rank/aspect/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)[0]["productId"], product_id);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/rank/1/{product_id}/1/{}", category_id + 1),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn validation_and_unknown_routes() -> anyhow::Result<()> {
    let app = create_router(common::setup_state().await?);

    let (status, _) = send(
        &app,
        "POST",
        "/api/user",
        Some(json!({ "email": "nope", "username": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "POST", "/api/category", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(String::from_utf8(body)?.contains("missing field `name`"));

    let (status, _) = send(&app, "GET", "/api/user/not-a-number", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, "GET", "/api/product/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "GET", "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(String::from_utf8(body)?, "No route for /api/nothing-here");

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json_of(&body)["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn upstream_failure_maps_to_bad_gateway() -> anyhow::Result<()> {
    let addr = common::spawn_upstream().await?;
    let state = common::setup_state_with_upstream(&format!("http://{addr}/broken")).await?;
    let app = create_router(state);

    let (status, body) = send(
        &app,
        "POST",
        "/image-to-text/process",
        Some(json!({ "link": "https://shop.example/p/9", "images": ["a.png"] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(String::from_utf8(body)?.starts_with("Image-to-text service error"));
    Ok(())
}
