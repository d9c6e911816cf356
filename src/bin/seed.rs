use std::time::Duration;

use foodly_api::{
    clients::image_to_text::ImageToTextClient,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        categories::{AspectRequest, CategoryRequest},
        products::ProductRequest,
        users::CreateUserRequest,
    },
    error::AppError,
    services::{aspect_service, category_service, product_service, user_service},
    state::AppState,
};
use tracing_subscriber::EnvFilter;

const ASPECTS: [&str; 3] = ["taste", "delivery", "freshness"];

// (name, price, rating, mall)
const PRODUCTS: [(&str, i32, f32, &str); 3] = [
    ("Sliced pork belly 500g", 12900, 4.6, "Fresh Market"),
    ("Kimchi fried rice kit", 6900, 4.3, "Home Meal"),
    ("Frozen dumplings 1kg", 9800, 4.8, "Home Meal"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let image_to_text = ImageToTextClient::new(
        config.image_to_text_url.clone(),
        Duration::from_secs(config.image_to_text_timeout_secs),
    )?;
    let state = AppState { orm, image_to_text };

    seed_user(&state).await?;
    let category_id = seed_catalog(&state).await?;

    tracing::info!(category_id, "seed completed");
    Ok(())
}

async fn seed_user(state: &AppState) -> anyhow::Result<()> {
    let request = CreateUserRequest {
        email: "demo@foodly.dev".to_string(),
        username: "demo".to_string(),
    };
    match user_service::create_user(state, request).await {
        Ok(user) => tracing::info!(user_id = user.user_id, "demo user created"),
        // Re-running the seed keeps the existing user.
        Err(AppError::Conflict(message)) => tracing::info!(%message, "demo user kept"),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

async fn seed_catalog(state: &AppState) -> anyhow::Result<i32> {
    let category = category_service::create_category(
        state,
        CategoryRequest {
            name: "Meal kits".to_string(),
        },
    )
    .await?;

    for aspect in ASPECTS {
        aspect_service::create_aspect(
            state,
            category.category_id,
            AspectRequest {
                aspect: aspect.to_string(),
            },
        )
        .await?;
    }

    for (name, price, rating, mall) in PRODUCTS {
        let product = product_service::create_product(
            state,
            ProductRequest {
                category_id: category.category_id,
                name: name.to_string(),
                thumbnail_url: None,
                thumbnail_caption: None,
                thumbnail_caption_short: None,
                mall: Some(mall.to_string()),
                price: Some(price),
                stock: None,
                rating: Some(rating),
                coupon: None,
                delivery: Some("Next-day delivery".to_string()),
            },
        )
        .await?;
        tracing::info!(product_id = product.product_id, name, "product seeded");
    }

    Ok(category.category_id)
}
