use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use validator::Validate;

use crate::{
    dto::products::ProductRequest,
    entity::products::{
        ActiveModel as ProductActive, Column as ProductCol, Entity as Products,
        Model as ProductModel,
    },
    error::{AppError, AppResult},
    models::Product,
    services::{category_service::find_category, now},
    state::AppState,
};

/// Stock assigned when a product is created without one.
pub const DEFAULT_STOCK: i32 = 10;

pub async fn create_product(state: &AppState, payload: ProductRequest) -> AppResult<Product> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_category(&txn, payload.category_id).await?;

    let now = now();
    let product = ProductActive {
        id: NotSet,
        category_id: Set(Some(payload.category_id)),
        name: Set(payload.name),
        thumbnail_url: Set(payload.thumbnail_url),
        thumbnail_caption: Set(payload.thumbnail_caption),
        thumbnail_caption_short: Set(payload.thumbnail_caption_short),
        mall: Set(payload.mall),
        price: Set(payload.price),
        stock: Set(payload.stock.unwrap_or(DEFAULT_STOCK)),
        rating: Set(payload.rating),
        coupon: Set(payload.coupon),
        delivery: Set(payload.delivery),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(product_id = product.id, "product created");
    Ok(product_from_entity(product))
}

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .order_by_asc(ProductCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn get_product(state: &AppState, product_id: i32) -> AppResult<Product> {
    let product = find_product(&state.orm, product_id).await?;
    Ok(product_from_entity(product))
}

pub async fn list_products_by_category(
    state: &AppState,
    category_id: i32,
) -> AppResult<Vec<Product>> {
    let products = Products::find_by_category(category_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn search_products_by_name(state: &AppState, name: &str) -> AppResult<Vec<Product>> {
    let products = Products::find_by_name_containing(name)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn update_product(
    state: &AppState,
    product_id: i32,
    payload: ProductRequest,
) -> AppResult<Product> {
    payload.validate()?;
    let txn = state.orm.begin().await?;

    let existing = find_product(&txn, product_id).await?;
    find_category(&txn, payload.category_id).await?;

    let stock = payload.stock.unwrap_or(existing.stock);
    let mut active: ProductActive = existing.into();
    active.category_id = Set(Some(payload.category_id));
    active.name = Set(payload.name);
    active.thumbnail_url = Set(payload.thumbnail_url);
    active.thumbnail_caption = Set(payload.thumbnail_caption);
    active.thumbnail_caption_short = Set(payload.thumbnail_caption_short);
    active.mall = Set(payload.mall);
    active.price = Set(payload.price);
    active.stock = Set(stock);
    active.rating = Set(payload.rating);
    active.coupon = Set(payload.coupon);
    active.delivery = Set(payload.delivery);
    active.updated_at = Set(now());
    let product = active.update(&txn).await?;

    txn.commit().await?;
    Ok(product_from_entity(product))
}

pub async fn delete_product(state: &AppState, product_id: i32) -> AppResult<()> {
    let result = Products::delete_by_id(product_id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(product_not_found(product_id));
    }

    tracing::info!(product_id, "product deleted");
    Ok(())
}

pub(crate) async fn find_product<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
) -> AppResult<ProductModel> {
    Products::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| product_not_found(product_id))
}

fn product_not_found(product_id: i32) -> AppError {
    AppError::not_found(format!("Product not found with id: {product_id}"))
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        product_id: model.id,
        category_id: model.category_id,
        name: model.name,
        thumbnail_url: model.thumbnail_url,
        thumbnail_caption: model.thumbnail_caption,
        thumbnail_caption_short: model.thumbnail_caption_short,
        mall: model.mall,
        price: model.price,
        stock: model.stock,
        rating: model.rating,
        coupon: model.coupon,
        delivery: model.delivery,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
