use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};
use validator::Validate;

use crate::{
    dto::reviews::ReviewRequest,
    entity::reviews::{ActiveModel as ReviewActive, Entity as Reviews, Model as ReviewModel},
    error::{AppError, AppResult},
    models::Review,
    services::{now, product_service::find_product},
    state::AppState,
};

pub async fn create_review(
    state: &AppState,
    product_id: i32,
    payload: ReviewRequest,
) -> AppResult<Review> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_product(&txn, product_id).await?;

    let now = now();
    let review = ReviewActive {
        id: NotSet,
        product_id: Set(product_id),
        rate: Set(payload.rate),
        comment: Set(payload.comment),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(product_id, review_id = review.id, "review created");
    Ok(review_from_entity(review))
}

pub async fn list_reviews(state: &AppState, product_id: i32) -> AppResult<Vec<Review>> {
    find_product(&state.orm, product_id).await?;
    let reviews = Reviews::find_by_product(product_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(review_from_entity)
        .collect();
    Ok(reviews)
}

pub async fn get_review(state: &AppState, product_id: i32, review_id: i32) -> AppResult<Review> {
    find_product(&state.orm, product_id).await?;
    let review = Reviews::find_by_id_and_product(review_id, product_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| review_not_found(review_id, product_id))?;
    Ok(review_from_entity(review))
}

pub async fn update_review(
    state: &AppState,
    product_id: i32,
    review_id: i32,
    payload: ReviewRequest,
) -> AppResult<Review> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_product(&txn, product_id).await?;

    let existing = Reviews::find_by_id_and_product(review_id, product_id)
        .one(&txn)
        .await?
        .ok_or_else(|| review_not_found(review_id, product_id))?;

    let mut active: ReviewActive = existing.into();
    active.rate = Set(payload.rate);
    active.comment = Set(payload.comment);
    active.updated_at = Set(now());
    let review = active.update(&txn).await?;

    txn.commit().await?;
    Ok(review_from_entity(review))
}

pub async fn delete_review(state: &AppState, product_id: i32, review_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    find_product(&txn, product_id).await?;

    let review = Reviews::find_by_id_and_product(review_id, product_id)
        .one(&txn)
        .await?
        .ok_or_else(|| review_not_found(review_id, product_id))?;
    Reviews::delete_by_id(review.id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(product_id, review_id, "review deleted");
    Ok(())
}

fn review_not_found(review_id: i32, product_id: i32) -> AppError {
    AppError::not_found(format!(
        "Review not found with id: {review_id} for product id: {product_id}"
    ))
}

fn review_from_entity(model: ReviewModel) -> Review {
    Review {
        review_id: model.id,
        product_id: model.product_id,
        rate: model.rate,
        comment: model.comment,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
