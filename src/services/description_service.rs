use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};

use crate::{
    dto::descriptions::DescriptionRequest,
    entity::descriptions::{
        ActiveModel as DescriptionActive, Entity as Descriptions, Model as DescriptionModel,
    },
    error::{AppError, AppResult},
    models::Description,
    services::{now, product_service::find_product},
    state::AppState,
};

pub async fn create_description(
    state: &AppState,
    product_id: i32,
    payload: DescriptionRequest,
) -> AppResult<Description> {
    let txn = state.orm.begin().await?;
    find_product(&txn, product_id).await?;

    if Descriptions::find_by_id(product_id).one(&txn).await?.is_some() {
        return Err(AppError::conflict(format!(
            "Description already exists for product id: {product_id}"
        )));
    }

    let now = now();
    let mut active = DescriptionActive {
        product_id: Set(product_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    apply(&mut active, payload);
    let description = active.insert(&txn).await?;

    txn.commit().await?;
    tracing::info!(product_id, "description created");
    Ok(description_from_entity(description))
}

pub async fn get_description(state: &AppState, product_id: i32) -> AppResult<Description> {
    let description = find_description(&state.orm, product_id).await?;
    Ok(description_from_entity(description))
}

/// Full overwrite: fields absent from the request are cleared.
pub async fn update_description(
    state: &AppState,
    product_id: i32,
    payload: DescriptionRequest,
) -> AppResult<Description> {
    let txn = state.orm.begin().await?;
    let existing = find_description(&txn, product_id).await?;

    let mut active: DescriptionActive = existing.into();
    apply(&mut active, payload);
    active.updated_at = Set(now());
    let description = active.update(&txn).await?;

    txn.commit().await?;
    Ok(description_from_entity(description))
}

pub async fn delete_description(state: &AppState, product_id: i32) -> AppResult<()> {
    let result = Descriptions::delete_by_id(product_id)
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(description_not_found(product_id));
    }

    tracing::info!(product_id, "description deleted");
    Ok(())
}

async fn find_description<C: ConnectionTrait>(
    db: &C,
    product_id: i32,
) -> AppResult<DescriptionModel> {
    Descriptions::find_by_id(product_id)
        .one(db)
        .await?
        .ok_or_else(|| description_not_found(product_id))
}

fn description_not_found(product_id: i32) -> AppError {
    AppError::not_found(format!(
        "Description not found for product id: {product_id}"
    ))
}

fn apply(active: &mut DescriptionActive, payload: DescriptionRequest) {
    active.summary_exp = Set(payload.summary_exp);
    active.summary_cook = Set(payload.summary_cook);
    active.summary_store = Set(payload.summary_store);
    active.caution_allergy1 = Set(payload.caution_allergy1);
    active.caution_allergy2 = Set(payload.caution_allergy2);
    active.caution_store = Set(payload.caution_store);
    active.size_description = Set(payload.size_description);
    active.size_image_url = Set(payload.size_image_url);
    active.ingredient = Set(payload.ingredient);
    active.nutrition = Set(payload.nutrition);
    active.review_good_taste = Set(payload.review_good_taste);
    active.review_good_taste_num = Set(payload.review_good_taste_num);
    active.review_good_delivery = Set(payload.review_good_delivery);
    active.review_good_delivery_num = Set(payload.review_good_delivery_num);
    active.review_bad_taste = Set(payload.review_bad_taste);
    active.review_bad_taste_num = Set(payload.review_bad_taste_num);
    active.review_bad_delivery = Set(payload.review_bad_delivery);
    active.review_bad_delivery_num = Set(payload.review_bad_delivery_num);
}

fn description_from_entity(model: DescriptionModel) -> Description {
    Description {
        product_id: model.product_id,
        summary_exp: model.summary_exp,
        summary_cook: model.summary_cook,
        summary_store: model.summary_store,
        caution_allergy1: model.caution_allergy1,
        caution_allergy2: model.caution_allergy2,
        caution_store: model.caution_store,
        size_description: model.size_description,
        size_image_url: model.size_image_url,
        ingredient: model.ingredient,
        nutrition: model.nutrition,
        review_good_taste: model.review_good_taste,
        review_good_taste_num: model.review_good_taste_num,
        review_good_delivery: model.review_good_delivery,
        review_good_delivery_num: model.review_good_delivery_num,
        review_bad_taste: model.review_bad_taste,
        review_bad_taste_num: model.review_bad_taste_num,
        review_bad_delivery: model.review_bad_delivery,
        review_bad_delivery_num: model.review_bad_delivery_num,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
