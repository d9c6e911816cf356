use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set, TransactionTrait};
use validator::Validate;

use crate::{
    dto::categories::AspectRequest,
    entity::category_aspects::{
        ActiveModel as AspectActive, Entity as CategoryAspects, Model as AspectModel,
    },
    error::{AppError, AppResult},
    models::CategoryAspect,
    services::category_service::find_category,
    state::AppState,
};

pub async fn create_aspect(
    state: &AppState,
    category_id: i32,
    payload: AspectRequest,
) -> AppResult<CategoryAspect> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_category(&txn, category_id).await?;

    let aspect = AspectActive {
        id: NotSet,
        category_id: Set(category_id),
        aspect: Set(payload.aspect),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(aspect_from_entity(aspect))
}

pub async fn list_aspects(state: &AppState, category_id: i32) -> AppResult<Vec<CategoryAspect>> {
    find_category(&state.orm, category_id).await?;
    let aspects = CategoryAspects::find_by_category(category_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(aspect_from_entity)
        .collect();
    Ok(aspects)
}

pub async fn get_aspect(state: &AppState, aspect_id: i32) -> AppResult<CategoryAspect> {
    let aspect = find_aspect(&state.orm, aspect_id).await?;
    Ok(aspect_from_entity(aspect))
}

pub async fn update_aspect(
    state: &AppState,
    aspect_id: i32,
    payload: AspectRequest,
) -> AppResult<CategoryAspect> {
    payload.validate()?;
    let txn = state.orm.begin().await?;

    let mut active: AspectActive = find_aspect(&txn, aspect_id).await?.into();
    active.aspect = Set(payload.aspect);
    let aspect = active.update(&txn).await?;

    txn.commit().await?;
    Ok(aspect_from_entity(aspect))
}

pub async fn delete_aspect(state: &AppState, aspect_id: i32) -> AppResult<()> {
    let result = CategoryAspects::delete_by_id(aspect_id)
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(aspect_not_found(aspect_id));
    }
    Ok(())
}

async fn find_aspect<C: ConnectionTrait>(db: &C, aspect_id: i32) -> AppResult<AspectModel> {
    CategoryAspects::find_by_id(aspect_id)
        .one(db)
        .await?
        .ok_or_else(|| aspect_not_found(aspect_id))
}

fn aspect_not_found(aspect_id: i32) -> AppError {
    AppError::not_found(format!("Aspect not found with id: {aspect_id}"))
}

fn aspect_from_entity(model: AspectModel) -> CategoryAspect {
    CategoryAspect {
        id: model.id,
        aspect: model.aspect,
    }
}
