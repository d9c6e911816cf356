use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder, Set,
    TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::categories::CategoryRequest,
    entity::{
        categories::{
            ActiveModel as CategoryActive, Column as CategoryCol, Entity as Categories,
            Model as CategoryModel,
        },
        category_aspects::{Column as AspectCol, Entity as CategoryAspects, Model as AspectModel},
    },
    error::{AppError, AppResult},
    models::{Category, CategoryAspect},
    services::now,
    state::AppState,
};

pub async fn create_category(state: &AppState, payload: CategoryRequest) -> AppResult<Category> {
    payload.validate()?;

    let now = now();
    let category = CategoryActive {
        id: NotSet,
        name: Set(payload.name),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(category_id = category.id, "category created");
    Ok(category_from_entity(category, Vec::new()))
}

pub async fn list_categories(state: &AppState) -> AppResult<Vec<Category>> {
    let categories = Categories::find()
        .order_by_asc(CategoryCol::Id)
        .find_with_related(CategoryAspects)
        .order_by_asc(AspectCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(category, aspects)| category_from_entity(category, aspects))
        .collect();
    Ok(categories)
}

pub async fn get_category(state: &AppState, category_id: i32) -> AppResult<Category> {
    let category = find_category(&state.orm, category_id).await?;
    let aspects = aspects_of(&state.orm, &category).await?;
    Ok(category_from_entity(category, aspects))
}

pub async fn update_category(
    state: &AppState,
    category_id: i32,
    payload: CategoryRequest,
) -> AppResult<Category> {
    payload.validate()?;
    let txn = state.orm.begin().await?;

    let mut active: CategoryActive = find_category(&txn, category_id).await?.into();
    active.name = Set(payload.name);
    active.updated_at = Set(now());
    let category = active.update(&txn).await?;
    let aspects = aspects_of(&txn, &category).await?;

    txn.commit().await?;
    Ok(category_from_entity(category, aspects))
}

/// Aspects go with the category; products keep existing with no category.
pub async fn delete_category(state: &AppState, category_id: i32) -> AppResult<()> {
    let result = Categories::delete_by_id(category_id)
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(category_not_found(category_id));
    }

    tracing::info!(category_id, "category deleted");
    Ok(())
}

pub(crate) async fn find_category<C: ConnectionTrait>(
    db: &C,
    category_id: i32,
) -> AppResult<CategoryModel> {
    Categories::find_by_id(category_id)
        .one(db)
        .await?
        .ok_or_else(|| category_not_found(category_id))
}

async fn aspects_of<C: ConnectionTrait>(
    db: &C,
    category: &CategoryModel,
) -> AppResult<Vec<AspectModel>> {
    let aspects = category
        .find_related(CategoryAspects)
        .order_by_asc(AspectCol::Id)
        .all(db)
        .await?;
    Ok(aspects)
}

fn category_not_found(category_id: i32) -> AppError {
    AppError::not_found(format!("Category not found with id: {category_id}"))
}

fn category_from_entity(model: CategoryModel, aspects: Vec<AspectModel>) -> Category {
    Category {
        category_id: model.id,
        name: model.name,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        aspects: aspects
            .into_iter()
            .map(|aspect| CategoryAspect {
                id: aspect.id,
                aspect: aspect.aspect,
            })
            .collect(),
    }
}
