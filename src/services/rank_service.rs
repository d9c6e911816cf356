use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, TransactionTrait};

use crate::{
    dto::ranks::{ProductRankRequest, RankKey, UpdateProductRankRequest},
    entity::product_ranks::{
        ActiveModel as RankActive, Column as RankCol, Entity as ProductRanks, Model as RankModel,
    },
    error::{AppError, AppResult},
    models::ProductRank,
    state::AppState,
};

pub async fn create_rank(state: &AppState, payload: ProductRankRequest) -> AppResult<ProductRank> {
    let key = RankKey {
        product_rank_id: payload.product_rank_id,
        product_id: payload.product_id,
        aspect_id: payload.aspect_id,
        category_id: payload.category_id,
    };

    let txn = state.orm.begin().await?;
    if ProductRanks::find_by_id(key.as_tuple()).one(&txn).await?.is_some() {
        return Err(AppError::conflict(format!(
            "ProductRank already exists: {:?}",
            key.as_tuple()
        )));
    }

    let rank = RankActive {
        product_rank_id: Set(key.product_rank_id),
        product_id: Set(key.product_id),
        aspect_id: Set(key.aspect_id),
        category_id: Set(key.category_id),
        product_rank: Set(payload.product_rank),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(?key, product_rank = rank.product_rank, "product rank created");
    Ok(rank_from_entity(rank))
}

pub async fn list_ranks(state: &AppState) -> AppResult<Vec<ProductRank>> {
    let ranks = ProductRanks::find()
        .order_by_asc(RankCol::ProductRankId)
        .order_by_asc(RankCol::ProductId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(rank_from_entity)
        .collect();
    Ok(ranks)
}

pub async fn get_rank(state: &AppState, key: RankKey) -> AppResult<ProductRank> {
    let rank = find_rank(&state.orm, key).await?;
    Ok(rank_from_entity(rank))
}

pub async fn update_rank(
    state: &AppState,
    key: RankKey,
    payload: UpdateProductRankRequest,
) -> AppResult<ProductRank> {
    let txn = state.orm.begin().await?;
    let existing = find_rank(&txn, key).await?;

    let mut active: RankActive = existing.into();
    active.product_rank = Set(payload.product_rank);
    let rank = active.update(&txn).await?;

    txn.commit().await?;
    Ok(rank_from_entity(rank))
}

pub async fn delete_rank(state: &AppState, key: RankKey) -> AppResult<()> {
    let result = ProductRanks::delete_by_id(key.as_tuple())
        .exec(&state.orm)
        .await?;

    if result.rows_affected == 0 {
        return Err(rank_not_found(key));
    }

    tracing::info!(?key, "product rank deleted");
    Ok(())
}

/// Ranks for one aspect, best first.
pub async fn list_ranks_by_aspect(state: &AppState, aspect_id: i32) -> AppResult<Vec<ProductRank>> {
    let ranks = ProductRanks::find_by_aspect_ordered(aspect_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(rank_from_entity)
        .collect();
    Ok(ranks)
}

async fn find_rank<C: ConnectionTrait>(db: &C, key: RankKey) -> AppResult<RankModel> {
    ProductRanks::find_by_id(key.as_tuple())
        .one(db)
        .await?
        .ok_or_else(|| rank_not_found(key))
}

fn rank_not_found(key: RankKey) -> AppError {
    AppError::not_found(format!("ProductRank not found: {:?}", key.as_tuple()))
}

fn rank_from_entity(model: RankModel) -> ProductRank {
    ProductRank {
        product_rank_id: model.product_rank_id,
        product_id: model.product_id,
        aspect_id: model.aspect_id,
        category_id: model.category_id,
        product_rank: model.product_rank,
    }
}
