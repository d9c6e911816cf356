mod common;

use foodly_api::{
    dto::ranks::{ProductRankRequest, RankKey, UpdateProductRankRequest},
    error::AppError,
    services::rank_service,
    state::AppState,
};

async fn rank(
    state: &AppState,
    product_rank_id: i32,
    product_id: i32,
    aspect_id: i32,
    product_rank: i32,
) -> anyhow::Result<()> {
    rank_service::create_rank(
        state,
        ProductRankRequest {
            product_rank_id,
            product_id,
            aspect_id,
            category_id: 1,
            product_rank,
        },
    )
    .await?;
    Ok(())
}

#[tokio::test]
async fn all_four_key_parts_must_match() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    rank(&state, 1, 10, 100, 7).await?;

    let key = RankKey {
        product_rank_id: 1,
        product_id: 10,
        aspect_id: 100,
        category_id: 1,
    };
    assert_eq!(rank_service::get_rank(&state, key).await?.product_rank, 7);

    let wrong_category = RankKey {
        category_id: 2,
        ..key
    };
    let missing = rank_service::get_rank(&state, wrong_category).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let missed_update = rank_service::update_rank(
        &state,
        wrong_category,
        UpdateProductRankRequest { product_rank: 1 },
    )
    .await;
    assert!(matches!(missed_update, Err(AppError::NotFound(_))));

    let updated =
        rank_service::update_rank(&state, key, UpdateProductRankRequest { product_rank: 9 }).await?;
    assert_eq!(updated.product_rank, 9);

    let missed_delete = rank_service::delete_rank(&state, wrong_category).await;
    assert!(matches!(missed_delete, Err(AppError::NotFound(_))));

    rank_service::delete_rank(&state, key).await?;
    assert!(rank_service::list_ranks(&state).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn duplicate_key_is_a_conflict() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    rank(&state, 1, 10, 100, 7).await?;

    let duplicate = rank(&state, 1, 10, 100, 3).await;
    let err = duplicate.expect_err("duplicate key accepted");
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::Conflict(_))
    ));

    // Same product under another rank id is a separate row.
    rank(&state, 2, 10, 100, 3).await?;
    assert_eq!(rank_service::list_ranks(&state).await?.len(), 2);
    Ok(())
}

#[tokio::test]
async fn aspect_listing_is_best_first() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    rank(&state, 1, 10, 100, 3).await?;
    rank(&state, 2, 11, 100, 9).await?;
    rank(&state, 3, 12, 100, 5).await?;
    rank(&state, 4, 13, 200, 10).await?;

    let ranked = rank_service::list_ranks_by_aspect(&state, 100).await?;
    let order: Vec<_> = ranked.iter().map(|r| (r.product_id, r.product_rank)).collect();
    assert_eq!(order, [(11, 9), (12, 5), (10, 3)]);

    assert!(rank_service::list_ranks_by_aspect(&state, 300).await?.is_empty());
    Ok(())
}
