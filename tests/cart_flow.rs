mod common;

use foodly_api::{dto::carts::CartRequest, error::AppError, services::cart_service};

#[tokio::test]
async fn same_product_cannot_be_added_twice() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "cart@foodly.dev").await?;
    let category = common::create_category(&state, "Snacks").await?;
    let chips = common::create_product(&state, category.category_id, "Chips", 1500).await?;

    let item = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: chips.product_id,
            quantity: 2,
        },
    )
    .await?;
    assert_eq!(item.product_name, "Chips");
    assert_eq!(item.quantity, 2);

    let again = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: chips.product_id,
            quantity: 1,
        },
    )
    .await;
    match again {
        Err(AppError::Conflict(message)) => assert_eq!(
            message,
            format!("Product already exists in the cart: {}", chips.product_id)
        ),
        other => panic!("expected Conflict, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn cart_items_update_and_remove() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "buyer@foodly.dev").await?;
    let other = common::create_user(&state, "other@foodly.dev").await?;
    let category = common::create_category(&state, "Drinks").await?;
    let cola = common::create_product(&state, category.category_id, "Cola", 1200).await?;
    let cider = common::create_product(&state, category.category_id, "Cider", 1300).await?;

    let cola_row = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: cola.product_id,
            quantity: 1,
        },
    )
    .await?;
    let cider_row = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: cider.product_id,
            quantity: 1,
        },
    )
    .await?;

    // Moving the cola row onto a product already in the cart collides.
    let collide = cart_service::update_cart_item(
        &state,
        user.user_id,
        cola_row.cart_id,
        CartRequest {
            product_id: cider.product_id,
            quantity: 3,
        },
    )
    .await;
    assert!(matches!(collide, Err(AppError::Conflict(_))));

    let bumped = cart_service::update_cart_item(
        &state,
        user.user_id,
        cola_row.cart_id,
        CartRequest {
            product_id: cola.product_id,
            quantity: 6,
        },
    )
    .await?;
    assert_eq!(bumped.quantity, 6);

    let foreign = cart_service::remove_cart_item(&state, other.user_id, cider_row.cart_id).await;
    assert!(matches!(foreign, Err(AppError::NotFound(_))));

    cart_service::remove_cart_item(&state, user.user_id, cider_row.cart_id).await?;
    let remaining = cart_service::list_cart_items(&state, user.user_id).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].product_id, cola.product_id);
    Ok(())
}

#[tokio::test]
async fn missing_parents_and_bad_quantity() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "edge@foodly.dev").await?;

    let no_product = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: 404,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(no_product, Err(AppError::NotFound(_))));

    let no_user = cart_service::list_cart_items(&state, 404).await;
    assert!(matches!(no_user, Err(AppError::NotFound(_))));

    let zero = cart_service::add_product_to_cart(
        &state,
        user.user_id,
        CartRequest {
            product_id: 1,
            quantity: 0,
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));
    Ok(())
}
