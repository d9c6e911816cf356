mod common;

use foodly_api::{
    dto::orders::{OrderItemRequest, OrderRequest},
    error::AppError,
    services::order_service,
};

fn order_request(payment_id: i32, address_id: i32, items: Vec<(i32, i32, i32)>) -> OrderRequest {
    OrderRequest {
        payment_id,
        address_id,
        order_status: "PLACED".into(),
        total_amount: items.iter().map(|(_, qty, price)| qty * price).sum(),
        order_items: items
            .into_iter()
            .map(|(product_id, quantity, unit_price)| OrderItemRequest {
                product_id,
                quantity,
                unit_price,
            })
            .collect(),
    }
}

// Order placed with two items, then rewritten with a single different item.
#[tokio::test]
async fn update_replaces_every_item() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "orders@foodly.dev").await?;
    let address = common::create_address(&state, user.user_id).await?;
    let payment = common::create_payment(&state, user.user_id, 10000).await?;
    let category = common::create_category(&state, "Bakery").await?;
    let bread = common::create_product(&state, category.category_id, "Bread", 3000).await?;
    let bagel = common::create_product(&state, category.category_id, "Bagel", 2000).await?;
    let scone = common::create_product(&state, category.category_id, "Scone", 2500).await?;

    let order = order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            address.address_id,
            vec![(bread.product_id, 2, 3000), (bagel.product_id, 1, 2000)],
        ),
    )
    .await?;
    assert_eq!(order.order_items.len(), 2);
    assert_eq!(order.total_amount, 8000);
    assert_eq!(order.order_items[0].product_name, "Bread");

    let updated = order_service::update_order(
        &state,
        user.user_id,
        order.order_id,
        OrderRequest {
            order_status: "SHIPPED".into(),
            ..order_request(
                payment.payment_id,
                address.address_id,
                vec![(scone.product_id, 4, 2500)],
            )
        },
    )
    .await?;
    assert_eq!(updated.order_status, "SHIPPED");
    assert_eq!(updated.order_items.len(), 1);
    assert_eq!(updated.order_items[0].product_id, scone.product_id);

    let fetched = order_service::get_order(&state, user.user_id, order.order_id).await?;
    assert_eq!(fetched.order_items.len(), 1);
    assert_eq!(fetched.order_items[0].product_name, "Scone");
    assert_eq!(fetched.total_amount, 10000);
    Ok(())
}

#[tokio::test]
async fn orders_belong_to_one_user() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "mine@foodly.dev").await?;
    let other = common::create_user(&state, "theirs@foodly.dev").await?;
    let address = common::create_address(&state, user.user_id).await?;
    let payment = common::create_payment(&state, user.user_id, 5000).await?;
    let other_address = common::create_address(&state, other.user_id).await?;
    let category = common::create_category(&state, "Fruit").await?;
    let apple = common::create_product(&state, category.category_id, "Apple", 1000).await?;

    // Another user's address cannot back this order.
    let borrowed = order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            other_address.address_id,
            vec![(apple.product_id, 5, 1000)],
        ),
    )
    .await;
    assert!(matches!(borrowed, Err(AppError::NotFound(_))));

    let order = order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            address.address_id,
            vec![(apple.product_id, 5, 1000)],
        ),
    )
    .await?;

    let peek = order_service::get_order(&state, other.user_id, order.order_id).await;
    match peek {
        Err(AppError::NotFound(message)) => assert_eq!(
            message,
            format!(
                "Order not found with id: {} for user id: {}",
                order.order_id, other.user_id
            )
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }
    assert!(order_service::list_orders(&state, other.user_id).await?.is_empty());
    assert_eq!(order_service::list_orders(&state, user.user_id).await?.len(), 1);

    order_service::delete_order(&state, user.user_id, order.order_id).await?;
    assert!(order_service::list_orders(&state, user.user_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn unknown_product_rolls_back_the_order() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "rollback@foodly.dev").await?;
    let address = common::create_address(&state, user.user_id).await?;
    let payment = common::create_payment(&state, user.user_id, 5000).await?;
    let category = common::create_category(&state, "Dairy").await?;
    let milk = common::create_product(&state, category.category_id, "Milk", 2500).await?;

    let result = order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            address.address_id,
            vec![(milk.product_id, 1, 2500), (777, 1, 2500)],
        ),
    )
    .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(order_service::list_orders(&state, user.user_id).await?.is_empty());

    let invalid = order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            address.address_id,
            vec![(milk.product_id, 0, 2500)],
        ),
    )
    .await;
    assert!(matches!(invalid, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn payment_used_by_an_order_cannot_be_deleted() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "held@foodly.dev").await?;
    let address = common::create_address(&state, user.user_id).await?;
    let payment = common::create_payment(&state, user.user_id, 2000).await?;
    let category = common::create_category(&state, "Eggs").await?;
    let eggs = common::create_product(&state, category.category_id, "Eggs x10", 2000).await?;

    order_service::create_order(
        &state,
        user.user_id,
        order_request(
            payment.payment_id,
            address.address_id,
            vec![(eggs.product_id, 1, 2000)],
        ),
    )
    .await?;

    let blocked =
        foodly_api::services::payment_service::delete_payment(&state, user.user_id, payment.payment_id)
            .await;
    assert!(matches!(blocked, Err(AppError::Conflict(_))));
    Ok(())
}
