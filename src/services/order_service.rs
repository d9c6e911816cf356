use std::collections::HashMap;

use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::orders::{OrderItemRequest, OrderRequest},
    entity::{
        order_items::{
            ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems,
            Model as OrderItemModel,
        },
        orders::{ActiveModel as OrderActive, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem},
    services::{
        address_service::find_address, now, payment_service::find_payment,
        product_service::find_product, user_service::find_user,
    },
    state::AppState,
};

pub async fn create_order(state: &AppState, user_id: i32, payload: OrderRequest) -> AppResult<Order> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;
    find_payment(&txn, payload.payment_id, user_id).await?;
    find_address(&txn, payload.address_id, user_id).await?;

    let now = now();
    let order = OrderActive {
        id: NotSet,
        user_id: Set(user_id),
        payment_id: Set(payload.payment_id),
        address_id: Set(payload.address_id),
        order_status: Set(payload.order_status),
        total_amount: Set(payload.total_amount),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    let items = insert_items(&txn, order.id, payload.order_items).await?;

    txn.commit().await?;
    tracing::info!(user_id, order_id = order.id, items = items.len(), "order created");
    Ok(order_from_entity(order, items))
}

pub async fn list_orders(state: &AppState, user_id: i32) -> AppResult<Vec<Order>> {
    find_user(&state.orm, user_id).await?;
    let orders = Orders::find_by_user(user_id).all(&state.orm).await?;

    let order_ids = orders.iter().map(|order| order.id).collect();
    let mut items = load_items(&state.orm, order_ids).await?;

    let orders = orders
        .into_iter()
        .map(|order| {
            let order_items = items.remove(&order.id).unwrap_or_default();
            order_from_entity(order, order_items)
        })
        .collect();
    Ok(orders)
}

pub async fn get_order(state: &AppState, user_id: i32, order_id: i32) -> AppResult<Order> {
    find_user(&state.orm, user_id).await?;
    let order = find_order(&state.orm, order_id, user_id).await?;
    let items = load_items(&state.orm, vec![order.id])
        .await?
        .remove(&order.id)
        .unwrap_or_default();
    Ok(order_from_entity(order, items))
}

/// Overwrites the order and replaces its items wholesale: every stored item is
/// deleted and the request's items are inserted fresh.
pub async fn update_order(
    state: &AppState,
    user_id: i32,
    order_id: i32,
    payload: OrderRequest,
) -> AppResult<Order> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;
    let order = find_order(&txn, order_id, user_id).await?;
    find_payment(&txn, payload.payment_id, user_id).await?;
    find_address(&txn, payload.address_id, user_id).await?;

    let mut active: OrderActive = order.into();
    active.payment_id = Set(payload.payment_id);
    active.address_id = Set(payload.address_id);
    active.order_status = Set(payload.order_status);
    active.total_amount = Set(payload.total_amount);
    active.updated_at = Set(now());
    let order = active.update(&txn).await?;

    let removed = OrderItems::delete_many()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .exec(&txn)
        .await?;
    let items = insert_items(&txn, order.id, payload.order_items).await?;

    txn.commit().await?;
    tracing::info!(
        order_id = order.id,
        removed = removed.rows_affected,
        inserted = items.len(),
        "order items replaced"
    );
    Ok(order_from_entity(order, items))
}

pub async fn delete_order(state: &AppState, user_id: i32, order_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;
    let order = find_order(&txn, order_id, user_id).await?;

    OrderItems::delete_many()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .exec(&txn)
        .await?;
    Orders::delete_by_id(order.id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(user_id, order_id, "order deleted");
    Ok(())
}

async fn find_order<C: ConnectionTrait>(db: &C, order_id: i32, user_id: i32) -> AppResult<OrderModel> {
    Orders::find_by_id_and_user(order_id, user_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "Order not found with id: {order_id} for user id: {user_id}"
            ))
        })
}

async fn insert_items(
    txn: &DatabaseTransaction,
    order_id: i32,
    requests: Vec<OrderItemRequest>,
) -> AppResult<Vec<OrderItem>> {
    let mut items = Vec::with_capacity(requests.len());
    for request in requests {
        let product = find_product(txn, request.product_id).await?;
        let item = OrderItemActive {
            id: NotSet,
            order_id: Set(order_id),
            product_id: Set(product.id),
            quantity: Set(request.quantity),
            unit_price: Set(request.unit_price),
        }
        .insert(txn)
        .await?;
        items.push(order_item_from_entity(item, product.name));
    }
    Ok(items)
}

/// Items for the given orders, grouped by order id, each carrying its product name.
async fn load_items<C: ConnectionTrait>(
    db: &C,
    order_ids: Vec<i32>,
) -> AppResult<HashMap<i32, Vec<OrderItem>>> {
    let mut grouped: HashMap<i32, Vec<OrderItem>> = HashMap::new();
    if order_ids.is_empty() {
        return Ok(grouped);
    }

    let rows = OrderItems::find_by_orders(order_ids)
        .find_also_related(Products)
        .all(db)
        .await?;
    for (item, product) in rows {
        let product_name = product.map(|p| p.name).unwrap_or_default();
        grouped
            .entry(item.order_id)
            .or_default()
            .push(order_item_from_entity(item, product_name));
    }
    Ok(grouped)
}

fn order_from_entity(model: OrderModel, items: Vec<OrderItem>) -> Order {
    Order {
        order_id: model.id,
        user_id: model.user_id,
        payment_id: model.payment_id,
        address_id: model.address_id,
        order_status: model.order_status,
        total_amount: model.total_amount,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
        order_items: items,
    }
}

fn order_item_from_entity(model: OrderItemModel, product_name: String) -> OrderItem {
    OrderItem {
        order_item_id: model.id,
        product_id: model.product_id,
        product_name,
        quantity: model.quantity,
        unit_price: model.unit_price,
    }
}
