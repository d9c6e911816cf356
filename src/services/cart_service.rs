use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::carts::CartRequest,
    entity::{
        carts::{ActiveModel as CartActive, Column as CartCol, Entity as Carts, Model as CartModel},
        products::{Entity as Products, Model as ProductModel},
    },
    error::{AppError, AppResult},
    models::CartItem,
    services::{now, product_service::find_product, user_service::find_user},
    state::AppState,
};

pub async fn add_product_to_cart(
    state: &AppState,
    user_id: i32,
    payload: CartRequest,
) -> AppResult<CartItem> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;
    let product = find_product(&txn, payload.product_id).await?;

    let exists = Carts::find_by_user_and_product(user_id, product.id)
        .one(&txn)
        .await?
        .is_some();
    if exists {
        return Err(already_in_cart(product.id));
    }

    let cart = CartActive {
        id: NotSet,
        user_id: Set(user_id),
        product_id: Set(product.id),
        quantity: Set(payload.quantity),
        added_at: Set(now()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::debug!(user_id, product_id = product.id, "product added to cart");
    Ok(cart_from_entity(cart, Some(product)))
}

pub async fn list_cart_items(state: &AppState, user_id: i32) -> AppResult<Vec<CartItem>> {
    find_user(&state.orm, user_id).await?;
    let items = Carts::find_by_user(user_id)
        .find_also_related(Products)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(cart, product)| cart_from_entity(cart, product))
        .collect();
    Ok(items)
}

pub async fn get_cart_item(state: &AppState, user_id: i32, cart_id: i32) -> AppResult<CartItem> {
    find_user(&state.orm, user_id).await?;
    let (cart, product) = Carts::find_by_id_and_user(cart_id, user_id)
        .find_also_related(Products)
        .one(&state.orm)
        .await?
        .ok_or_else(|| cart_not_found(cart_id, user_id))?;
    Ok(cart_from_entity(cart, product))
}

pub async fn update_cart_item(
    state: &AppState,
    user_id: i32,
    cart_id: i32,
    payload: CartRequest,
) -> AppResult<CartItem> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let cart = Carts::find_by_id_and_user(cart_id, user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| cart_not_found(cart_id, user_id))?;

    let product = find_product(&txn, payload.product_id).await?;
    if cart.product_id != product.id {
        let taken = Carts::find_by_user_and_product(user_id, product.id)
            .one(&txn)
            .await?
            .is_some();
        if taken {
            return Err(already_in_cart(product.id));
        }
    }

    let mut active: CartActive = cart.into();
    active.product_id = Set(product.id);
    active.quantity = Set(payload.quantity);
    let cart = active.update(&txn).await?;

    txn.commit().await?;
    Ok(cart_from_entity(cart, Some(product)))
}

pub async fn remove_cart_item(state: &AppState, user_id: i32, cart_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let result = Carts::delete_many()
        .filter(CartCol::Id.eq(cart_id))
        .filter(CartCol::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(cart_not_found(cart_id, user_id));
    }

    txn.commit().await?;
    Ok(())
}

fn already_in_cart(product_id: i32) -> AppError {
    AppError::conflict(format!(
        "Product already exists in the cart: {product_id}"
    ))
}

fn cart_not_found(cart_id: i32, user_id: i32) -> AppError {
    AppError::not_found(format!(
        "Cart not found with id: {cart_id} for user id: {user_id}"
    ))
}

fn cart_from_entity(model: CartModel, product: Option<ProductModel>) -> CartItem {
    CartItem {
        cart_id: model.id,
        user_id: model.user_id,
        product_id: model.product_id,
        product_name: product.map(|p| p.name).unwrap_or_default(),
        quantity: model.quantity,
        added_at: model.added_at.with_timezone(&Utc),
    }
}
