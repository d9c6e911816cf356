use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::addresses::AddressRequest,
    entity::addresses::{
        ActiveModel as AddressActive, Column as AddressCol, Entity as Addresses,
        Model as AddressModel,
    },
    error::{AppError, AppResult},
    models::Address,
    services::{now, user_service::find_user},
    state::AppState,
};

pub async fn create_address(
    state: &AppState,
    user_id: i32,
    payload: AddressRequest,
) -> AppResult<Address> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let now = now();
    let address = AddressActive {
        id: NotSet,
        user_id: Set(user_id),
        address: Set(payload.address),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(address_from_entity(address))
}

pub async fn list_addresses(state: &AppState, user_id: i32) -> AppResult<Vec<Address>> {
    find_user(&state.orm, user_id).await?;
    let addresses = Addresses::find_by_user(user_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(address_from_entity)
        .collect();
    Ok(addresses)
}

pub async fn get_address(state: &AppState, user_id: i32, address_id: i32) -> AppResult<Address> {
    find_user(&state.orm, user_id).await?;
    let address = find_address(&state.orm, address_id, user_id).await?;
    Ok(address_from_entity(address))
}

pub async fn update_address(
    state: &AppState,
    user_id: i32,
    address_id: i32,
    payload: AddressRequest,
) -> AppResult<Address> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let mut active: AddressActive = find_address(&txn, address_id, user_id).await?.into();
    active.address = Set(payload.address);
    active.updated_at = Set(now());
    let address = active.update(&txn).await?;

    txn.commit().await?;
    Ok(address_from_entity(address))
}

pub async fn delete_address(state: &AppState, user_id: i32, address_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let result = Addresses::delete_many()
        .filter(AddressCol::Id.eq(address_id))
        .filter(AddressCol::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(address_not_found(address_id, user_id));
    }

    txn.commit().await?;
    Ok(())
}

/// Loads an address only if it belongs to `user_id`.
pub(crate) async fn find_address<C: ConnectionTrait>(
    db: &C,
    address_id: i32,
    user_id: i32,
) -> AppResult<AddressModel> {
    Addresses::find_by_id_and_user(address_id, user_id)
        .one(db)
        .await?
        .ok_or_else(|| address_not_found(address_id, user_id))
}

fn address_not_found(address_id: i32, user_id: i32) -> AppError {
    AppError::not_found(format!(
        "Address not found with id: {address_id} for user id: {user_id}"
    ))
}

fn address_from_entity(model: AddressModel) -> Address {
    Address {
        address_id: model.id,
        user_id: model.user_id,
        address: model.address,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
