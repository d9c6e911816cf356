use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::payments::PaymentRequest,
    entity::payments::{
        ActiveModel as PaymentActive, Column as PaymentCol, Entity as Payments,
        Model as PaymentModel,
    },
    error::{AppError, AppResult},
    models::Payment,
    services::{now, user_service::find_user},
    state::AppState,
};

pub async fn create_payment(
    state: &AppState,
    user_id: i32,
    payload: PaymentRequest,
) -> AppResult<Payment> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let payment = PaymentActive {
        id: NotSet,
        user_id: Set(user_id),
        status: Set(payload.status),
        payment_amount: Set(payload.payment_amount),
        payment_date: Set(now()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(user_id, payment_id = payment.id, "payment recorded");
    Ok(payment_from_entity(payment))
}

pub async fn list_payments(state: &AppState, user_id: i32) -> AppResult<Vec<Payment>> {
    find_user(&state.orm, user_id).await?;
    let payments = Payments::find_by_user(user_id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(payment_from_entity)
        .collect();
    Ok(payments)
}

pub async fn get_payment(state: &AppState, user_id: i32, payment_id: i32) -> AppResult<Payment> {
    find_user(&state.orm, user_id).await?;
    let payment = find_payment(&state.orm, payment_id, user_id).await?;
    Ok(payment_from_entity(payment))
}

pub async fn update_payment(
    state: &AppState,
    user_id: i32,
    payment_id: i32,
    payload: PaymentRequest,
) -> AppResult<Payment> {
    payload.validate()?;
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let mut active: PaymentActive = find_payment(&txn, payment_id, user_id).await?.into();
    active.status = Set(payload.status);
    active.payment_amount = Set(payload.payment_amount);
    let payment = active.update(&txn).await?;

    txn.commit().await?;
    Ok(payment_from_entity(payment))
}

pub async fn delete_payment(state: &AppState, user_id: i32, payment_id: i32) -> AppResult<()> {
    let txn = state.orm.begin().await?;
    find_user(&txn, user_id).await?;

    let result = Payments::delete_many()
        .filter(PaymentCol::Id.eq(payment_id))
        .filter(PaymentCol::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(payment_not_found(payment_id, user_id));
    }

    txn.commit().await?;
    Ok(())
}

/// Loads a payment only if it belongs to `user_id`.
pub(crate) async fn find_payment<C: ConnectionTrait>(
    db: &C,
    payment_id: i32,
    user_id: i32,
) -> AppResult<PaymentModel> {
    Payments::find_by_id_and_user(payment_id, user_id)
        .one(db)
        .await?
        .ok_or_else(|| payment_not_found(payment_id, user_id))
}

fn payment_not_found(payment_id: i32, user_id: i32) -> AppError {
    AppError::not_found(format!(
        "Payment not found with id: {payment_id} for user id: {user_id}"
    ))
}

fn payment_from_entity(model: PaymentModel) -> Payment {
    Payment {
        payment_id: model.id,
        user_id: model.user_id,
        status: model.status,
        payment_amount: model.payment_amount,
        payment_date: model.payment_date.with_timezone(&Utc),
    }
}
