use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use validator::Validate;

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    models::User,
    services::now,
    state::AppState,
};

pub async fn create_user(state: &AppState, payload: CreateUserRequest) -> AppResult<User> {
    payload.validate()?;
    let txn = state.orm.begin().await?;

    if Users::find_by_email(&payload.email).one(&txn).await?.is_some() {
        return Err(AppError::conflict(format!(
            "Email is already taken: {}",
            payload.email
        )));
    }

    let now = now();
    let user = UserActive {
        id: NotSet,
        email: Set(payload.email),
        username: Set(payload.username),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    tracing::info!(user_id = user.id, "user created");

    Ok(user_from_entity(user))
}

pub async fn list_users(state: &AppState) -> AppResult<Vec<User>> {
    let users = Users::find()
        .order_by_asc(UserCol::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(user_from_entity)
        .collect();
    Ok(users)
}

pub async fn get_user(state: &AppState, user_id: i32) -> AppResult<User> {
    let user = find_user(&state.orm, user_id).await?;
    Ok(user_from_entity(user))
}

pub async fn update_user(
    state: &AppState,
    user_id: i32,
    payload: UpdateUserRequest,
) -> AppResult<User> {
    payload.validate()?;
    let txn = state.orm.begin().await?;

    let mut active: UserActive = find_user(&txn, user_id).await?.into();
    active.username = Set(payload.username);
    active.updated_at = Set(now());
    let user = active.update(&txn).await?;

    txn.commit().await?;
    Ok(user_from_entity(user))
}

pub async fn delete_user(state: &AppState, user_id: i32) -> AppResult<()> {
    let result = Users::delete_by_id(user_id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(user_not_found(user_id));
    }

    tracing::info!(user_id, "user deleted");
    Ok(())
}

/// Loads a user or fails with NotFound; every user-scoped service starts here.
pub(crate) async fn find_user<C: ConnectionTrait>(db: &C, user_id: i32) -> AppResult<UserModel> {
    Users::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| user_not_found(user_id))
}

fn user_not_found(user_id: i32) -> AppError {
    AppError::not_found(format!("User not found with id: {user_id}"))
}

fn user_from_entity(model: UserModel) -> User {
    User {
        user_id: model.id,
        email: model.email,
        username: model.username,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    }
}
