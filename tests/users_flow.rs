mod common;

use foodly_api::{
    dto::{addresses::AddressRequest, payments::PaymentRequest, users::{CreateUserRequest, UpdateUserRequest}},
    error::AppError,
    services::{address_service, payment_service, user_service},
};

#[tokio::test]
async fn user_crud_and_duplicate_email() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let user = common::create_user(&state, "kim@foodly.dev").await?;
    assert_eq!(user.username, "kim");

    let duplicate = user_service::create_user(
        &state,
        CreateUserRequest {
            email: "kim@foodly.dev".into(),
            username: "other".into(),
        },
    )
    .await;
    assert!(matches!(duplicate, Err(AppError::Conflict(_))));

    let updated = user_service::update_user(
        &state,
        user.user_id,
        UpdateUserRequest {
            username: "chef kim".into(),
        },
    )
    .await?;
    assert_eq!(updated.username, "chef kim");
    assert_eq!(updated.email, "kim@foodly.dev");

    assert_eq!(user_service::list_users(&state).await?.len(), 1);

    user_service::delete_user(&state, user.user_id).await?;
    let gone = user_service::get_user(&state, user.user_id).await;
    match gone {
        Err(AppError::NotFound(message)) => {
            assert_eq!(message, format!("User not found with id: {}", user.user_id))
        }
        other => panic!("expected NotFound, got {other:?}"),
    }

    let again = user_service::delete_user(&state, user.user_id).await;
    assert!(matches!(again, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn invalid_user_input_is_rejected() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let bad_email = user_service::create_user(
        &state,
        CreateUserRequest {
            email: "not-an-email".into(),
            username: "x".into(),
        },
    )
    .await;
    assert!(matches!(bad_email, Err(AppError::BadRequest(_))));

    let blank_name = user_service::create_user(
        &state,
        CreateUserRequest {
            email: "a@b.dev".into(),
            username: "   ".into(),
        },
    )
    .await;
    assert!(matches!(blank_name, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn addresses_are_scoped_to_their_user() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let owner = common::create_user(&state, "owner@foodly.dev").await?;
    let stranger = common::create_user(&state, "stranger@foodly.dev").await?;

    let address = common::create_address(&state, owner.user_id).await?;
    assert_eq!(address.user_id, owner.user_id);

    let updated = address_service::update_address(
        &state,
        owner.user_id,
        address.address_id,
        AddressRequest {
            address: "99 Harbor Road".into(),
        },
    )
    .await?;
    assert_eq!(updated.address, "99 Harbor Road");

    let foreign = address_service::get_address(&state, stranger.user_id, address.address_id).await;
    match foreign {
        Err(AppError::NotFound(message)) => assert_eq!(
            message,
            format!(
                "Address not found with id: {} for user id: {}",
                address.address_id, stranger.user_id
            )
        ),
        other => panic!("expected NotFound, got {other:?}"),
    }

    let foreign_delete =
        address_service::delete_address(&state, stranger.user_id, address.address_id).await;
    assert!(matches!(foreign_delete, Err(AppError::NotFound(_))));
    assert_eq!(
        address_service::list_addresses(&state, owner.user_id).await?.len(),
        1
    );

    let orphan = address_service::create_address(
        &state,
        9999,
        AddressRequest {
            address: "nowhere".into(),
        },
    )
    .await;
    assert!(matches!(orphan, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn payments_follow_the_same_ownership_rules() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "payer@foodly.dev").await?;
    let other = common::create_user(&state, "other@foodly.dev").await?;

    let payment = common::create_payment(&state, user.user_id, 15000).await?;
    assert_eq!(payment.payment_amount, 15000);
    assert_eq!(payment.status, "PAID");

    let refunded = payment_service::update_payment(
        &state,
        user.user_id,
        payment.payment_id,
        PaymentRequest {
            status: "REFUNDED".into(),
            payment_amount: 15000,
        },
    )
    .await?;
    assert_eq!(refunded.status, "REFUNDED");

    let wrong_owner = payment_service::get_payment(&state, other.user_id, payment.payment_id).await;
    assert!(matches!(wrong_owner, Err(AppError::NotFound(_))));

    let zero = payment_service::create_payment(
        &state,
        user.user_id,
        PaymentRequest {
            status: "PAID".into(),
            payment_amount: 0,
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    payment_service::delete_payment(&state, user.user_id, payment.payment_id).await?;
    assert!(payment_service::list_payments(&state, user.user_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleting_a_user_removes_owned_rows() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let user = common::create_user(&state, "leaving@foodly.dev").await?;
    let address = common::create_address(&state, user.user_id).await?;
    common::create_payment(&state, user.user_id, 1000).await?;

    user_service::delete_user(&state, user.user_id).await?;

    // Re-creating the email works and the old address is unreachable.
    let fresh = common::create_user(&state, "leaving@foodly.dev").await?;
    let old = address_service::get_address(&state, fresh.user_id, address.address_id).await;
    assert!(matches!(old, Err(AppError::NotFound(_))));
    assert!(payment_service::list_payments(&state, fresh.user_id).await?.is_empty());
    Ok(())
}
