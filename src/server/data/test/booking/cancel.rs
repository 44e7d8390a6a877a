use super::*;
use sea_orm::EntityTrait;

/// Tests an owner cancelling their own booking.
///
/// Verifies the status flips to cancelled and the row is kept.
///
/// Expected: Ok(true)
#[tokio::test]
async fn owner_cancels_own_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user_with_id(db, "111").await?;
    let booking = factory::create_booking(db, user.id).await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel(booking.id, Some("111")).await?;

    assert!(cancelled);
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "cancelled");

    Ok(())
}

/// Tests that another user's booking can't be cancelled with an ownership check.
///
/// Expected: Ok(false) with the booking still active
#[tokio::test]
async fn rejects_booking_of_other_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user_with_id(db, "111").await?;
    factory::create_user_with_id(db, "222").await?;
    let booking = factory::create_booking(db, owner.id).await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel(booking.id, Some("222")).await?;

    assert!(!cancelled);
    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, "active");

    Ok(())
}

/// Tests cancelling without an ownership check.
///
/// Expected: Ok(true)
#[tokio::test]
async fn cancels_any_booking_without_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, booking) = factory::helpers::create_booking_with_user(db).await?;

    let repo = BookingRepository::new(db);
    let cancelled = repo.cancel(booking.id, None).await?;

    assert!(cancelled);

    Ok(())
}

/// Tests cancelling a booking that is already cancelled or doesn't exist.
///
/// Expected: Ok(false) in both cases
#[tokio::test]
async fn ignores_cancelled_and_missing_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let booking = factory::booking::BookingFactory::new(db, user.id)
        .cancelled()
        .build()
        .await?;

    let repo = BookingRepository::new(db);

    assert!(!repo.cancel(booking.id, None).await?);
    assert!(!repo.cancel(booking.id + 1000, None).await?);

    Ok(())
}
