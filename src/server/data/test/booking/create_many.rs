use super::*;

/// Tests inserting one booking per requested slot.
///
/// Verifies that every row shares the user, level, date, and note and
/// is stored as active.
///
/// Expected: Ok with one booking per slot ordered by slot
#[tokio::test]
async fn creates_one_booking_per_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .create_many(
            user.id,
            &create_param(10, date(2030, 1, 15), &[14, 9], Some("Study session")),
        )
        .await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].slot, 9);
    assert_eq!(bookings[1].slot, 14);
    for booking in &bookings {
        assert_eq!(booking.user_id, user.id);
        assert_eq!(booking.level, 10);
        assert_eq!(booking.date, date(2030, 1, 15));
        assert_eq!(booking.note.as_deref(), Some("Study session"));
        assert_eq!(booking.status, "active");
    }

    Ok(())
}

/// Tests that a slot held by an active booking can't be booked again.
///
/// Verifies the batch fails with a unique constraint violation and that
/// none of the other requested slots were inserted.
///
/// Expected: Err(UniqueConstraintViolation) with no partial rows
#[tokio::test]
async fn rejects_taken_slot_without_partial_insert() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let holder = factory::create_user(db).await?;
    let requester = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, holder.id)
        .date(date(2030, 1, 15))
        .slot(10)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .create_many(
            requester.id,
            &create_param(9, date(2030, 1, 15), &[9, 10, 11], None),
        )
        .await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(SqlErr::UniqueConstraintViolation(_))
    ));

    let held = repo.get_active_with_owner_by_date(9, date(2030, 1, 15)).await?;
    assert_eq!(held.len(), 1);
    assert_eq!(held[0].0.user_id, holder.id);

    Ok(())
}

/// Tests that the same slot on another floor is independent.
///
/// Expected: Ok with the booking created
#[tokio::test]
async fn allows_same_slot_on_other_level() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, user.id)
        .level(9)
        .date(date(2030, 1, 15))
        .slot(10)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .create_many(user.id, &create_param(11, date(2030, 1, 15), &[10], None))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].level, 11);

    Ok(())
}

/// Tests rebooking a slot whose previous booking was cancelled.
///
/// Expected: Ok with the new booking created
#[tokio::test]
async fn allows_slot_of_cancelled_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, user.id)
        .date(date(2030, 1, 15))
        .slot(10)
        .cancelled()
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let bookings = repo
        .create_many(user.id, &create_param(9, date(2030, 1, 15), &[10], None))
        .await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].status, "active");

    Ok(())
}
