use super::*;

/// Tests listing active bookings for a floor and date with owners.
///
/// Verifies that cancelled bookings, other dates, and other floors are excluded
/// and that each booking carries its owner.
///
/// Expected: Ok with only matching active bookings ordered by slot
#[tokio::test]
async fn returns_active_bookings_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .display_name("Gabriel")
        .username(Some("gabe"))
        .build()
        .await?;
    let day = date(2030, 1, 15);

    factory::booking::BookingFactory::new(db, user.id).date(day).slot(16).build().await?;
    factory::booking::BookingFactory::new(db, user.id).date(day).slot(8).build().await?;
    factory::booking::BookingFactory::new(db, user.id)
        .date(day)
        .slot(12)
        .cancelled()
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id)
        .date(day)
        .level(10)
        .slot(9)
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, user.id)
        .date(date(2030, 1, 16))
        .slot(9)
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo.get_active_with_owner_by_date(9, day).await?;

    let slots: Vec<i32> = result.iter().map(|(booking, _)| booking.slot).collect();
    assert_eq!(slots, vec![8, 16]);

    let owner = result[0].1.as_ref().unwrap();
    assert_eq!(owner.display_name, "Gabriel");
    assert_eq!(owner.username.as_deref(), Some("gabe"));

    Ok(())
}

/// Tests a date with no bookings.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_free_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let result = repo.get_active_with_owner_by_date(9, date(2030, 1, 15)).await?;

    assert!(result.is_empty());

    Ok(())
}
