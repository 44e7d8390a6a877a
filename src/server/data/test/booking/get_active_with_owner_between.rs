use super::*;

/// Tests listing active bookings in an inclusive date range.
///
/// Verifies that both range ends are included, dates outside the range are
/// excluded, and results are ordered by date then slot.
///
/// Expected: Ok with in-range bookings ordered by date then slot
#[tokio::test]
async fn returns_bookings_within_inclusive_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    for (day, slot) in [(27, 9), (15, 18), (15, 7), (14, 10), (28, 10), (20, 12)] {
        factory::booking::BookingFactory::new(db, user.id)
            .level(11)
            .date(date(2030, 1, day))
            .slot(slot)
            .build()
            .await?;
    }

    let repo = BookingRepository::new(db);
    let result = repo
        .get_active_with_owner_between(11, date(2030, 1, 15), date(2030, 1, 27))
        .await?;

    let keys: Vec<(NaiveDate, i32)> = result
        .iter()
        .map(|(booking, _)| (booking.date, booking.slot))
        .collect();
    assert_eq!(
        keys,
        vec![
            (date(2030, 1, 15), 7),
            (date(2030, 1, 15), 18),
            (date(2030, 1, 20), 12),
            (date(2030, 1, 27), 9),
        ]
    );
    assert!(result.iter().all(|(_, owner)| owner.is_some()));

    Ok(())
}

/// Tests that bookings on other floors are excluded.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn excludes_other_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    factory::booking::BookingFactory::new(db, user.id)
        .level(9)
        .date(date(2030, 1, 16))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let result = repo
        .get_active_with_owner_between(10, date(2030, 1, 15), date(2030, 1, 27))
        .await?;

    assert!(result.is_empty());

    Ok(())
}
