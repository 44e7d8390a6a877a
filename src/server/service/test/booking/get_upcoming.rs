use super::*;

/// Tests the upcoming window on a given day.
///
/// With today being Tuesday 2030-01-15 the window runs through Sunday
/// 2030-01-27; earlier and later bookings are excluded.
///
/// Expected: Ok with in-window bookings ordered by date then slot
#[tokio::test]
async fn lists_bookings_through_next_sunday() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::default();

    let user = factory::user::UserFactory::new(db)
        .display_name("Gabriel")
        .build()
        .await?;
    for (day, slot) in [(14, 9), (15, 20), (15, 6), (27, 23), (28, 0)] {
        factory::booking::BookingFactory::new(db, user.id)
            .level(10)
            .date(date(2030, 1, day))
            .slot(slot)
            .build()
            .await?;
    }

    let service = BookingService::new(db, &admins);
    let upcoming = service
        .get_upcoming_for_day(Level::new(10).unwrap(), date(2030, 1, 15))
        .await
        .unwrap();

    let keys: Vec<(NaiveDate, String)> = upcoming
        .iter()
        .map(|b| (b.booking.date, b.booking.slot.to_string()))
        .collect();
    assert_eq!(
        keys,
        vec![
            (date(2030, 1, 15), "06:00".to_string()),
            (date(2030, 1, 15), "20:00".to_string()),
            (date(2030, 1, 27), "23:00".to_string()),
        ]
    );
    assert!(upcoming.iter().all(|b| b.owner.display_name == "Gabriel"));

    Ok(())
}
