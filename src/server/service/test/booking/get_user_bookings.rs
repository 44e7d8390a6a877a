use super::*;

/// Tests listing a user's bookings across floors.
///
/// Expected: Ok with active bookings only
#[tokio::test]
async fn lists_active_bookings_across_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::default();
    let service = BookingService::new(db, &admins);

    service
        .create(create_param("111", 9, tomorrow(), &[8]))
        .await
        .unwrap();
    let cancelled = service
        .create(create_param("111", 10, tomorrow(), &[9, 10]))
        .await
        .unwrap();
    service
        .cancel(CancelBookingParam::new(cancelled[1].id, Some("111".to_string())).unwrap())
        .await
        .unwrap();

    let bookings = service.get_user_bookings("111").await.unwrap();

    let keys: Vec<(i32, String)> = bookings
        .iter()
        .map(|b| (b.level.value(), b.slot.to_string()))
        .collect();
    assert_eq!(
        keys,
        vec![(9, "08:00".to_string()), (10, "09:00".to_string())]
    );

    Ok(())
}

/// Tests that float-formatted IDs match the stored user.
///
/// Expected: Ok with the user's booking
#[tokio::test]
async fn normalizes_requested_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::default();
    let service = BookingService::new(db, &admins);

    service
        .create(create_param("111", 9, tomorrow(), &[8]))
        .await
        .unwrap();

    let bookings = service.get_user_bookings("111.0").await.unwrap();
    assert_eq!(bookings.len(), 1);

    Ok(())
}

/// Tests a user who has never booked.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn unknown_user_has_no_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::default();
    let service = BookingService::new(db, &admins);

    let bookings = service.get_user_bookings("999").await.unwrap();
    assert!(bookings.is_empty());

    Ok(())
}
