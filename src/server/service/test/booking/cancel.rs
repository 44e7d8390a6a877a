use super::*;

/// Tests that a regular user can't cancel someone else's booking.
///
/// Expected: Err(NotFoundOrUnauthorized) with the booking still active
#[tokio::test]
async fn non_admin_cannot_cancel_other_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::from_csv("999");
    let service = BookingService::new(db, &admins);

    let created = service
        .create(create_param("111", 9, tomorrow(), &[10]))
        .await
        .unwrap();

    let result = service
        .cancel(CancelBookingParam::new(created[0].id, Some("222".to_string())).unwrap())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFoundOrUnauthorized))
    ));
    assert_eq!(service.get_user_bookings("111").await.unwrap().len(), 1);

    Ok(())
}

/// Tests that an administrator can cancel any booking.
///
/// Expected: Ok with the booking no longer listed
#[tokio::test]
async fn admin_cancels_any_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::from_csv("999");
    let service = BookingService::new(db, &admins);

    let created = service
        .create(create_param("111", 9, tomorrow(), &[10]))
        .await
        .unwrap();

    service
        .cancel(CancelBookingParam::new(created[0].id, Some("999".to_string())).unwrap())
        .await
        .unwrap();

    assert!(service.get_user_bookings("111").await.unwrap().is_empty());

    Ok(())
}

/// Tests that an administrator who never booked still has override rights.
///
/// Expected: Ok
#[tokio::test]
async fn admin_without_user_row_can_cancel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::from_csv("999");

    let (_user, booking) = factory::helpers::create_booking_with_user(db).await?;

    let service = BookingService::new(db, &admins);
    let result = service
        .cancel(CancelBookingParam::new(booking.id, Some("999.0".to_string())).unwrap())
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests cancelling a booking twice.
///
/// Expected: second attempt returns Err(NotFoundOrUnauthorized)
#[tokio::test]
async fn second_cancel_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admins = AdminService::default();
    let service = BookingService::new(db, &admins);

    let created = service
        .create(create_param("111", 9, tomorrow(), &[10]))
        .await
        .unwrap();
    let param = CancelBookingParam::new(created[0].id, Some("111".to_string())).unwrap();

    service.cancel(param.clone()).await.unwrap();
    let result = service.cancel(param).await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::NotFoundOrUnauthorized))
    ));

    Ok(())
}
