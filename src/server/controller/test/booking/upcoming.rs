use super::*;

/// Tests listing upcoming bookings on a floor.
///
/// Expected: 200 with bookings from today onwards, past bookings excluded
#[tokio::test]
async fn lists_upcoming_bookings() {
    let (server, test) = setup("").await;
    let db = test.db.as_ref().unwrap();

    book(&server, "111", &["12:00"]).await;

    let user = factory::create_user(db).await.unwrap();
    factory::booking::BookingFactory::new(db, user.id)
        .date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
        .slot(12)
        .build()
        .await
        .unwrap();

    let response = server.get("/api/bookings/upcoming/9").await;

    response.assert_status(StatusCode::OK);
    let body: Vec<UpcomingBookingDto> = response.json();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0].date, tomorrow());
    assert_eq!(body[0].slot, "12:00");
    assert_eq!(body[0].display_name, "User 111");
}

/// Tests an invalid floor.
///
/// Expected: 400
#[tokio::test]
async fn rejects_invalid_level() {
    let (server, _test) = setup("").await;

    server
        .get("/api/bookings/upcoming/7")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Tests a floor that isn't a number.
///
/// Expected: 400 with the same message as an unknown floor
#[tokio::test]
async fn rejects_non_numeric_level() {
    let (server, _test) = setup("").await;

    let response = server.get("/api/bookings/upcoming/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorDto = response.json();
    assert_eq!(body.error, "Invalid lounge level. Choose 9, 10, or 11.");
}
