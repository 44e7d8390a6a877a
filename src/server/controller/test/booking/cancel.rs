use super::*;

/// Tests an owner cancelling their booking.
///
/// Expected: 200, and the slot is free again
#[tokio::test]
async fn owner_cancels_booking() {
    let (server, _test) = setup("").await;
    let created = book(&server, "111", &["08:00"]).await;

    let response = server
        .delete(&format!("/api/bookings/{}", created.bookings[0].id))
        .json(&json!({ "user_id": "111" }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: MessageDto = response.json();
    assert_eq!(body.message, "Booking cancelled successfully");

    let availability: AvailabilityDto = server
        .get(&format!("/api/bookings/available/{}", tomorrow()))
        .await
        .json();
    assert!(availability.booked.is_empty());
}

/// Tests another user trying to cancel a booking.
///
/// Expected: 404 with the merged not found message
#[tokio::test]
async fn other_user_cannot_cancel() {
    let (server, _test) = setup("").await;
    let created = book(&server, "111", &["08:00"]).await;

    let response = server
        .delete(&format!("/api/bookings/{}", created.bookings[0].id))
        .json(&json!({ "user_id": 222 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorDto = response.json();
    assert_eq!(body.error, "Booking not found or unauthorized.");
}

/// Tests an administrator cancelling another user's booking.
///
/// Expected: 200
#[tokio::test]
async fn admin_cancels_any_booking() {
    let (server, _test) = setup("999").await;
    let created = book(&server, "111", &["08:00"]).await;

    server
        .delete(&format!("/api/bookings/{}", created.bookings[0].id))
        .json(&json!({ "user_id": "999" }))
        .await
        .assert_status(StatusCode::OK);
}

/// Tests cancelling without naming the requester.
///
/// Expected: 400
#[tokio::test]
async fn requires_requesting_user() {
    let (server, _test) = setup("").await;
    let created = book(&server, "111", &["08:00"]).await;
    let path = format!("/api/bookings/{}", created.bookings[0].id);

    server
        .delete(&path)
        .json(&json!({}))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .delete(&path)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Tests a booking ID that isn't a number.
///
/// Expected: 404 with the merged not found message
#[tokio::test]
async fn non_numeric_id_is_not_found() {
    let (server, _test) = setup("").await;

    let response = server
        .delete("/api/bookings/abc")
        .json(&json!({ "user_id": "111" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: ErrorDto = response.json();
    assert_eq!(body.error, "Booking not found or unauthorized.");
}

/// Tests a cancellation body that isn't valid JSON.
///
/// Expected: 400 JSON error
#[tokio::test]
async fn rejects_malformed_body() {
    let (server, _test) = setup("").await;
    let created = book(&server, "111", &["08:00"]).await;

    let response = server
        .delete(&format!("/api/bookings/{}", created.bookings[0].id))
        .bytes(Bytes::from_static(b"{\"user_id\":"))
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: ErrorDto = response.json();
    assert!(!body.error.is_empty());
}
