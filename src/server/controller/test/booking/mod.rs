use axum::{body::Bytes, http::StatusCode};
use axum_test::TestServer;
use chrono::{Days, Local, NaiveDate};
use serde_json::json;
use test_utils::{builder::TestBuilder, context::TestContext, factory};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{AvailabilityDto, BookingDto, CreatedBookingsDto, UpcomingBookingDto},
        user::AdminStatusDto,
    },
    server::{router, service::admin::AdminService, state::AppState},
};

mod cancel;
mod upcoming;

/// Test server over a fresh database, with the given administrator IDs.
///
/// The context is returned so the database outlives the server.
async fn setup(admin_ids: &str) -> (TestServer, TestContext) {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap().clone();

    let app = router::router(Ok).unwrap().with_state(AppState::new(db, AdminService::from_csv(admin_ids)));
    let server = TestServer::new(app).unwrap();

    (server, test)
}

fn tomorrow() -> NaiveDate {
    Local::now()
        .date_naive()
        .checked_add_days(Days::new(1))
        .unwrap()
}

/// Books the given slots on level 9 for tomorrow as `user_id`.
async fn book(server: &TestServer, user_id: &str, slots: &[&str]) -> CreatedBookingsDto {
    let response = server
        .post("/api/bookings")
        .json(&json!({
            "user": { "id": user_id, "display_name": format!("User {}", user_id) },
            "level": 9,
            "date": tomorrow().to_string(),
            "slots": slots,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json()
}
