use crate::server::{
    data::booking::BookingRepository,
    model::{
        booking::{CreateBookingParam, Level, Slot},
        user::UpsertUserParam,
    },
};
use chrono::NaiveDate;
use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod cancel;
mod create_many;
mod get_active_with_owner_between;
mod get_active_with_owner_by_date;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Builds a validated request for the given floor, date and start hours.
fn create_param(level: i32, date: NaiveDate, hours: &[i32], note: Option<&str>) -> CreateBookingParam {
    CreateBookingParam {
        user: UpsertUserParam {
            platform_id: "unused".to_string(),
            display_name: "Unused".to_string(),
            username: None,
        },
        level: Level::new(level).unwrap(),
        date,
        slots: hours.iter().map(|h| Slot::from_hour(*h).unwrap()).collect(),
        note: note.map(str::to_string),
    }
}
