use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        booking::{
            AvailabilityDto, BookingDto, CancelBookingDto, CreateBookingDto, CreatedBookingsDto,
            UpcomingBookingDto,
        },
        user::AdminStatusDto,
    },
    server::{
        controller::param::AvailabilityParam,
        error::{booking::BookingError, AppError},
        model::booking::{BookingWithOwner, CancelBookingParam, CreateBookingParam, Level},
        service::booking::BookingService,
        state::AppState,
        util::parse::parse_booking_date,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Get slot availability for a floor on a date.
///
/// Lists all 24 hourly slots split into free slots and slots held by an active
/// booking, with the holder's name shown for booked slots. Past dates may be queried.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `date` - Date in `YYYY-MM-DD` form
/// - `params` - Optional floor level, defaults to 9
///
/// # Returns
/// - `200 OK` - Availability for the floor and date
/// - `400 Bad Request` - Invalid date or level
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/available/{date}",
    tag = BOOKING_TAG,
    params(
        ("date" = String, Path, description = "Date in YYYY-MM-DD format"),
        AvailabilityParam
    ),
    responses(
        (status = 200, description = "Slot availability", body = AvailabilityDto),
        (status = 400, description = "Invalid date or level", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<AvailabilityParam>,
) -> Result<impl IntoResponse, AppError> {
    let level = match params.level.as_deref().map(str::trim) {
        Some(level) if !level.is_empty() => Level::parse(level)?,
        _ => Level::DEFAULT,
    };
    let date = parse_booking_date(&date)?;

    let availability = BookingService::new(&state.db, &state.admins)
        .get_availability(level, date)
        .await?;

    Ok((StatusCode::OK, Json(availability.into_dto())))
}

/// Book one or more slots.
///
/// Reserves every requested slot on the floor for the given date, or none of them
/// when any slot is already taken. The booking user is created or refreshed from the
/// identity in the request.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User identity, level, date, slots, and optional note
///
/// # Returns
/// - `201 Created` - All slots booked
/// - `400 Bad Request` - Malformed body, missing fields, invalid level, date, or slot, or a past date
/// - `409 Conflict` - At least one slot is already booked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Slots booked", body = CreatedBookingsDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 409, description = "Slot already booked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bookings(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(BookingError::from)?;
    let param = CreateBookingParam::from_dto(payload)?;
    let level = param.level.value();

    let bookings = BookingService::new(&state.db, &state.admins)
        .create(param)
        .await?;

    let response = CreatedBookingsDto {
        message: format!("Booked {} slot(s) on level {}", bookings.len(), level),
        level,
        bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get a user's active bookings.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `user_id` - Chat platform user ID
///
/// # Returns
/// - `200 OK` - Active bookings across all floors, empty for unknown users
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/user/{user_id}",
    tag = BOOKING_TAG,
    params(
        ("user_id" = String, Path, description = "Chat platform user ID")
    ),
    responses(
        (status = 200, description = "User's active bookings", body = Vec<BookingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_bookings(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db, &state.admins)
        .get_user_bookings(&user_id)
        .await?;

    let bookings_dto: Vec<BookingDto> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// Get upcoming bookings on a floor.
///
/// Lists active bookings from today through Sunday of next week.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `level` - Floor level
///
/// # Returns
/// - `200 OK` - Upcoming bookings ordered by date then slot
/// - `400 Bad Request` - Invalid level
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bookings/upcoming/{level}",
    tag = BOOKING_TAG,
    params(
        ("level" = i32, Path, description = "Floor level (9, 10, or 11)")
    ),
    responses(
        (status = 200, description = "Upcoming bookings", body = Vec<UpcomingBookingDto>),
        (status = 400, description = "Invalid level", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_upcoming(
    State(state): State<AppState>,
    Path(level): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let level = Level::parse(&level)?;

    let upcoming = BookingService::new(&state.db, &state.admins)
        .get_upcoming(level)
        .await?;

    let upcoming_dto: Vec<UpcomingBookingDto> = upcoming
        .into_iter()
        .map(BookingWithOwner::into_upcoming_dto)
        .collect();

    Ok((StatusCode::OK, Json(upcoming_dto)))
}

/// Check whether a user is an administrator.
///
/// # Arguments
/// - `state` - Application state containing the admin allow-list
/// - `user_id` - Chat platform user ID
///
/// # Returns
/// - `200 OK` - Admin status of the user
#[utoipa::path(
    get,
    path = "/api/bookings/is-admin/{user_id}",
    tag = BOOKING_TAG,
    params(
        ("user_id" = String, Path, description = "Chat platform user ID")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusDto)
    ),
)]
pub async fn is_admin(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let is_admin = state.admins.is_admin(&user_id);

    Ok((StatusCode::OK, Json(AdminStatusDto { is_admin })))
}

/// Cancel a booking.
///
/// Users may cancel their own bookings; administrators may cancel any booking.
/// Missing bookings, cancelled bookings, bookings held by someone else and IDs that
/// aren't numbers all produce the same 404 response.
///
/// # Arguments
/// - `state` - Application state containing the database connection and admin allow-list
/// - `id` - Booking ID
/// - `payload` - Body carrying the requesting user's platform ID
///
/// # Returns
/// - `200 OK` - Booking cancelled
/// - `400 Bad Request` - No requesting user given, or a malformed body
/// - `404 Not Found` - Booking not found, not owned by the requester, or a non-numeric ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = CancelBookingDto,
    responses(
        (status = 200, description = "Booking cancelled", body = MessageDto),
        (status = 400, description = "User authorization required", body = ErrorDto),
        (status = 404, description = "Booking not found or unauthorized", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<CancelBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let requester = match payload {
        Ok(Json(body)) => body.user_id,
        Err(JsonRejection::MissingJsonContentType(_)) => None,
        Err(rejection) => return Err(BookingError::from(rejection).into()),
    };
    let id = id
        .trim()
        .parse::<i32>()
        .map_err(|_| BookingError::NotFoundOrUnauthorized)?;
    let param = CancelBookingParam::new(id, requester)?;

    BookingService::new(&state.db, &state.admins)
        .cancel(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Booking cancelled successfully".to_string(),
        }),
    ))
}
