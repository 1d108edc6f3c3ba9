use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::enums::UserRole;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, PaginatedBookingsDto, UpdateBookingStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::booking::ListBookingsParam,
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[serde(default)]
    pub page: u64,
    pub per_page: Option<u64>,
    /// Staff only: narrow the ledger to one room.
    pub room_id: Option<i32>,
}

/// Book a room for a date range.
///
/// The stay is the half-open interval `[checkInDate, checkOutDate)`.
/// Creation re-validates that no non-cancelled booking overlaps the stay
/// inside the same transaction that inserts the row, so two concurrent
/// requests for overlapping dates cannot both succeed; the loser receives
/// 409.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created as pending", body = BookingDto),
        (status = 400, description = "Invalid dates or guest count", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 409, description = "Room not open for booking or dates already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let booking = BookingService::new(&state.db).create(user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

/// List bookings.
///
/// Guests see their own bookings; staff see the full ledger and may filter
/// by room with `roomId`.
#[utoipa::path(
    get,
    path = "/bookings",
    tag = BOOKING_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default 0)"),
        ("perPage" = Option<u64>, Query, description = "Items per page (default 10)"),
        ("roomId" = Option<i32>, Query, description = "Staff only: filter by room")
    ),
    responses(
        (status = 200, description = "One page of bookings", body = PaginatedBookingsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let is_staff = user.has_role(UserRole::Staff);

    let param = ListBookingsParam {
        room_id: if is_staff { query.room_id } else { None },
        user_id: if is_staff { None } else { Some(user.id) },
        page: query.page,
        per_page: query.per_page.unwrap_or(10),
    };

    let bookings = BookingService::new(&state.db).list(param).await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// Fetch one booking (owner or staff).
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    // Someone else's booking stays invisible rather than forbidden.
    if booking.user_id != user.id && !user.has_role(UserRole::Staff) {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    let dto = service.get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dto)))
}

/// Move a booking through its lifecycle (staff).
///
/// Allowed transitions: pending → confirmed → completed, and cancellation
/// from pending or confirmed. Anything else answers 400.
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let booking = BookingService::new(&state.db)
        .update_status(id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// Cancel a booking (owner or staff).
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Cancelled booking", body = BookingDto),
        (status = 400, description = "Booking already completed or cancelled", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = BookingService::new(&state.db);

    let booking = service
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if booking.user_id != user.id && !user.has_role(UserRole::Staff) {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    let cancelled = service.cancel(id).await?;

    Ok((StatusCode::OK, Json(cancelled)))
}
