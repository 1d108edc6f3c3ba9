use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        booking::BookingDto,
        room::{
            CreateRoomDto, PaginatedRoomsDto, RoomDto, RoomSearchQuery, UpdateRoomDto,
            UpdateRoomStatusDto,
        },
    },
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{booking::BookingService, room::RoomService},
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Search rooms that are free for a stay.
///
/// Returns every live room that is administratively available, passes all
/// supplied filters, and has no overlapping non-cancelled booking for the
/// half-open interval `[checkInDate, checkOutDate)`. A booking ending
/// exactly on `checkInDate` does not block the room. An empty array is a
/// normal answer; storage failures surface as 500, never as an empty
/// result.
#[utoipa::path(
    get,
    path = "/rooms/search",
    tag = ROOM_TAG,
    params(
        ("checkInDate" = String, Query, description = "Stay start, YYYY-MM-DD (required)"),
        ("checkOutDate" = String, Query, description = "Stay end, YYYY-MM-DD, after checkInDate (required)"),
        ("roomType" = Option<String>, Query, description = "single | double | suite | deluxe"),
        ("maxGuests" = Option<i32>, Query, description = "Minimum sleeping capacity"),
        ("minPrice" = Option<String>, Query, description = "Lower price bound, inclusive"),
        ("maxPrice" = Option<String>, Query, description = "Upper price bound, inclusive"),
        ("amenities" = Option<String>, Query, description = "JSON array string or comma-separated tags; every tag must be present"),
        ("sortBy" = Option<String>, Query, description = "price | type | maxGuests | roomNumber"),
        ("sortOrder" = Option<String>, Query, description = "ASC (default) | DESC")
    ),
    responses(
        (status = 200, description = "Matching rooms, possibly empty", body = Vec<RoomDto>),
        (status = 400, description = "Missing or malformed query parameters", body = ErrorDto),
        (status = 500, description = "Storage error", body = ErrorDto)
    ),
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Query(query): Query<RoomSearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db).search(query).await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Create a room (staff).
#[utoipa::path(
    post,
    path = "/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 409, description = "Room number already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// List rooms, paginated.
#[utoipa::path(
    get,
    path = "/rooms",
    tag = ROOM_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default 0)"),
        ("perPage" = Option<u64>, Query, description = "Items per page (default 10)")
    ),
    responses(
        (status = 200, description = "One page of rooms", body = PaginatedRoomsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .get_all_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(rooms)))
}

/// Fetch one room. Soft-deleted rooms answer 404.
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = RoomService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Partially update a room (staff).
#[utoipa::path(
    patch,
    path = "/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room id")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Set the administrative status of a room (staff).
///
/// Rooms under maintenance or cleaning never appear in availability
/// results, regardless of their booking ledger.
#[utoipa::path(
    put,
    path = "/rooms/{id}/status",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room id")),
    request_body = UpdateRoomStatusDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let room = RoomService::new(&state.db).set_status(id, payload).await?;

    Ok((StatusCode::OK, Json(room)))
}

/// Soft-delete a room (staff). The row and its booking history remain in
/// storage; the room just stops existing for the API.
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    RoomService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Booking ledger of one room (staff).
#[utoipa::path(
    get,
    path = "/rooms/{id}/bookings",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "All bookings of the room in check-in order", body = Vec<BookingDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_bookings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let bookings = BookingService::new(&state.db).list_for_room(id).await?;

    Ok((StatusCode::OK, Json(bookings)))
}
