use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::room_type::RoomTypeService,
        state::AppState,
    },
};

/// Tag for grouping room type endpoints in OpenAPI documentation
pub static ROOM_TYPE_TAG: &str = "room_type";

/// List the room type catalog.
#[utoipa::path(
    get,
    path = "/room-types",
    tag = ROOM_TYPE_TAG,
    responses(
        (status = 200, description = "All room types", body = Vec<RoomTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entries = RoomTypeService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(entries)))
}

/// Fetch one room type.
#[utoipa::path(
    get,
    path = "/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type id")),
    responses(
        (status = 200, description = "The room type", body = RoomTypeDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let entry = RoomTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Create a room type (admin). Each kind can exist only once.
#[utoipa::path(
    post,
    path = "/room-types",
    tag = ROOM_TYPE_TAG,
    request_body = CreateRoomTypeDto,
    responses(
        (status = 201, description = "Room type created", body = RoomTypeDto),
        (status = 400, description = "Invalid room type data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin role", body = ErrorDto),
        (status = 409, description = "Kind already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let entry = RoomTypeService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a room type (admin).
#[utoipa::path(
    patch,
    path = "/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type id")),
    request_body = UpdateRoomTypeDto,
    responses(
        (status = 200, description = "Updated room type", body = RoomTypeDto),
        (status = 400, description = "Invalid room type data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin role", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let entry = RoomTypeService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(entry)))
}

/// Delete a room type (admin).
#[utoipa::path(
    delete,
    path = "/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type id")),
    responses(
        (status = 204, description = "Room type deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires admin role", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoomTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
