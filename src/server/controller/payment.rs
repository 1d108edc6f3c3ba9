use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use entity::enums::UserRole;

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentDto, PaymentDto, UpdatePaymentStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{booking::BookingService, payment::PaymentService},
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Record a payment for a booking (owner or staff).
///
/// The amount is computed server-side: nights × the room's price per
/// night. The payment starts out pending; settlement happens through the
/// status endpoint.
#[utoipa::path(
    post,
    path = "/bookings/{id}/payments",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    request_body = CreatePaymentDto,
    responses(
        (status = 201, description = "Payment recorded as pending", body = PaymentDto),
        (status = 400, description = "Booking is cancelled or completed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
    Json(payload): Json<CreatePaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    require_booking_access(&state, booking_id, &user).await?;

    let payment = PaymentService::new(&state.db)
        .create(booking_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(payment)))
}

/// Payments recorded for one booking (owner or staff).
#[utoipa::path(
    get,
    path = "/bookings/{id}/payments",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Payments of the booking", body = Vec<PaymentDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_payments(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    require_booking_access(&state, booking_id, &user).await?;

    let payments = PaymentService::new(&state.db)
        .list_for_booking(booking_id)
        .await?;

    Ok((StatusCode::OK, Json(payments)))
}

/// Fetch one payment (staff).
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    responses(
        (status = 200, description = "The payment", body = PaymentDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_payment_by_id(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let payment = PaymentService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(payment)))
}

/// Settle, fail, refund, or retry a payment (staff).
///
/// Marking a payment paid stamps the settlement time and confirms the
/// booking if it is still pending.
#[utoipa::path(
    put,
    path = "/payments/{id}/status",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment id")),
    request_body = UpdatePaymentStatusDto,
    responses(
        (status = 200, description = "Updated payment", body = PaymentDto),
        (status = 400, description = "Transition not allowed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Requires staff role", body = ErrorDto),
        (status = 404, description = "Payment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePaymentStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    let payment = PaymentService::new(&state.db)
        .update_status(id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(payment)))
}

/// Owner-or-staff gate shared by the booking-scoped payment endpoints.
/// Foreign bookings answer 404 to avoid leaking their existence.
async fn require_booking_access(
    state: &AppState,
    booking_id: i32,
    user: &crate::server::model::user::User,
) -> Result<(), AppError> {
    let booking = BookingService::new(&state.db)
        .find(booking_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

    if booking.user_id != user.id && !user.has_role(UserRole::Staff) {
        return Err(AppError::NotFound("Booking not found".to_string()));
    }

    Ok(())
}
