use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::auth::register,
        controller::auth::login,
        controller::auth::refresh,
        controller::auth::logout,
        controller::auth::me,
        controller::user::get_users,
        controller::user::get_user_by_id,
        controller::user::update_user,
        controller::user::update_user_role,
        controller::user::delete_user,
        controller::room_type::get_room_types,
        controller::room_type::get_room_type_by_id,
        controller::room_type::create_room_type,
        controller::room_type::update_room_type,
        controller::room_type::delete_room_type,
        controller::room::search_rooms,
        controller::room::create_room,
        controller::room::get_rooms,
        controller::room::get_room_by_id,
        controller::room::update_room,
        controller::room::update_room_status,
        controller::room::delete_room,
        controller::room::get_room_bookings,
        controller::booking::create_booking,
        controller::booking::get_bookings,
        controller::booking::get_booking_by_id,
        controller::booking::update_booking_status,
        controller::booking::cancel_booking,
        controller::payment::create_payment,
        controller::payment::get_booking_payments,
        controller::payment::get_payment_by_id,
        controller::payment::update_payment_status,
    ),
    tags(
        (name = "auth", description = "Registration, login, and token management"),
        (name = "user", description = "Account administration"),
        (name = "room_type", description = "Room type catalog"),
        (name = "room", description = "Room catalog and availability search"),
        (name = "booking", description = "Booking ledger"),
        (name = "payment", description = "Payments"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(controller::auth::register))
        .route("/auth/login", post(controller::auth::login))
        .route("/auth/refresh", post(controller::auth::refresh))
        .route("/auth/logout", post(controller::auth::logout))
        .route("/auth/me", get(controller::auth::me))
        .route("/users", get(controller::user::get_users))
        .route(
            "/users/{id}",
            get(controller::user::get_user_by_id)
                .patch(controller::user::update_user)
                .delete(controller::user::delete_user),
        )
        .route("/users/{id}/role", put(controller::user::update_user_role))
        .route(
            "/room-types",
            get(controller::room_type::get_room_types).post(controller::room_type::create_room_type),
        )
        .route(
            "/room-types/{id}",
            get(controller::room_type::get_room_type_by_id)
                .patch(controller::room_type::update_room_type)
                .delete(controller::room_type::delete_room_type),
        )
        .route("/rooms/search", get(controller::room::search_rooms))
        // Legacy alias kept for older clients; same handler, same contract.
        .route("/rooms/available", get(controller::room::search_rooms))
        .route(
            "/rooms",
            get(controller::room::get_rooms).post(controller::room::create_room),
        )
        .route(
            "/rooms/{id}",
            get(controller::room::get_room_by_id)
                .patch(controller::room::update_room)
                .delete(controller::room::delete_room),
        )
        .route("/rooms/{id}/status", put(controller::room::update_room_status))
        .route("/rooms/{id}/bookings", get(controller::room::get_room_bookings))
        .route(
            "/bookings",
            get(controller::booking::get_bookings).post(controller::booking::create_booking),
        )
        .route(
            "/bookings/{id}",
            get(controller::booking::get_booking_by_id).delete(controller::booking::cancel_booking),
        )
        .route(
            "/bookings/{id}/status",
            put(controller::booking::update_booking_status),
        )
        .route(
            "/bookings/{id}/payments",
            get(controller::payment::get_booking_payments).post(controller::payment::create_payment),
        )
        .route("/payments/{id}", get(controller::payment::get_payment_by_id))
        .route(
            "/payments/{id}/status",
            put(controller::payment::update_payment_status),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
