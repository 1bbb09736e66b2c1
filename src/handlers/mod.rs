pub mod booking;
pub mod catalog;
pub mod contact;
pub mod health;
pub mod i18n;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/i18n/:lang", get(i18n::messages))
        .route("/api/catalog/consultants", get(catalog::consultants))
        .route("/api/catalog/group-therapy", get(catalog::group_programs))
        .route("/api/catalog/day-care", get(catalog::day_care_programs))
        .route("/api/catalog/events", get(catalog::events))
        .route("/api/booking/time-slots", get(booking::time_slots))
        .route("/api/booking/sessions", post(booking::create_session))
        .route("/api/booking/sessions/:id", get(booking::get_session))
        .route(
            "/api/booking/sessions/:id/fields",
            post(booking::update_field),
        )
        .route("/api/booking/sessions/:id/next", post(booking::next_step))
        .route(
            "/api/booking/sessions/:id/back",
            post(booking::previous_step),
        )
        .route(
            "/api/booking/sessions/:id/confirm",
            post(booking::confirm),
        )
        .route("/api/booking/sessions/:id/retry", post(booking::retry))
        .route("/api/booking/sessions/:id/reset", post(booking::reset))
        .route("/api/contact", post(contact::submit_contact))
        .route(
            "/api/events/:id/callback",
            post(contact::request_callback),
        )
        .with_state(state)
}
