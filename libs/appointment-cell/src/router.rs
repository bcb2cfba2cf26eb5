use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_database::postgres::Database;

use crate::handlers::*;

pub fn create_appointment_router(db: Database) -> Router {
    Router::new()
        .route("/", get(list_appointments))
        .route("/", post(create_appointment))
        .route("/{id}", get(get_appointment))
        .route("/{id}", put(update_appointment))
        .route("/{id}", delete(delete_appointment))
        .route("/data/{data}", get(search_appointments_by_date))
        .with_state(db)
}
