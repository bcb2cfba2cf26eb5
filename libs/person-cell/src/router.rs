use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_database::postgres::Database;

use crate::handlers::*;

pub fn create_person_router(db: Database) -> Router {
    Router::new()
        .route("/", get(list_people))
        .route("/", post(create_person))
        .route("/{id}", get(find_people))
        .route("/{id}", put(update_person))
        .route("/{id}", delete(delete_person))
        .with_state(db)
}
