use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_database::postgres::Database;

use crate::handlers::*;

pub fn create_package_router(db: Database) -> Router {
    Router::new()
        .route("/", get(list_packages))
        .route("/", post(create_package))
        .route("/{id}", get(find_packages))
        .route("/{id}", put(update_package))
        .route("/{id}", delete(delete_package))
        .with_state(db)
}
