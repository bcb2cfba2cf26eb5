use axum::{routing::get, Router};

use appointment_cell::router::create_appointment_router;
use package_cell::router::create_package_router;
use person_cell::router::create_person_router;
use shared_database::postgres::Database;

pub fn create_router(db: Database) -> Router {
    Router::new()
        .route("/", get(|| async { "Agenda API is running!" }))
        .nest("/compromisso", create_appointment_router(db.clone()))
        .nest("/pacotes", create_package_router(db.clone()))
        .nest("/pessoa", create_person_router(db))
}
