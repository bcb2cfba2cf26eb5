use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_database::postgres::Database;
use shared_models::error::AppError;

use crate::models::{PersonError, PersonPayload};
use crate::services::PersonService;

fn to_app_error(err: PersonError) -> AppError {
    match err {
        PersonError::NotFound => AppError::NotFound("Pessoa não encontrada".to_string()),
        PersonError::HashError(_) => AppError::Internal("Erro interno do servidor".to_string()),
        PersonError::DatabaseError(_) => AppError::Database("Erro interno do servidor".to_string()),
    }
}

#[axum::debug_handler]
pub async fn list_people(State(db): State<Database>) -> Result<Json<Value>, AppError> {
    let service = PersonService::new(&db);

    let pessoas = service.list_people().await.map_err(to_app_error)?;

    Ok(Json(json!(pessoas)))
}

#[axum::debug_handler]
pub async fn find_people(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PersonService::new(&db);

    let pessoas = service.find_people(&id).await.map_err(to_app_error)?;

    Ok(Json(json!(pessoas)))
}

#[axum::debug_handler]
pub async fn create_person(
    State(db): State<Database>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let nova = PersonPayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected person payload: {}", detail);
        AppError::BadRequest("Dados de pessoa inválidos".to_string())
    })?;

    let service = PersonService::new(&db);
    service.create_person(nova).await.map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pessoa adicionada com sucesso" })))
}

#[axum::debug_handler]
pub async fn update_person(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let dados = PersonPayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected person payload: {}", detail);
        AppError::BadRequest("Dados de pessoa inválidos".to_string())
    })?;

    let service = PersonService::new(&db);
    service
        .update_person(id, dados)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pessoa atualizada com sucesso" })))
}

#[axum::debug_handler]
pub async fn delete_person(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = PersonService::new(&db);

    service.delete_person(id).await.map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pessoa deletada com sucesso" })))
}
