use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_database::postgres::Database;
use shared_models::error::AppError;

use crate::models::{PackageError, PackagePayload};
use crate::services::PackageService;

fn to_app_error(err: PackageError) -> AppError {
    match err {
        PackageError::NotFound => AppError::NotFound("Pacote não encontrado".to_string()),
        PackageError::DatabaseError(_) => {
            AppError::Database("Erro interno do servidor".to_string())
        }
    }
}

#[axum::debug_handler]
pub async fn list_packages(State(db): State<Database>) -> Result<Json<Value>, AppError> {
    let service = PackageService::new(&db);

    let pacotes = service.list_packages().await.map_err(to_app_error)?;

    Ok(Json(json!(pacotes)))
}

#[axum::debug_handler]
pub async fn find_packages(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PackageService::new(&db);

    let pacotes = service.find_packages(&id).await.map_err(to_app_error)?;

    Ok(Json(json!(pacotes)))
}

#[axum::debug_handler]
pub async fn create_package(
    State(db): State<Database>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let novo = PackagePayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected package payload: {}", detail);
        AppError::BadRequest("Dados de pacote inválidos".to_string())
    })?;

    let service = PackageService::new(&db);
    service.create_package(novo).await.map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pacote adicionado com sucesso" })))
}

#[axum::debug_handler]
pub async fn update_package(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let dados = PackagePayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected package payload: {}", detail);
        AppError::BadRequest("Dados de pacote inválidos".to_string())
    })?;

    let service = PackageService::new(&db);
    service
        .update_package(id, dados)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pacote atualizado com sucesso" })))
}

#[axum::debug_handler]
pub async fn delete_package(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = PackageService::new(&db);

    service.delete_package(id).await.map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Pacote deletado com sucesso" })))
}
