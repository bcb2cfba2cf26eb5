use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_database::postgres::Database;
use shared_models::error::AppError;

use crate::models::{AppointmentError, AppointmentPayload};
use crate::services::AppointmentService;

fn to_app_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::NotFound => {
            AppError::NotFound("Compromisso não encontrado".to_string())
        }
        AppointmentError::DatabaseError(_) => {
            AppError::Database("Erro interno do servidor".to_string())
        }
    }
}

#[axum::debug_handler]
pub async fn list_appointments(State(db): State<Database>) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&db);

    let compromissos = service.list_appointments().await.map_err(to_app_error)?;

    Ok(Json(json!(compromissos)))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&db);

    let compromisso = service.get_appointment(id).await.map_err(to_app_error)?;

    Ok(Json(json!(compromisso)))
}

#[axum::debug_handler]
pub async fn search_appointments_by_date(
    State(db): State<Database>,
    Path(data): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&db);

    let compromissos = service.search_by_date(&data).await.map_err(|e| match e {
        AppointmentError::NotFound => AppError::NotFound("Data não encontrado".to_string()),
        other => to_app_error(other),
    })?;

    Ok(Json(json!(compromissos)))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(db): State<Database>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let novo = AppointmentPayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected appointment payload: {}", detail);
        AppError::BadRequest("Dados de compromisso inválidos".to_string())
    })?;

    let service = AppointmentService::new(&db);
    service
        .create_appointment(novo)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Compromisso adicionado com sucesso" })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(db): State<Database>,
    Path(id): Path<i32>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let dados = AppointmentPayload::from_payload(&payload).map_err(|detail| {
        debug!("Rejected appointment payload: {}", detail);
        AppError::BadRequest("Dados de compromisso inválidos".to_string())
    })?;

    let service = AppointmentService::new(&db);
    service
        .update_appointment(id, dados)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Compromisso atualizado com sucesso" })))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(db): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let service = AppointmentService::new(&db);

    service
        .delete_appointment(id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "message": "Compromisso deletado com sucesso" })))
}
