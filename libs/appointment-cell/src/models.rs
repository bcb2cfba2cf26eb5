use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use shared_models::validation::required_str;

/// One scheduled appointment row. Column names follow the deployed wire
/// contract, so the struct serializes straight into the API responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Appointment {
    pub id_compromisso: i32,
    pub nome_cliente: String,
    pub data_compromisso: String,
    pub hora: String,
    pub nome_servico: String,
    pub id_pessoa: String,
    pub status_compromisso: String,
}

/// Insert/replace payload: every column except the generated id. Updates
/// overwrite the full row, so the same payload serves both operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub nome_cliente: String,
    pub data_compromisso: String,
    pub hora: String,
    pub nome_servico: String,
    pub id_pessoa: String,
    pub status_compromisso: String,
}

impl AppointmentPayload {
    /// Structural validation of an inbound body. All six business fields
    /// are required non-empty strings; nothing is checked against the
    /// store.
    pub fn from_payload(payload: &Value) -> Result<Self, String> {
        Ok(Self {
            nome_cliente: required_str(payload, "nome_cliente")?,
            data_compromisso: required_str(payload, "data_compromisso")?,
            hora: required_str(payload, "hora")?,
            nome_servico: required_str(payload, "nome_servico")?,
            id_pessoa: required_str(payload, "id_pessoa")?,
            status_compromisso: required_str(payload, "status_compromisso")?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
