use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use shared_models::validation::{required_number, required_str};

/// A bundle of service sessions sold as one product. `id_servico` points
/// at a service catalog owned elsewhere; no integrity check here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Package {
    pub id_pacote: i32,
    pub nome: String,
    pub qtde_sessao: i32,
    pub observacao: String,
    pub valor_pacote: f64,
    pub id_servico: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackagePayload {
    pub nome: String,
    pub qtde_sessao: i32,
    pub observacao: String,
    pub valor_pacote: f64,
    pub id_servico: String,
}

impl PackagePayload {
    pub fn from_payload(payload: &Value) -> Result<Self, String> {
        Ok(Self {
            nome: required_str(payload, "nome")?,
            qtde_sessao: required_number(payload, "qtde_sessao")? as i32,
            observacao: required_str(payload, "observacao")?,
            valor_pacote: required_number(payload, "valor_pacote")?,
            id_servico: required_str(payload, "id_servico")?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    #[error("Package not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}
