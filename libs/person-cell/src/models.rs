use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use shared_models::validation::{
    required_email, required_number, required_str, required_str_exact_len, required_str_min_len,
};

/// A registered person (customer or staff). `senha` holds the one-way
/// hash, never the submitted plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Person {
    pub id_pessoa: i32,
    pub nome_pessoa: String,
    pub telefone: i64,
    pub endereco: String,
    pub bairro: String,
    pub complemento: String,
    pub cidade: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub tipo: String,
    pub observacao: String,
    pub email: String,
    pub senha: String,
}

/// Validated insert/replace payload. `senha` is still plaintext here; the
/// service hashes it before the row is assembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonPayload {
    pub nome_pessoa: String,
    pub telefone: i64,
    pub endereco: String,
    pub bairro: String,
    pub complemento: String,
    pub cidade: String,
    pub cpf: String,
    pub data_nascimento: String,
    pub tipo: String,
    pub observacao: String,
    pub email: String,
    pub senha: String,
}

impl PersonPayload {
    pub fn from_payload(payload: &Value) -> Result<Self, String> {
        Ok(Self {
            nome_pessoa: required_str(payload, "nome_pessoa")?,
            telefone: required_number(payload, "telefone")? as i64,
            endereco: required_str(payload, "endereco")?,
            bairro: required_str(payload, "bairro")?,
            complemento: required_str(payload, "complemento")?,
            cidade: required_str(payload, "cidade")?,
            cpf: required_str_exact_len(payload, "cpf", 11)?,
            data_nascimento: required_str(payload, "data_nascimento")?,
            tipo: required_str(payload, "tipo")?,
            observacao: required_str(payload, "observacao")?,
            email: required_email(payload, "email")?,
            senha: required_str_min_len(payload, "senha", 6)?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersonError {
    #[error("Person not found")]
    NotFound,

    #[error("Password hashing failed: {0}")]
    HashError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
