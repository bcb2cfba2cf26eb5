use tracing::{debug, error};

use shared_database::postgres::Database;

use crate::models::{Person, PersonError, PersonPayload};
use crate::services::password;

pub struct PersonService {
    db: Database,
}

impl PersonService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    pub async fn list_people(&self) -> Result<Vec<Person>, PersonError> {
        let rows = sqlx::query_as::<_, Person>("SELECT * FROM pessoa")
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to list people: {}", e);
                PersonError::DatabaseError(e.to_string())
            })?;

        Ok(rows)
    }

    /// Pattern match of the raw path value against the id column,
    /// returning every matching row; kept with the LIKE semantics of the
    /// deployed contract.
    pub async fn find_people(&self, id: &str) -> Result<Vec<Person>, PersonError> {
        debug!("Looking up person: {}", id);

        let rows =
            sqlx::query_as::<_, Person>("SELECT * FROM pessoa WHERE CAST(id_pessoa AS TEXT) LIKE $1")
                .bind(id)
                .fetch_all(self.db.pool())
                .await
                .map_err(|e| {
                    error!("Failed to look up person {}: {}", id, e);
                    PersonError::DatabaseError(e.to_string())
                })?;

        if rows.is_empty() {
            return Err(PersonError::NotFound);
        }

        Ok(rows)
    }

    /// Hash-then-insert. A hash computed here is discarded without
    /// compensation if the insert fails.
    pub async fn create_person(&self, payload: PersonPayload) -> Result<(), PersonError> {
        debug!("Creating person: {}", payload.email);

        let senha_hash = password::hash_password(&payload.senha).map_err(|e| {
            error!("Failed to hash password: {}", e);
            PersonError::HashError(e.to_string())
        })?;

        sqlx::query(
            "INSERT INTO pessoa \
             (nome_pessoa, telefone, endereco, bairro, complemento, cidade, cpf, \
              data_nascimento, tipo, observacao, email, senha) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&payload.nome_pessoa)
        .bind(payload.telefone)
        .bind(&payload.endereco)
        .bind(&payload.bairro)
        .bind(&payload.complemento)
        .bind(&payload.cidade)
        .bind(&payload.cpf)
        .bind(&payload.data_nascimento)
        .bind(&payload.tipo)
        .bind(&payload.observacao)
        .bind(&payload.email)
        .bind(&senha_hash)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to create person: {}", e);
            PersonError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Full-column overwrite. The submitted credential is re-hashed on
    /// every update, including resubmissions of an unchanged value.
    pub async fn update_person(&self, id: i32, payload: PersonPayload) -> Result<(), PersonError> {
        debug!("Updating person: {}", id);

        let senha_hash = password::hash_password(&payload.senha).map_err(|e| {
            error!("Failed to hash password: {}", e);
            PersonError::HashError(e.to_string())
        })?;

        sqlx::query(
            "UPDATE pessoa SET nome_pessoa = $1, telefone = $2, endereco = $3, bairro = $4, \
             complemento = $5, cidade = $6, cpf = $7, data_nascimento = $8, tipo = $9, \
             observacao = $10, email = $11, senha = $12 WHERE id_pessoa = $13",
        )
        .bind(&payload.nome_pessoa)
        .bind(payload.telefone)
        .bind(&payload.endereco)
        .bind(&payload.bairro)
        .bind(&payload.complemento)
        .bind(&payload.cidade)
        .bind(&payload.cpf)
        .bind(&payload.data_nascimento)
        .bind(&payload.tipo)
        .bind(&payload.observacao)
        .bind(&payload.email)
        .bind(&senha_hash)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to update person {}: {}", id, e);
            PersonError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_person(&self, id: i32) -> Result<(), PersonError> {
        debug!("Deleting person: {}", id);

        sqlx::query("DELETE FROM pessoa WHERE id_pessoa = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete person {}: {}", id, e);
                PersonError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
