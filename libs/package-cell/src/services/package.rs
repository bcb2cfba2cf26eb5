use tracing::{debug, error};

use shared_database::postgres::Database;

use crate::models::{Package, PackageError, PackagePayload};

pub struct PackageService {
    db: Database,
}

impl PackageService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    pub async fn list_packages(&self) -> Result<Vec<Package>, PackageError> {
        let rows = sqlx::query_as::<_, Package>("SELECT * FROM pacotes")
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to list packages: {}", e);
                PackageError::DatabaseError(e.to_string())
            })?;

        Ok(rows)
    }

    /// Pattern match of the raw path value against the id column,
    /// returning every matching row. The identifier column is nominally
    /// unique, so this usually yields one row, but the LIKE semantics of
    /// the deployed contract are kept as-is.
    pub async fn find_packages(&self, id: &str) -> Result<Vec<Package>, PackageError> {
        debug!("Looking up package: {}", id);

        let rows = sqlx::query_as::<_, Package>(
            "SELECT * FROM pacotes WHERE CAST(id_pacote AS TEXT) LIKE $1",
        )
        .bind(id)
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to look up package {}: {}", id, e);
            PackageError::DatabaseError(e.to_string())
        })?;

        if rows.is_empty() {
            return Err(PackageError::NotFound);
        }

        Ok(rows)
    }

    pub async fn create_package(&self, payload: PackagePayload) -> Result<(), PackageError> {
        debug!("Creating package: {}", payload.nome);

        sqlx::query(
            "INSERT INTO pacotes (nome, qtde_sessao, observacao, valor_pacote, id_servico) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&payload.nome)
        .bind(payload.qtde_sessao)
        .bind(&payload.observacao)
        .bind(payload.valor_pacote)
        .bind(&payload.id_servico)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to create package: {}", e);
            PackageError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn update_package(
        &self,
        id: i32,
        payload: PackagePayload,
    ) -> Result<(), PackageError> {
        debug!("Updating package: {}", id);

        sqlx::query(
            "UPDATE pacotes SET nome = $1, qtde_sessao = $2, observacao = $3, \
             valor_pacote = $4, id_servico = $5 WHERE id_pacote = $6",
        )
        .bind(&payload.nome)
        .bind(payload.qtde_sessao)
        .bind(&payload.observacao)
        .bind(payload.valor_pacote)
        .bind(&payload.id_servico)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to update package {}: {}", id, e);
            PackageError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_package(&self, id: i32) -> Result<(), PackageError> {
        debug!("Deleting package: {}", id);

        sqlx::query("DELETE FROM pacotes WHERE id_pacote = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete package {}: {}", id, e);
                PackageError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
