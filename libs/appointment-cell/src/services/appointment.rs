use tracing::{debug, error};

use shared_database::postgres::Database;

use crate::models::{Appointment, AppointmentError, AppointmentPayload};

pub struct AppointmentService {
    db: Database,
}

impl AppointmentService {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppointmentError> {
        let rows = sqlx::query_as::<_, Appointment>("SELECT * FROM compromisso")
            .fetch_all(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to list appointments: {}", e);
                AppointmentError::DatabaseError(e.to_string())
            })?;

        Ok(rows)
    }

    pub async fn get_appointment(&self, id: i32) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", id);

        let row =
            sqlx::query_as::<_, Appointment>("SELECT * FROM compromisso WHERE id_compromisso = $1")
                .bind(id)
                .fetch_optional(self.db.pool())
                .await
                .map_err(|e| {
                    error!("Failed to fetch appointment {}: {}", id, e);
                    AppointmentError::DatabaseError(e.to_string())
                })?;

        row.ok_or(AppointmentError::NotFound)
    }

    /// Substring match against the stored date. The wildcards are added to
    /// the bound value, never spliced into the statement text.
    pub async fn search_by_date(&self, fragment: &str) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Searching appointments by date fragment: {}", fragment);

        let pattern = format!("%{}%", fragment);
        let rows = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM compromisso WHERE data_compromisso LIKE $1",
        )
        .bind(pattern)
        .fetch_all(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to search appointments by date: {}", e);
            AppointmentError::DatabaseError(e.to_string())
        })?;

        if rows.is_empty() {
            return Err(AppointmentError::NotFound);
        }

        Ok(rows)
    }

    pub async fn create_appointment(
        &self,
        payload: AppointmentPayload,
    ) -> Result<(), AppointmentError> {
        debug!("Creating appointment for client: {}", payload.nome_cliente);

        sqlx::query(
            "INSERT INTO compromisso \
             (nome_cliente, data_compromisso, hora, nome_servico, id_pessoa, status_compromisso) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&payload.nome_cliente)
        .bind(&payload.data_compromisso)
        .bind(&payload.hora)
        .bind(&payload.nome_servico)
        .bind(&payload.id_pessoa)
        .bind(&payload.status_compromisso)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to create appointment: {}", e);
            AppointmentError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Full-column overwrite of the matching row. Succeeds whether or not
    /// a row matched; the store does not report the affected count to the
    /// caller.
    pub async fn update_appointment(
        &self,
        id: i32,
        payload: AppointmentPayload,
    ) -> Result<(), AppointmentError> {
        debug!("Updating appointment: {}", id);

        sqlx::query(
            "UPDATE compromisso SET nome_cliente = $1, data_compromisso = $2, hora = $3, \
             nome_servico = $4, id_pessoa = $5, status_compromisso = $6 \
             WHERE id_compromisso = $7",
        )
        .bind(&payload.nome_cliente)
        .bind(&payload.data_compromisso)
        .bind(&payload.hora)
        .bind(&payload.nome_servico)
        .bind(&payload.id_pessoa)
        .bind(&payload.status_compromisso)
        .bind(id)
        .execute(self.db.pool())
        .await
        .map_err(|e| {
            error!("Failed to update appointment {}: {}", id, e);
            AppointmentError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    pub async fn delete_appointment(&self, id: i32) -> Result<(), AppointmentError> {
        debug!("Deleting appointment: {}", id);

        sqlx::query("DELETE FROM compromisso WHERE id_compromisso = $1")
            .bind(id)
            .execute(self.db.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete appointment {}: {}", id, e);
                AppointmentError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
