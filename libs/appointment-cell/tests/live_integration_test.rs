// End-to-end tests against a real store. Only run when
// LIVE_INTEGRATION_TESTS=true and DATABASE_URL points at a database with
// db/schema.sql applied; otherwise each test is a no-op.

use appointment_cell::models::{AppointmentError, AppointmentPayload};
use appointment_cell::services::AppointmentService;
use shared_config::AppConfig;
use shared_database::postgres::Database;

fn should_run_live_tests() -> bool {
    std::env::var("LIVE_INTEGRATION_TESTS").unwrap_or_default() == "true"
}

async fn live_database() -> Database {
    let config = AppConfig::from_env();
    Database::connect(&config)
        .await
        .expect("live tests need a reachable DATABASE_URL")
}

fn payload(marker: &str, data: &str, status: &str) -> AppointmentPayload {
    AppointmentPayload {
        nome_cliente: marker.to_string(),
        data_compromisso: data.to_string(),
        hora: "14:30".to_string(),
        nome_servico: "Corte".to_string(),
        id_pessoa: "1".to_string(),
        status_compromisso: status.to_string(),
    }
}

fn marker(test: &str) -> String {
    format!("live-test-{}-{}", test, std::process::id())
}

#[tokio::test]
async fn appointment_lifecycle_roundtrip() {
    if !should_run_live_tests() {
        return;
    }

    let service = AppointmentService::new(&live_database().await);
    let marker = marker("lifecycle");

    service
        .create_appointment(payload(&marker, "2030-05-10", "agendado"))
        .await
        .unwrap();

    // The create acknowledgment carries no id; re-list to discover it.
    let created = service
        .list_appointments()
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.nome_cliente == marker)
        .expect("created appointment should be listed");

    assert_eq!(created.data_compromisso, "2030-05-10");
    assert_eq!(created.hora, "14:30");
    assert_eq!(created.nome_servico, "Corte");
    assert_eq!(created.status_compromisso, "agendado");

    let fetched = service.get_appointment(created.id_compromisso).await.unwrap();
    assert_eq!(fetched.nome_cliente, marker);

    // Full replace: every column reflects the new payload afterwards.
    service
        .update_appointment(
            created.id_compromisso,
            payload(&marker, "2030-06-20", "concluido"),
        )
        .await
        .unwrap();

    let updated = service.get_appointment(created.id_compromisso).await.unwrap();
    assert_eq!(updated.data_compromisso, "2030-06-20");
    assert_eq!(updated.status_compromisso, "concluido");

    service.delete_appointment(created.id_compromisso).await.unwrap();

    let gone = service.get_appointment(created.id_compromisso).await;
    assert!(matches!(gone, Err(AppointmentError::NotFound)));
}

#[tokio::test]
async fn get_unknown_appointment_is_not_found() {
    if !should_run_live_tests() {
        return;
    }

    let service = AppointmentService::new(&live_database().await);

    let result = service.get_appointment(999_999_999).await;
    assert!(matches!(result, Err(AppointmentError::NotFound)));
}

#[tokio::test]
async fn delete_unknown_appointment_is_a_noop() {
    if !should_run_live_tests() {
        return;
    }

    let service = AppointmentService::new(&live_database().await);

    let before = service.list_appointments().await.unwrap().len();
    service.delete_appointment(999_999_999).await.unwrap();
    let after = service.list_appointments().await.unwrap().len();

    assert_eq!(before, after);
}

#[tokio::test]
async fn date_search_matches_substrings() {
    if !should_run_live_tests() {
        return;
    }

    let service = AppointmentService::new(&live_database().await);
    let marker = marker("date-search");

    service
        .create_appointment(payload(&marker, "2024-01-15", "agendado"))
        .await
        .unwrap();
    service
        .create_appointment(payload(&marker, "2024-02-15", "agendado"))
        .await
        .unwrap();

    let january: Vec<_> = service
        .search_by_date("01")
        .await
        .unwrap()
        .into_iter()
        .filter(|c| c.nome_cliente == marker)
        .collect();
    assert_eq!(january.len(), 1);
    assert_eq!(january[0].data_compromisso, "2024-01-15");

    let both: Vec<_> = service
        .search_by_date("2024")
        .await
        .unwrap()
        .into_iter()
        .filter(|c| c.nome_cliente == marker)
        .collect();
    assert_eq!(both.len(), 2);

    for row in both {
        service.delete_appointment(row.id_compromisso).await.unwrap();
    }
}
