//! Acesso ao recurso `/diariasnoturnas`.

use patio_shared::DiariaNoturna;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<DiariaNoturna> {
    ResourceClient::new(ApiClient::from_config(), "diariasnoturnas")
}

pub async fn get_all_diarias_noturnas() -> Result<Vec<DiariaNoturna>, ApiError> {
    client().list().await
}

pub async fn get_diaria_noturna_by_id(id: i64) -> Result<DiariaNoturna, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_diaria_noturna(payload: &DiariaNoturna) -> Result<DiariaNoturna, ApiError> {
    client().create(payload).await
}

pub async fn update_diaria_noturna(
    id: i64,
    payload: &DiariaNoturna,
) -> Result<DiariaNoturna, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_diaria_noturna(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
