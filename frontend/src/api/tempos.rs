//! Acesso ao recurso `/tempos`.

use patio_shared::Tempo;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Tempo> {
    ResourceClient::new(ApiClient::from_config(), "tempos")
}

pub async fn get_all_tempos() -> Result<Vec<Tempo>, ApiError> {
    client().list().await
}

pub async fn get_tempo_by_id(id: i64) -> Result<Tempo, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_tempo(payload: &Tempo) -> Result<Tempo, ApiError> {
    client().create(payload).await
}

pub async fn update_tempo(id: i64, payload: &Tempo) -> Result<Tempo, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_tempo(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
