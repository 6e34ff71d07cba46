//! Acesso ao recurso `/estacionamentos`.

use patio_shared::Estacionamento;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Estacionamento> {
    ResourceClient::new(ApiClient::from_config(), "estacionamentos")
}

pub async fn get_all_estacionamentos() -> Result<Vec<Estacionamento>, ApiError> {
    client().list().await
}

pub async fn get_estacionamento_by_id(id: i64) -> Result<Estacionamento, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_estacionamento(payload: &Estacionamento) -> Result<Estacionamento, ApiError> {
    client().create(payload).await
}

pub async fn update_estacionamento(
    id: i64,
    payload: &Estacionamento,
) -> Result<Estacionamento, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_estacionamento(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
