//! Acesso ao recurso `/veiculos`.

use patio_shared::Veiculo;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Veiculo> {
    ResourceClient::new(ApiClient::from_config(), "veiculos")
}

pub async fn get_all_veiculos() -> Result<Vec<Veiculo>, ApiError> {
    client().list().await
}

pub async fn get_veiculo_by_id(id: i64) -> Result<Veiculo, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_veiculo(payload: &Veiculo) -> Result<Veiculo, ApiError> {
    client().create(payload).await
}

pub async fn update_veiculo(id: i64, payload: &Veiculo) -> Result<Veiculo, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_veiculo(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
