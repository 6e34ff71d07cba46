//! Acesso ao recurso `/diarias`.

use patio_shared::Diaria;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Diaria> {
    ResourceClient::new(ApiClient::from_config(), "diarias")
}

pub async fn get_all_diarias() -> Result<Vec<Diaria>, ApiError> {
    client().list().await
}

pub async fn get_diaria_by_id(id: i64) -> Result<Diaria, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_diaria(payload: &Diaria) -> Result<Diaria, ApiError> {
    client().create(payload).await
}

pub async fn update_diaria(id: i64, payload: &Diaria) -> Result<Diaria, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_diaria(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
