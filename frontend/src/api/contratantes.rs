//! Acesso ao recurso `/contratantes`.

use patio_shared::Contratante;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Contratante> {
    ResourceClient::new(ApiClient::from_config(), "contratantes")
}

pub async fn get_all_contratantes() -> Result<Vec<Contratante>, ApiError> {
    client().list().await
}

pub async fn get_contratante_by_id(id: i64) -> Result<Contratante, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_contratante(payload: &Contratante) -> Result<Contratante, ApiError> {
    client().create(payload).await
}

pub async fn update_contratante(id: i64, payload: &Contratante) -> Result<Contratante, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_contratante(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
