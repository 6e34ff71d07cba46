//! Acesso ao recurso `/mensalistas`.

use patio_shared::Mensalista;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Mensalista> {
    ResourceClient::new(ApiClient::from_config(), "mensalistas")
}

pub async fn get_all_mensalistas() -> Result<Vec<Mensalista>, ApiError> {
    client().list().await
}

pub async fn get_mensalista_by_id(id: i64) -> Result<Mensalista, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_mensalista(payload: &Mensalista) -> Result<Mensalista, ApiError> {
    client().create(payload).await
}

pub async fn update_mensalista(id: i64, payload: &Mensalista) -> Result<Mensalista, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_mensalista(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
