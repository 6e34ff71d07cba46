//! Acesso ao recurso `/eventos`.

use patio_shared::Evento;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Evento> {
    ResourceClient::new(ApiClient::from_config(), "eventos")
}

pub async fn get_all_eventos() -> Result<Vec<Evento>, ApiError> {
    client().list().await
}

pub async fn get_evento_by_id(id: i64) -> Result<Evento, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_evento(payload: &Evento) -> Result<Evento, ApiError> {
    client().create(payload).await
}

pub async fn update_evento(id: i64, payload: &Evento) -> Result<Evento, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_evento(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
