//! Acesso ao recurso `/acessos`.
//!
//! Nenhuma página renderiza acessos hoje; o módulo cobre o recurso da
//! API com o mesmo contrato CRUD dos demais.

use patio_shared::Acesso;

use super::client::{ApiClient, ResourceClient};
use super::error::ApiError;

fn client() -> ResourceClient<Acesso> {
    ResourceClient::new(ApiClient::from_config(), "acessos")
}

pub async fn get_all_acessos() -> Result<Vec<Acesso>, ApiError> {
    client().list().await
}

pub async fn get_acesso_by_id(id: i64) -> Result<Acesso, ApiError> {
    client().get_by_id(id).await
}

pub async fn create_acesso(payload: &Acesso) -> Result<Acesso, ApiError> {
    client().create(payload).await
}

pub async fn update_acesso(id: i64, payload: &Acesso) -> Result<Acesso, ApiError> {
    client().update(id, payload).await
}

pub async fn delete_acesso(id: i64) -> Result<(), ApiError> {
    client().delete(id).await
}
