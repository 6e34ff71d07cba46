//! Configuração do cliente da API.
//!
//! A base URL padrão serve o desenvolvimento local; um override pode
//! ser salvo no LocalStorage do navegador para apontar o aplicativo a
//! outro backend sem recompilar.

use crate::web::storage::LocalStorage;

/// Base da API no desenvolvimento local.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Chave do override salvo no navegador.
const STORAGE_KEY_API_URL: &str = "patio_api_url";

/// Base URL efetiva da API.
///
/// Usa o override salvo quando houver; barras finais são descartadas
/// para que a montagem de caminhos não duplique separadores.
pub fn api_base_url() -> String {
    LocalStorage::get(STORAGE_KEY_API_URL)
        .map(|url| url.trim().trim_end_matches('/').to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}
