//! Acesso ao LocalStorage do navegador.
//!
//! Usa `web_sys::Storage` diretamente; falhas de acesso (modo privado,
//! storage desabilitado) degradam para `None`.

/// Leitura do armazenamento local.
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// Valor salvo sob a chave, se existir.
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }
}
