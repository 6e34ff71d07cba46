//! Cliente HTTP da API.
//!
//! - `ApiClient`: transporte (base URL + JSON), único ponto do
//!   aplicativo que emite requisições;
//! - `ResourceClient`: operações CRUD genéricas de um recurso REST;
//! - normalização dos envelopes de lista aceitos do backend.

use std::marker::PhantomData;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;
use crate::config;
use crate::web::console;

// ============================================================================
// Transporte
// ============================================================================

/// Transporte HTTP configurado com a base URL da API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Cliente apontando para a base configurada.
    pub fn from_config() -> Self {
        Self::new(&config::api_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;

        Self::decode(Self::check_status(response).await?).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| ApiError::Message(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;

        Self::decode(Self::check_status(response).await?).await
    }

    async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::put(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|err| ApiError::Message(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;

        Self::decode(Self::check_status(response).await?).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| ApiError::NoResponse(err.to_string()))?;

        // O corpo da resposta de remoção é descartado.
        Self::check_status(response).await?;
        Ok(())
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Response { status, body })
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Message(err.to_string()))
    }
}

// ============================================================================
// CRUD genérico por recurso
// ============================================================================

/// Operações CRUD de um recurso REST.
///
/// Um por entidade, parametrizado pelo segmento da coleção, que também
/// é a chave aceita no envelope de lista (`{"estacionamentos": [...]}`).
pub struct ResourceClient<T> {
    client: ApiClient,
    resource: &'static str,
    _marker: PhantomData<T>,
}

impl<T> ResourceClient<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(client: ApiClient, resource: &'static str) -> Self {
        Self {
            client,
            resource,
            _marker: PhantomData,
        }
    }

    /// Lista todos os registros do recurso.
    ///
    /// Corpo em formato inesperado degrada para lista vazia com aviso
    /// no console; só falhas de transporte viram `Err`.
    pub async fn list(&self) -> Result<Vec<T>, ApiError> {
        let value = self
            .client
            .get::<Value>(self.resource)
            .await
            .inspect_err(|err| self.log_falha("listar", err))?;

        Ok(normalize_list(value, self.resource))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<T, ApiError> {
        self.client
            .get(&format!("{}/{id}", self.resource))
            .await
            .inspect_err(|err| self.log_falha(&format!("buscar id {id}"), err))
    }

    pub async fn create(&self, payload: &T) -> Result<T, ApiError> {
        self.client
            .post(self.resource, payload)
            .await
            .inspect_err(|err| self.log_falha("criar", err))
    }

    pub async fn update(&self, id: i64, payload: &T) -> Result<T, ApiError> {
        self.client
            .put(&format!("{}/{id}", self.resource), payload)
            .await
            .inspect_err(|err| self.log_falha(&format!("atualizar id {id}"), err))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client
            .delete(&format!("{}/{id}", self.resource))
            .await
            .inspect_err(|err| self.log_falha(&format!("apagar id {id}"), err))
    }

    /// Loga a falha distinguindo o modo: resposta de erro, ausência de
    /// resposta ou falha local. O erro segue para o chamador.
    fn log_falha(&self, operacao: &str, err: &ApiError) {
        let detalhe = match err {
            ApiError::Response { status, body } => format!("resposta {status}: {body}"),
            ApiError::NoResponse(detalhe) => format!("sem resposta: {detalhe}"),
            ApiError::Message(detalhe) => format!("falha local: {detalhe}"),
        };
        console::error(&format!(
            "Erro ao {operacao} em /{}: {detalhe}",
            self.resource
        ));
    }
}

// ============================================================================
// Normalização de listas
// ============================================================================

/// Formato reconhecido do corpo de uma resposta de lista.
#[derive(Debug, PartialEq)]
enum ListShape {
    /// Array puro.
    Array(Vec<Value>),
    /// Objeto com o array sob `data` ou sob o nome do recurso.
    Keyed(Vec<Value>),
    /// Qualquer outra coisa.
    Unrecognized,
}

fn classify_list(value: Value, resource: &str) -> ListShape {
    match value {
        Value::Array(items) => ListShape::Array(items),
        Value::Object(mut map) => {
            // `data` tem precedência sobre a chave do recurso.
            for key in ["data", resource] {
                if let Some(Value::Array(items)) = map.remove(key) {
                    return ListShape::Keyed(items);
                }
            }
            ListShape::Unrecognized
        }
        _ => ListShape::Unrecognized,
    }
}

/// Normaliza o corpo de uma resposta de lista para `Vec<T>`.
fn normalize_list<T: DeserializeOwned>(value: Value, resource: &str) -> Vec<T> {
    let items = match classify_list(value, resource) {
        ListShape::Array(items) | ListShape::Keyed(items) => items,
        ListShape::Unrecognized => {
            console::warn(&format!(
                "A API não devolveu uma lista para /{resource}; exibindo vazio."
            ));
            return Vec::new();
        }
    };

    match serde_json::from_value::<Vec<T>>(Value::Array(items)) {
        Ok(lista) => lista,
        Err(err) => {
            console::warn(&format!(
                "Itens de /{resource} em formato inesperado ({err}); exibindo vazio."
            ));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patio_shared::Estacionamento;
    use serde_json::json;

    fn centro() -> Value {
        json!({"id": 1, "nome": "Pátio Centro", "capacidade": 80})
    }

    #[test]
    fn os_tres_envelopes_normalizam_para_a_mesma_lista() {
        let corpos = [
            json!([centro()]),
            json!({"data": [centro()]}),
            json!({"estacionamentos": [centro()]}),
        ];

        for corpo in corpos {
            let lista: Vec<Estacionamento> = normalize_list(corpo, "estacionamentos");
            assert_eq!(lista.len(), 1);
            assert_eq!(lista[0].nome.as_deref(), Some("Pátio Centro"));
            assert_eq!(lista[0].capacidade, Some(80));
        }
    }

    #[test]
    fn data_tem_precedencia_sobre_a_chave_do_recurso() {
        let corpo = json!({
            "data": [{"id": 1, "nome": "Do data"}],
            "estacionamentos": [{"id": 2, "nome": "Da chave"}],
        });
        let lista: Vec<Estacionamento> = normalize_list(corpo, "estacionamentos");
        assert_eq!(lista.len(), 1);
        assert_eq!(lista[0].nome.as_deref(), Some("Do data"));
    }

    #[test]
    fn formatos_desconhecidos_degradam_para_lista_vazia() {
        let corpos = [
            json!(null),
            json!(42),
            json!("estacionamentos"),
            json!({}),
            json!({"data": "não é array"}),
            json!({"outra_chave": [centro()]}),
        ];

        for corpo in corpos {
            let lista: Vec<Estacionamento> = normalize_list(corpo, "estacionamentos");
            assert!(lista.is_empty());
        }
    }

    #[test]
    fn itens_que_nao_decodificam_degradam_para_lista_vazia() {
        let corpo = json!([{"id": "não numérico", "nome": 12}]);
        let lista: Vec<Estacionamento> = normalize_list(corpo, "estacionamentos");
        assert!(lista.is_empty());
    }

    #[test]
    fn chave_do_recurso_nao_array_nao_quebra() {
        let corpo = json!({"estacionamentos": {"id": 1}});
        let lista: Vec<Estacionamento> = normalize_list(corpo, "estacionamentos");
        assert!(lista.is_empty());
    }

    #[test]
    fn base_url_nao_duplica_separadores() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(
            client.url("/estacionamentos"),
            "http://localhost:8080/api/estacionamentos"
        );
        assert_eq!(
            client.url("estacionamentos/7"),
            "http://localhost:8080/api/estacionamentos/7"
        );
    }
}
