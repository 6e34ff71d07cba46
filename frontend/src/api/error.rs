//! Erro de transporte da API.
//!
//! Três casos, espelhando o que as páginas precisam distinguir:
//! resposta com status de erro, requisição que não obteve resposta, e
//! falha local (montagem da chamada ou decodificação do corpo).

use thiserror::Error;

/// Falha de uma operação contra a API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// O servidor respondeu com status fora da faixa 2xx.
    #[error("o servidor respondeu {status}: {body}")]
    Response { status: u16, body: String },

    /// A requisição saiu mas nenhuma resposta chegou.
    #[error("sem resposta do servidor: {0}")]
    NoResponse(String),

    /// Qualquer outra falha local.
    #[error("{0}")]
    Message(String),
}

impl ApiError {
    /// Mensagem para exibição ao usuário: o detalhe mais profundo
    /// disponível.
    ///
    /// Para respostas de erro, tenta o campo `message` do corpo JSON;
    /// senão o corpo cru; senão o status. Nos demais casos usa o
    /// detalhe do transporte, com um texto genérico como último
    /// recurso.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Response { status, body } => {
                if let Some(mensagem) = body_message(body) {
                    mensagem
                } else if !body.trim().is_empty() {
                    body.trim().to_string()
                } else {
                    format!("Erro {status} do servidor")
                }
            }
            ApiError::NoResponse(detalhe) | ApiError::Message(detalhe) => {
                let detalhe = detalhe.trim();
                if detalhe.is_empty() {
                    "Erro desconhecido.".to_string()
                } else {
                    detalhe.to_string()
                }
            }
        }
    }
}

/// Campo `message` de um corpo de erro JSON, quando houver.
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resposta_com_corpo_json_usa_o_campo_message() {
        let err = ApiError::Response {
            status: 400,
            body: r#"{"status":400,"error":"Bad Request","message":"Placa já cadastrada"}"#
                .to_string(),
        };
        assert_eq!(err.user_message(), "Placa já cadastrada");
    }

    #[test]
    fn resposta_sem_message_usa_o_corpo_cru() {
        let err = ApiError::Response {
            status: 500,
            body: "falha interna".to_string(),
        };
        assert_eq!(err.user_message(), "falha interna");
    }

    #[test]
    fn resposta_com_corpo_vazio_usa_o_status() {
        let err = ApiError::Response {
            status: 404,
            body: "  ".to_string(),
        };
        assert_eq!(err.user_message(), "Erro 404 do servidor");
    }

    #[test]
    fn falhas_de_transporte_usam_o_detalhe() {
        let err = ApiError::NoResponse("conexão recusada".to_string());
        assert_eq!(err.user_message(), "conexão recusada");

        let err = ApiError::Message(String::new());
        assert_eq!(err.user_message(), "Erro desconhecido.");
    }

    #[test]
    fn corpo_json_sem_message_nao_e_tratado_como_mensagem() {
        let err = ApiError::Response {
            status: 400,
            body: r#"{"error":"Bad Request"}"#.to_string(),
        };
        assert_eq!(err.user_message(), r#"{"error":"Bad Request"}"#);
    }
}
