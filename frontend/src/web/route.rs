//! Tabela de rotas - modelo de domínio
//!
//! Camada pura, sem DOM nem web_sys: toda a superfície de navegação do
//! aplicativo em um enum, com conversão de e para o path da URL.
//! Segmentos de id só são aceitos como inteiros positivos; um id vazio
//! ou malformado cai em `NotFound` antes de qualquer página montar.

use std::fmt::Display;

/// Origem de um cadastro de evento.
///
/// O formulário de evento é alcançável tanto a partir de um
/// estacionamento quanto de um contratante, e a referência semeada no
/// formulário muda conforme o caminho.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventoParent {
    Estacionamento(i64),
    Contratante(i64),
}

/// Rotas do aplicativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Painel de estacionamentos (rota raiz).
    #[default]
    Dashboard,
    EstacionamentoAdd,
    EstacionamentoDetails { id: i64 },
    EstacionamentoEdit { id: i64 },
    VeiculoAdd { estacionamento_id: i64 },
    VeiculoDetails { id: i64 },
    VeiculoEdit { id: i64 },
    MensalistaAdd { estacionamento_id: i64 },
    MensalistaDetails { id: i64 },
    MensalistaEdit { id: i64 },
    ContratanteAdd { estacionamento_id: i64 },
    ContratanteDetails { id: i64 },
    ContratanteEdit { id: i64 },
    EventoAdd { parent: EventoParent },
    EventoDetails { id: i64 },
    EventoEdit { id: i64 },
    /// Página não encontrada.
    NotFound,
}

/// Id de rota: inteiro positivo, sem sinal e sem espaços.
fn parse_id(segmento: &str) -> Option<i64> {
    let id: i64 = segmento.parse().ok()?;
    (id > 0).then_some(id)
}

impl AppRoute {
    /// Converte um path de URL na rota correspondente.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_start_matches('/').trim_end_matches('/');
        let segmentos: Vec<&str> = if path.is_empty() {
            Vec::new()
        } else {
            path.split('/').collect()
        };

        match segmentos.as_slice() {
            [] => Self::Dashboard,
            ["estacionamentos", "add"] => Self::EstacionamentoAdd,
            ["estacionamentos", id] => Self::com_id(id, |id| Self::EstacionamentoDetails { id }),
            ["estacionamentos", id, "edit"] => Self::com_id(id, |id| Self::EstacionamentoEdit { id }),
            ["estacionamentos", id, "veiculos", "add"] => {
                Self::com_id(id, |estacionamento_id| Self::VeiculoAdd { estacionamento_id })
            }
            ["estacionamentos", id, "mensalistas", "add"] => {
                Self::com_id(id, |estacionamento_id| Self::MensalistaAdd { estacionamento_id })
            }
            ["estacionamentos", id, "contratantes", "add"] => {
                Self::com_id(id, |estacionamento_id| Self::ContratanteAdd { estacionamento_id })
            }
            ["estacionamentos", id, "eventos", "add"] => Self::com_id(id, |id| Self::EventoAdd {
                parent: EventoParent::Estacionamento(id),
            }),
            ["contratantes", id, "eventos", "add"] => Self::com_id(id, |id| Self::EventoAdd {
                parent: EventoParent::Contratante(id),
            }),
            ["veiculos", id] => Self::com_id(id, |id| Self::VeiculoDetails { id }),
            ["veiculos", id, "edit"] => Self::com_id(id, |id| Self::VeiculoEdit { id }),
            ["mensalistas", id] => Self::com_id(id, |id| Self::MensalistaDetails { id }),
            ["mensalistas", id, "edit"] => Self::com_id(id, |id| Self::MensalistaEdit { id }),
            ["contratantes", id] => Self::com_id(id, |id| Self::ContratanteDetails { id }),
            ["contratantes", id, "edit"] => Self::com_id(id, |id| Self::ContratanteEdit { id }),
            ["eventos", id] => Self::com_id(id, |id| Self::EventoDetails { id }),
            ["eventos", id, "edit"] => Self::com_id(id, |id| Self::EventoEdit { id }),
            _ => Self::NotFound,
        }
    }

    fn com_id(segmento: &str, rota: impl FnOnce(i64) -> Self) -> Self {
        match parse_id(segmento) {
            Some(id) => rota(id),
            None => Self::NotFound,
        }
    }

    /// Path de URL correspondente à rota.
    pub fn to_path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::EstacionamentoAdd => "/estacionamentos/add".to_string(),
            Self::EstacionamentoDetails { id } => format!("/estacionamentos/{id}"),
            Self::EstacionamentoEdit { id } => format!("/estacionamentos/{id}/edit"),
            Self::VeiculoAdd { estacionamento_id } => {
                format!("/estacionamentos/{estacionamento_id}/veiculos/add")
            }
            Self::VeiculoDetails { id } => format!("/veiculos/{id}"),
            Self::VeiculoEdit { id } => format!("/veiculos/{id}/edit"),
            Self::MensalistaAdd { estacionamento_id } => {
                format!("/estacionamentos/{estacionamento_id}/mensalistas/add")
            }
            Self::MensalistaDetails { id } => format!("/mensalistas/{id}"),
            Self::MensalistaEdit { id } => format!("/mensalistas/{id}/edit"),
            Self::ContratanteAdd { estacionamento_id } => {
                format!("/estacionamentos/{estacionamento_id}/contratantes/add")
            }
            Self::ContratanteDetails { id } => format!("/contratantes/{id}"),
            Self::ContratanteEdit { id } => format!("/contratantes/{id}/edit"),
            Self::EventoAdd { parent: EventoParent::Estacionamento(id) } => {
                format!("/estacionamentos/{id}/eventos/add")
            }
            Self::EventoAdd { parent: EventoParent::Contratante(id) } => {
                format!("/contratantes/{id}/eventos/add")
            }
            Self::EventoDetails { id } => format!("/eventos/{id}"),
            Self::EventoEdit { id } => format!("/eventos/{id}/edit"),
            Self::NotFound => "/404".to_string(),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raiz_e_o_painel() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path(""), AppRoute::Dashboard);
    }

    #[test]
    fn rotas_de_detalhe_e_edicao() {
        assert_eq!(
            AppRoute::from_path("/estacionamentos/7"),
            AppRoute::EstacionamentoDetails { id: 7 }
        );
        assert_eq!(
            AppRoute::from_path("/veiculos/12/edit"),
            AppRoute::VeiculoEdit { id: 12 }
        );
        assert_eq!(
            AppRoute::from_path("/mensalistas/3"),
            AppRoute::MensalistaDetails { id: 3 }
        );
    }

    #[test]
    fn cadastros_aninhados_carregam_o_pai() {
        assert_eq!(
            AppRoute::from_path("/estacionamentos/5/veiculos/add"),
            AppRoute::VeiculoAdd { estacionamento_id: 5 }
        );
        assert_eq!(
            AppRoute::from_path("/estacionamentos/5/eventos/add"),
            AppRoute::EventoAdd { parent: EventoParent::Estacionamento(5) }
        );
        assert_eq!(
            AppRoute::from_path("/contratantes/9/eventos/add"),
            AppRoute::EventoAdd { parent: EventoParent::Contratante(9) }
        );
    }

    #[test]
    fn id_vazio_ou_malformado_cai_em_not_found() {
        assert_eq!(AppRoute::from_path("/estacionamentos/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/veiculos/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/veiculos/0"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/veiculos/-3"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/veiculos/ 3"), AppRoute::NotFound);
    }

    #[test]
    fn barra_final_de_rota_com_id_e_tolerada() {
        assert_eq!(
            AppRoute::from_path("/estacionamentos/7/"),
            AppRoute::EstacionamentoDetails { id: 7 }
        );
    }

    #[test]
    fn path_desconhecido_cai_em_not_found() {
        assert_eq!(AppRoute::from_path("/relatorios"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/veiculos/3/remover"), AppRoute::NotFound);
    }

    #[test]
    fn ida_e_volta_por_todas_as_rotas() {
        let rotas = [
            AppRoute::Dashboard,
            AppRoute::EstacionamentoAdd,
            AppRoute::EstacionamentoDetails { id: 1 },
            AppRoute::EstacionamentoEdit { id: 2 },
            AppRoute::VeiculoAdd { estacionamento_id: 3 },
            AppRoute::VeiculoDetails { id: 4 },
            AppRoute::VeiculoEdit { id: 5 },
            AppRoute::MensalistaAdd { estacionamento_id: 6 },
            AppRoute::MensalistaDetails { id: 7 },
            AppRoute::MensalistaEdit { id: 8 },
            AppRoute::ContratanteAdd { estacionamento_id: 9 },
            AppRoute::ContratanteDetails { id: 10 },
            AppRoute::ContratanteEdit { id: 11 },
            AppRoute::EventoAdd { parent: EventoParent::Estacionamento(12) },
            AppRoute::EventoAdd { parent: EventoParent::Contratante(13) },
            AppRoute::EventoDetails { id: 14 },
            AppRoute::EventoEdit { id: 15 },
            AppRoute::NotFound,
        ];
        for rota in rotas {
            assert_eq!(AppRoute::from_path(&rota.to_path()), rota, "rota: {rota}");
        }
    }
}
