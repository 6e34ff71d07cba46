//! Detalhes de um estacionamento e suas listas associadas.
//!
//! Além dos dados cadastrais, a página lista veículos, mensalistas,
//! contratantes e eventos vinculados ao estacionamento. A API não tem
//! rotas aninhadas, então as listas vêm das coleções completas e são
//! filtradas aqui pela referência de estacionamento.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Contratante, EntityRef, Estacionamento, Evento, Mensalista, Veiculo, date};

use crate::api::contratantes::get_all_contratantes;
use crate::api::error::ApiError;
use crate::api::estacionamentos::{delete_estacionamento, get_estacionamento_by_id};
use crate::api::eventos::get_all_eventos;
use crate::api::mensalistas::get_all_mensalistas;
use crate::api::veiculos::get_all_veiculos;
use crate::components::common::{Button, ButtonVariant, Card, InputGroupReadOnly, ListItemCard};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::{AppRoute, EventoParent};
use crate::web::router::use_router;

/// Dados da página: o estacionamento e as listas já filtradas.
#[derive(Debug, Clone, PartialEq)]
struct DetalheEstacionamento {
    estacionamento: Estacionamento,
    veiculos: Vec<Veiculo>,
    mensalistas: Vec<Mensalista>,
    contratantes: Vec<Contratante>,
    eventos: Vec<Evento>,
}

/// A referência aponta para o estacionamento desta página?
fn pertence(referencia: Option<&EntityRef>, id: i64) -> bool {
    referencia.and_then(|r| r.id) == Some(id)
}

async fn carregar_detalhe(id: i64) -> Result<DetalheEstacionamento, ApiError> {
    let estacionamento = get_estacionamento_by_id(id).await?;
    let veiculos = get_all_veiculos().await?;
    let mensalistas = get_all_mensalistas().await?;
    let contratantes = get_all_contratantes().await?;
    let eventos = get_all_eventos().await?;
    Ok(DetalheEstacionamento {
        estacionamento,
        veiculos: veiculos
            .into_iter()
            .filter(|v| pertence(v.estacionamento.as_ref(), id))
            .collect(),
        mensalistas: mensalistas
            .into_iter()
            .filter(|m| pertence(m.estacionamento.as_ref(), id))
            .collect(),
        contratantes: contratantes
            .into_iter()
            .filter(|c| pertence(c.estacionamento.as_ref(), id))
            .collect(),
        eventos: eventos
            .into_iter()
            .filter(|e| pertence(e.estacionamento.as_ref(), id))
            .collect(),
    })
}

#[component]
pub fn EstacionamentoDetails(id: i64) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<DetalheEstacionamento>::Idle);
    let confirmar_exclusao = RwSignal::new(false);

    estado.update(PageState::start);
    spawn_local({
        let guard = guard.clone();
        async move {
            let resultado = carregar_detalhe(id).await;
            if !guard.is_alive() {
                return;
            }
            match resultado {
                Ok(detalhe) => estado.update(|atual| atual.succeed(detalhe)),
                Err(err) => estado.update(|atual| {
                    atual.fail(format!(
                        "Erro ao carregar detalhes do estacionamento: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando detalhes do estacionamento..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card>
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(detalhe) => {
                let estacionamento = detalhe.estacionamento;
                let nome = estacionamento.nome.clone().unwrap_or_default();
                let rotulo_exclusao = format!("{} (ID: {})", nome, id);

                let confirmar = Callback::new(move |_| {
                    confirmar_exclusao.set(false);
                    spawn_local(async move {
                        match delete_estacionamento(id).await {
                            Ok(()) => {
                                toasts.sucesso("Estacionamento apagado com sucesso!");
                                router.navigate(AppRoute::Dashboard);
                            }
                            Err(err) => {
                                toasts.erro(format!(
                                    "Erro ao apagar estacionamento: {}",
                                    err.user_message()
                                ));
                            }
                        }
                    });
                });

                let veiculos = if detalhe.veiculos.is_empty() {
                    view! { <p>"Nenhum veículo registrado neste estacionamento."</p> }.into_any()
                } else {
                    detalhe
                        .veiculos
                        .into_iter()
                        .map(|veiculo| {
                            let titulo = veiculo.placa.clone().unwrap_or_default();
                            let descricao = format!(
                                "Marca: {}, Modelo: {}",
                                veiculo.marca.clone().unwrap_or_default(),
                                veiculo.modelo.clone().unwrap_or_default(),
                            );
                            let info = match (veiculo.data_entrada, veiculo.data_saida) {
                                (_, Some(saida)) => {
                                    Some(format!("Saída: {}", date::format_data_hora(Some(saida))))
                                }
                                (Some(entrada), None) => {
                                    Some(
                                        format!(
                                            "Entrada: {}",
                                            date::format_data_hora(Some(entrada)),
                                        ),
                                    )
                                }
                                (None, None) => None,
                            };
                            let on_details = veiculo.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::VeiculoDetails { id })
                                })
                            });
                            let on_edit = veiculo.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::VeiculoEdit { id })
                                })
                            });
                            view! {
                                <ListItemCard
                                    title=titulo
                                    description=descricao
                                    info=info
                                    on_details=on_details
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                };

                let eventos_por_contratante: Vec<(Contratante, usize)> = detalhe
                    .contratantes
                    .into_iter()
                    .map(|contratante| {
                        let total = detalhe
                            .eventos
                            .iter()
                            .filter(|e| {
                                e.contratante.as_ref().and_then(|c| c.id) == contratante.id
                                    && contratante.id.is_some()
                            })
                            .count();
                        (contratante, total)
                    })
                    .collect();

                let mensalistas = if detalhe.mensalistas.is_empty() {
                    view! { <p>"Nenhum mensalista cadastrado neste estacionamento."</p> }
                        .into_any()
                } else {
                    detalhe
                        .mensalistas
                        .into_iter()
                        .map(|mensalista| {
                            let titulo = mensalista.nome.clone().unwrap_or_default();
                            let descricao = format!(
                                "Placa: {}",
                                mensalista.placa_veiculo.clone().unwrap_or_default(),
                            );
                            let info = format!(
                                "Valor: R$ {:.2}",
                                mensalista.valor_mensal.unwrap_or(0.0),
                            );
                            let on_details = mensalista.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::MensalistaDetails { id })
                                })
                            });
                            let on_edit = mensalista.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::MensalistaEdit { id })
                                })
                            });
                            view! {
                                <ListItemCard
                                    title=titulo
                                    description=descricao
                                    info=info
                                    on_details=on_details
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                };

                let contratantes = if eventos_por_contratante.is_empty() {
                    view! { <p>"Nenhum contratante cadastrado neste estacionamento."</p> }
                        .into_any()
                } else {
                    eventos_por_contratante
                        .into_iter()
                        .map(|(contratante, total_eventos)| {
                            let titulo = contratante.nome.clone().unwrap_or_default();
                            let descricao = format!(
                                "CNPJ: {}",
                                contratante.cnpj.clone().unwrap_or_default(),
                            );
                            let info = format!("Eventos: {total_eventos}");
                            let on_details = contratante.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::ContratanteDetails { id })
                                })
                            });
                            let on_edit = contratante.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::ContratanteEdit { id })
                                })
                            });
                            view! {
                                <ListItemCard
                                    title=titulo
                                    description=descricao
                                    info=info
                                    on_details=on_details
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                };

                let eventos = if detalhe.eventos.is_empty() {
                    view! { <p>"Nenhum evento cadastrado neste estacionamento."</p> }.into_any()
                } else {
                    detalhe
                        .eventos
                        .into_iter()
                        .map(|evento| {
                            let titulo = evento.nome.clone().unwrap_or_default();
                            let descricao = format!(
                                "De {} a {}",
                                date::format_data_hora(evento.data_inicio),
                                date::format_data_hora(evento.data_fim),
                            );
                            let info = evento
                                .contratante
                                .as_ref()
                                .map(|c| format!("Contratante: {}", c.display_name()));
                            let on_details = evento.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::EventoDetails { id })
                                })
                            });
                            let on_edit = evento.id.map(|id| {
                                Callback::new(move |_| {
                                    router.navigate(AppRoute::EventoEdit { id })
                                })
                            });
                            view! {
                                <ListItemCard
                                    title=titulo
                                    description=descricao
                                    info=info
                                    on_details=on_details
                                    on_edit=on_edit
                                />
                            }
                        })
                        .collect_view()
                        .into_any()
                };

                view! {
                    <Card title=format!("Estacionamento {nome}")>
                        <InputGroupReadOnly
                            label="ID:"
                            id="id"
                            value=estacionamento.id.map(|id| id.to_string()).unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Nome:"
                            id="nome"
                            value=estacionamento.nome.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Endereço:"
                            id="endereco"
                            value=estacionamento.endereco.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Complemento:"
                            id="complemento"
                            value=estacionamento.complemento.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Cidade:"
                            id="cidade"
                            value=estacionamento.cidade.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="CEP:"
                            id="cep"
                            value=estacionamento.cep.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Telefone:"
                            id="telefone"
                            value=estacionamento.telefone.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Capacidade:"
                            id="capacidade"
                            value=estacionamento
                                .capacidade
                                .map(|c| c.to_string())
                                .unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Vagas Ocupadas:"
                            id="vagasOcupadas"
                            value=estacionamento
                                .vagas_ocupadas
                                .map(|v| v.to_string())
                                .unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Hora de Abertura:"
                            id="horaAbertura"
                            value=estacionamento.hora_abertura.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Hora de Fechamento:"
                            id="horaFechamento"
                            value=estacionamento.hora_fechamento.clone().unwrap_or_default()
                        />
                        <div class="button-group">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_press=Callback::new(move |_| {
                                    router.navigate(AppRoute::EstacionamentoEdit { id })
                                })
                            >
                                "Editar"
                            </Button>
                            <Button
                                variant=ButtonVariant::Danger
                                on_press=Callback::new(move |_| confirmar_exclusao.set(true))
                            >
                                "Apagar"
                            </Button>
                        </div>
                    </Card>

                    <Card title="Lista de Veículos">
                        {veiculos}
                        <Button on_press=Callback::new(move |_| {
                            router.navigate(AppRoute::VeiculoAdd {
                                estacionamento_id: id,
                            })
                        })>"Adicionar veículo"</Button>
                    </Card>

                    <Card title="Lista de Mensalistas">
                        {mensalistas}
                        <Button on_press=Callback::new(move |_| {
                            router.navigate(AppRoute::MensalistaAdd {
                                estacionamento_id: id,
                            })
                        })>"Adicionar Mensalista"</Button>
                    </Card>

                    <Card title="Lista de Contratantes">
                        {contratantes}
                        <Button on_press=Callback::new(move |_| {
                            router.navigate(AppRoute::ContratanteAdd {
                                estacionamento_id: id,
                            })
                        })>"Adicionar Contratante"</Button>
                    </Card>

                    <Card title="Lista de Eventos">
                        {eventos}
                        <Button on_press=Callback::new(move |_| {
                            router.navigate(AppRoute::EventoAdd {
                                parent: EventoParent::Estacionamento(id),
                            })
                        })>"Adicionar Evento"</Button>
                    </Card>

                    <ConfirmDialog
                        show=confirmar_exclusao
                        title="Confirmar Exclusão"
                        on_confirm=confirmar
                        on_cancel=Callback::new(move |_| confirmar_exclusao.set(false))
                    >
                        <p>
                            "Tem certeza que deseja APAGAR o Estacionamento "
                            <strong>{rotulo_exclusao}</strong>
                            "?"
                        </p>
                        <p>
                            "Esta ação é irreversível e removerá todos os dados relacionados a ele."
                        </p>
                    </ConfirmDialog>
                }
                .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pertence_compara_pelo_id_da_referencia() {
        assert!(pertence(Some(&EntityRef::from_id(4)), 4));
        assert!(!pertence(Some(&EntityRef::from_id(4)), 5));
        assert!(!pertence(None, 4));
        assert!(!pertence(
            Some(&EntityRef {
                id: None,
                nome: Some("Pátio Sul".into()),
            }),
            4,
        ));
    }
}
