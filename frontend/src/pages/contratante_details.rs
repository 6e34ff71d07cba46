//! Detalhes de um contratante e a lista de eventos dele.
//!
//! Os eventos vêm da coleção completa e são filtrados aqui pela
//! referência de contratante, já que a API não tem rota aninhada.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Contratante, Evento, date};

use crate::api::contratantes::{delete_contratante, get_contratante_by_id};
use crate::api::error::ApiError;
use crate::api::eventos::get_all_eventos;
use crate::components::common::{Button, ButtonVariant, Card, InputGroupReadOnly, ListItemCard};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::{AppRoute, EventoParent};
use crate::web::router::use_router;

#[derive(Debug, Clone, PartialEq)]
struct DetalheContratante {
    contratante: Contratante,
    eventos: Vec<Evento>,
}

async fn carregar_detalhe(id: i64) -> Result<DetalheContratante, ApiError> {
    let contratante = get_contratante_by_id(id).await?;
    let eventos = get_all_eventos().await?;
    Ok(DetalheContratante {
        contratante,
        eventos: eventos
            .into_iter()
            .filter(|e| e.contratante.as_ref().and_then(|c| c.id) == Some(id))
            .collect(),
    })
}

#[component]
pub fn ContratanteDetails(id: i64) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<DetalheContratante>::Idle);
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
                        "Erro ao carregar detalhes do contratante: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando detalhes do contratante..."</Card> }.into_any()
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
                let contratante = detalhe.contratante;
                let nome = contratante.nome.clone().unwrap_or_default();
                let rotulo_exclusao = format!("{} (ID: {})", nome, id);
                let nome_estacionamento = contratante
                    .estacionamento
                    .as_ref()
                    .map(|e| e.display_name())
                    .unwrap_or_default();
                let destino_exclusao = contratante
                    .estacionamento
                    .as_ref()
                    .and_then(|e| e.id)
                    .map(|id| AppRoute::EstacionamentoDetails { id })
                    .unwrap_or_default();

                let confirmar = Callback::new(move |_| {
                    confirmar_exclusao.set(false);
                    spawn_local(async move {
                        match delete_contratante(id).await {
                            Ok(()) => {
                                toasts.sucesso("Contratante apagado com sucesso!");
                                router.navigate(destino_exclusao);
                            }
                            Err(err) => {
                                toasts.erro(format!(
                                    "Erro ao apagar contratante: {}",
                                    err.user_message()
                                ));
                            }
                        }
                    });
                });

                let eventos = if detalhe.eventos.is_empty() {
                    view! { <p>"Nenhum evento cadastrado para este contratante."</p> }.into_any()
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
                                .estacionamento
                                .as_ref()
                                .map(|e| format!("Local: {}", e.display_name()));
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
                    <Card title=format!("Contratante: {nome}")>
                        <InputGroupReadOnly
                            label="ID:"
                            id="id"
                            value=contratante.id.map(|id| id.to_string()).unwrap_or_default()
                        />
                        {if nome_estacionamento.is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <InputGroupReadOnly
                                    label="Nome do Estacionamento:"
                                    id="estacionamentoNome"
                                    value=nome_estacionamento.clone()
                                />
                            }
                                .into_any()
                        }}
                        <InputGroupReadOnly
                            label="Nome/Razão Social:"
                            id="nome"
                            value=contratante.nome.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="CNPJ:"
                            id="cnpj"
                            value=contratante.cnpj.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Telefone:"
                            id="telefone"
                            value=contratante.telefone.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Email:"
                            id="email"
                            value=contratante.email.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Logradouro:"
                            id="logradouro"
                            value=contratante.logradouro.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Número:"
                            id="numero"
                            value=contratante.numero.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Bairro:"
                            id="bairro"
                            value=contratante.bairro.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Cidade:"
                            id="cidade"
                            value=contratante.cidade.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="CEP:"
                            id="cep"
                            value=contratante.cep.clone().unwrap_or_default()
                        />
                        <div class="button-group">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_press=Callback::new(move |_| {
                                    router.navigate(AppRoute::ContratanteEdit { id })
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

                    <Card title="Eventos do Contratante">
                        {eventos}
                        <Button on_press=Callback::new(move |_| {
                            router.navigate(AppRoute::EventoAdd {
                                parent: EventoParent::Contratante(id),
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
                            "Tem certeza que deseja APAGAR o Contratante "
                            <strong>{rotulo_exclusao}</strong>
                            "?"
                        </p>
                        <p>"Esta ação é irreversível."</p>
                    </ConfirmDialog>
                }
                .into_any()
            }
        }}
    }
}
