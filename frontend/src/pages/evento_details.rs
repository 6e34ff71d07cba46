//! Detalhes de um evento, com exclusão mediante confirmação.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Evento, date};

use crate::api::eventos::{delete_evento, get_evento_by_id};
use crate::components::common::{Button, ButtonVariant, Card, InputGroupReadOnly};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn EventoDetails(id: i64) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<Evento>::Idle);
    let confirmar_exclusao = RwSignal::new(false);

    estado.update(PageState::start);
    spawn_local({
        let guard = guard.clone();
        async move {
            let resultado = get_evento_by_id(id).await;
            if !guard.is_alive() {
                return;
            }
            match resultado {
                Ok(evento) => estado.update(|atual| atual.succeed(evento)),
                Err(err) => estado.update(|atual| {
                    atual.fail(format!(
                        "Erro ao carregar detalhes do evento: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando detalhes do evento..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card>
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(evento) => {
                let nome = evento.nome.clone().unwrap_or_default();
                let rotulo_exclusao = format!("{} (ID: {})", nome, id);
                let nome_contratante = evento
                    .contratante
                    .as_ref()
                    .map(|c| c.display_name())
                    .unwrap_or_default();
                let nome_estacionamento = evento
                    .estacionamento
                    .as_ref()
                    .map(|e| e.display_name())
                    .unwrap_or_default();
                // Depois de apagar, volta para o contratante de origem, ou
                // para o estacionamento quando só essa referência existe.
                let destino_exclusao = evento
                    .contratante
                    .as_ref()
                    .and_then(|c| c.id)
                    .map(|id| AppRoute::ContratanteDetails { id })
                    .or_else(|| {
                        evento
                            .estacionamento
                            .as_ref()
                            .and_then(|e| e.id)
                            .map(|id| AppRoute::EstacionamentoDetails { id })
                    })
                    .unwrap_or_default();

                let confirmar = Callback::new(move |_| {
                    confirmar_exclusao.set(false);
                    spawn_local(async move {
                        match delete_evento(id).await {
                            Ok(()) => {
                                toasts.sucesso("Evento apagado com sucesso!");
                                router.navigate(destino_exclusao);
                            }
                            Err(err) => {
                                toasts.erro(format!(
                                    "Erro ao apagar evento: {}",
                                    err.user_message()
                                ));
                            }
                        }
                    });
                });

                view! {
                    <Card title=format!("Evento: {nome}")>
                        <InputGroupReadOnly
                            label="ID:"
                            id="id"
                            value=evento.id.map(|id| id.to_string()).unwrap_or_default()
                        />
                        {if nome_contratante.is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <InputGroupReadOnly
                                    label="Contratante:"
                                    id="contratanteNome"
                                    value=nome_contratante.clone()
                                />
                            }
                                .into_any()
                        }}
                        {if nome_estacionamento.is_empty() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <InputGroupReadOnly
                                    label="Estacionamento:"
                                    id="estacionamentoNome"
                                    value=nome_estacionamento.clone()
                                />
                            }
                                .into_any()
                        }}
                        <InputGroupReadOnly
                            label="Nome do Evento:"
                            id="nome"
                            value=evento.nome.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Início:"
                            id="dataInicio"
                            value=date::format_data_hora(evento.data_inicio)
                        />
                        <InputGroupReadOnly
                            label="Fim:"
                            id="dataFim"
                            value=date::format_data_hora(evento.data_fim)
                        />
                        <InputGroupReadOnly
                            label="Valor Diária:"
                            id="valorDiaria"
                            value=format!("R$ {:.2}", evento.valor_diaria.unwrap_or(0.0))
                        />
                        <InputGroupReadOnly
                            label="Vagas Contratadas:"
                            id="qtdVagasContratadas"
                            value=evento
                                .qtd_vagas_contratadas
                                .map(|v| v.to_string())
                                .unwrap_or_default()
                        />
                        <div class="button-group">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_press=Callback::new(move |_| {
                                    router.navigate(AppRoute::EventoEdit { id })
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

                    <ConfirmDialog
                        show=confirmar_exclusao
                        title="Confirmar Exclusão"
                        on_confirm=confirmar
                        on_cancel=Callback::new(move |_| confirmar_exclusao.set(false))
                    >
                        <p>
                            "Tem certeza que deseja APAGAR o Evento "
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
