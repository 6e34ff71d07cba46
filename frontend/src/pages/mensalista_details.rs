//! Detalhes de um mensalista, com exclusão mediante confirmação.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Mensalista, date};

use crate::api::mensalistas::{delete_mensalista, get_mensalista_by_id};
use crate::components::common::{Button, ButtonVariant, Card, InputGroupReadOnly};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn MensalistaDetails(id: i64) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<Mensalista>::Idle);
    let confirmar_exclusao = RwSignal::new(false);

    estado.update(PageState::start);
    spawn_local({
        let guard = guard.clone();
        async move {
            let resultado = get_mensalista_by_id(id).await;
            if !guard.is_alive() {
                return;
            }
            match resultado {
                Ok(mensalista) => estado.update(|atual| atual.succeed(mensalista)),
                Err(err) => estado.update(|atual| {
                    atual.fail(format!(
                        "Erro ao carregar detalhes do mensalista: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando detalhes do mensalista..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card>
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(mensalista) => {
                let nome = mensalista.nome.clone().unwrap_or_default();
                let rotulo_exclusao = format!("{} (ID: {})", nome, id);
                let nome_estacionamento = mensalista
                    .estacionamento
                    .as_ref()
                    .map(|e| e.display_name())
                    .unwrap_or_default();
                // Depois de apagar, volta para o estacionamento de origem
                // quando a referência é conhecida.
                let destino_exclusao = mensalista
                    .estacionamento
                    .as_ref()
                    .and_then(|e| e.id)
                    .map(|id| AppRoute::EstacionamentoDetails { id })
                    .unwrap_or_default();

                let confirmar = Callback::new(move |_| {
                    confirmar_exclusao.set(false);
                    spawn_local(async move {
                        match delete_mensalista(id).await {
                            Ok(()) => {
                                toasts.sucesso("Mensalista apagado com sucesso!");
                                router.navigate(destino_exclusao);
                            }
                            Err(err) => {
                                toasts.erro(format!(
                                    "Erro ao apagar mensalista: {}",
                                    err.user_message()
                                ));
                            }
                        }
                    });
                });

                view! {
                    <Card title=format!("Mensalista: {nome}")>
                        <InputGroupReadOnly
                            label="ID:"
                            id="id"
                            value=mensalista.id.map(|id| id.to_string()).unwrap_or_default()
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
                            label="Nome:"
                            id="nome"
                            value=mensalista.nome.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="CPF:"
                            id="cpf"
                            value=mensalista.cpf.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Telefone:"
                            id="telefone"
                            value=mensalista.telefone.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Placa do Veículo:"
                            id="placaVeiculo"
                            value=mensalista.placa_veiculo.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Vencimento Contrato:"
                            id="vencimentoContrato"
                            value=date::split_data(mensalista.vencimento_contrato)
                        />
                        <InputGroupReadOnly
                            label="Valor Mensal:"
                            id="valorMensal"
                            value=format!("R$ {:.2}", mensalista.valor_mensal.unwrap_or(0.0))
                        />
                        <div class="button-group">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_press=Callback::new(move |_| {
                                    router.navigate(AppRoute::MensalistaEdit { id })
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
                            "Tem certeza que deseja APAGAR o Mensalista "
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
