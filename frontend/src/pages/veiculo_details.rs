//! Detalhes de um veículo, com exclusão mediante confirmação.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Veiculo, date};

use crate::api::veiculos::{delete_veiculo, get_veiculo_by_id};
use crate::components::common::{Button, ButtonVariant, Card, InputGroupReadOnly};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn VeiculoDetails(id: i64) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<Veiculo>::Idle);
    let confirmar_exclusao = RwSignal::new(false);

    estado.update(PageState::start);
    spawn_local({
        let guard = guard.clone();
        async move {
            let resultado = get_veiculo_by_id(id).await;
            if !guard.is_alive() {
                return;
            }
            match resultado {
                Ok(veiculo) => estado.update(|atual| atual.succeed(veiculo)),
                Err(err) => estado.update(|atual| {
                    atual.fail(format!(
                        "Erro ao carregar detalhes do veículo: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando detalhes do veículo..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card>
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(veiculo) => {
                let placa = veiculo.placa.clone().unwrap_or_default();
                let rotulo_exclusao = format!("{} (ID: {})", placa, id);
                let nome_estacionamento = veiculo
                    .estacionamento
                    .as_ref()
                    .map(|e| e.display_name())
                    .unwrap_or_default();

                let confirmar = Callback::new(move |_| {
                    confirmar_exclusao.set(false);
                    spawn_local(async move {
                        match delete_veiculo(id).await {
                            Ok(()) => {
                                toasts.sucesso("Veículo apagado com sucesso!");
                                router.navigate(AppRoute::Dashboard);
                            }
                            Err(err) => {
                                toasts.erro(format!(
                                    "Erro ao apagar veículo: {}",
                                    err.user_message()
                                ));
                            }
                        }
                    });
                });

                view! {
                    <Card title=format!("Detalhes do Veículo (ID: {id})")>
                        <InputGroupReadOnly
                            label="ID:"
                            id="id"
                            value=veiculo.id.map(|id| id.to_string()).unwrap_or_default()
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
                        <InputGroupReadOnly label="Placa:" id="placa" value=placa.clone() />
                        <InputGroupReadOnly
                            label="Marca:"
                            id="marca"
                            value=veiculo.marca.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Modelo:"
                            id="modelo"
                            value=veiculo.modelo.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Cor:"
                            id="cor"
                            value=veiculo.cor.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Tipo de Acesso:"
                            id="tipoAcesso"
                            value=veiculo.tipo_acesso.clone().unwrap_or_default()
                        />
                        <InputGroupReadOnly
                            label="Hora de Entrada:"
                            id="dataEntrada"
                            value=date::format_data_hora(veiculo.data_entrada)
                        />
                        <InputGroupReadOnly
                            label="Hora de Saída:"
                            id="dataSaida"
                            value=date::format_data_hora(veiculo.data_saida)
                        />
                        <InputGroupReadOnly
                            label="Valor Cobrado:"
                            id="valorCobrado"
                            value=format!("R$ {:.2}", veiculo.valor_cobrado.unwrap_or(0.0))
                        />
                        <div class="button-group">
                            <Button
                                variant=ButtonVariant::Secondary
                                on_press=Callback::new(move |_| {
                                    router.navigate(AppRoute::VeiculoEdit { id })
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
                            "Tem certeza que deseja APAGAR o Veículo com placa "
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
