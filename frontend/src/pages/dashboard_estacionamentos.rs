//! Dashboard com a lista de estacionamentos cadastrados.
//!
//! Porta de entrada da aplicação: lista todos os estacionamentos,
//! encaminha para cadastro, detalhes e edição, e apaga um
//! estacionamento após confirmação em diálogo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::Estacionamento;

use crate::api::estacionamentos::{delete_estacionamento, get_all_estacionamentos};
use crate::components::common::{Button, Card, ListItemCard};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[component]
pub fn DashboardEstacionamentos() -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let estado = RwSignal::new(PageState::<Vec<Estacionamento>>::Idle);
    let exclusao_pendente = RwSignal::new(Option::<Estacionamento>::None);

    // Busca única no montar da página.
    estado.update(PageState::start);
    spawn_local({
        let guard = guard.clone();
        async move {
            let resultado = get_all_estacionamentos().await;
            if !guard.is_alive() {
                return;
            }
            match resultado {
                Ok(lista) => estado.update(|atual| atual.succeed(lista)),
                Err(err) => estado.update(|atual| {
                    atual.fail(format!(
                        "Erro ao carregar estacionamentos: {}",
                        err.user_message()
                    ));
                }),
            }
        }
    });

    let solicitar_exclusao = move |alvo: Estacionamento| exclusao_pendente.set(Some(alvo));

    let cancelar_exclusao = Callback::new(move |_| exclusao_pendente.set(None));

    let confirmar_exclusao = Callback::new({
        let guard = guard.clone();
        move |_| {
            let Some(alvo) = exclusao_pendente.get_untracked() else {
                return;
            };
            exclusao_pendente.set(None);
            let Some(id) = alvo.id else {
                return;
            };
            let guard = guard.clone();
            spawn_local(async move {
                match delete_estacionamento(id).await {
                    Ok(()) => {
                        toasts.sucesso("Estacionamento apagado com sucesso!");
                        if guard.is_alive() {
                            estado.update(|atual| {
                                atual.update_data(|lista| lista.retain(|e| e.id != Some(id)));
                            });
                        }
                    }
                    Err(err) => {
                        toasts.erro(format!(
                            "Erro ao apagar estacionamento: {}",
                            err.user_message()
                        ));
                    }
                }
            });
        }
    });

    view! {
        {move || match estado.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando estacionamentos..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card title="Estacionamentos Cadastrados">
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(lista) => {
                let vazio = lista.is_empty();
                let linhas = lista
                    .into_iter()
                    .map(|estacionamento| {
                        let titulo = estacionamento
                            .nome
                            .clone()
                            .unwrap_or_else(|| "Nome não informado".to_string());
                        let capacidade = estacionamento.capacidade.unwrap_or(0);
                        let ocupadas = estacionamento.vagas_ocupadas.unwrap_or(0);
                        let on_details = estacionamento.id.map(|id| {
                            Callback::new(move |_| {
                                router.navigate(AppRoute::EstacionamentoDetails { id })
                            })
                        });
                        let on_edit = estacionamento.id.map(|id| {
                            Callback::new(move |_| {
                                router.navigate(AppRoute::EstacionamentoEdit { id })
                            })
                        });
                        let on_delete = estacionamento.id.map(|_| {
                            let alvo = estacionamento.clone();
                            Callback::new(move |_| solicitar_exclusao(alvo.clone()))
                        });
                        view! {
                            <ListItemCard
                                title=titulo
                                description=format!("Capacidade: {capacidade} vagas")
                                info=format!("Ocupadas: {ocupadas} / {capacidade}")
                                on_details=on_details
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    })
                    .collect_view();

                view! {
                    <Card title="Estacionamentos Cadastrados">
                        <div class="button-group start">
                            <Button on_press=Callback::new(move |_| {
                                router.navigate(AppRoute::EstacionamentoAdd)
                            })>"Adicionar Estacionamento"</Button>
                        </div>
                        {if vazio {
                            view! { <p>"Nenhum estacionamento cadastrado ainda."</p> }.into_any()
                        } else {
                            linhas.into_any()
                        }}
                    </Card>
                }
                .into_any()
            }
        }}
        <ConfirmDialog
            show=Signal::derive(move || exclusao_pendente.with(|alvo| alvo.is_some()))
            title="Confirmar Exclusão"
            on_confirm=confirmar_exclusao
            on_cancel=cancelar_exclusao
        >
            <p>
                "Tem certeza que deseja APAGAR o Estacionamento "
                <strong>
                    {move || {
                        exclusao_pendente.with(|alvo| {
                            alvo.as_ref().map(|alvo| {
                                format!(
                                    "{} (ID: {})",
                                    alvo.nome.clone().unwrap_or_default(),
                                    alvo.id.unwrap_or_default(),
                                )
                            })
                        })
                    }}
                </strong>
                "?"
            </p>
            <p>
                "Esta ação é irreversível e removerá todos os dados relacionados a ele "
                "(veículos, mensalistas, contratantes, eventos)."
            </p>
        </ConfirmDialog>
    }
}
