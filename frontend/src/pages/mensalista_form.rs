//! Formulário de cadastro e edição de mensalista.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{EntityRef, Mensalista, date};

use crate::api::estacionamentos::get_estacionamento_by_id;
use crate::api::mensalistas::{create_mensalista, get_mensalista_by_id, update_mensalista};
use crate::components::common::{Button, ButtonVariant, Card, InputGroup, InputGroupReadOnly};
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Copy)]
struct FormularioMensalista {
    id: RwSignal<String>,
    nome: RwSignal<String>,
    cpf: RwSignal<String>,
    telefone: RwSignal<String>,
    placa_veiculo: RwSignal<String>,
    vencimento_contrato: RwSignal<String>,
    valor_mensal: RwSignal<String>,
    estacionamento_id: RwSignal<String>,
    estacionamento_nome: RwSignal<String>,
}

impl FormularioMensalista {
    fn new() -> Self {
        FormularioMensalista {
            id: RwSignal::new(String::new()),
            nome: RwSignal::new(String::new()),
            cpf: RwSignal::new(String::new()),
            telefone: RwSignal::new(String::new()),
            placa_veiculo: RwSignal::new(String::new()),
            vencimento_contrato: RwSignal::new(String::new()),
            valor_mensal: RwSignal::new(String::new()),
            estacionamento_id: RwSignal::new(String::new()),
            estacionamento_nome: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, mensalista: &Mensalista) {
        self.id
            .set(mensalista.id.map(|id| id.to_string()).unwrap_or_default());
        self.nome.set(mensalista.nome.clone().unwrap_or_default());
        self.cpf.set(mensalista.cpf.clone().unwrap_or_default());
        self.telefone
            .set(mensalista.telefone.clone().unwrap_or_default());
        self.placa_veiculo
            .set(mensalista.placa_veiculo.clone().unwrap_or_default());
        self.vencimento_contrato
            .set(date::split_data(mensalista.vencimento_contrato));
        self.valor_mensal.set(
            mensalista
                .valor_mensal
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        if let Some(estacionamento) = &mensalista.estacionamento {
            self.estacionamento_id.set(
                estacionamento
                    .id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            );
            self.estacionamento_nome
                .set(estacionamento.nome.clone().unwrap_or_default());
        }
    }

    fn seed_estacionamento(&self, id: i64, nome: &str) {
        self.estacionamento_id.set(id.to_string());
        self.estacionamento_nome.set(nome.to_string());
    }

    fn to_payload(&self) -> Mensalista {
        Mensalista {
            id: self.id.get().trim().parse().ok(),
            nome: Some(self.nome.get()),
            cpf: Some(self.cpf.get()),
            telefone: Some(self.telefone.get()),
            placa_veiculo: Some(self.placa_veiculo.get()),
            vencimento_contrato: date::join_data(&self.vencimento_contrato.get()),
            valor_mensal: self.valor_mensal.get().trim().parse().ok(),
            estacionamento: self
                .estacionamento_id
                .get()
                .trim()
                .parse()
                .ok()
                .map(EntityRef::from_id),
        }
    }
}

#[component]
pub fn MensalistaForm(
    #[prop(optional)] id: Option<i64>,
    #[prop(optional)] estacionamento_id: Option<i64>,
) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let editando = id.is_some();
    let form = FormularioMensalista::new();
    let carregamento = RwSignal::new(PageState::<()>::Idle);
    let erro_envio = RwSignal::new(Option::<String>::None);

    carregamento.update(PageState::start);
    if let Some(id) = id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_mensalista_by_id(id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(mensalista) => {
                        form.fill(&mensalista);
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do mensalista ou estacionamento: {}",
                            err.user_message()
                        ));
                    }),
                }
            }
        });
    } else if let Some(est_id) = estacionamento_id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_estacionamento_by_id(est_id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(estacionamento) => {
                        form.seed_estacionamento(
                            est_id,
                            &estacionamento.nome.unwrap_or_default(),
                        );
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do mensalista ou estacionamento: {}",
                            err.user_message()
                        ));
                    }),
                }
            }
        });
    } else {
        carregamento.update(|atual| atual.succeed(()));
    }

    let destino_cancelar = match (id, estacionamento_id) {
        (Some(id), _) => AppRoute::MensalistaDetails { id },
        (None, Some(est_id)) => AppRoute::EstacionamentoDetails { id: est_id },
        (None, None) => AppRoute::Dashboard,
    };

    let ao_enviar = {
        let guard = guard.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            erro_envio.set(None);
            let payload = form.to_payload();
            let destino = match estacionamento_id {
                Some(est_id) => AppRoute::EstacionamentoDetails { id: est_id },
                None => AppRoute::Dashboard,
            };
            let guard = guard.clone();
            spawn_local(async move {
                let resultado = match id {
                    Some(id) => update_mensalista(id, &payload).await.map(|_| ()),
                    None => create_mensalista(&payload).await.map(|_| ()),
                };
                match resultado {
                    Ok(()) => {
                        toasts.sucesso(if editando {
                            "Mensalista atualizado com sucesso!"
                        } else {
                            "Mensalista cadastrado com sucesso!"
                        });
                        router.navigate(destino);
                    }
                    Err(err) => {
                        if guard.is_alive() {
                            erro_envio.set(Some(format!(
                                "Erro ao salvar mensalista: {}",
                                err.user_message()
                            )));
                        }
                    }
                }
            });
        }
    };

    view! {
        {move || match carregamento.get() {
            PageState::Idle | PageState::Loading => {
                view! { <Card>"Carregando formulário..."</Card> }.into_any()
            }
            PageState::Failed(mensagem) => {
                view! {
                    <Card>
                        <p class="error-text">{mensagem}</p>
                    </Card>
                }
                .into_any()
            }
            PageState::Ready(()) => {
                let titulo = if editando {
                    format!("Mensalista {} - Editar", form.nome.get_untracked())
                } else {
                    "Registrar Mensalista".to_string()
                };
                let nome_estacionamento = form.estacionamento_nome.get_untracked();
                let ao_enviar = ao_enviar.clone();
                view! {
                    <Card title=titulo>
                        {move || {
                            erro_envio
                                .get()
                                .map(|mensagem| view! { <p class="error-text">{mensagem}</p> })
                        }}
                        <form on:submit=ao_enviar>
                            <InputGroup
                                label="ID:"
                                id="id"
                                value=form.id
                                on_input=Callback::new(move |valor: String| form.id.set(valor))
                                placeholder="Insira o ID do mensalista"
                                read_only=editando
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
                            <InputGroup
                                label="Nome:"
                                id="nome"
                                value=form.nome
                                on_input=Callback::new(move |valor: String| form.nome.set(valor))
                                placeholder="Nome completo do mensalista"
                                required=true
                            />
                            <InputGroup
                                label="CPF:"
                                id="cpf"
                                value=form.cpf
                                on_input=Callback::new(move |valor: String| form.cpf.set(valor))
                                placeholder="000.000.000-00"
                                required=true
                            />
                            <InputGroup
                                label="Telefone:"
                                id="telefone"
                                value=form.telefone
                                on_input=Callback::new(move |valor: String| {
                                    form.telefone.set(valor)
                                })
                                placeholder="(00) 00000-0000"
                                required=true
                            />
                            <InputGroup
                                label="Placa do Veículo:"
                                id="placaVeiculo"
                                value=form.placa_veiculo
                                on_input=Callback::new(move |valor: String| {
                                    form.placa_veiculo.set(valor)
                                })
                                placeholder="ABC1234"
                                max_length=7
                                required=true
                            />
                            <InputGroup
                                label="Vencimento do Contrato:"
                                id="vencimentoContrato"
                                input_type="date"
                                value=form.vencimento_contrato
                                on_input=Callback::new(move |valor: String| {
                                    form.vencimento_contrato.set(valor)
                                })
                                required=true
                            />
                            <InputGroup
                                label="Valor Mensal:"
                                id="valorMensal"
                                input_type="number"
                                value=form.valor_mensal
                                on_input=Callback::new(move |valor: String| {
                                    form.valor_mensal.set(valor)
                                })
                                placeholder="0.00"
                                step="0.01"
                                required=true
                            />
                            <div class="button-group">
                                <Button kind="submit">
                                    {if editando {
                                        "Confirmar Edição"
                                    } else {
                                        "Registrar Mensalista"
                                    }}
                                </Button>
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on_press=Callback::new(move |_| {
                                        router.navigate(destino_cancelar)
                                    })
                                >
                                    "Cancelar"
                                </Button>
                            </div>
                        </form>
                    </Card>
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
    fn payload_converte_vencimento_e_valor() {
        let form = FormularioMensalista::new();
        form.nome.set("João da Silva".into());
        form.vencimento_contrato.set("2025-09-01".into());
        form.valor_mensal.set("450".into());
        form.estacionamento_id.set("2".into());

        let payload = form.to_payload();
        assert_eq!(payload.vencimento_contrato, date::join_data("2025-09-01"));
        assert!(payload.vencimento_contrato.is_some());
        assert_eq!(payload.valor_mensal, Some(450.0));
        assert_eq!(payload.estacionamento, Some(EntityRef::from_id(2)));
    }

    #[test]
    fn fill_usa_data_simples_no_vencimento() {
        let form = FormularioMensalista::new();
        form.fill(&Mensalista {
            id: Some(5),
            nome: Some("Maria Souza".into()),
            vencimento_contrato: date::join_data("2025-12-10"),
            valor_mensal: Some(380.5),
            ..Default::default()
        });

        assert_eq!(form.id.get_untracked(), "5");
        assert_eq!(form.vencimento_contrato.get_untracked(), "2025-12-10");
        assert_eq!(form.valor_mensal.get_untracked(), "380.5");
        assert_eq!(form.estacionamento_id.get_untracked(), "");
    }

    #[test]
    fn vencimento_invalido_vai_como_nulo() {
        let form = FormularioMensalista::new();
        form.vencimento_contrato.set("10/12/2025".into());
        assert_eq!(form.to_payload().vencimento_contrato, None);
    }
}
