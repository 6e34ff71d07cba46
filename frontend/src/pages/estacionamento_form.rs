//! Formulário de cadastro e edição de estacionamento.
//!
//! Componente de modo duplo: sem `id` cadastra um estacionamento novo,
//! com `id` carrega o existente e envia a edição. Falha de envio fica
//! visível acima do formulário, que permanece preenchido.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::Estacionamento;

use crate::api::estacionamentos::{
    create_estacionamento, get_estacionamento_by_id, update_estacionamento,
};
use crate::components::common::{Button, ButtonVariant, Card, InputGroup};
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Campos do formulário, um sinal por campo.
#[derive(Clone, Copy)]
struct FormularioEstacionamento {
    id: RwSignal<String>,
    nome: RwSignal<String>,
    endereco: RwSignal<String>,
    complemento: RwSignal<String>,
    cidade: RwSignal<String>,
    cep: RwSignal<String>,
    telefone: RwSignal<String>,
    capacidade: RwSignal<String>,
    hora_abertura: RwSignal<String>,
    hora_fechamento: RwSignal<String>,
}

impl FormularioEstacionamento {
    fn new() -> Self {
        FormularioEstacionamento {
            id: RwSignal::new(String::new()),
            nome: RwSignal::new(String::new()),
            endereco: RwSignal::new(String::new()),
            complemento: RwSignal::new(String::new()),
            cidade: RwSignal::new(String::new()),
            cep: RwSignal::new(String::new()),
            telefone: RwSignal::new(String::new()),
            capacidade: RwSignal::new(String::new()),
            hora_abertura: RwSignal::new(String::new()),
            hora_fechamento: RwSignal::new(String::new()),
        }
    }

    /// Espelha a entidade carregada nos campos, para edição.
    fn fill(&self, estacionamento: &Estacionamento) {
        self.id.set(
            estacionamento
                .id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        );
        self.nome.set(estacionamento.nome.clone().unwrap_or_default());
        self.endereco
            .set(estacionamento.endereco.clone().unwrap_or_default());
        self.complemento
            .set(estacionamento.complemento.clone().unwrap_or_default());
        self.cidade
            .set(estacionamento.cidade.clone().unwrap_or_default());
        self.cep.set(estacionamento.cep.clone().unwrap_or_default());
        self.telefone
            .set(estacionamento.telefone.clone().unwrap_or_default());
        self.capacidade.set(
            estacionamento
                .capacidade
                .map(|c| c.to_string())
                .unwrap_or_default(),
        );
        self.hora_abertura
            .set(estacionamento.hora_abertura.clone().unwrap_or_default());
        self.hora_fechamento
            .set(estacionamento.hora_fechamento.clone().unwrap_or_default());
    }

    /// Monta o corpo da requisição.
    ///
    /// O `id` fica de fora: na criação o servidor gera o identificador
    /// e na edição ele vai na URL.
    fn to_payload(&self) -> Estacionamento {
        Estacionamento {
            id: None,
            nome: Some(self.nome.get()),
            endereco: Some(self.endereco.get()),
            complemento: Some(self.complemento.get()),
            cidade: Some(self.cidade.get()),
            cep: Some(self.cep.get()),
            telefone: Some(self.telefone.get()),
            capacidade: self.capacidade.get().trim().parse().ok(),
            hora_abertura: texto_opcional(self.hora_abertura.get()),
            hora_fechamento: texto_opcional(self.hora_fechamento.get()),
            vagas_ocupadas: None,
        }
    }
}

/// Campo de hora vazio vira `null` no corpo; o backend não aceita
/// string vazia em campos de hora.
fn texto_opcional(valor: String) -> Option<String> {
    if valor.trim().is_empty() {
        None
    } else {
        Some(valor)
    }
}

#[component]
pub fn EstacionamentoForm(#[prop(optional)] id: Option<i64>) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let editando = id.is_some();
    let form = FormularioEstacionamento::new();
    let carregamento = RwSignal::new(PageState::<()>::Idle);
    let erro_envio = RwSignal::new(Option::<String>::None);

    carregamento.update(PageState::start);
    if let Some(id) = id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_estacionamento_by_id(id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(estacionamento) => {
                        form.fill(&estacionamento);
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do estacionamento: {}",
                            err.user_message()
                        ));
                    }),
                }
            }
        });
    } else {
        carregamento.update(|atual| atual.succeed(()));
    }

    let destino_cancelar = match id {
        Some(id) => AppRoute::EstacionamentoDetails { id },
        None => AppRoute::Dashboard,
    };

    let ao_enviar = {
        let guard = guard.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();
            erro_envio.set(None);
            let payload = form.to_payload();
            let guard = guard.clone();
            spawn_local(async move {
                let resultado = match id {
                    Some(id) => update_estacionamento(id, &payload).await.map(|_| ()),
                    None => create_estacionamento(&payload).await.map(|_| ()),
                };
                match resultado {
                    Ok(()) => {
                        toasts.sucesso(if editando {
                            "Estacionamento atualizado com sucesso!"
                        } else {
                            "Estacionamento cadastrado com sucesso!"
                        });
                        router.navigate(AppRoute::Dashboard);
                    }
                    Err(err) => {
                        if guard.is_alive() {
                            erro_envio.set(Some(format!(
                                "Erro ao salvar estacionamento: {}",
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
                    format!("Estacionamento {} - Editar", form.nome.get_untracked())
                } else {
                    "Registrar Estacionamento".to_string()
                };
                let ao_enviar = ao_enviar.clone();
                view! {
                    <Card title=titulo>
                        {move || {
                            erro_envio
                                .get()
                                .map(|mensagem| view! { <p class="error-text">{mensagem}</p> })
                        }}
                        <form on:submit=ao_enviar>
                            {if editando {
                                view! {
                                    <InputGroup
                                        label="ID:"
                                        id="id"
                                        value=form.id
                                        placeholder="ID do estacionamento"
                                        read_only=true
                                    />
                                }
                                    .into_any()
                            } else {
                                view! { <></> }.into_any()
                            }}
                            <InputGroup
                                label="Nome:"
                                id="nome"
                                value=form.nome
                                on_input=Callback::new(move |valor: String| form.nome.set(valor))
                                placeholder="Insira o nome"
                                required=true
                            />
                            <InputGroup
                                label="Endereço:"
                                id="endereco"
                                value=form.endereco
                                on_input=Callback::new(move |valor: String| {
                                    form.endereco.set(valor)
                                })
                                placeholder="Insira o endereço"
                                required=true
                            />
                            <InputGroup
                                label="Complemento:"
                                id="complemento"
                                value=form.complemento
                                on_input=Callback::new(move |valor: String| {
                                    form.complemento.set(valor)
                                })
                                placeholder="Insira o complemento (opcional)"
                            />
                            <InputGroup
                                label="Cidade:"
                                id="cidade"
                                value=form.cidade
                                on_input=Callback::new(move |valor: String| form.cidade.set(valor))
                                placeholder="Insira a cidade"
                                required=true
                            />
                            <InputGroup
                                label="CEP:"
                                id="cep"
                                value=form.cep
                                on_input=Callback::new(move |valor: String| form.cep.set(valor))
                                placeholder="Insira o CEP"
                                required=true
                            />
                            <InputGroup
                                label="Telefone:"
                                id="telefone"
                                value=form.telefone
                                on_input=Callback::new(move |valor: String| {
                                    form.telefone.set(valor)
                                })
                                placeholder="Insira o telefone"
                                required=true
                            />
                            <InputGroup
                                label="Capacidade:"
                                id="capacidade"
                                input_type="number"
                                value=form.capacidade
                                on_input=Callback::new(move |valor: String| {
                                    form.capacidade.set(valor)
                                })
                                placeholder="Insira a capacidade"
                                required=true
                            />
                            <InputGroup
                                label="Hora de Abertura:"
                                id="horaAbertura"
                                input_type="time"
                                value=form.hora_abertura
                                on_input=Callback::new(move |valor: String| {
                                    form.hora_abertura.set(valor)
                                })
                                required=true
                            />
                            <InputGroup
                                label="Hora de Fechamento:"
                                id="horaFechamento"
                                input_type="time"
                                value=form.hora_fechamento
                                on_input=Callback::new(move |valor: String| {
                                    form.hora_fechamento.set(valor)
                                })
                                required=true
                            />
                            <div class="button-group">
                                <Button kind="submit">
                                    {if editando { "Confirmar Edição" } else { "Enviar" }}
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
    fn payload_converte_capacidade_e_omite_id() {
        let form = FormularioEstacionamento::new();
        form.id.set("9".into());
        form.nome.set("Pátio Central".into());
        form.capacidade.set("120".into());
        form.hora_abertura.set("08:00".into());

        let payload = form.to_payload();
        assert_eq!(payload.id, None);
        assert_eq!(payload.nome.as_deref(), Some("Pátio Central"));
        assert_eq!(payload.capacidade, Some(120));
        assert_eq!(payload.hora_abertura.as_deref(), Some("08:00"));
        assert_eq!(payload.hora_fechamento, None);
    }

    #[test]
    fn capacidade_invalida_vai_como_nula() {
        let form = FormularioEstacionamento::new();
        form.capacidade.set("muitas".into());
        assert_eq!(form.to_payload().capacidade, None);
    }

    #[test]
    fn fill_espelha_a_entidade_carregada() {
        let form = FormularioEstacionamento::new();
        form.fill(&Estacionamento {
            id: Some(7),
            nome: Some("Pátio Norte".into()),
            capacidade: Some(80),
            hora_abertura: Some("07:30".into()),
            ..Default::default()
        });

        assert_eq!(form.id.get_untracked(), "7");
        assert_eq!(form.nome.get_untracked(), "Pátio Norte");
        assert_eq!(form.capacidade.get_untracked(), "80");
        assert_eq!(form.hora_abertura.get_untracked(), "07:30");
        assert_eq!(form.telefone.get_untracked(), "");
    }
}
