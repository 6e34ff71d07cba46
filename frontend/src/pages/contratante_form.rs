//! Formulário de cadastro e edição de contratante de eventos.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{Contratante, EntityRef};

use crate::api::contratantes::{create_contratante, get_contratante_by_id, update_contratante};
use crate::api::estacionamentos::get_estacionamento_by_id;
use crate::components::common::{Button, ButtonVariant, Card, InputGroup, InputGroupReadOnly};
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Copy)]
struct FormularioContratante {
    id: RwSignal<String>,
    nome: RwSignal<String>,
    cnpj: RwSignal<String>,
    telefone: RwSignal<String>,
    email: RwSignal<String>,
    logradouro: RwSignal<String>,
    numero: RwSignal<String>,
    bairro: RwSignal<String>,
    cidade: RwSignal<String>,
    cep: RwSignal<String>,
    estacionamento_id: RwSignal<String>,
    estacionamento_nome: RwSignal<String>,
}

impl FormularioContratante {
    fn new() -> Self {
        FormularioContratante {
            id: RwSignal::new(String::new()),
            nome: RwSignal::new(String::new()),
            cnpj: RwSignal::new(String::new()),
            telefone: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            logradouro: RwSignal::new(String::new()),
            numero: RwSignal::new(String::new()),
            bairro: RwSignal::new(String::new()),
            cidade: RwSignal::new(String::new()),
            cep: RwSignal::new(String::new()),
            estacionamento_id: RwSignal::new(String::new()),
            estacionamento_nome: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, contratante: &Contratante) {
        self.id
            .set(contratante.id.map(|id| id.to_string()).unwrap_or_default());
        self.nome.set(contratante.nome.clone().unwrap_or_default());
        self.cnpj.set(contratante.cnpj.clone().unwrap_or_default());
        self.telefone
            .set(contratante.telefone.clone().unwrap_or_default());
        self.email.set(contratante.email.clone().unwrap_or_default());
        self.logradouro
            .set(contratante.logradouro.clone().unwrap_or_default());
        self.numero
            .set(contratante.numero.clone().unwrap_or_default());
        self.bairro
            .set(contratante.bairro.clone().unwrap_or_default());
        self.cidade
            .set(contratante.cidade.clone().unwrap_or_default());
        self.cep.set(contratante.cep.clone().unwrap_or_default());
        if let Some(estacionamento) = &contratante.estacionamento {
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

    fn to_payload(&self) -> Contratante {
        Contratante {
            id: self.id.get().trim().parse().ok(),
            nome: Some(self.nome.get()),
            cnpj: Some(self.cnpj.get()),
            telefone: Some(self.telefone.get()),
            email: Some(self.email.get()),
            logradouro: Some(self.logradouro.get()),
            numero: Some(self.numero.get()),
            bairro: Some(self.bairro.get()),
            cidade: Some(self.cidade.get()),
            cep: Some(self.cep.get()),
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
pub fn ContratanteForm(
    #[prop(optional)] id: Option<i64>,
    #[prop(optional)] estacionamento_id: Option<i64>,
) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let editando = id.is_some();
    let form = FormularioContratante::new();
    let carregamento = RwSignal::new(PageState::<()>::Idle);
    let erro_envio = RwSignal::new(Option::<String>::None);

    carregamento.update(PageState::start);
    if let Some(id) = id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_contratante_by_id(id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(contratante) => {
                        form.fill(&contratante);
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do contratante ou estacionamento: {}",
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
                            "Erro ao carregar dados do contratante ou estacionamento: {}",
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
        (Some(id), _) => AppRoute::ContratanteDetails { id },
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
                    Some(id) => update_contratante(id, &payload).await.map(|_| ()),
                    None => create_contratante(&payload).await.map(|_| ()),
                };
                match resultado {
                    Ok(()) => {
                        toasts.sucesso(if editando {
                            "Contratante atualizado com sucesso!"
                        } else {
                            "Contratante cadastrado com sucesso!"
                        });
                        router.navigate(destino);
                    }
                    Err(err) => {
                        if guard.is_alive() {
                            erro_envio.set(Some(format!(
                                "Erro ao salvar contratante: {}",
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
                    format!("Contratante {} - Editar", form.nome.get_untracked())
                } else {
                    "Registrar Contratante".to_string()
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
                                placeholder="Insira o ID do contratante"
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
                                label="Nome/Razão Social:"
                                id="nome"
                                value=form.nome
                                on_input=Callback::new(move |valor: String| form.nome.set(valor))
                                placeholder="Nome ou Razão Social"
                                required=true
                            />
                            <InputGroup
                                label="CNPJ:"
                                id="cnpj"
                                value=form.cnpj
                                on_input=Callback::new(move |valor: String| form.cnpj.set(valor))
                                placeholder="00.000.000/0000-00"
                                required=true
                            />
                            <InputGroup
                                label="Telefone:"
                                id="telefone"
                                value=form.telefone
                                on_input=Callback::new(move |valor: String| {
                                    form.telefone.set(valor)
                                })
                                placeholder="(00) 0000-0000"
                                required=true
                            />
                            <InputGroup
                                label="Email:"
                                id="email"
                                input_type="email"
                                value=form.email
                                on_input=Callback::new(move |valor: String| form.email.set(valor))
                                placeholder="contato@exemplo.com"
                                required=true
                            />
                            <InputGroup
                                label="Logradouro:"
                                id="logradouro"
                                value=form.logradouro
                                on_input=Callback::new(move |valor: String| {
                                    form.logradouro.set(valor)
                                })
                                placeholder="Rua, Avenida, etc."
                                required=true
                            />
                            <InputGroup
                                label="Número:"
                                id="numero"
                                value=form.numero
                                on_input=Callback::new(move |valor: String| form.numero.set(valor))
                                placeholder="Número do endereço"
                                required=true
                            />
                            <InputGroup
                                label="Bairro:"
                                id="bairro"
                                value=form.bairro
                                on_input=Callback::new(move |valor: String| form.bairro.set(valor))
                                placeholder="Bairro"
                                required=true
                            />
                            <InputGroup
                                label="Cidade:"
                                id="cidade"
                                value=form.cidade
                                on_input=Callback::new(move |valor: String| form.cidade.set(valor))
                                placeholder="Cidade"
                                required=true
                            />
                            <InputGroup
                                label="CEP:"
                                id="cep"
                                value=form.cep
                                on_input=Callback::new(move |valor: String| form.cep.set(valor))
                                placeholder="00000-000"
                                required=true
                            />
                            <div class="button-group">
                                <Button kind="submit">
                                    {if editando {
                                        "Confirmar Edição"
                                    } else {
                                        "Registrar Contratante"
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
    fn payload_referencia_o_estacionamento_semeado() {
        let form = FormularioContratante::new();
        form.seed_estacionamento(6, "Pátio Oeste");
        form.nome.set("Empresa X S.A.".into());
        form.cnpj.set("12.345.678/0001-90".into());

        let payload = form.to_payload();
        assert_eq!(payload.id, None);
        assert_eq!(payload.nome.as_deref(), Some("Empresa X S.A."));
        assert_eq!(payload.estacionamento, Some(EntityRef::from_id(6)));
        assert_eq!(form.estacionamento_nome.get_untracked(), "Pátio Oeste");
    }

    #[test]
    fn fill_espelha_todos_os_campos_de_endereco() {
        let form = FormularioContratante::new();
        form.fill(&Contratante {
            id: Some(3),
            nome: Some("Produções Beta".into()),
            logradouro: Some("Avenida Central".into()),
            numero: Some("1200".into()),
            bairro: Some("Centro".into()),
            cidade: Some("Curitiba".into()),
            cep: Some("80000-000".into()),
            ..Default::default()
        });

        assert_eq!(form.id.get_untracked(), "3");
        assert_eq!(form.logradouro.get_untracked(), "Avenida Central");
        assert_eq!(form.numero.get_untracked(), "1200");
        assert_eq!(form.bairro.get_untracked(), "Centro");
        assert_eq!(form.cidade.get_untracked(), "Curitiba");
        assert_eq!(form.cep.get_untracked(), "80000-000");
    }
}
