//! Formulário de cadastro e edição de evento.
//!
//! O cadastro pode partir de um contratante ou de um estacionamento; o
//! pai que veio da rota é buscado para exibir o nome e semear a
//! referência enviada no corpo.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{EntityRef, Evento, date};

use crate::api::contratantes::get_contratante_by_id;
use crate::api::estacionamentos::get_estacionamento_by_id;
use crate::api::eventos::{create_evento, get_evento_by_id, update_evento};
use crate::components::common::{Button, ButtonVariant, Card, InputGroup, InputGroupReadOnly};
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

#[derive(Clone, Copy)]
struct FormularioEvento {
    id: RwSignal<String>,
    nome: RwSignal<String>,
    data_inicio: RwSignal<String>,
    hora_inicio: RwSignal<String>,
    data_fim: RwSignal<String>,
    hora_fim: RwSignal<String>,
    valor_diaria: RwSignal<String>,
    qtd_vagas_contratadas: RwSignal<String>,
    contratante_id: RwSignal<String>,
    contratante_nome: RwSignal<String>,
    estacionamento_id: RwSignal<String>,
    estacionamento_nome: RwSignal<String>,
}

impl FormularioEvento {
    fn new() -> Self {
        FormularioEvento {
            id: RwSignal::new(String::new()),
            nome: RwSignal::new(String::new()),
            data_inicio: RwSignal::new(String::new()),
            hora_inicio: RwSignal::new(String::new()),
            data_fim: RwSignal::new(String::new()),
            hora_fim: RwSignal::new(String::new()),
            valor_diaria: RwSignal::new(String::new()),
            qtd_vagas_contratadas: RwSignal::new(String::new()),
            contratante_id: RwSignal::new(String::new()),
            contratante_nome: RwSignal::new(String::new()),
            estacionamento_id: RwSignal::new(String::new()),
            estacionamento_nome: RwSignal::new(String::new()),
        }
    }

    fn fill(&self, evento: &Evento) {
        self.id
            .set(evento.id.map(|id| id.to_string()).unwrap_or_default());
        self.nome.set(evento.nome.clone().unwrap_or_default());

        let (data, hora) = date::split_data_hora(evento.data_inicio);
        self.data_inicio.set(data);
        self.hora_inicio.set(hora);
        let (data, hora) = date::split_data_hora(evento.data_fim);
        self.data_fim.set(data);
        self.hora_fim.set(hora);

        self.valor_diaria.set(
            evento
                .valor_diaria
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        self.qtd_vagas_contratadas.set(
            evento
                .qtd_vagas_contratadas
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        if let Some(contratante) = &evento.contratante {
            self.contratante_id
                .set(contratante.id.map(|id| id.to_string()).unwrap_or_default());
            self.contratante_nome
                .set(contratante.nome.clone().unwrap_or_default());
        }
        if let Some(estacionamento) = &evento.estacionamento {
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

    fn seed_contratante(&self, id: i64, nome: &str) {
        self.contratante_id.set(id.to_string());
        self.contratante_nome.set(nome.to_string());
    }

    fn seed_estacionamento(&self, id: i64, nome: &str) {
        self.estacionamento_id.set(id.to_string());
        self.estacionamento_nome.set(nome.to_string());
    }

    fn to_payload(&self) -> Evento {
        Evento {
            id: self.id.get().trim().parse().ok(),
            nome: Some(self.nome.get()),
            data_inicio: date::join_data_hora(&self.data_inicio.get(), &self.hora_inicio.get()),
            data_fim: date::join_data_hora(&self.data_fim.get(), &self.hora_fim.get()),
            valor_diaria: self.valor_diaria.get().trim().parse().ok(),
            qtd_vagas_contratadas: self.qtd_vagas_contratadas.get().trim().parse().ok(),
            contratante: self
                .contratante_id
                .get()
                .trim()
                .parse()
                .ok()
                .map(EntityRef::from_id),
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
pub fn EventoForm(
    #[prop(optional)] id: Option<i64>,
    #[prop(optional)] contratante_id: Option<i64>,
    #[prop(optional)] estacionamento_id: Option<i64>,
) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let editando = id.is_some();
    let form = FormularioEvento::new();
    let carregamento = RwSignal::new(PageState::<()>::Idle);
    let erro_envio = RwSignal::new(Option::<String>::None);

    carregamento.update(PageState::start);
    if let Some(id) = id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_evento_by_id(id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(evento) => {
                        form.fill(&evento);
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do evento, estacionamento ou contratante: {}",
                            err.user_message()
                        ));
                    }),
                }
            }
        });
    } else if let Some(contratante_id) = contratante_id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_contratante_by_id(contratante_id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(contratante) => {
                        form.seed_contratante(
                            contratante_id,
                            &contratante.nome.unwrap_or_default(),
                        );
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do evento, estacionamento ou contratante: {}",
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
                            "Erro ao carregar dados do evento, estacionamento ou contratante: {}",
                            err.user_message()
                        ));
                    }),
                }
            }
        });
    } else {
        carregamento.update(|atual| atual.succeed(()));
    }

    let destino_sucesso = match (contratante_id, estacionamento_id) {
        (Some(id), _) => AppRoute::ContratanteDetails { id },
        (None, Some(id)) => AppRoute::EstacionamentoDetails { id },
        (None, None) => AppRoute::Dashboard,
    };
    let destino_cancelar = match id {
        Some(id) => AppRoute::EventoDetails { id },
        None => destino_sucesso,
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
                    Some(id) => update_evento(id, &payload).await.map(|_| ()),
                    None => create_evento(&payload).await.map(|_| ()),
                };
                match resultado {
                    Ok(()) => {
                        toasts.sucesso(if editando {
                            "Evento atualizado com sucesso!"
                        } else {
                            "Evento cadastrado com sucesso!"
                        });
                        router.navigate(destino_sucesso);
                    }
                    Err(err) => {
                        if guard.is_alive() {
                            erro_envio.set(Some(format!(
                                "Erro ao salvar evento: {}",
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
                    format!("Evento {} - Editar", form.nome.get_untracked())
                } else {
                    "Registrar Evento".to_string()
                };
                let nome_contratante = form.contratante_nome.get_untracked();
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
                                placeholder="Insira o ID do evento"
                                read_only=editando
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
                            <InputGroup
                                label="Nome do Evento:"
                                id="nome"
                                value=form.nome
                                on_input=Callback::new(move |valor: String| form.nome.set(valor))
                                placeholder="Nome do evento"
                                required=true
                            />
                            <div class="form-row-date-time">
                                <InputGroup
                                    label="Data de Início:"
                                    id="dataInicio"
                                    input_type="date"
                                    value=form.data_inicio
                                    on_input=Callback::new(move |valor: String| {
                                        form.data_inicio.set(valor)
                                    })
                                    required=true
                                />
                                <InputGroup
                                    label="Hora de Início:"
                                    id="horaInicio"
                                    input_type="time"
                                    value=form.hora_inicio
                                    on_input=Callback::new(move |valor: String| {
                                        form.hora_inicio.set(valor)
                                    })
                                    required=true
                                />
                            </div>
                            <div class="form-row-date-time">
                                <InputGroup
                                    label="Data de Fim:"
                                    id="dataFim"
                                    input_type="date"
                                    value=form.data_fim
                                    on_input=Callback::new(move |valor: String| {
                                        form.data_fim.set(valor)
                                    })
                                    required=true
                                />
                                <InputGroup
                                    label="Hora de Fim:"
                                    id="horaFim"
                                    input_type="time"
                                    value=form.hora_fim
                                    on_input=Callback::new(move |valor: String| {
                                        form.hora_fim.set(valor)
                                    })
                                    required=true
                                />
                            </div>
                            <InputGroup
                                label="Valor Diária Evento:"
                                id="valorDiaria"
                                input_type="number"
                                value=form.valor_diaria
                                on_input=Callback::new(move |valor: String| {
                                    form.valor_diaria.set(valor)
                                })
                                placeholder="0.00"
                                step="0.01"
                            />
                            <InputGroup
                                label="Quantidade de Vagas Contratadas:"
                                id="qtdVagasContratadas"
                                input_type="number"
                                value=form.qtd_vagas_contratadas
                                on_input=Callback::new(move |valor: String| {
                                    form.qtd_vagas_contratadas.set(valor)
                                })
                                placeholder="Número de vagas"
                            />
                            <div class="button-group">
                                <Button kind="submit">
                                    {if editando { "Confirmar Edição" } else { "Registrar Evento" }}
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
    fn payload_junta_os_dois_timestamps_e_as_duas_referencias() {
        let form = FormularioEvento::new();
        form.nome.set("Feira de Usados".into());
        form.data_inicio.set("2025-08-20".into());
        form.hora_inicio.set("08:00".into());
        form.data_fim.set("2025-08-22".into());
        form.hora_fim.set("18:00".into());
        form.valor_diaria.set("300".into());
        form.qtd_vagas_contratadas.set("40".into());
        form.contratante_id.set("9".into());
        form.estacionamento_id.set("2".into());

        let payload = form.to_payload();
        assert_eq!(date::format_data_hora(payload.data_inicio), "2025-08-20 08:00");
        assert_eq!(date::format_data_hora(payload.data_fim), "2025-08-22 18:00");
        assert_eq!(payload.valor_diaria, Some(300.0));
        assert_eq!(payload.qtd_vagas_contratadas, Some(40));
        assert_eq!(payload.contratante, Some(EntityRef::from_id(9)));
        assert_eq!(payload.estacionamento, Some(EntityRef::from_id(2)));
    }

    #[test]
    fn sem_pai_semeado_as_referencias_vao_nulas() {
        let form = FormularioEvento::new();
        let payload = form.to_payload();
        assert_eq!(payload.contratante, None);
        assert_eq!(payload.estacionamento, None);
    }

    #[test]
    fn fill_separa_os_timestamps_do_evento() {
        let form = FormularioEvento::new();
        form.fill(&Evento {
            id: Some(14),
            nome: Some("Congresso".into()),
            data_inicio: date::parse_data_hora("2025-10-01T09:00:00"),
            data_fim: date::parse_data_hora("2025-10-03T17:30:00"),
            contratante: Some(EntityRef {
                id: Some(9),
                nome: Some("Produções Beta".into()),
            }),
            ..Default::default()
        });

        assert_eq!(form.data_inicio.get_untracked(), "2025-10-01");
        assert_eq!(form.hora_inicio.get_untracked(), "09:00");
        assert_eq!(form.data_fim.get_untracked(), "2025-10-03");
        assert_eq!(form.hora_fim.get_untracked(), "17:30");
        assert_eq!(form.contratante_id.get_untracked(), "9");
        assert_eq!(form.contratante_nome.get_untracked(), "Produções Beta");
    }
}
