//! Formulário de registro e edição de veículo.
//!
//! No cadastro a partir de um estacionamento, o formulário busca o
//! estacionamento para exibir o nome e semear a referência enviada no
//! corpo. Os pares de data e hora editados separadamente são juntados
//! em um timestamp único no envio.

use leptos::prelude::*;
use leptos::task::spawn_local;
use patio_shared::{EntityRef, Veiculo, date};

use crate::api::estacionamentos::get_estacionamento_by_id;
use crate::api::veiculos::{create_veiculo, get_veiculo_by_id, update_veiculo};
use crate::components::common::{Button, ButtonVariant, Card, InputGroup, InputGroupReadOnly};
use crate::components::toast::use_toasts;
use crate::page::{MountGuard, PageState};
use crate::web::route::AppRoute;
use crate::web::router::use_router;

/// Campos do formulário, um sinal por campo. Os timestamps são
/// editados como pares de data e hora separados.
#[derive(Clone, Copy)]
struct FormularioVeiculo {
    id: RwSignal<String>,
    placa: RwSignal<String>,
    marca: RwSignal<String>,
    modelo: RwSignal<String>,
    cor: RwSignal<String>,
    tipo_acesso: RwSignal<String>,
    data_entrada: RwSignal<String>,
    hora_entrada: RwSignal<String>,
    data_saida: RwSignal<String>,
    hora_saida: RwSignal<String>,
    valor_cobrado: RwSignal<String>,
    estacionamento_id: RwSignal<String>,
    estacionamento_nome: RwSignal<String>,
}

impl FormularioVeiculo {
    fn new() -> Self {
        FormularioVeiculo {
            id: RwSignal::new(String::new()),
            placa: RwSignal::new(String::new()),
            marca: RwSignal::new(String::new()),
            modelo: RwSignal::new(String::new()),
            cor: RwSignal::new(String::new()),
            tipo_acesso: RwSignal::new(String::new()),
            data_entrada: RwSignal::new(String::new()),
            hora_entrada: RwSignal::new(String::new()),
            data_saida: RwSignal::new(String::new()),
            hora_saida: RwSignal::new(String::new()),
            valor_cobrado: RwSignal::new(String::new()),
            estacionamento_id: RwSignal::new(String::new()),
            estacionamento_nome: RwSignal::new(String::new()),
        }
    }

    /// Espelha a entidade carregada nos campos, separando os
    /// timestamps em data e hora.
    fn fill(&self, veiculo: &Veiculo) {
        self.id
            .set(veiculo.id.map(|id| id.to_string()).unwrap_or_default());
        self.placa.set(veiculo.placa.clone().unwrap_or_default());
        self.marca.set(veiculo.marca.clone().unwrap_or_default());
        self.modelo.set(veiculo.modelo.clone().unwrap_or_default());
        self.cor.set(veiculo.cor.clone().unwrap_or_default());
        self.tipo_acesso
            .set(veiculo.tipo_acesso.clone().unwrap_or_default());

        let (data, hora) = date::split_data_hora(veiculo.data_entrada);
        self.data_entrada.set(data);
        self.hora_entrada.set(hora);
        let (data, hora) = date::split_data_hora(veiculo.data_saida);
        self.data_saida.set(data);
        self.hora_saida.set(hora);

        self.valor_cobrado.set(
            veiculo
                .valor_cobrado
                .map(|v| v.to_string())
                .unwrap_or_default(),
        );
        if let Some(estacionamento) = &veiculo.estacionamento {
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

    /// Semeia a referência de estacionamento no cadastro aninhado.
    fn seed_estacionamento(&self, id: i64, nome: &str) {
        self.estacionamento_id.set(id.to_string());
        self.estacionamento_nome.set(nome.to_string());
    }

    fn to_payload(&self) -> Veiculo {
        Veiculo {
            id: self.id.get().trim().parse().ok(),
            placa: Some(self.placa.get()),
            marca: Some(self.marca.get()),
            modelo: Some(self.modelo.get()),
            cor: Some(self.cor.get()),
            tipo_acesso: texto_opcional(self.tipo_acesso.get()),
            data_entrada: date::join_data_hora(&self.data_entrada.get(), &self.hora_entrada.get()),
            data_saida: date::join_data_hora(&self.data_saida.get(), &self.hora_saida.get()),
            valor_cobrado: self.valor_cobrado.get().trim().parse().ok(),
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

fn texto_opcional(valor: String) -> Option<String> {
    if valor.trim().is_empty() {
        None
    } else {
        Some(valor)
    }
}

#[component]
pub fn VeiculoForm(
    #[prop(optional)] id: Option<i64>,
    #[prop(optional)] estacionamento_id: Option<i64>,
) -> impl IntoView {
    let router = use_router();
    let toasts = use_toasts();
    let guard = MountGuard::new();

    let editando = id.is_some();
    let form = FormularioVeiculo::new();
    let carregamento = RwSignal::new(PageState::<()>::Idle);
    let erro_envio = RwSignal::new(Option::<String>::None);

    carregamento.update(PageState::start);
    if let Some(id) = id {
        spawn_local({
            let guard = guard.clone();
            async move {
                let resultado = get_veiculo_by_id(id).await;
                if !guard.is_alive() {
                    return;
                }
                match resultado {
                    Ok(veiculo) => {
                        form.fill(&veiculo);
                        carregamento.update(|atual| atual.succeed(()));
                    }
                    Err(err) => carregamento.update(|atual| {
                        atual.fail(format!(
                            "Erro ao carregar dados do veículo ou estacionamento: {}",
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
                            "Erro ao carregar dados do veículo ou estacionamento: {}",
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
        (Some(id), _) => AppRoute::VeiculoDetails { id },
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
                    Some(id) => update_veiculo(id, &payload).await.map(|_| ()),
                    None => create_veiculo(&payload).await.map(|_| ()),
                };
                match resultado {
                    Ok(()) => {
                        toasts.sucesso(if editando {
                            "Veículo atualizado com sucesso!"
                        } else {
                            "Veículo registrado com sucesso!"
                        });
                        router.navigate(destino);
                    }
                    Err(err) => {
                        if guard.is_alive() {
                            erro_envio.set(Some(format!(
                                "Erro ao salvar veículo: {}",
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
                    format!("Veículo {} - Editar", form.placa.get_untracked())
                } else {
                    "Registrar Veículo".to_string()
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
                                placeholder="Insira o ID do veículo/acesso"
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
                                label="Placa:"
                                id="placa"
                                value=form.placa
                                on_input=Callback::new(move |valor: String| form.placa.set(valor))
                                placeholder="Insira a placa do veículo"
                                max_length=7
                                required=true
                            />
                            <InputGroup
                                label="Marca:"
                                id="marca"
                                value=form.marca
                                on_input=Callback::new(move |valor: String| form.marca.set(valor))
                                placeholder="Insira a marca"
                                required=true
                            />
                            <InputGroup
                                label="Modelo:"
                                id="modelo"
                                value=form.modelo
                                on_input=Callback::new(move |valor: String| form.modelo.set(valor))
                                placeholder="Insira o modelo"
                                required=true
                            />
                            <InputGroup
                                label="Cor:"
                                id="cor"
                                value=form.cor
                                on_input=Callback::new(move |valor: String| form.cor.set(valor))
                                placeholder="Insira a cor"
                                required=true
                            />
                            <div class="input-group">
                                <label for="tipoAcesso">"Tipo de Acesso:"</label>
                                <select
                                    id="tipoAcesso"
                                    required=true
                                    on:change=move |ev| form.tipo_acesso.set(event_target_value(&ev))
                                >
                                    <option
                                        value=""
                                        selected=move || form.tipo_acesso.get().is_empty()
                                    >
                                        "Selecione o tipo"
                                    </option>
                                    <option
                                        value="HORISTA"
                                        selected=move || form.tipo_acesso.get() == "HORISTA"
                                    >
                                        "Horista"
                                    </option>
                                    <option
                                        value="MENSALISTA"
                                        selected=move || form.tipo_acesso.get() == "MENSALISTA"
                                    >
                                        "Mensalista"
                                    </option>
                                    <option
                                        value="EVENTO"
                                        selected=move || form.tipo_acesso.get() == "EVENTO"
                                    >
                                        "Evento"
                                    </option>
                                </select>
                            </div>
                            <div class="form-row-date-time">
                                <InputGroup
                                    label="Data de Entrada:"
                                    id="dataEntrada"
                                    input_type="date"
                                    value=form.data_entrada
                                    on_input=Callback::new(move |valor: String| {
                                        form.data_entrada.set(valor)
                                    })
                                    required=true
                                />
                                <InputGroup
                                    label="Hora de Entrada:"
                                    id="horaEntrada"
                                    input_type="time"
                                    value=form.hora_entrada
                                    on_input=Callback::new(move |valor: String| {
                                        form.hora_entrada.set(valor)
                                    })
                                    required=true
                                />
                            </div>
                            <div class="form-row-date-time">
                                <InputGroup
                                    label="Data de Saída:"
                                    id="dataSaida"
                                    input_type="date"
                                    value=form.data_saida
                                    on_input=Callback::new(move |valor: String| {
                                        form.data_saida.set(valor)
                                    })
                                />
                                <InputGroup
                                    label="Hora de Saída:"
                                    id="horaSaida"
                                    input_type="time"
                                    value=form.hora_saida
                                    on_input=Callback::new(move |valor: String| {
                                        form.hora_saida.set(valor)
                                    })
                                />
                            </div>
                            <InputGroup
                                label="Valor Cobrado:"
                                id="valorCobrado"
                                input_type="number"
                                value=form.valor_cobrado
                                on_input=Callback::new(move |valor: String| {
                                    form.valor_cobrado.set(valor)
                                })
                                placeholder="0.00"
                                step="0.01"
                            />
                            <div class="button-group">
                                <Button kind="submit">
                                    {if editando { "Confirmar Edição" } else { "Registrar Veículo" }}
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
    fn payload_junta_data_e_hora_e_referencia_o_estacionamento() {
        let form = FormularioVeiculo::new();
        form.id.set("3".into());
        form.placa.set("ABC1D23".into());
        form.tipo_acesso.set("HORISTA".into());
        form.data_entrada.set("2025-08-20".into());
        form.hora_entrada.set("14:30".into());
        form.valor_cobrado.set("25.5".into());
        form.estacionamento_id.set("7".into());

        let payload = form.to_payload();
        assert_eq!(payload.id, Some(3));
        assert_eq!(payload.tipo_acesso.as_deref(), Some("HORISTA"));
        assert_eq!(date::format_data_hora(payload.data_entrada), "2025-08-20 14:30");
        assert_eq!(payload.data_saida, None);
        assert_eq!(payload.valor_cobrado, Some(25.5));
        assert_eq!(payload.estacionamento, Some(EntityRef::from_id(7)));
    }

    #[test]
    fn data_sem_hora_nao_vira_timestamp() {
        let form = FormularioVeiculo::new();
        form.data_saida.set("2025-08-21".into());
        assert_eq!(form.to_payload().data_saida, None);
    }

    #[test]
    fn fill_separa_o_timestamp_nos_campos_de_data_e_hora() {
        let form = FormularioVeiculo::new();
        form.fill(&Veiculo {
            id: Some(11),
            placa: Some("XYZ9A87".into()),
            data_entrada: date::parse_data_hora("2025-08-20T08:15:00"),
            valor_cobrado: Some(12.0),
            estacionamento: Some(EntityRef {
                id: Some(4),
                nome: Some("Pátio Leste".into()),
            }),
            ..Default::default()
        });

        assert_eq!(form.id.get_untracked(), "11");
        assert_eq!(form.data_entrada.get_untracked(), "2025-08-20");
        assert_eq!(form.hora_entrada.get_untracked(), "08:15");
        assert_eq!(form.data_saida.get_untracked(), "");
        assert_eq!(form.estacionamento_id.get_untracked(), "4");
        assert_eq!(form.estacionamento_nome.get_untracked(), "Pátio Leste");
    }

    #[test]
    fn tipo_de_acesso_vazio_vai_como_nulo() {
        let form = FormularioVeiculo::new();
        assert_eq!(form.to_payload().tipo_acesso, None);
    }
}
