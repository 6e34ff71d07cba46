//! Modelo de dados do Pátio.
//!
//! Estruturas espelhando os registros JSON da API REST de estacionamentos:
//! - os nomes de campo no fio são camelCase em português (`dataEntrada`,
//!   `valorCobrado`), mapeados via serde;
//! - todo campo é opcional porque o servidor devolve `null` para o que não
//!   foi preenchido;
//! - referências aninhadas são enviadas apenas como `{"id": N}`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

pub mod date;

// =========================================================
// Referência entre entidades
// =========================================================

/// Referência enxuta a uma entidade dona.
///
/// Na escrita só o `id` vai no corpo; na leitura o servidor costuma
/// devolver também o `nome`, usado apenas para exibição.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EntityRef {
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
}

impl EntityRef {
    /// Referência de escrita, carregando apenas o id.
    pub fn from_id(id: i64) -> Self {
        EntityRef {
            id: Some(id),
            nome: None,
        }
    }

    pub fn display_name(&self) -> String {
        self.nome.clone().unwrap_or_default()
    }
}

// =========================================================
// Entidades principais (com páginas próprias)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Estacionamento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub endereco: Option<String>,
    pub complemento: Option<String>,
    pub cidade: Option<String>,
    pub cep: Option<String>,
    pub telefone: Option<String>,
    pub capacidade: Option<u32>,
    pub hora_abertura: Option<String>,
    pub hora_fechamento: Option<String>,
    /// Calculado pelo servidor; exibido no painel, nunca editado.
    pub vagas_ocupadas: Option<u32>,
}

/// Registro de veículo/acesso avulso de um estacionamento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Veiculo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub placa: Option<String>,
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub cor: Option<String>,
    /// HORISTA, MENSALISTA ou EVENTO. Texto livre no fio.
    pub tipo_acesso: Option<String>,
    #[serde(with = "date::serde_data_hora")]
    pub data_entrada: Option<NaiveDateTime>,
    #[serde(with = "date::serde_data_hora")]
    pub data_saida: Option<NaiveDateTime>,
    pub valor_cobrado: Option<f64>,
    pub estacionamento: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Mensalista {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub cpf: Option<String>,
    pub telefone: Option<String>,
    pub placa_veiculo: Option<String>,
    pub vencimento_contrato: Option<NaiveDate>,
    pub valor_mensal: Option<f64>,
    pub estacionamento: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Contratante {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Razão social.
    pub nome: Option<String>,
    pub cnpj: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub cep: Option<String>,
    pub estacionamento: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Evento {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nome: Option<String>,
    #[serde(with = "date::serde_data_hora")]
    pub data_inicio: Option<NaiveDateTime>,
    #[serde(with = "date::serde_data_hora")]
    pub data_fim: Option<NaiveDateTime>,
    pub valor_diaria: Option<f64>,
    pub qtd_vagas_contratadas: Option<u32>,
    pub contratante: Option<EntityRef>,
    pub estacionamento: Option<EntityRef>,
}

// =========================================================
// Entidades de tarifa e acesso (somente CRUD, sem páginas)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Acesso {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub tipo_acesso: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    #[serde(with = "date::serde_hora")]
    pub hora_inicio: Option<NaiveTime>,
    pub data_fim: Option<NaiveDate>,
    #[serde(with = "date::serde_hora")]
    pub hora_fim: Option<NaiveTime>,
    pub valor_cobrado: Option<f64>,
    pub estacionamento: Option<EntityRef>,
    pub veiculo: Option<EntityRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Diaria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub valor: Option<f64>,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct DiariaNoturna {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(with = "date::serde_hora")]
    pub hora_inicio: Option<NaiveTime>,
    #[serde(with = "date::serde_hora")]
    pub hora_fim: Option<NaiveTime>,
    pub adicional_noturno: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Tempo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(with = "date::serde_hora")]
    pub duracao: Option<NaiveTime>,
    pub valor_fracao: Option<f64>,
    pub desconto: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data_hora(ano: i32, mes: u32, dia: u32, hora: u32, minuto: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(ano, mes, dia)
            .unwrap()
            .and_hms_opt(hora, minuto, 0)
            .unwrap()
    }

    #[test]
    fn veiculo_serializa_nomes_camel_case() {
        let veiculo = Veiculo {
            placa: Some("ABC1D23".into()),
            tipo_acesso: Some("HORISTA".into()),
            data_entrada: Some(data_hora(2025, 8, 20, 14, 30)),
            valor_cobrado: Some(25.5),
            estacionamento: Some(EntityRef::from_id(7)),
            ..Veiculo::default()
        };

        let valor = serde_json::to_value(&veiculo).unwrap();
        assert_eq!(valor["placa"], json!("ABC1D23"));
        assert_eq!(valor["tipoAcesso"], json!("HORISTA"));
        assert_eq!(valor["dataEntrada"], json!("2025-08-20T14:30:00"));
        assert_eq!(valor["valorCobrado"], json!(25.5));
        assert_eq!(valor["estacionamento"], json!({ "id": 7 }));
        // Campos não preenchidos vão como null, exceto o id.
        assert_eq!(valor["dataSaida"], json!(null));
        assert!(valor.get("id").is_none());
    }

    #[test]
    fn referencia_de_escrita_leva_somente_o_id() {
        let referencia = EntityRef::from_id(42);
        assert_eq!(
            serde_json::to_value(&referencia).unwrap(),
            json!({ "id": 42 })
        );
    }

    #[test]
    fn leitura_aceita_timestamp_sem_segundos() {
        // O backend omite os segundos quando são zero.
        let veiculo: Veiculo = serde_json::from_value(json!({
            "id": 3,
            "placa": "XYZ9A88",
            "dataEntrada": "2025-08-20T14:30"
        }))
        .unwrap();

        assert_eq!(veiculo.id, Some(3));
        assert_eq!(veiculo.data_entrada, Some(data_hora(2025, 8, 20, 14, 30)));
    }

    #[test]
    fn campos_nulos_e_ausentes_viram_none() {
        let estacionamento: Estacionamento = serde_json::from_value(json!({
            "id": 1,
            "nome": "Central",
            "complemento": null
        }))
        .unwrap();

        assert_eq!(estacionamento.nome.as_deref(), Some("Central"));
        assert_eq!(estacionamento.complemento, None);
        assert_eq!(estacionamento.capacidade, None);
        assert_eq!(estacionamento.vagas_ocupadas, None);
    }

    #[test]
    fn mensalista_usa_data_simples_no_vencimento() {
        let mensalista: Mensalista = serde_json::from_value(json!({
            "nome": "João",
            "vencimentoContrato": "2025-10-01",
            "valorMensal": 350.0
        }))
        .unwrap();
        assert_eq!(
            mensalista.vencimento_contrato,
            NaiveDate::from_ymd_opt(2025, 10, 1)
        );

        let valor = serde_json::to_value(&mensalista).unwrap();
        assert_eq!(valor["vencimentoContrato"], json!("2025-10-01"));
    }

    #[test]
    fn referencia_lida_carrega_nome_para_exibicao() {
        let evento: Evento = serde_json::from_value(json!({
            "id": 9,
            "nome": "Feira",
            "contratante": { "id": 4, "nome": "ACME Ltda" },
            "estacionamento": { "id": 2, "nome": "Central" }
        }))
        .unwrap();

        let contratante = evento.contratante.unwrap();
        assert_eq!(contratante.id, Some(4));
        assert_eq!(contratante.display_name(), "ACME Ltda");
    }

    #[test]
    fn tarifas_aceitam_horas_com_e_sem_segundos() {
        let diaria: DiariaNoturna = serde_json::from_value(json!({
            "id": 1,
            "horaInicio": "22:00",
            "horaFim": "06:00:00",
            "adicionalNoturno": 15.0
        }))
        .unwrap();

        assert_eq!(diaria.hora_inicio, NaiveTime::from_hms_opt(22, 0, 0));
        assert_eq!(diaria.hora_fim, NaiveTime::from_hms_opt(6, 0, 0));

        let valor = serde_json::to_value(&diaria).unwrap();
        assert_eq!(valor["horaInicio"], json!("22:00:00"));
    }
}
