//! Conversão de datas entre o fio, o formulário e a tela.
//!
//! Três papéis:
//! - separar um timestamp combinado nos campos de data e hora que o
//!   formulário edita, e juntá-los de volta no envio;
//! - formatar valores para exibição nas páginas de detalhes;
//! - módulos serde lenientes na leitura: o backend (Jackson) omite os
//!   segundos quando são zero, então aceitamos os dois formatos.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub const FORMATO_DATA: &str = "%Y-%m-%d";
pub const FORMATO_HORA_CURTA: &str = "%H:%M";
pub const FORMATO_DATA_HORA: &str = "%Y-%m-%dT%H:%M:%S";

// =========================================================
// Campos de formulário
// =========================================================

/// Separa um timestamp em (`"YYYY-MM-DD"`, `"HH:MM"`).
///
/// Ausência vira um par de strings vazias, que é o estado inicial dos
/// campos do formulário.
pub fn split_data_hora(dt: Option<NaiveDateTime>) -> (String, String) {
    match dt {
        Some(dt) => (
            dt.format(FORMATO_DATA).to_string(),
            dt.format(FORMATO_HORA_CURTA).to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

/// Junta os campos de data e hora do formulário em um timestamp.
///
/// Retorna `None` se qualquer um dos dois estiver vazio ou inválido;
/// nesse caso o campo vai como `null` no corpo da requisição.
pub fn join_data_hora(data: &str, hora: &str) -> Option<NaiveDateTime> {
    if data.trim().is_empty() || hora.trim().is_empty() {
        return None;
    }
    let data = NaiveDate::parse_from_str(data.trim(), FORMATO_DATA).ok()?;
    let hora = parse_hora(hora.trim())?;
    Some(NaiveDateTime::new(data, hora))
}

/// Separa uma data simples no campo `"YYYY-MM-DD"` do formulário.
pub fn split_data(data: Option<NaiveDate>) -> String {
    data.map(|d| d.format(FORMATO_DATA).to_string())
        .unwrap_or_default()
}

/// Lê o campo de data simples do formulário.
pub fn join_data(data: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(data.trim(), FORMATO_DATA).ok()
}

// =========================================================
// Leitura leniente
// =========================================================

/// Aceita `HH:MM:SS` (com fração opcional) e `HH:MM`.
pub fn parse_hora(hora: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(hora, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(hora, FORMATO_HORA_CURTA))
        .ok()
}

/// Aceita `YYYY-MM-DDTHH:MM:SS` (com fração opcional) e `YYYY-MM-DDTHH:MM`.
pub fn parse_data_hora(texto: &str) -> Option<NaiveDateTime> {
    let texto = texto.trim();
    NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(texto, "%Y-%m-%dT%H:%M"))
        .ok()
}

// =========================================================
// Exibição
// =========================================================

/// Timestamp em texto de exibição (`"YYYY-MM-DD HH:MM"`).
pub fn format_data_hora(dt: Option<NaiveDateTime>) -> String {
    match dt {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// Hora em texto de exibição (`"HH:MM"`).
pub fn format_hora(hora: Option<NaiveTime>) -> String {
    hora.map(|h| h.format(FORMATO_HORA_CURTA).to_string())
        .unwrap_or_default()
}

// =========================================================
// Módulos serde
// =========================================================

/// Serde para `Option<NaiveDateTime>` no formato do backend.
///
/// Escreve sempre com segundos (`2025-08-20T14:30:00`).
pub mod serde_data_hora {
    use super::{FORMATO_DATA_HORA, parse_data_hora};
    use chrono::NaiveDateTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match dt {
            Some(dt) => serializer.serialize_str(&dt.format(FORMATO_DATA_HORA).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(texto) => parse_data_hora(&texto)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("timestamp inválido: {texto}"))),
        }
    }
}

/// Serde para `Option<NaiveTime>`; escreve sempre `HH:MM:SS`.
pub mod serde_hora {
    use super::parse_hora;
    use chrono::NaiveTime;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(hora: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match hora {
            Some(hora) => serializer.serialize_str(&hora.format("%H:%M:%S").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(texto) => parse_hora(&texto)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("hora inválida: {texto}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separa_e_junta_data_e_hora() {
        let dt = join_data_hora("2025-08-20", "14:30").unwrap();
        assert_eq!(dt.format(FORMATO_DATA_HORA).to_string(), "2025-08-20T14:30:00");

        // O registro carregado de volta reproduz os dois campos.
        let (data, hora) = split_data_hora(Some(dt));
        assert_eq!(data, "2025-08-20");
        assert_eq!(hora, "14:30");
    }

    #[test]
    fn campos_vazios_ou_invalidos_nao_geram_timestamp() {
        assert_eq!(join_data_hora("", "14:30"), None);
        assert_eq!(join_data_hora("2025-08-20", ""), None);
        assert_eq!(join_data_hora("  ", "  "), None);
        assert_eq!(join_data_hora("20/08/2025", "14:30"), None);
        assert_eq!(join_data_hora("2025-08-20", "25:99"), None);
    }

    #[test]
    fn ausencia_vira_campos_vazios() {
        assert_eq!(split_data_hora(None), (String::new(), String::new()));
        assert_eq!(split_data(None), "");
        assert_eq!(format_data_hora(None), "");
    }

    #[test]
    fn leitura_leniente_de_timestamps() {
        let completo = parse_data_hora("2025-08-20T14:30:00").unwrap();
        let sem_segundos = parse_data_hora("2025-08-20T14:30").unwrap();
        assert_eq!(completo, sem_segundos);
        assert_eq!(parse_data_hora("2025-08-20"), None);
    }

    #[test]
    fn data_simples_vai_e_volta() {
        let data = join_data("2025-10-01").unwrap();
        assert_eq!(split_data(Some(data)), "2025-10-01");
        assert_eq!(join_data("01/10/2025"), None);
    }

    #[test]
    fn exibicao_sem_segundos() {
        let dt = join_data_hora("2025-08-20", "14:30");
        assert_eq!(format_data_hora(dt), "2025-08-20 14:30");
    }
}
