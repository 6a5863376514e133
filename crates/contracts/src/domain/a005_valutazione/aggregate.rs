use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Valutazione (exposure evaluation) of a worker against a chemical agent.
/// Risk scores (einal/ecute) are computed server-side; the console only
/// reads them back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Valutazione {
    pub id: i64,
    pub lavoratore_id: i64,
    pub agente_chimico_id: i64,
    pub nome: String,
    pub data: DateTime<Utc>,
    pub einal: Option<f64>,
    pub stato_fisico_inal: Option<i64>,
    pub quantita_kg: Option<f64>,
    pub tipo_uso_inal: Option<i64>,
    pub tipo_controllo_inal: Option<i64>,
    pub tempo_inal_min: Option<f64>,
    pub distanza_m: Option<f64>,
    pub ecute: Option<f64>,
    pub esposizione_cutanea: Option<bool>,
    pub livelli_contatto_cutaneo: Option<i64>,
    pub tipo_controllo_proc: Option<i64>,
    pub quantita_proc_kg: Option<f64>,
    pub tempo_proc_min: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValutazioneCreate {
    pub agente_chimico_id: i64,
    pub nome: String,
    pub data: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub einal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stato_fisico_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantita_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_uso_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_controllo_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_inal_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distanza_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esposizione_cutanea: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livelli_contatto_cutaneo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_controllo_proc: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantita_proc_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_proc_min: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValutazioneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agente_chimico_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub einal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stato_fisico_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantita_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_uso_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_controllo_inal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_inal_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distanza_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub esposizione_cutanea: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub livelli_contatto_cutaneo: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_controllo_proc: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantita_proc_kg: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo_proc_min: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn create_payload_uses_the_camel_case_wire_names() {
        let payload = ValutazioneCreate {
            agente_chimico_id: 4,
            nome: "Esposizione solventi".into(),
            data: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            quantita_kg: Some(2.5),
            stato_fisico_inal: Some(1),
            einal: None,
            tipo_uso_inal: None,
            tipo_controllo_inal: None,
            tempo_inal_min: None,
            distanza_m: None,
            ecute: None,
            esposizione_cutanea: None,
            livelli_contatto_cutaneo: None,
            tipo_controllo_proc: None,
            quantita_proc_kg: None,
            tempo_proc_min: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert!(keys.iter().any(|k| *k == "agenteChimicoId"));
        assert!(keys.iter().any(|k| *k == "quantitaKg"));
        assert!(keys.iter().any(|k| *k == "statoFisicoInal"));
        // unset optionals stay off the wire
        assert!(keys.iter().all(|k| *k != "tipoUsoInal"));
    }
}
