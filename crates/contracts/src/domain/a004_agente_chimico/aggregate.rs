use serde::{Deserialize, Serialize};

/// Kind of chemical agent. The backend unified the legacy sostanza /
/// miscela-non-pericolosa / processo collections under one resource with a
/// `tipo` discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgenteChimicoTipo {
    #[serde(rename = "sostanza")]
    Sostanza,
    #[serde(rename = "miscelaNonPericolosa")]
    MiscelaNonPericolosa,
    #[serde(rename = "processo")]
    Processo,
}

impl AgenteChimicoTipo {
    pub const ALL: [AgenteChimicoTipo; 3] = [
        AgenteChimicoTipo::Sostanza,
        AgenteChimicoTipo::MiscelaNonPericolosa,
        AgenteChimicoTipo::Processo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgenteChimicoTipo::Sostanza => "sostanza",
            AgenteChimicoTipo::MiscelaNonPericolosa => "miscelaNonPericolosa",
            AgenteChimicoTipo::Processo => "processo",
        }
    }
}

/// Agente chimico (chemical agent): a substance, a non-hazardous mixture or
/// a process emission source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgenteChimico {
    pub id: i64,
    pub nome: String,
    pub identificativo: String,
    pub tipo: AgenteChimicoTipo,
    pub vlep: bool,
    pub alta_emissione: bool,
    /// Linked hazard statements (frasi H).
    #[serde(rename = "frasiHIds", skip_serializing_if = "Option::is_none")]
    pub frasi_h_ids: Option<Vec<i64>>,
    /// Component substances, for mixtures and processes.
    #[serde(rename = "sostanzeComponentiIds", skip_serializing_if = "Option::is_none")]
    pub sostanze_componenti_ids: Option<Vec<i64>>,
}

impl AgenteChimico {
    /// Display label used by relation pickers.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.nome, self.identificativo)
    }

    pub fn is_sostanza(&self) -> bool {
        self.tipo == AgenteChimicoTipo::Sostanza
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgenteChimicoCreate {
    pub nome: String,
    pub identificativo: String,
    pub tipo: AgenteChimicoTipo,
    pub vlep: bool,
    pub alta_emissione: bool,
    #[serde(rename = "frasiHIds", skip_serializing_if = "Option::is_none")]
    pub frasi_h_ids: Option<Vec<i64>>,
    #[serde(rename = "sostanzeComponentiIds", skip_serializing_if = "Option::is_none")]
    pub sostanze_componenti_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgenteChimicoUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identificativo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<AgenteChimicoTipo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlep: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alta_emissione: Option<bool>,
    #[serde(rename = "frasiHIds", skip_serializing_if = "Option::is_none")]
    pub frasi_h_ids: Option<Vec<i64>>,
    #[serde(rename = "sostanzeComponentiIds", skip_serializing_if = "Option::is_none")]
    pub sostanze_componenti_ids: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tipo_serializes_to_its_wire_names() {
        for tipo in AgenteChimicoTipo::ALL {
            assert_eq!(serde_json::to_value(tipo).unwrap(), json!(tipo.as_str()));
        }
        let parsed: AgenteChimicoTipo =
            serde_json::from_value(json!("miscelaNonPericolosa")).unwrap();
        assert_eq!(parsed, AgenteChimicoTipo::MiscelaNonPericolosa);
    }

    #[test]
    fn records_decode_with_optional_relation_lists() {
        let agente: AgenteChimico = serde_json::from_value(json!({
            "id": 7,
            "nome": "Acetone",
            "identificativo": "67-64-1",
            "tipo": "sostanza",
            "vlep": true,
            "alta_emissione": false,
            "frasiHIds": [1, 2],
        }))
        .unwrap();
        assert!(agente.is_sostanza());
        assert_eq!(agente.option_label(), "Acetone (67-64-1)");
        assert_eq!(agente.frasi_h_ids, Some(vec![1, 2]));
        assert_eq!(agente.sostanze_componenti_ids, None);
    }
}
