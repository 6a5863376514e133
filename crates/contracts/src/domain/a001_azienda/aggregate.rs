use serde::{Deserialize, Serialize};

/// Azienda (company) under risk assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Azienda {
    pub id: i64,
    pub nome: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AziendaCreate {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AziendaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
