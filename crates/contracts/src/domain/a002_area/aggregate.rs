use serde::{Deserialize, Serialize};

/// Area (department/work area) scoped under an azienda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    pub id: i64,
    #[serde(rename = "aziendaId")]
    pub azienda_id: i64,
    pub nome: String,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaCreate {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
