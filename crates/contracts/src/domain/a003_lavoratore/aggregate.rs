use serde::{Deserialize, Serialize};

/// Lavoratore (worker) scoped under an area. Workers are tracked by an
/// anonymized business code, not by name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lavoratore {
    pub id: i64,
    #[serde(rename = "areaId")]
    pub area_id: i64,
    pub codice: String,
    pub mansione: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LavoratoreCreate {
    pub codice: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mansione: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LavoratoreUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mansione: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
