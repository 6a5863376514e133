use serde::{Deserialize, Serialize};

/// Row of a coded lookup table (stato fisico, tipo uso, tipo controllo, ...).
/// All five lookup groups share this shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Codifica {
    pub id: i64,
    pub codice: String,
    pub descrizione: String,
    pub ordine: Option<i64>,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}

impl Codifica {
    /// Display label used by relation pickers.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.codice, self.descrizione)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodificaCreate {
    pub codice: String,
    pub descrizione: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordine: Option<i64>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodificaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descrizione: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordine: Option<i64>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
