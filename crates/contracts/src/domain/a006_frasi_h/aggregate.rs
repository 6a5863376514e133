use serde::{Deserialize, Serialize};

/// Frase H: a CLP hazard statement (H225, H301, ...) with the score it
/// contributes to the inhalation risk index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrasiH {
    pub id: i64,
    pub codice: String,
    pub descrizione: String,
    pub punteggio: f64,
}

impl FrasiH {
    /// Display label used by relation pickers.
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.codice, self.descrizione)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrasiHCreate {
    pub codice: String,
    pub descrizione: String,
    pub punteggio: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrasiHUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descrizione: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punteggio: Option<f64>,
}
