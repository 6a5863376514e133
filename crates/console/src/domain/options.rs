//! Option loaders for relation fields: fetch a reference list and map it to
//! label/value pairs. Stateless, safe to call on every render.

use std::rc::Rc;

use async_trait::async_trait;
use contracts::domain::a004_agente_chimico::AgenteChimico;
use contracts::domain::a006_frasi_h::FrasiH;
use contracts::domain::a007_codifica::Codifica;
use serde_json::Value;

use crate::shared::api::{ApiError, Method, Transport};
use crate::shared::data::normalize::{normalize_body, NormalizeOptions};
use crate::shared::data::schema::{FieldOption, OptionLoader};
use crate::system::auth::Session;

async fn fetch_items(
    transport: &Rc<dyn Transport>,
    session: &Session,
    entity_key: &str,
    path: &str,
) -> Result<Vec<Value>, ApiError> {
    let body = transport.request(session, Method::Get, path, None).await?;
    Ok(normalize_body(entity_key, &body, NormalizeOptions::default()).items)
}

fn decode<T: serde::de::DeserializeOwned>(item: Value) -> Result<T, ApiError> {
    serde_json::from_value(item).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Rows of one coded lookup group as `codice - descrizione` pairs.
pub struct CodificaOptions {
    transport: Rc<dyn Transport>,
    entity_key: &'static str,
    path: &'static str,
}

impl CodificaOptions {
    pub fn new(
        transport: Rc<dyn Transport>,
        entity_key: &'static str,
        path: &'static str,
    ) -> Rc<Self> {
        Rc::new(Self {
            transport,
            entity_key,
            path,
        })
    }
}

#[async_trait(?Send)]
impl OptionLoader for CodificaOptions {
    async fn load(&self, session: &Session) -> Result<Vec<FieldOption>, ApiError> {
        let items = fetch_items(&self.transport, session, self.entity_key, self.path).await?;
        items
            .into_iter()
            .map(|item| {
                let codifica: Codifica = decode(item)?;
                Ok(FieldOption::new(codifica.option_label(), codifica.id))
            })
            .collect()
    }
}

/// Hazard statements as `codice - descrizione` pairs.
pub struct FrasiHOptions {
    transport: Rc<dyn Transport>,
}

impl FrasiHOptions {
    pub fn new(transport: Rc<dyn Transport>) -> Rc<Self> {
        Rc::new(Self { transport })
    }
}

#[async_trait(?Send)]
impl OptionLoader for FrasiHOptions {
    async fn load(&self, session: &Session) -> Result<Vec<FieldOption>, ApiError> {
        let items = fetch_items(&self.transport, session, "frasih", "/frasih").await?;
        items
            .into_iter()
            .map(|item| {
                let frase: FrasiH = decode(item)?;
                Ok(FieldOption::new(frase.option_label(), frase.id))
            })
            .collect()
    }
}

/// Chemical agents as `nome (identificativo)` pairs; optionally restricted
/// to plain substances, for component pickers.
pub struct AgentiChimiciOptions {
    transport: Rc<dyn Transport>,
    solo_sostanze: bool,
}

impl AgentiChimiciOptions {
    pub fn new(transport: Rc<dyn Transport>) -> Rc<Self> {
        Rc::new(Self {
            transport,
            solo_sostanze: false,
        })
    }

    pub fn solo_sostanze(transport: Rc<dyn Transport>) -> Rc<Self> {
        Rc::new(Self {
            transport,
            solo_sostanze: true,
        })
    }
}

#[async_trait(?Send)]
impl OptionLoader for AgentiChimiciOptions {
    async fn load(&self, session: &Session) -> Result<Vec<FieldOption>, ApiError> {
        let items =
            fetch_items(&self.transport, session, "agenti-chimici", "/agenti-chimici").await?;
        let mut out = Vec::new();
        for item in items {
            let agente: AgenteChimico = decode(item)?;
            if self.solo_sostanze && !agente.is_sostanza() {
                continue;
            }
            out.push(FieldOption::new(agente.option_label(), agente.id));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::RecordingTransport;
    use crate::shared::api::RawBody;
    use serde_json::json;

    #[tokio::test]
    async fn codifica_options_map_label_and_value() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([
            {"id": 1, "codice": "SOL", "descrizione": "Solido", "ordine": 1, "isActive": true},
            {"id": 2, "codice": "LIQ", "descrizione": "Liquido", "ordine": 2, "isActive": true},
        ])));
        let loader =
            CodificaOptions::new(transport.clone(), "codifiche-stato-fisico-inal", "/codifiche/stato-fisico-inal");

        let options = loader.load(&Session::anonymous()).await.unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].label, "SOL - Solido");
        assert_eq!(options[0].value, json!(1));
        assert_eq!(transport.calls()[0].path, "/codifiche/stato-fisico-inal");
    }

    #[tokio::test]
    async fn codifica_options_tolerate_wrapped_envelopes() {
        let transport = RecordingTransport::returning(RawBody::Json(json!({
            "data": [{"id": 3, "codice": "GAS", "descrizione": "Gas", "ordine": null, "isActive": null}],
        })));
        let loader = CodificaOptions::new(transport, "codifiche-stato-fisico-inal", "/codifiche/stato-fisico-inal");
        let options = loader.load(&Session::anonymous()).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "GAS - Gas");
    }

    #[tokio::test]
    async fn agenti_options_can_filter_to_substances() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([
            {"id": 1, "nome": "Acetone", "identificativo": "67-64-1", "tipo": "sostanza",
             "vlep": true, "alta_emissione": false},
            {"id": 2, "nome": "Sgrassante X", "identificativo": "MIX-02", "tipo": "miscelaNonPericolosa",
             "vlep": false, "alta_emissione": false},
        ])));

        let all = AgentiChimiciOptions::new(transport.clone());
        assert_eq!(all.load(&Session::anonymous()).await.unwrap().len(), 2);

        let sostanze = AgentiChimiciOptions::solo_sostanze(transport);
        let options = sostanze.load(&Session::anonymous()).await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].label, "Acetone (67-64-1)");
    }

    #[tokio::test]
    async fn decode_failures_surface_as_api_errors() {
        let transport = RecordingTransport::returning(RawBody::Json(json!([{"id": "x"}])));
        let loader = FrasiHOptions::new(transport);
        let err = loader.load(&Session::anonymous()).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
