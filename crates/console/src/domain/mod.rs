//! Per-entity registry definitions.

pub mod a001_azienda;
pub mod a002_area;
pub mod a003_lavoratore;
pub mod a004_agente_chimico;
pub mod a005_valutazione;
pub mod a006_frasi_h;
pub mod codifiche;
pub mod options;
pub mod parsers;
