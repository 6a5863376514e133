pub mod a001_azienda;
pub mod a002_area;
pub mod a003_lavoratore;
pub mod a004_agente_chimico;
pub mod a005_valutazione;
pub mod a006_frasi_h;
pub mod a007_codifica;
