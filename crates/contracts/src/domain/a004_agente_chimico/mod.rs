pub mod aggregate;

pub use aggregate::{AgenteChimico, AgenteChimicoCreate, AgenteChimicoTipo, AgenteChimicoUpdate};
