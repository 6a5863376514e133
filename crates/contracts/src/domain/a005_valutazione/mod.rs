pub mod aggregate;

pub use aggregate::{Valutazione, ValutazioneCreate, ValutazioneUpdate};
