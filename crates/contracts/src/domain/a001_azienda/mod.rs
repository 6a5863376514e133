pub mod aggregate;

pub use aggregate::{Azienda, AziendaCreate, AziendaUpdate};
