pub mod aggregate;

pub use aggregate::{Codifica, CodificaCreate, CodificaUpdate};
