pub mod aggregate;

pub use aggregate::{Lavoratore, LavoratoreCreate, LavoratoreUpdate};
