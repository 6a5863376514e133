pub mod aggregate;

pub use aggregate::{FrasiH, FrasiHCreate, FrasiHUpdate};
