pub mod aggregate;

pub use aggregate::{Area, AreaCreate, AreaUpdate};
