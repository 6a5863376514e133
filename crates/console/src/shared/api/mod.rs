//! Transport boundary between the console core and the REST backend.
//!
//! The core only ever talks to the backend through the [`Transport`] trait;
//! the browser implementation lives in `http` and is compiled for wasm
//! targets only, so the rest of the crate (and its tests) stays host-buildable.

pub mod error;
#[cfg(target_arch = "wasm32")]
pub mod http;
#[cfg(test)]
pub mod testing;
pub mod transport;

pub use error::ApiError;
pub use transport::{Method, RawBody, Transport};
