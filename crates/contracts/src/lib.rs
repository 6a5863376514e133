//! Wire contracts shared between the ChemRisk console and its REST backend.
//!
//! Pure data: serde-derived DTOs, no I/O.

pub mod domain;
pub mod system;
