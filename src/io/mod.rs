//! Input/output helpers.
//!
//! - CSV ingest + validation (`ingest`)
//! - standings CSV and board JSON exports (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
