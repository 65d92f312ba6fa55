//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - config: device configuration types and `/setconfig` wire types
//! - keyer: text transmission types

pub mod config;
pub mod keyer;

pub use config::*;
pub use keyer::*;
