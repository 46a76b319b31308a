//! Shared types and models for the Farm Management Platform
//!
//! This crate contains types shared between the analytics engine, the web
//! dashboard and mobile app (via WASM), and other components of the system.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
