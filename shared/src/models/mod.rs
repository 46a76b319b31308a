//! Domain models for the Farm Management Platform

mod alert;
mod insight;
mod snapshots;
mod stock;
mod summary;

pub use alert::*;
pub use insight::*;
pub use snapshots::*;
pub use stock::*;
pub use summary::*;
