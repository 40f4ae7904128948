//! Domain entities exposed by the directory service layer.

pub mod charity;
pub mod types;
