//! Database models and configuration structs.

pub mod charity;
pub mod config;
