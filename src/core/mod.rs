//! Configuration and shared domain models

pub mod config;
pub mod models;
