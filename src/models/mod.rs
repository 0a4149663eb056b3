//! Wire and configuration models.

pub mod config;
pub mod user;
