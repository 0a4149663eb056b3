pub mod domain;
pub mod forms;
pub mod models;

#[cfg(feature = "server")]
pub mod backend;
#[cfg(feature = "server")]
pub mod console;
#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod pagination;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;

#[cfg(feature = "server")]
mod app;
#[cfg(feature = "server")]
pub use app::{configure_routes, run};
