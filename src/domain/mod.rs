//! Domain types of the user console.

pub mod page;
pub mod types;
pub mod user;
