mod auth;
mod classes;
pub mod client;
pub mod types;
mod users;

pub use client::*;
pub use types::*;
