// src/application/ports/mod.rs
pub mod transport;

pub use transport::{ApiRequest, Method, Transport};
