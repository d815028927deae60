//! Typed async client for a wiki-style article service.
//!
//! The crate is layered the same way on both ends of a request: `domain`
//! holds the wire model, `application` the transport port and the stateless
//! clients built on it, `infrastructure` the reqwest adapter and
//! `presentation` the CLI and the small widget state machines.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use application::services::ArticleServices;
pub use application::{ClientError, ClientResult};
