// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod article_service;
pub mod recording;

pub use article_service::InMemoryArticleService;
pub use recording::RecordingTransport;
pub use time::{fixed_now, revision_time};
