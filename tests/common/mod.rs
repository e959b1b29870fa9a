//! Shared fixtures for integration tests.
#![allow(dead_code)]

use thiserror::Error;

/// A foreign leaf error.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct Plain(pub &'static str);

/// A foreign wrapper whose display output includes its cause, like most
/// hand-written error types.
#[derive(Debug, Error)]
#[error("{message}: {source}")]
pub struct Layered {
    pub message: &'static str,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl Layered {
    pub fn new<E>(message: &'static str, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message,
            source: Box::new(source),
        }
    }
}
