// src/core/error.rs
//
// Per-item failure taxonomy. Every variant ends up as a status string in the
// table; none of them stops a run.

use std::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Failure {
    /// Server answered with a non-2xx status
    #[error("HTTP error: {message}")]
    Http { status: u16, message: String },

    /// Connect, timeout, TLS, body read
    #[error("Request error: {0}")]
    Request(String),

    /// Page fetched, no known view-count pattern in it
    #[error("Could not extract view count")]
    ExtractionFailed,

    /// Anything else (client setup, unparsable count)
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Failure {
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::Http { .. } => "http",
            Failure::Request(_) => "request",
            Failure::ExtractionFailed => "extraction",
            Failure::Unexpected(_) => "unexpected",
        }
    }

    pub fn http_status(&self) -> Option<u16> {
        match self {
            Failure::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Failure {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Failure::Http { status: status.as_u16(), message: e.to_string() };
        }
        if e.is_builder() {
            return Failure::Unexpected(error_chain(&e));
        }
        Failure::Request(error_chain(&e))
    }
}

/// "outer: inner: root" — reqwest's own Display hides the cause.
pub fn error_chain(e: &dyn Error) -> String {
    let mut out = e.to_string();
    let mut cur = e.source();
    while let Some(src) = cur {
        let msg = src.to_string();
        if !out.contains(&msg) {
            out.push_str(": ");
            out.push_str(&msg);
        }
        cur = src.source();
    }
    out
}
