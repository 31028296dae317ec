use thiserror::Error;

/// Failure taxonomy for a synthesis run. Every variant is terminal: no
/// stage retries, and the process exits non-zero.
///
/// Message prefixes are stable so callers and scripts can discriminate on
/// error kind.
#[derive(Error, Debug)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("unsupported speaker count: expected exactly 2 distinct speakers, found {count}")]
    UnsupportedSpeakerCount { count: usize },

    #[error("no voice available: {0}")]
    NoVoiceAvailable(String),

    #[error("request failed: {0}")]
    Request(anyhow::Error),

    #[error("request timed out: {0}")]
    RequestTimeout(anyhow::Error),

    #[error("write error: {0}")]
    Write(anyhow::Error),
}
