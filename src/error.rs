// Runtime failures. Every variant is terminal; the display text carries the
// context prefix that ends up in the fatal log line.
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatError {
    #[error("invalid input error {0}")]
    Input(#[from] io::Error),

    #[error("pubsub Client initialize failed {0}")]
    ClientInit(anyhow::Error),

    #[error("json format error {source} {line}")]
    JsonFormat {
        source: serde_json::Error,
        line: String,
    },

    #[error("publish failed {0}")]
    Publish(anyhow::Error),
}
