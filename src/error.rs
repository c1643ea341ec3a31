use std::error::Error as StdError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("could not reach {endpoint}: {}", causes(.source))]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{0}")]
    Other(String),
}

impl DispatchError {
    /// Sorts a transport error into the connection tier or the catch-all.
    pub fn from_reqwest(endpoint: &str, err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection {
                endpoint: endpoint.to_string(),
                source: err,
            }
        } else if err.is_timeout() {
            Self::Other(format!("request to {} timed out: {}", endpoint, causes(&err)))
        } else {
            Self::Other(format!("request to {} failed: {}", endpoint, causes(&err)))
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Joins an error and its `source()` chain with ": ", so the root cause
/// (refused connection, DNS lookup, ...) ends up in the message.
fn causes(err: &(dyn StdError + 'static)) -> String {
    let mut out = err.to_string();
    let mut next = err.source();
    while let Some(cause) = next {
        let text = cause.to_string();
        if !out.ends_with(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        next = cause.source();
    }
    out
}
