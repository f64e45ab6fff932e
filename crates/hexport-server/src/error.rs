//! Server error types.
//!
//! Deliberately small: the only failure condition this demo defines is a
//! listener that cannot bind. Everything after a successful start is
//! handled by the drain sequence, not by errors.

use std::io;

use thiserror::Error;

/// Convenient result type alias.
pub type ServerResult<T> = Result<T, ServerError>;

/// Errors surfaced by [`crate::Server::start`].
#[derive(Debug, Error)]
pub enum ServerError {
    /// The TCP listener could not be established (port in use, bad host,
    /// missing privileges). Must never be swallowed - callers detect
    /// startup failure through this variant.
    #[error("failed to bind listener on {host}:{port}")]
    Bind {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_names_the_address() {
        let err = ServerError::Bind {
            host: "0.0.0.0".into(),
            port: 3000,
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().contains("0.0.0.0:3000"));
    }

    #[test]
    fn bind_error_keeps_its_source() {
        let err = ServerError::Bind {
            host: "localhost".into(),
            port: 80,
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
