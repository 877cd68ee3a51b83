//! Error types for config generation.
//!
//! Every variant is fatal: the CLI reports it once and exits without
//! writing a document.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{name} environment variable is required")]
    MissingVariable { name: String },

    #[error("failed to get hostname")]
    Hostname(#[source] nix::Error),

    #[error("hostname is not valid UTF-8: {0}")]
    HostnameEncoding(String),

    #[error("failed to read environment file {}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode config document")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write config document")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn missing(name: &str) -> Self {
        Self::MissingVariable {
            name: name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_message() {
        let err = Error::missing("GITHUB_WORKSPACE");
        assert_eq!(
            err.to_string(),
            "GITHUB_WORKSPACE environment variable is required"
        );
    }

    #[test]
    fn env_file_keeps_source() {
        let err = Error::EnvFile {
            path: PathBuf::from("/nope/extra.env"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("/nope/extra.env"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
