//! Error types for the command-line client
//!
//! Every failure the front end can report, with constructors in the same
//! shape for each kind.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the command-line client
#[derive(Error, Debug)]
pub enum ClientError {
    /// Malformed revision/date grammar or a tokenizer-level failure
    #[error("{message}")]
    ArgumentSyntax {
        message: String,
        /// Whether the generic usage text should follow the message
        usage: bool,
    },

    /// The program was run without any arguments
    #[error("no arguments given")]
    NoArguments,

    /// Options were given but no subcommand
    #[error("subcommand argument required")]
    MissingSubcommand,

    /// The first positional argument names no known command
    #[error("unknown command: {name}")]
    UnknownCommand { name: String },

    /// `--locale` named a locale the C library refused
    #[error("The locale `{locale}' can not be set")]
    LocaleUnavailable { locale: String },

    /// The `--filedata` target could not be read
    #[error("Can't read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The log message file is itself under version control
    #[error("Log message file is a versioned file; use `--force' to override.")]
    LogMessageIsVersionedFile,

    /// The per-invocation scratch area could not be created
    #[error("Unable to set up the client session: {source}")]
    Session {
        #[source]
        source: std::io::Error,
    },

    /// The command table violates its ordering contract
    #[error("Command table error: {message}")]
    Registry { message: String },

    /// Anything reported by an operation handler
    #[error("{message}")]
    Handler {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ClientError {
    /// Create a grammar error reported without usage text
    pub fn argument_syntax(message: impl Into<String>) -> Self {
        Self::ArgumentSyntax {
            message: message.into(),
            usage: false,
        }
    }

    /// Create a tokenizer error that is followed by the generic usage text
    pub fn usage(message: impl Into<String>) -> Self {
        Self::ArgumentSyntax {
            message: message.into(),
            usage: true,
        }
    }

    /// Create an unknown command error
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a locale error
    pub fn locale_unavailable(locale: impl Into<String>) -> Self {
        Self::LocaleUnavailable {
            locale: locale.into(),
        }
    }

    /// Create a file read error
    pub fn file_read<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a registry validation error
    pub fn registry(message: impl Into<String>) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create a handler error
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
            source: None,
        }
    }

    /// Create a handler error wrapping an underlying cause
    pub fn handler_with_source<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Handler {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this is an argument syntax error
    pub const fn is_argument_syntax(&self) -> bool {
        matches!(self, Self::ArgumentSyntax { .. })
    }

    /// Whether the generic usage text should accompany this error
    pub const fn wants_usage(&self) -> bool {
        matches!(
            self,
            Self::ArgumentSyntax { usage: true, .. }
                | Self::MissingSubcommand
                | Self::UnknownCommand { .. }
        )
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_flag() {
        assert!(ClientError::usage("bad option").wants_usage());
        assert!(!ClientError::argument_syntax("bad range").wants_usage());
        assert!(ClientError::unknown_command("frob").wants_usage());
        assert!(!ClientError::LogMessageIsVersionedFile.wants_usage());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ClientError::unknown_command("frob").to_string(),
            "unknown command: frob"
        );
        assert_eq!(
            ClientError::locale_unavailable("xx_XX").to_string(),
            "The locale `xx_XX' can not be set"
        );
        let err = ClientError::file_read(
            "msg.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("msg.txt"));
    }
}
