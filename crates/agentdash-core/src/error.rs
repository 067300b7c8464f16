//! Error types for AgentDash Core
//!
//! Every fallible operation in the dashboard engine returns [`Result`].
//! The dashboard controller turns most of these into silent no-ops; file
//! operations (config, session, export) propagate them to the caller.

use thiserror::Error;

use crate::agent::AgentId;

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashError>;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// No agent with this id is in the store
    #[error("Agent not found: {0}")]
    AgentNotFound(AgentId),

    /// Page key does not name a page
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// Control id is not registered on any page
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML encode errors
    #[error("TOML encode error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        source: Box<DashError>,
    },
}

impl DashError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// True when the error (or the error it wraps) is a missing agent
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::AgentNotFound(_) => true,
            Self::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<DashError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().context(f()))
    }
}
