/// Common types and utilities for the MCP server generator

/// Error type for generator operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic error with message
    #[error("{0}")]
    Generic(String),

    /// The artifact is not a well-formed JSON array of entries
    #[error("failed to decode ABI JSON: {0}")]
    Decode(String),

    /// A declared type string could not be decomposed
    #[error("invalid type '{type_string}': {message}")]
    TypeResolution {
        /// The offending type string, verbatim
        type_string: String,
        /// What was wrong with it
        message: String,
    },

    /// A fatal error raised while normalizing one artifact entry
    #[error("failed to parse {kind} '{name}': {source}")]
    Entry {
        /// Entry kind (function, event, error, constructor, ...)
        kind: String,
        /// Declared entry name
        name: String,
        /// Underlying cause
        #[source]
        source: Box<Error>,
    },

    /// A template failed to parse or execute
    #[error("failed to render {template}: {message}")]
    Render {
        /// Template name
        template: String,
        /// Template engine message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Chain or language selector that is recognised but not implemented
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// IR validation findings promoted to a hard failure
    #[error("IR validation failed:\n{0}")]
    Validation(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new generic error
    pub fn generic<S: Into<String>>(msg: S) -> Self {
        Error::Generic(msg.into())
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode(msg.into())
    }

    /// Create a new type resolution error
    pub fn type_resolution<T: Into<String>, M: Into<String>>(type_string: T, message: M) -> Self {
        Error::TypeResolution {
            type_string: type_string.into(),
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render<T: Into<String>, M: ToString>(template: T, message: M) -> Self {
        Error::Render {
            template: template.into(),
            message: message.to_string(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create a new unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(msg: S) -> Self {
        Error::Validation(msg.into())
    }

    /// Wrap this error with the artifact entry it was raised for
    pub fn in_entry<K: Into<String>, N: Into<String>>(self, kind: K, name: N) -> Self {
        Error::Entry {
            kind: kind.into(),
            name: name.into(),
            source: Box::new(self),
        }
    }

    /// Strip entry context and return the root cause
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Entry { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON serialization error: {}", err))
    }
}
