use std::io;

use thiserror::Error;

/// Library-wide error type for reskit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure while reading a resolved resource.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The resolver yielded neither a stream nor a location for the identifier.
    #[error("Could not find resource with name: {0}")]
    ResourceNotFound(String),

    /// The resource was found but its location is not a well-formed URI.
    #[error("Could not get URI for resource with name: {resource}")]
    LocationConversion {
        resource: String,
        #[source]
        source: url::ParseError,
    },

    /// The resource content is not valid property-file syntax.
    #[error("Failed to parse properties in {resource}: {source}")]
    PropertiesParse {
        resource: String,
        #[source]
        source: java_properties::PropertiesError,
    },

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn not_found<S: Into<String>>(resource: S) -> Self {
        AppError::ResourceNotFound(resource.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ResourceNotFound(_) => io::ErrorKind::NotFound,
            AppError::LocationConversion { .. } | AppError::PropertiesParse { .. } => {
                io::ErrorKind::InvalidData
            }
            AppError::Configuration(_) | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
        }
    }

    /// The resource identifier this error is about, if any.
    pub fn resource(&self) -> Option<&str> {
        match self {
            AppError::ResourceNotFound(resource)
            | AppError::LocationConversion { resource, .. }
            | AppError::PropertiesParse { resource, .. } => Some(resource),
            _ => None,
        }
    }
}
