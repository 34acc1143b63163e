/// Errors that can occur in the mapping layer.
#[derive(Debug)]
pub enum DataError {
    /// Schema introspection failed: the table does not exist or the
    /// connection provider could not answer the describe statement.
    SchemaLookup { table: String, reason: String },
    /// An attribute name outside the reflected column set was used.
    UnknownAttribute { model: String, attribute: String },
    /// The INSERT or the generated-identifier retrieval failed.
    Persistence { table: String, reason: String },
    /// A driver-level failure surfaced by a connection backend.
    Database(Box<dyn std::error::Error + Send + Sync>),
}

impl DataError {
    /// Construct a `Database` variant from any error type.
    ///
    /// Used by backend crates (e.g. `arlite-rusqlite`) to wrap
    /// driver-specific errors.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }

    pub fn schema_lookup(table: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        DataError::SchemaLookup {
            table: table.into(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_attribute(model: impl Into<String>, attribute: impl Into<String>) -> Self {
        DataError::UnknownAttribute {
            model: model.into(),
            attribute: attribute.into(),
        }
    }

    pub fn persistence(table: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        DataError::Persistence {
            table: table.into(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::SchemaLookup { table, reason } => {
                write!(f, "Schema lookup failed for table '{table}': {reason}")
            }
            DataError::UnknownAttribute { model, attribute } => {
                write!(f, "Unknown attribute '{attribute}' for model {model}")
            }
            DataError::Persistence { table, reason } => {
                write!(f, "Persistence failed for table '{table}': {reason}")
            }
            DataError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
