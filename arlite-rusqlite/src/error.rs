use arlite::DataError;

/// Extension trait for converting `rusqlite::Error` into `DataError`.
///
/// Due to Rust's orphan rules, we can't implement `From<rusqlite::Error>
/// for DataError` in this crate. Use `.into_data_error()` instead.
pub trait RusqliteErrorExt {
    fn into_data_error(self) -> DataError;
}

impl RusqliteErrorExt for rusqlite::Error {
    fn into_data_error(self) -> DataError {
        DataError::database(self)
    }
}

/// Convenience alias for backend results using `DataError`.
pub type RusqliteResult<T> = Result<T, DataError>;
