use std::path::Path;
use std::sync::Arc;

use arlite::{Connection, DataError, Row, Value};
use rusqlite::params_from_iter;
use tracing::debug;

use crate::error::{RusqliteErrorExt, RusqliteResult};

/// [`Connection`] over a synchronous SQLite handle.
///
/// Every call is one blocking round-trip on the wrapped
/// `rusqlite::Connection`. The handle is not internally synchronized;
/// concurrent callers must serialize access themselves.
pub struct RusqliteConnection {
    conn: rusqlite::Connection,
}

impl RusqliteConnection {
    /// Open (or create) a database file.
    pub fn open(path: impl AsRef<Path>) -> RusqliteResult<Self> {
        let conn = rusqlite::Connection::open(path).map_err(|e| e.into_data_error())?;
        Ok(Self { conn })
    }

    /// Open a fresh in-memory database.
    pub fn open_in_memory() -> RusqliteResult<Self> {
        let conn = rusqlite::Connection::open_in_memory().map_err(|e| e.into_data_error())?;
        Ok(Self { conn })
    }

    /// Wrap an already-open handle.
    pub fn new(conn: rusqlite::Connection) -> Self {
        Self { conn }
    }

    /// The underlying rusqlite handle, for setup work (schema creation,
    /// pragmas) that the mapper does not own.
    pub fn raw(&self) -> &rusqlite::Connection {
        &self.conn
    }
}

impl Connection for RusqliteConnection {
    fn execute(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DataError> {
        debug!(sql, params = params.len(), "execute");
        let mut stmt = self.conn.prepare(sql).map_err(|e| e.into_data_error())?;

        // Statements without a result shape (INSERT, DDL) must go
        // through execute; rusqlite rejects query on them and vice versa.
        if stmt.column_count() == 0 {
            stmt.execute(params_from_iter(params.iter().map(to_sql_value)))
                .map_err(|e| e.into_data_error())?;
            return Ok(Vec::new());
        }

        let columns: Arc<Vec<String>> = Arc::new(
            stmt.column_names().iter().map(|c| c.to_string()).collect(),
        );
        let mut rows = stmt
            .query(params_from_iter(params.iter().map(to_sql_value)))
            .map_err(|e| e.into_data_error())?;

        let mut out = Vec::new();
        while let Some(row) = rows.next().map_err(|e| e.into_data_error())? {
            let mut values = Vec::with_capacity(columns.len());
            for idx in 0..columns.len() {
                let value_ref = row.get_ref(idx).map_err(|e| e.into_data_error())?;
                values.push(from_sql_ref(value_ref)?);
            }
            out.push(Row::new(Arc::clone(&columns), values));
        }
        Ok(out)
    }

    fn last_insert_id(&self, _table: &str) -> Result<i64, DataError> {
        // SQLite scopes the last generated rowid to the connection, not
        // the table; the argument exists for the provider contract.
        Ok(self.conn.last_insert_rowid())
    }
}

fn to_sql_value(value: &Value) -> rusqlite::types::Value {
    match value {
        Value::Null => rusqlite::types::Value::Null,
        Value::Integer(n) => rusqlite::types::Value::Integer(*n),
        Value::Real(r) => rusqlite::types::Value::Real(*r),
        Value::Text(s) => rusqlite::types::Value::Text(s.clone()),
    }
}

fn from_sql_ref(value: rusqlite::types::ValueRef<'_>) -> Result<Value, DataError> {
    use rusqlite::types::ValueRef;
    match value {
        ValueRef::Null => Ok(Value::Null),
        ValueRef::Integer(n) => Ok(Value::Integer(n)),
        ValueRef::Real(r) => Ok(Value::Real(r)),
        ValueRef::Text(bytes) => Ok(Value::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Blob(_) => Err(DataError::database(UnsupportedColumnType("BLOB"))),
    }
}

/// SQLite storage class with no scalar mapping in the data model.
#[derive(Debug)]
struct UnsupportedColumnType(&'static str);

impl std::fmt::Display for UnsupportedColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported column type: {}", self.0)
    }
}

impl std::error::Error for UnsupportedColumnType {}
