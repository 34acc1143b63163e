use std::sync::Arc;

use crate::error::DataError;
use crate::value::Value;

/// One result row from the connection provider.
///
/// Addressable both positionally and by column name, so callers can use
/// whichever shape the statement makes natural (the describe statements
/// are read by name, finder results usually by position).
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<Vec<String>>,
    values: Vec<Value>,
}

impl Row {
    pub fn new(columns: Arc<Vec<String>>, values: Vec<Value>) -> Self {
        Self { columns, values }
    }

    /// Convenience constructor for tests and backends that build rows
    /// one at a time.
    pub fn from_pairs(pairs: Vec<(String, Value)>) -> Self {
        let (columns, values) = pairs.into_iter().unzip();
        Self {
            columns: Arc::new(columns),
            values,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Positional access. `None` when the index is out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Named access. `None` when the row has no such column.
    pub fn get_named(&self, column: &str) -> Option<&Value> {
        let idx = self.columns.iter().position(|c| c == column)?;
        self.values.get(idx)
    }
}

/// The connection provider seam.
///
/// Everything the mapper needs from a database driver: run one SQL
/// statement with bound parameters and hand back rows, and report the
/// most recently generated row identifier. Backends (`arlite-rusqlite`)
/// implement this; tests substitute scripted doubles.
///
/// Calls are synchronous and block until the driver answers. The
/// provider is shared state; serializing concurrent callers is the
/// caller's concern, not the mapper's.
pub trait Connection {
    /// Execute `sql` with `params` bound in order. Statements that
    /// produce no result set return an empty vector.
    fn execute(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>, DataError>;

    /// The identifier generated by the most recent successful INSERT
    /// into `table`.
    fn last_insert_id(&self, table: &str) -> Result<i64, DataError>;
}
