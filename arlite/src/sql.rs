//! Statement assembly for the mapper's two generated write/read shapes.
//!
//! Values are always bound through placeholders, never interpolated;
//! identifiers are embedded but validated upstream at reflection time.

use crate::dialect::Dialect;
use crate::value::Value;

/// Builds a single-row INSERT with explicit column and value lists.
///
/// # Example
///
/// ```
/// use arlite::sql::InsertBuilder;
/// use arlite::{Dialect, Value};
///
/// let (sql, params) = InsertBuilder::new("songs", Dialect::Sqlite)
///     .value("name", Value::from("Hello"))
///     .value("album", Value::from("25"))
///     .build();
/// assert_eq!(sql, "INSERT INTO songs (name, album) VALUES (?, ?)");
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    dialect: Dialect,
    columns: Vec<String>,
    values: Vec<Value>,
}

impl InsertBuilder {
    pub fn new(table: &str, dialect: Dialect) -> Self {
        Self {
            table: table.to_string(),
            dialect,
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Append one column/value pair. Order of calls is the order the
    /// columns appear in the statement.
    pub fn value(mut self, column: &str, value: Value) -> Self {
        self.columns.push(column.to_string());
        self.values.push(value);
        self
    }

    /// True when no column has been added; building an empty INSERT is
    /// the caller's error to report, not ours to emit.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build the statement, returning `(sql, bind_values)`.
    pub fn build(self) -> (String, Vec<Value>) {
        let placeholders: Vec<String> = (1..=self.columns.len())
            .map(|i| self.dialect.placeholder(i))
            .collect();
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );
        (sql, self.values)
    }
}

/// Build an equality-filtered SELECT over all columns, returning the
/// statement; the single bind value is supplied by the caller.
pub fn select_where_eq(table: &str, column: &str, dialect: Dialect) -> String {
    format!(
        "SELECT * FROM {table} WHERE {column} = {}",
        dialect.placeholder(1)
    )
}
