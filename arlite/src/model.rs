use tracing::debug;

use crate::connection::{Connection, Row};
use crate::dialect::Dialect;
use crate::error::DataError;
use crate::inflect;
use crate::record::Record;
use crate::schema;
use crate::sql;
use crate::value::Value;

/// A mapped type: its name, derived table, and the column set reflected
/// once from the live schema.
///
/// `reflect` is the one-time initialization barrier for a type. Run it
/// before constructing or saving any record of that type; the column
/// set is immutable afterwards. Re-reflecting while records built from
/// the old `ModelType` are still in flight is not supported.
#[derive(Debug, Clone)]
pub struct ModelType {
    name: String,
    table: String,
    dialect: Dialect,
    columns: Vec<String>,
}

impl ModelType {
    /// Bind a type name to its table by reflecting the column set from
    /// the schema. "Song" binds to table "songs".
    pub fn reflect<C: Connection + ?Sized>(
        name: &str,
        dialect: Dialect,
        conn: &C,
    ) -> Result<Self, DataError> {
        let table = inflect::table_name(name);
        let columns = schema::column_names(conn, dialect, &table)?;
        debug!(model = name, %table, "bound model to table");
        Ok(Self {
            name: name.to_string(),
            table,
            dialect,
            columns,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The reflected column set, in schema-definition order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// A record with every attribute unset.
    pub fn new_record(&self) -> Record<'_> {
        Record::new(self)
    }

    /// A record with the given attributes set; every key must be a
    /// reflected column name.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let song = model.new_record_with([("name", "Hello"), ("album", "25")])?;
    /// assert_eq!(song.get("name")?.as_text(), Some("Hello"));
    /// ```
    pub fn new_record_with<I, S, V>(&self, attributes: I) -> Result<Record<'_>, DataError>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Record::new(self);
        for (name, value) in attributes {
            record.set(name.as_ref(), value.into())?;
        }
        Ok(record)
    }

    /// Equality lookup over one reflected column, returning the
    /// provider's raw rows (possibly empty). Rows are not turned back
    /// into records.
    pub fn find_by<C: Connection + ?Sized>(
        &self,
        conn: &C,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Vec<Row>, DataError> {
        if !self.has_column(column) {
            return Err(DataError::unknown_attribute(&self.name, column));
        }
        let stmt = sql::select_where_eq(&self.table, column, self.dialect);
        conn.execute(&stmt, &[value.into()])
    }

    /// `find_by` over the `name` column.
    pub fn find_by_name<C: Connection + ?Sized>(
        &self,
        conn: &C,
        name: &str,
    ) -> Result<Vec<Row>, DataError> {
        self.find_by(conn, "name", name)
    }
}
