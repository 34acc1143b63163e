use std::collections::HashMap;

use crate::connection::Connection;
use crate::error::DataError;
use crate::model::ModelType;
use crate::sql::InsertBuilder;
use crate::value::Value;

static NULL: Value = Value::Null;

/// One in-memory record, corresponding to at most one stored row.
///
/// Attribute storage is a map keyed by column name; the permissible
/// keys are exactly the model's reflected column set, checked on every
/// access. `id` is a regular column for reading and writing, but the
/// mapper never sends a client-side `id` to the database: inserts skip
/// it and each successful [`save`](Record::save) stores the fresh
/// server-generated identifier.
#[derive(Debug, Clone)]
pub struct Record<'m> {
    model: &'m ModelType,
    attributes: HashMap<String, Value>,
}

impl<'m> Record<'m> {
    pub(crate) fn new(model: &'m ModelType) -> Self {
        Self {
            model,
            attributes: HashMap::new(),
        }
    }

    pub fn model(&self) -> &ModelType {
        self.model
    }

    /// Read one attribute. Unset attributes read as [`Value::Null`];
    /// a name outside the column set is an error, not a silent null.
    pub fn get(&self, column: &str) -> Result<&Value, DataError> {
        if !self.model.has_column(column) {
            return Err(DataError::unknown_attribute(self.model.name(), column));
        }
        Ok(self.attributes.get(column).unwrap_or(&NULL))
    }

    /// Write one attribute. Setting [`Value::Null`] is the same as
    /// leaving the attribute unset.
    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> Result<(), DataError> {
        if !self.model.has_column(column) {
            return Err(DataError::unknown_attribute(self.model.name(), column));
        }
        self.attributes.insert(column.to_string(), value.into());
        Ok(())
    }

    /// The database-assigned identifier; `None` until the first
    /// successful `save`.
    pub fn id(&self) -> Option<i64> {
        self.attributes.get("id").and_then(Value::as_integer)
    }

    /// All attributes in column order, unset ones as `Null`.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.model.columns().iter().map(|col| {
            (
                col.as_str(),
                self.attributes.get(col).unwrap_or(&NULL),
            )
        })
    }

    /// Append this record to storage and return the generated
    /// identifier.
    ///
    /// The insert is sparse: `id` and every unset (null) attribute are
    /// omitted from the column list entirely, so columns with database
    /// defaults take their default rather than an explicit NULL. Values
    /// are bound, not interpolated.
    ///
    /// Append-only: saving twice inserts two rows and yields two
    /// distinct identifiers. On failure nothing about the record
    /// changes; `id` keeps whatever it held before the call.
    pub fn save<C: Connection + ?Sized>(&mut self, conn: &C) -> Result<i64, DataError> {
        let table = self.model.table();

        let mut insert = InsertBuilder::new(table, self.model.dialect());
        for (column, value) in self.attributes() {
            if column == "id" || value.is_null() {
                continue;
            }
            insert = insert.value(column, value.clone());
        }
        if insert.is_empty() {
            return Err(DataError::persistence(table, "no attribute values to insert"));
        }

        let (stmt, params) = insert.build();
        conn.execute(&stmt, &params)
            .map_err(|err| wrap_persistence(table, err))?;
        let id = conn
            .last_insert_id(table)
            .map_err(|err| wrap_persistence(table, err))?;

        self.attributes.insert("id".to_string(), Value::Integer(id));
        Ok(id)
    }
}

fn wrap_persistence(table: &str, err: DataError) -> DataError {
    match err {
        DataError::Database(source) => DataError::persistence(table, source),
        other => other,
    }
}
