//! Schema reflection: discovering a table's column set from the live
//! database.

use tracing::debug;

use crate::connection::Connection;
use crate::dialect::{is_valid_identifier, Dialect};
use crate::error::DataError;
use crate::value::Value;

/// Retrieve `table`'s column names in schema-definition order.
///
/// Issues the dialect's describe statement through the connection
/// provider and extracts the column-name field of each returned row.
/// Rows with a null or missing name field are discarded. A table that
/// yields no rows does not exist; both that and a provider failure
/// surface as [`DataError::SchemaLookup`].
///
/// Deterministic for an unchanged schema: two calls return the same
/// sequence.
pub fn column_names<C: Connection + ?Sized>(
    conn: &C,
    dialect: Dialect,
    table: &str,
) -> Result<Vec<String>, DataError> {
    if !is_valid_identifier(table) {
        return Err(DataError::schema_lookup(table, "not a valid table name"));
    }

    let sql = dialect.describe_columns(table);
    let rows = conn.execute(&sql, &[]).map_err(|err| match err {
        DataError::Database(source) => DataError::schema_lookup(table, source),
        other => other,
    })?;
    if rows.is_empty() {
        return Err(DataError::schema_lookup(table, "table does not exist"));
    }

    let field = dialect.column_name_field();
    let mut names = Vec::with_capacity(rows.len());
    for row in &rows {
        match row.get_named(field) {
            Some(Value::Text(name)) => {
                if !is_valid_identifier(name) {
                    return Err(DataError::schema_lookup(
                        table,
                        format!("column '{name}' is not a usable identifier"),
                    ));
                }
                names.push(name.clone());
            }
            // Nameless rows are dropped, matching how describe output
            // with missing name fields is treated everywhere else.
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(DataError::schema_lookup(
                    table,
                    format!("unexpected column-name value: {other:?}"),
                ));
            }
        }
    }

    debug!(table, columns = ?names, "reflected column set");
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Row;
    use std::cell::RefCell;

    /// Scripted provider: answers every execute with the same rows.
    struct FixedRows {
        rows: Vec<Row>,
        seen: RefCell<Vec<String>>,
    }

    impl Connection for FixedRows {
        fn execute(&self, sql: &str, _params: &[Value]) -> Result<Vec<Row>, DataError> {
            self.seen.borrow_mut().push(sql.to_string());
            Ok(self.rows.clone())
        }

        fn last_insert_id(&self, _table: &str) -> Result<i64, DataError> {
            Ok(0)
        }
    }

    fn table_info_row(cid: i64, name: Value) -> Row {
        Row::from_pairs(vec![
            ("cid".to_string(), Value::Integer(cid)),
            ("name".to_string(), name),
            ("type".to_string(), Value::Text("TEXT".into())),
        ])
    }

    #[test]
    fn test_column_names_in_order() {
        let conn = FixedRows {
            rows: vec![
                table_info_row(0, Value::Text("id".into())),
                table_info_row(1, Value::Text("name".into())),
                table_info_row(2, Value::Text("album".into())),
            ],
            seen: RefCell::new(Vec::new()),
        };
        let names = column_names(&conn, Dialect::Sqlite, "songs").unwrap();
        assert_eq!(names, vec!["id", "name", "album"]);
        assert_eq!(conn.seen.borrow()[0], "PRAGMA table_info('songs')");
    }

    #[test]
    fn test_null_names_discarded() {
        let conn = FixedRows {
            rows: vec![
                table_info_row(0, Value::Text("id".into())),
                table_info_row(1, Value::Null),
            ],
            seen: RefCell::new(Vec::new()),
        };
        let names = column_names(&conn, Dialect::Sqlite, "songs").unwrap();
        assert_eq!(names, vec!["id"]);
    }

    #[test]
    fn test_missing_table_is_schema_lookup_error() {
        let conn = FixedRows {
            rows: vec![],
            seen: RefCell::new(Vec::new()),
        };
        let err = column_names(&conn, Dialect::Sqlite, "songs").unwrap_err();
        assert!(matches!(err, DataError::SchemaLookup { .. }));
    }

    #[test]
    fn test_invalid_table_name_rejected() {
        let conn = FixedRows {
            rows: vec![],
            seen: RefCell::new(Vec::new()),
        };
        let err = column_names(&conn, Dialect::Sqlite, "songs; drop").unwrap_err();
        assert!(matches!(err, DataError::SchemaLookup { .. }));
        // The bad name never reaches the provider.
        assert!(conn.seen.borrow().is_empty());
    }

    #[test]
    fn test_idempotent_for_unchanged_schema() {
        let conn = FixedRows {
            rows: vec![
                table_info_row(0, Value::Text("id".into())),
                table_info_row(1, Value::Text("name".into())),
            ],
            seen: RefCell::new(Vec::new()),
        };
        let first = column_names(&conn, Dialect::Sqlite, "songs").unwrap();
        let second = column_names(&conn, Dialect::Sqlite, "songs").unwrap();
        assert_eq!(first, second);
    }
}
