/// SQL dialect: placeholder style, identifier quoting, and the shape of
/// the column-introspection statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQLite-style `?` placeholders, `PRAGMA table_info`.
    Sqlite,
    /// Postgres-style `$1, $2, ...` placeholders, `information_schema`.
    Postgres,
    /// MySQL-style `?` placeholders with backtick quoting, `SHOW COLUMNS`.
    MySql,
}

impl Dialect {
    pub fn placeholder(self, index: usize) -> String {
        match self {
            Dialect::Postgres => format!("${index}"),
            Dialect::Sqlite | Dialect::MySql => "?".to_string(),
        }
    }

    pub fn quote_char(self) -> char {
        match self {
            Dialect::MySql => '`',
            Dialect::Sqlite | Dialect::Postgres => '"',
        }
    }

    /// The statement that lists a table's columns in definition order.
    ///
    /// `table` must already be validated (see [`is_valid_identifier`]);
    /// it is embedded, not bound, because not every dialect allows
    /// placeholders in these statements.
    pub fn describe_columns(self, table: &str) -> String {
        match self {
            Dialect::Sqlite => format!("PRAGMA table_info('{table}')"),
            Dialect::Postgres => format!(
                "SELECT column_name FROM information_schema.columns \
                 WHERE table_name = '{table}' ORDER BY ordinal_position"
            ),
            Dialect::MySql => format!("SHOW COLUMNS FROM {table}"),
        }
    }

    /// The field of each describe-result row that carries the column name.
    pub fn column_name_field(self) -> &'static str {
        match self {
            Dialect::Sqlite => "name",
            Dialect::Postgres => "column_name",
            Dialect::MySql => "Field",
        }
    }
}

/// Whether `ident` is safe to embed in generated SQL as a bare table or
/// column name. Conservative: leading ASCII letter or underscore, then
/// ASCII alphanumerics and underscores.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
