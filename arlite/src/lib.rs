//! # arlite — a minimal reflective ORM core
//!
//! arlite binds a type to a relational table by *reflection*: the table
//! name is derived from the type name (lower-cased, pluralized) and the
//! attribute set is discovered from the live schema, once per type.
//! Records are map-backed instances keyed by column name, persisted
//! through generated sparse INSERTs that capture the database-assigned
//! identifier.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ModelType`] | A mapped type: name, derived table, reflected column set |
//! | [`Record`] | One in-memory record with validated get/set and append-only `save` |
//! | [`Connection`] | The provider seam: execute SQL, report the last generated id |
//! | [`Row`] | One result row, addressable by position or by column name |
//! | [`Value`] | Scalar attribute value: `Null`, `Integer`, `Real`, `Text` |
//! | [`Dialect`] | Placeholder style, quoting, and describe-statement shape |
//! | [`DataError`] | `SchemaLookup` / `UnknownAttribute` / `Persistence` / `Database` |
//!
//! Driver plumbing lives in backend crates; `arlite-rusqlite` implements
//! [`Connection`] over synchronous SQLite.
//!
//! # Quick start
//!
//! ```ignore
//! use arlite::{Dialect, ModelType};
//! use arlite_rusqlite::RusqliteConnection;
//!
//! let conn = RusqliteConnection::open_in_memory()?;
//! // table "songs" already exists: id, name, album
//! let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn)?;
//!
//! let mut song = songs.new_record_with([("name", "Hello"), ("album", "25")])?;
//! let id = song.save(&conn)?;
//! assert_eq!(song.id(), Some(id));
//!
//! let rows = songs.find_by_name(&conn, "Hello")?;
//! assert!(!rows.is_empty());
//! ```
//!
//! # Error policy
//!
//! Nothing is recovered locally: schema lookups, attribute validation,
//! and persistence all surface a [`DataError`] to the caller, with no
//! retries and no fallback. A failed `save` leaves the record exactly
//! as it was.

pub mod connection;
pub mod dialect;
pub mod error;
pub mod inflect;
pub mod model;
pub mod record;
pub mod schema;
pub mod sql;
pub mod value;

pub use connection::{Connection, Row};
pub use dialect::Dialect;
pub use error::DataError;
pub use model::ModelType;
pub use record::Record;
pub use value::Value;

pub mod prelude {
    //! Re-exports of the most commonly used types.
    pub use crate::{Connection, DataError, Dialect, ModelType, Record, Row, Value};
}
