//! # arlite-rusqlite — SQLite backend for arlite
//!
//! Implements arlite's [`Connection`](arlite::Connection) seam on top of
//! [rusqlite](https://github.com/rusqlite/rusqlite), the synchronous
//! SQLite driver. It depends on [`arlite`] for the mapper and adds the
//! connection wrapper, value bridging, and error bridging needed to
//! talk to a real database.
//!
//! # What's in this crate
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RusqliteConnection`] | `Connection` impl wrapping a `rusqlite::Connection` |
//! | [`RusqliteErrorExt`] | Extension trait to convert `rusqlite::Error` → `DataError` |
//! | [`RusqliteResult<T>`] | Type alias for `Result<T, DataError>` |
//!
//! # Quick start
//!
//! ```
//! use arlite::{Connection, Dialect, ModelType};
//! use arlite_rusqlite::RusqliteConnection;
//!
//! # fn main() -> Result<(), arlite::DataError> {
//! let conn = RusqliteConnection::open_in_memory()?;
//! conn.execute(
//!     "CREATE TABLE songs (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, album TEXT)",
//!     &[],
//! )?;
//!
//! let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn)?;
//! let mut song = songs.new_record_with([("name", "Hello"), ("album", "25")])?;
//! let id = song.save(&conn)?;
//! assert_eq!(song.id(), Some(id));
//! # Ok(())
//! # }
//! ```
//!
//! # Error bridging
//!
//! Due to Rust's orphan rules, `From<rusqlite::Error> for DataError`
//! can't be implemented here. Use the [`RusqliteErrorExt`] trait:
//!
//! ```ignore
//! use arlite_rusqlite::RusqliteErrorExt;
//!
//! let conn = rusqlite::Connection::open("app.db").map_err(|e| e.into_data_error())?;
//! ```

pub mod connection;
pub mod error;

pub use connection::RusqliteConnection;
pub use error::{RusqliteErrorExt, RusqliteResult};

/// Re-exports of the most commonly used types from both `arlite` and
/// this crate.
pub mod prelude {
    pub use crate::{RusqliteConnection, RusqliteErrorExt, RusqliteResult};
    pub use arlite::prelude::*;
}
