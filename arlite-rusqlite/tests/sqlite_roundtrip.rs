use arlite::{Connection, DataError, Dialect, ModelType, Value};
use arlite_rusqlite::RusqliteConnection;

fn songs_db() -> RusqliteConnection {
    let conn = RusqliteConnection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE songs (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, album TEXT)",
        &[],
    )
    .unwrap();
    conn
}

#[test]
fn reflection_discovers_columns_in_definition_order() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
    assert_eq!(songs.table(), "songs");
    assert_eq!(songs.columns(), ["id", "name", "album"]);
}

#[test]
fn reflection_is_idempotent() {
    let conn = songs_db();
    let first = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
    let second = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
    assert_eq!(first.columns(), second.columns());
}

#[test]
fn reflecting_a_missing_table_fails() {
    let conn = songs_db();
    let err = ModelType::reflect("Album", Dialect::Sqlite, &conn).unwrap_err();
    assert!(matches!(err, DataError::SchemaLookup { .. }));
}

#[test]
fn pluralized_table_binding() {
    let conn = RusqliteConnection::open_in_memory().unwrap();
    conn.execute("CREATE TABLE categories (id INTEGER PRIMARY KEY, label TEXT)", &[])
        .unwrap();
    let categories = ModelType::reflect("Category", Dialect::Sqlite, &conn).unwrap();
    assert_eq!(categories.table(), "categories");
}

#[test]
fn save_assigns_generated_id() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();

    let mut song = songs
        .new_record_with([("name", "Hello"), ("album", "25")])
        .unwrap();
    assert_eq!(song.id(), None);

    let id = song.save(&conn).unwrap();
    assert!(id > 0);
    assert_eq!(song.id(), Some(id));

    let rows = conn.execute("SELECT * FROM songs", &[]).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_named("id"), Some(&Value::Integer(id)));
    assert_eq!(rows[0].get_named("name"), Some(&Value::Text("Hello".into())));
}

#[test]
fn double_save_appends_two_rows() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();

    let mut song = songs
        .new_record_with([("name", "Hello"), ("album", "25")])
        .unwrap();
    let first = song.save(&conn).unwrap();
    let second = song.save(&conn).unwrap();
    assert_ne!(first, second);

    let rows = conn.execute("SELECT name, album FROM songs", &[]).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], rows[1]);
}

#[test]
fn sparse_insert_takes_column_defaults() {
    let conn = RusqliteConnection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE tracks (id INTEGER PRIMARY KEY AUTOINCREMENT, \
         title TEXT, plays INTEGER NOT NULL DEFAULT 0)",
        &[],
    )
    .unwrap();
    let tracks = ModelType::reflect("Track", Dialect::Sqlite, &conn).unwrap();

    // plays stays unset; the insert must omit it so the NOT NULL
    // DEFAULT applies instead of an explicit NULL.
    let mut track = tracks.new_record_with([("title", "Intro")]).unwrap();
    track.save(&conn).unwrap();

    let rows = conn.execute("SELECT plays FROM tracks", &[]).unwrap();
    assert_eq!(rows[0].get(0), Some(&Value::Integer(0)));
}

#[test]
fn find_by_name_returns_matching_raw_rows() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();

    let mut hello = songs
        .new_record_with([("name", "Hello"), ("album", "25")])
        .unwrap();
    hello.save(&conn).unwrap();
    let mut other = songs
        .new_record_with([("name", "Skyfall"), ("album", "Skyfall")])
        .unwrap();
    other.save(&conn).unwrap();

    let rows = songs.find_by_name(&conn, "Hello").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get_named("name"), Some(&Value::Text("Hello".into())));

    let none = songs.find_by_name(&conn, "Nobody").unwrap();
    assert!(none.is_empty());
}

#[test]
fn unknown_attribute_yields_no_instance() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
    let err = songs.new_record_with([("genre", "pop")]).unwrap_err();
    assert!(matches!(
        err,
        DataError::UnknownAttribute { ref attribute, .. } if attribute == "genre"
    ));
}

#[test]
fn bound_values_are_not_interpreted_as_sql() {
    let conn = songs_db();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();

    let hostile = "Robert'); DROP TABLE songs;--";
    let mut song = songs.new_record_with([("name", hostile)]).unwrap();
    song.save(&conn).unwrap();

    let rows = songs.find_by_name(&conn, hostile).unwrap();
    assert_eq!(rows.len(), 1);
    // Table survived, value round-tripped verbatim.
    assert_eq!(
        rows[0].get_named("name"),
        Some(&Value::Text(hostile.to_string()))
    );
}

#[test]
fn file_backed_database_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("songs.db");

    {
        let conn = RusqliteConnection::open(&path).unwrap();
        conn.execute(
            "CREATE TABLE songs (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT, album TEXT)",
            &[],
        )
        .unwrap();
        let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
        let mut song = songs.new_record_with([("name", "Hello")]).unwrap();
        song.save(&conn).unwrap();
    }

    // Reopen and reflect again; the stored row is still there.
    let conn = RusqliteConnection::open(&path).unwrap();
    let songs = ModelType::reflect("Song", Dialect::Sqlite, &conn).unwrap();
    let rows = songs.find_by_name(&conn, "Hello").unwrap();
    assert_eq!(rows.len(), 1);
}
