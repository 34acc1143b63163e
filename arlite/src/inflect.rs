//! Table-name derivation from type names.

/// Pluralize an English noun.
///
/// Covers the regular rules plus the consonant-y and sibilant endings
/// that table names actually hit ("category" -> "categories",
/// "box" -> "boxes"). Not a full inflector.
pub fn pluralize(name: &str) -> String {
    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("sh")
        || name.ends_with("ch")
    {
        format!("{name}es")
    } else if name.ends_with('y')
        && !name.ends_with("ey")
        && !name.ends_with("ay")
        && !name.ends_with("oy")
    {
        format!("{}ies", &name[..name.len() - 1])
    } else {
        format!("{name}s")
    }
}

/// Derive the backing table name for a type name: lowercase, then
/// pluralize. Pure; "Song" -> "songs".
pub fn table_name(type_name: &str) -> String {
    pluralize(&type_name.to_lowercase())
}
