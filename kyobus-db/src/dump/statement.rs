/// the statement classes a data-only dump may contain. anything outside
/// these classes violates the data-only contract and fails the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// a row insertion, the payload of the dump
    Insert,
    /// session configuration emitted by pg_dump ahead of the data, either
    /// `SET …` or `SELECT pg_catalog.set_config(…)`
    Preamble,
    /// schema or bulk-copy statements, which a data-only `--inserts` dump
    /// must never contain
    Unsupported,
}

pub fn classify_statement(sql: &str) -> StatementKind {
    let head = sql
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase();
    match head.as_str() {
        "INSERT" => StatementKind::Insert,
        "SET" => StatementKind::Preamble,
        "SELECT" if sql.contains("pg_catalog.set_config") => StatementKind::Preamble,
        _ => StatementKind::Unsupported,
    }
}
