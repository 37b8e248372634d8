//! SQL identifier quoting. table names reach this crate from configuration
//! and from `pg_catalog` lookups, so they are always emitted double-quoted.

/// wraps an identifier in double quotes, doubling any embedded quote.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// renders a schema-qualified table reference, e.g. `"public"."stops"`.
pub fn quote_qualified(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}
