//! Data-only SQL dump handling. the input contract is the output of
//! `pg_dump <database> -a --no-owner --inserts`: a preamble of session `SET`
//! statements followed by one `INSERT` per row, no schema statements.

pub mod loader;
pub mod parser;
pub mod statement;

pub use loader::{load_dump, LoadSummary};
pub use parser::split_statements;
pub use statement::{classify_statement, StatementKind};
