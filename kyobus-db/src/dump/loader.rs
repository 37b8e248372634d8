use std::path::Path;

use kdam::tqdm;
use postgres::Client;

use crate::dump::parser::split_statements;
use crate::dump::statement::{classify_statement, StatementKind};
use crate::error::{load_failed, DbError};

/// what a completed load applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub statements: usize,
    pub rows_inserted: u64,
}

/// applies a data-only dump to the database, in file order, inside a single
/// transaction. the target tables must already be empty (the reset controller
/// establishes that precondition earlier in the same run).
///
/// the dump is parsed and validated before the transaction opens, so a dump
/// that violates the data-only contract never writes a row. any statement the
/// server rejects rolls the whole load back; partial loads are not an
/// acceptable end state.
pub fn load_dump(client: &mut Client, dump_path: &Path) -> Result<LoadSummary, DbError> {
    let dump_display = dump_path.to_string_lossy();
    let text = std::fs::read_to_string(dump_path)
        .map_err(|e| load_failed(format!("reading '{dump_display}'"), e.to_string()))?;

    let statements = split_statements(&text)?;
    for (index, statement) in statements.iter().enumerate() {
        if classify_statement(statement) == StatementKind::Unsupported {
            return Err(load_failed(
                format!("validating statement {}", index + 1),
                format!(
                    "statement is not part of the data-only dump contract \
                     (expected INSERT or session SET): '{}'",
                    statement.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
                ),
            ));
        }
    }
    log::info!(
        "loading {} statements from '{dump_display}'",
        statements.len()
    );

    let mut transaction = client
        .transaction()
        .map_err(|e| DbError::DatabaseUnavailable(format!("failed to open transaction: {e}")))?;
    let mut rows_inserted: u64 = 0;
    let total = statements.len();
    let statement_iter = tqdm!(
        statements.iter().enumerate(),
        total = total,
        desc = "applying dump statements"
    );
    for (index, statement) in statement_iter {
        let affected = transaction
            .execute(statement.as_str(), &[])
            .map_err(|e| load_failed(format!("applying statement {}", index + 1), e.to_string()))?;
        if classify_statement(statement) == StatementKind::Insert {
            rows_inserted += affected;
        }
    }
    eprintln!();
    transaction
        .commit()
        .map_err(|e| load_failed("committing", e.to_string()))?;

    log::info!("loaded {rows_inserted} rows from {total} statements");
    Ok(LoadSummary {
        statements: total,
        rows_inserted,
    })
}
