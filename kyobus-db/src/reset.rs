use itertools::Itertools;
use postgres::Client;

use crate::error::{classify_db_error, DbError};
use crate::ident::quote_qualified;

/// removes every row from every ordinary table in the given schema, leaving
/// tables, constraints and extensions intact. **this is irreversible data
/// loss by design**: the pipeline re-creates the dataset from the dump on
/// every run, and no partial reset is safe to proceed from.
///
/// all tables are truncated in a single statement so that foreign keys
/// between them cannot reject the reset, and sequences restart so a reloaded
/// dump observes the same identifier space on every run.
///
/// returns the number of tables cleared.
pub fn clear_simulation_data(client: &mut Client, schema: &str) -> Result<usize, DbError> {
    let rows = client
        .query(
            "SELECT tablename FROM pg_catalog.pg_tables WHERE schemaname = $1",
            &[&schema],
        )
        .map_err(|e| classify_db_error(e, "listing simulation tables"))?;
    let tables: Vec<String> = rows.iter().map(|row| row.get(0)).collect();
    if tables.is_empty() {
        log::warn!("schema '{schema}' contains no tables; nothing to clear");
        return Ok(0);
    }

    let table_list = tables
        .iter()
        .map(|table| quote_qualified(schema, table))
        .join(", ");
    let truncate = format!("TRUNCATE TABLE {table_list} RESTART IDENTITY CASCADE");
    log::debug!("reset statement: {truncate}");
    client
        .batch_execute(&truncate)
        .map_err(|e| classify_db_error(e, "clearing simulation tables"))?;

    log::info!("cleared {} tables in schema '{schema}'", tables.len());
    Ok(tables.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::connect;

    fn test_client() -> Client {
        let url = std::env::var("KYOBUS_TEST_DATABASE_URL")
            .expect("KYOBUS_TEST_DATABASE_URL must point at a disposable database");
        connect(&url).expect("failed to connect to test database")
    }

    #[test]
    #[ignore]
    fn test_reset_leaves_schema_intact() {
        let mut client = test_client();
        client
            .batch_execute(
                "DROP TABLE IF EXISTS reset_check;
                 CREATE TABLE reset_check (id BIGSERIAL PRIMARY KEY, name TEXT);
                 INSERT INTO reset_check (name) VALUES ('before');",
            )
            .unwrap();

        let cleared = clear_simulation_data(&mut client, "public").unwrap();
        assert!(cleared >= 1);

        let count: i64 = client
            .query_one("SELECT count(*) FROM reset_check", &[])
            .unwrap()
            .get(0);
        assert_eq!(count, 0, "rows must be gone but the table must survive");

        // sequences restart, so the next insert observes id 1 again
        client
            .execute("INSERT INTO reset_check (name) VALUES ('after')", &[])
            .unwrap();
        let id: i64 = client
            .query_one("SELECT id FROM reset_check", &[])
            .unwrap()
            .get(0);
        assert_eq!(id, 1);

        client.batch_execute("DROP TABLE reset_check").unwrap();
    }

    #[test]
    #[ignore]
    fn test_reset_is_idempotent() {
        let mut client = test_client();
        client
            .batch_execute(
                "DROP TABLE IF EXISTS reset_twice;
                 CREATE TABLE reset_twice (id BIGINT PRIMARY KEY);",
            )
            .unwrap();

        clear_simulation_data(&mut client, "public").unwrap();
        clear_simulation_data(&mut client, "public").unwrap();

        let count: i64 = client
            .query_one("SELECT count(*) FROM reset_twice", &[])
            .unwrap()
            .get(0);
        assert_eq!(count, 0);

        client.batch_execute("DROP TABLE reset_twice").unwrap();
    }
}
