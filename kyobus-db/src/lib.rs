//! Postgres data access for the kyobus pipeline: connecting, clearing the
//! simulation schema, and applying data-only SQL dumps.

pub mod connect;
pub mod dump;
pub mod error;
pub mod ident;
pub mod reset;

pub use connect::{connect, database_url};
pub use dump::{load_dump, LoadSummary};
pub use error::DbError;
pub use ident::{quote_ident, quote_qualified};
pub use reset::clear_simulation_data;
