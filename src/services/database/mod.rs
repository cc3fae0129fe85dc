// Database service module
// SQLite database connection and schema management

mod connection;
mod preferences;
mod schema;

pub use connection::Database;
