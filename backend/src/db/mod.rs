pub mod connection;
pub mod schema;
