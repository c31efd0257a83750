// Adapters layer: concrete implementations for external systems (database, http).

pub mod http;
pub mod sqlite;
