//! Database layer: pool, schema and identity queries for PostgreSQL.

mod pool;
mod repositories;

pub use pool::{create_pool, ensure_schema, DbPool};
pub use repositories::*;
