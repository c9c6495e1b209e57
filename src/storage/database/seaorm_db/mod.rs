// Module declarations
mod connection;
mod post_ops;
mod todo_ops;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};
