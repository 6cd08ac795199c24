//! 基础设施层：数据库、存储实现与日志

pub mod database;
pub mod logger;
pub mod memory_store;
pub mod postgres_store;

pub use database::DatabaseManager;
pub use logger::Logger;
pub use memory_store::MemoryUserStore;
pub use postgres_store::PgUserStore;
