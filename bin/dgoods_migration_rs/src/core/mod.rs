mod account_set;
mod migration_service;
mod table_reader;

pub use account_set::*;
pub use migration_service::*;
pub use table_reader::*;
