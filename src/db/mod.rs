pub mod pool;
pub mod queries;
pub mod query;

pub use pool::create_pool;
pub use queries::*;
pub use query::SortDirection;
