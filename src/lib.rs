pub mod error;
pub mod handlers;
pub mod pagination;
pub mod store;
pub mod types;

pub use self::error::Error;
pub use self::types::*;
