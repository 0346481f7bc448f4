pub mod error;
pub mod transaction;
