pub mod common;
pub mod cosmos;
pub mod osmosis;
