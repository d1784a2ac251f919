pub mod compress;
pub mod constants;
pub mod engine;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod word;
