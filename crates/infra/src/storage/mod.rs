//! Durable snapshot storage.

pub mod file;

pub use file::FileStorage;
