//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod json_file_storage;

#[cfg(test)]
mod tests;

pub use json_file_storage::JsonFileStorage;
