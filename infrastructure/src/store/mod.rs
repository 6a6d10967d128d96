//! Session store implementations

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileSessionStore;
pub use memory::InMemorySessionStore;
