//! Recent-search store adapters.

mod file_store;
mod memory;

pub use file_store::FileSearchHistory;
pub use memory::InMemorySearchHistory;
