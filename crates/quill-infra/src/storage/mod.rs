//! Session storage implementations - file-backed and in-memory.

mod file;
mod memory;

pub use file::FileSessionStorage;
pub use memory::MemorySessionStorage;
