//! The in-memory content provider: seeded users and posts behind the
//! read-only repository ports.

mod memory;
pub mod seed;

pub use memory::{MemoryPostRepository, MemoryUserRepository};
