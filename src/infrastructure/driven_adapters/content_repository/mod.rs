//! Content repository implementations

mod in_memory;
mod postgres;

pub use in_memory::InMemoryContentRepository;
pub use postgres::PostgresContentRepository;
