pub mod memory_store;
pub mod post_store;
pub mod rest_store;

pub use memory_store::InMemoryPostStore;
pub use post_store::{PostStore, PostgresPostStore};
pub use rest_store::RestPostStore;
