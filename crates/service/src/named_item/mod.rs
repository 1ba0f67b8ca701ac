//! Named-item service: generic CRUD with soft delete, row-locked upsert and
//! referential-conflict aware delete, over a pluggable transactional store.

pub mod repository;
pub mod repo;
pub mod service;


pub use repo::memory::MemoryNamedItemStore;
pub use repo::seaorm::SeaOrmNamedItemStore;
pub use repository::{NamedItemStore, NamedItemTx};
pub use service::{CreateOutcome, DeleteOutcome, NamedItemService};
