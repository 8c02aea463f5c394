//! JSON-file adapters for durable job persistence.

mod repository;

pub use repository::JsonFileJobRepository;
