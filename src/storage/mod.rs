pub mod json_backend;

use crate::{errors::EngineError, ledger::Book};

pub type Result<T> = std::result::Result<T, EngineError>;

/// Abstraction over persistence backends capable of storing book
/// snapshots. Stands in for the external relational store; the engine
/// only ever needs whole-snapshot save/load plus name listing.
pub trait BookStorage: Send + Sync {
    fn save(&self, book: &Book, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Book>;
    fn list(&self) -> Result<Vec<String>>;
}

pub use json_backend::JsonStorage;
