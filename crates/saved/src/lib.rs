//! Saved recipes: a deduplicated collection of recipes persisted as JSON
//! text in a single storage slot.

mod error;
mod storage;
mod store;

pub use error::{ImportError, StorageError, StorageResult};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{SAVED_RECIPES_KEY, SavedRecipes};
