//! Dictionary index
//!
//! Lookup structures built once from a dictionary source and shared read-only
//! by every engine component.

mod index;

pub use index::{DictionaryIndex, INVALID_SEARCH_CHARS};
