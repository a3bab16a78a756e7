// Session state between commands
//
// The classifier and plan adjuster never touch storage. This module
// keeps the chosen category and the latest progress record in a small
// key-value scratch file and exposes them as an explicit context value.
//
// Components:
// - Persistence: JSON scratch file with string keys and values
// - Context: typed view over the two fixed keys

pub mod persistence;
pub mod context;

// Re-export key types
pub use persistence::ScratchStore;
pub use context::{SessionContext, CATEGORY_KEY, PROGRESS_KEY};
