//! Page document contracts: the typed roles the listing engine reads and mutates, and the
//! surface abstraction that hides the concrete DOM.

pub mod surface;
pub mod types;
