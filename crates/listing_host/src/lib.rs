//! Typed host contracts and shared page models used by the listing runtime and browser adapters.
//!
//! This crate is the API-first boundary between the listing engine and the page it enhances. It
//! exposes the key/value store, metadata probe, page surface and event source contracts together
//! with in-memory implementations, while concrete browser adapters live in `listing_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod events;
pub mod page;
pub mod probe;
pub mod storage;
pub mod time;

pub use events::{MemoryEventSource, PageEvent, PageEventHandler, PageEventSource};
pub use page::surface::{MemoryPageSurface, PageSurface};
pub use page::types::{
    Display, DownloadLink, FilterAxis, ItemGroup, ItemTags, PageElement, PanelKind, ViewMode,
};
pub use probe::{MemoryMetadataProbe, MetadataProbe, NoopMetadataProbe, ProbeFuture};
pub use storage::key_value::{KeyValueStore, MemoryKeyValueStore, NoopKeyValueStore};
pub use time::{current_year, unix_time_ms_now};
