//! Browser (`wasm32`) implementations of [`listing_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the listing page: `localStorage`
//! persistence, `fetch` metadata probes, the `Document`-backed page surface and DOM event
//! binding. Non-wasm builds compile every adapter to an inert fallback so the workspace tests
//! run natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod events;
pub mod probe;
pub mod storage;
pub mod surface;

pub use events::{on_document_ready, WebEventSource, PAGE_COMMANDS};
pub use probe::WebMetadataProbe;
pub use storage::local_storage::WebKeyValueStore;
pub use surface::WebPageSurface;

/// Browser-backed host services for one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebHostServices {
    /// Page document.
    pub surface: WebPageSurface,
    /// Panel flag persistence.
    pub store: WebKeyValueStore,
    /// Remote size lookups.
    pub probe: WebMetadataProbe,
    /// DOM listeners and page commands.
    pub events: WebEventSource,
}

/// Builds the browser host services.
pub fn build_host_services() -> WebHostServices {
    WebHostServices::default()
}
