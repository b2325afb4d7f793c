//! Visibility, filter and size-summary engine for the static file listing page.
//!
//! The engine never touches the DOM directly: it reads and mutates the page through
//! [`listing_host::PageSurface`], persists panel flags through [`listing_host::KeyValueStore`],
//! and probes remote sizes through [`listing_host::MetadataProbe`].

pub mod admin;
pub mod config;
pub mod controller;
pub mod format;
pub mod model;
pub mod panel_flags;
pub mod reducer;
pub mod size;
pub mod visibility;

pub use admin::{AdminDecision, AdminGate};
pub use config::ListingConfig;
pub use controller::ListingController;
pub use format::{files_word, format_bytes, summary_text};
pub use model::*;
pub use panel_flags::PanelFlagStore;
pub use reducer::{action_for_event, reduce_listing, ListingAction, ListingEffect, ReducerError};
pub use size::{collect_size_summary, parse_byte_count, update_files_info, ProbeOutcome};
pub use visibility::{reconcile, should_be_visible, ReconcileReport, SurfaceTally};
