//! Persisted panel visibility flags.
//!
//! Values are stored as `"1"`/`"0"`. The store never fails outward: an unreachable or rejecting
//! backend degrades reads to the supplied default and drops writes.

use leptos::logging;
use listing_host::{KeyValueStore, PanelKind};

use crate::{config::StorageKeys, model::PanelFlags};

/// Panel flag persistence over any [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct PanelFlagStore<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> PanelFlagStore<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    /// Reads a flag. Absent keys and storage failures yield `default`; any stored value other
    /// than `"0"` is `true`.
    pub fn get(&self, key: &str, default: bool) -> bool {
        match self.store.get_item(key) {
            Ok(Some(raw)) => raw != "0",
            Ok(None) => default,
            Err(err) => {
                logging::warn!("panel flag `{key}` unreadable: {err}");
                default
            }
        }
    }

    /// Writes a flag, ignoring storage failures.
    pub fn set(&self, key: &str, value: bool) {
        if let Err(err) = self.store.set_item(key, if value { "1" } else { "0" }) {
            logging::warn!("panel flag `{key}` not persisted: {err}");
        }
    }

    pub fn key_for(&self, panel: PanelKind) -> &str {
        match panel {
            PanelKind::Catalogs => &self.keys.catalogs,
            PanelKind::Videos => &self.keys.videos,
        }
    }

    /// Loads both flags, each defaulting to visible.
    pub fn load(&self) -> PanelFlags {
        let mut flags = PanelFlags::default();
        for panel in PanelKind::ALL {
            flags.set(panel, self.get(self.key_for(panel), true));
        }
        flags
    }

    pub fn persist(&self, panel: PanelKind, visible: bool) {
        self.set(self.key_for(panel), visible);
    }
}
