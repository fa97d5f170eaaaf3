//! Registry-backed layer store
//!
//! Reads and writes the AppCompatFlags layers key under HKCU. Key handles
//! are opened per operation and released when the `RegKey` drops, on every
//! code path.

use std::io;

use tracing::{debug, info, warn};
use winreg::enums::{HKEY_CURRENT_USER, KEY_SET_VALUE};
use winreg::types::FromRegValue;
use winreg::RegKey;

use super::{contains_run_as_invoker, LayerEntry, LayerStore, RUN_AS_INVOKER};
use crate::error::{FlickError, Result};

/// Fixed registry location of the compatibility layer values
pub const LAYERS_KEY_PATH: &str =
    r"Software\Microsoft\Windows NT\CurrentVersion\AppCompatFlags\Layers";

/// Live store over the current user's layers key
#[derive(Debug, Default, Clone, Copy)]
pub struct RegistryLayerStore;

impl RegistryLayerStore {
    pub fn new() -> Self {
        Self
    }
}

impl LayerStore for RegistryLayerStore {
    fn entries(&self) -> Result<Vec<LayerEntry>> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = match hkcu.open_subkey(LAYERS_KEY_PATH) {
            Ok(key) => key,
            // An absent key is the empty state, not an error
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(FlickError::Registry(format!(
                    "Failed to open layers key: {}",
                    e
                )))
            }
        };

        let mut entries = Vec::new();
        for value in key.enum_values() {
            let (path, data) = value.map_err(|e| {
                FlickError::Registry(format!("Failed to enumerate layers key: {}", e))
            })?;
            // Non-string values never qualify
            let Ok(flags) = String::from_reg_value(&data) else {
                warn!(path = %path, "skipping non-string layer value");
                continue;
            };
            if contains_run_as_invoker(&flags) {
                entries.push(LayerEntry { path, flags });
            }
        }

        debug!(count = entries.len(), "enumerated RunAsInvoker entries");
        Ok(entries)
    }

    fn set_invoker_flag(&mut self, path: &str) -> Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let (key, _) = hkcu
            .create_subkey(LAYERS_KEY_PATH)
            .map_err(|e| FlickError::Registry(format!("Failed to create layers key: {}", e)))?;
        key.set_value(path, &RUN_AS_INVOKER)
            .map_err(|e| FlickError::Registry(format!("Failed to set layer value: {}", e)))?;

        info!(path, "flagged executable as RunAsInvoker");
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<()> {
        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = match hkcu.open_subkey_with_flags(LAYERS_KEY_PATH, KEY_SET_VALUE) {
            Ok(key) => key,
            // No key means nothing to delete
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(FlickError::Registry(format!(
                    "Failed to open layers key for delete: {}",
                    e
                )))
            }
        };

        match key.delete_value(path) {
            Ok(()) => {
                info!(path, "removed layer value");
                Ok(())
            }
            // The value may already be gone; that is not an error
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FlickError::Registry(format!(
                "Failed to delete layer value: {}",
                e
            ))),
        }
    }
}
