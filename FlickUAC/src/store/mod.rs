//! Entry store for the AppCompatFlags layers key
//!
//! Isolates the registry CRUD behind the [`LayerStore`] capability so the
//! enumeration and filtering logic can be exercised against an in-memory
//! store instead of a live registry.

use crate::error::Result;

#[cfg(windows)]
pub mod registry;

/// Compatibility flag written for every managed executable
pub const RUN_AS_INVOKER: &str = "RunAsInvoker";

/// One value under the layers key: an absolute executable path mapped to a
/// compatibility flag string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerEntry {
    pub path: String,
    pub flags: String,
}

/// Whether flag data qualifies a value for display.
///
/// The data may carry other layer tokens next to RunAsInvoker
/// (e.g. `"~ HIGHDPIAWARE RunAsInvoker"`); a substring match is enough.
pub fn contains_run_as_invoker(flags: &str) -> bool {
    flags.contains(RUN_AS_INVOKER)
}

/// Capability over the layers key: list qualifying entries, flag a path,
/// remove a path.
pub trait LayerStore {
    /// All values whose data contains the RunAsInvoker token, in store
    /// enumeration order.
    fn entries(&self) -> Result<Vec<LayerEntry>>;

    /// Write the literal `"RunAsInvoker"` flag for `path`, overwriting any
    /// existing flag data for that path.
    fn set_invoker_flag(&mut self, path: &str) -> Result<()>;

    /// Remove the value for `path`. Removing a path that is not present
    /// succeeds silently.
    fn remove(&mut self, path: &str) -> Result<()>;
}

/// Ordered in-memory store.
///
/// Backs the unit and integration tests with registry-like semantics:
/// insertion-order enumeration, in-place overwrite on set, idempotent
/// remove.
#[derive(Debug, Default, Clone)]
pub struct MemoryLayerStore {
    values: Vec<(String, String)>,
}

impl MemoryLayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw (path, flags) value, bypassing the RunAsInvoker filter.
    pub fn insert_raw(&mut self, path: impl Into<String>, flags: impl Into<String>) {
        let path = path.into();
        let flags = flags.into();
        match self.values.iter_mut().find(|(p, _)| *p == path) {
            Some((_, existing)) => *existing = flags,
            None => self.values.push((path, flags)),
        }
    }

    /// Number of stored values, qualifying or not.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl LayerStore for MemoryLayerStore {
    fn entries(&self) -> Result<Vec<LayerEntry>> {
        Ok(self
            .values
            .iter()
            .filter(|(_, flags)| contains_run_as_invoker(flags))
            .map(|(path, flags)| LayerEntry {
                path: path.clone(),
                flags: flags.clone(),
            })
            .collect())
    }

    fn set_invoker_flag(&mut self, path: &str) -> Result<()> {
        self.insert_raw(path, RUN_AS_INVOKER);
        Ok(())
    }

    fn remove(&mut self, path: &str) -> Result<()> {
        self.values.retain(|(p, _)| p != path);
        Ok(())
    }
}
