//! In-process introspection registry for build provenance.
//!
//! Components register a named, read-only attribute bag here; the host
//! exposes [`Registry::snapshot`] through whatever transport it already has
//! (a status endpoint, a metrics page). Registration failures are logged
//! and converted to `None`; they never propagate to the caller.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use parking_lot::RwLock;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::version::{self, VersionInfo};
use crate::PRODUCT_NAME;

/// Fixed category label every entry is registered under.
pub const CATEGORY: &str = "Version";

static GLOBAL_REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("entry already registered under {0}")]
    Duplicate(String),
}

/// The three display attributes a monitoring agent can query per component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionAttributes {
    pub version: String,
    pub source_info: String,
    pub compiled_by: String,
}

impl VersionAttributes {
    pub fn from_info(info: &VersionInfo) -> Self {
        Self {
            version: format!("{} {}", PRODUCT_NAME, info.version()),
            source_info: format!("Source {} -r {}", info.url(), info.revision()),
            compiled_by: format!("Compiled by {} on {}", info.user(), info.date()),
        }
    }
}

/// Names a live registry entry. Returned from registration so the caller can
/// deregister later; holding or dropping it has no other effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationHandle {
    name: String,
}

impl RegistrationHandle {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Named read-only attribute bags, keyed `"<component>:Version"`.
#[derive(Debug, Default)]
pub struct Registry {
    entries: RwLock<BTreeMap<String, VersionAttributes>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes the provenance attributes of `info` under `component`.
    ///
    /// Failure (currently only a name collision) is logged and converted to
    /// `None`; it never propagates to the caller.
    pub fn register_version(
        &self,
        component: &str,
        info: &VersionInfo,
    ) -> Option<RegistrationHandle> {
        let name = format!("{}:{}", component, CATEGORY);
        match self.insert(&name, VersionAttributes::from_info(info)) {
            Ok(()) => Some(RegistrationHandle { name }),
            Err(e) => {
                warn!(event = "registry.register.failed", component, error = %e);
                None
            }
        }
    }

    /// Removes the entry named by `handle`. Removing an already-removed
    /// entry is a no-op.
    pub fn deregister(&self, handle: RegistrationHandle) {
        self.entries.write().remove(&handle.name);
    }

    /// Attributes registered under `component`, if any.
    pub fn get(&self, component: &str) -> Option<VersionAttributes> {
        let name = format!("{}:{}", component, CATEGORY);
        self.entries.read().get(&name).cloned()
    }

    /// Serializable view of every registered entry, for the host transport.
    pub fn snapshot(&self) -> BTreeMap<String, VersionAttributes> {
        self.entries.read().clone()
    }

    fn insert(&self, name: &str, attrs: VersionAttributes) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();
        if entries.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        entries.insert(name.to_string(), attrs);
        Ok(())
    }
}

/// The process-wide registry.
pub fn global() -> &'static Registry {
    &GLOBAL_REGISTRY
}

/// Publishes the process-wide [`VersionInfo`] under `component` in the
/// process-wide registry.
pub fn register(component: &str) -> Option<RegistrationHandle> {
    global().register_version(component, version::global())
}
