//! Shared host-bundle models for browser and native runtime composition.

use std::rc::Rc;

use crate::{ExternalUrlService, ProjectCatalogService};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native builds (tests, tooling) with offline adapters.
    Native,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Native => "native",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Adapter selection happens before this bundle crosses into `desktop_runtime`, which keeps the
/// window manager decoupled from browser details.
#[derive(Clone)]
pub struct HostServices {
    /// External URL opening service.
    pub external_urls: Rc<dyn ExternalUrlService>,
    /// Portfolio project catalog.
    pub projects: Rc<dyn ProjectCatalogService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a bundle that never touches the network or the browser.
    pub fn offline() -> Self {
        Self {
            external_urls: Rc::new(crate::NoopExternalUrlService),
            projects: Rc::new(crate::StaticProjectCatalog),
            host_strategy: HostStrategy::Native,
        }
    }
}
