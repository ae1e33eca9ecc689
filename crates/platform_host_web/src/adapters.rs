use std::rc::Rc;

use platform_host::{
    ExternalUrlFuture, ExternalUrlService, HostServices, HostStrategy, NoopExternalUrlService,
    OfflineProjectCatalog, ProjectCatalogError, ProjectCatalogFuture, ProjectCatalogService,
    ProjectRecord,
};

use crate::{WebExternalUrlService, WebProjectCatalogService};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(all(target_arch = "wasm32", not(feature = "offline-host")))]
    {
        HostStrategy::Browser
    }

    #[cfg(not(all(target_arch = "wasm32", not(feature = "offline-host"))))]
    {
        HostStrategy::Native
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete external URL backend behind [`ExternalUrlService`].
#[derive(Debug, Clone, Copy)]
pub enum ExternalUrlServiceAdapter {
    /// Browser `window.open` navigation.
    Browser(WebExternalUrlService),
    /// No-op fallback for native builds.
    Native(NoopExternalUrlService),
}

impl ExternalUrlService for ExternalUrlServiceAdapter {
    fn open_url<'a>(&'a self, url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_url(url),
            Self::Native(service) => service.open_url(url),
        }
    }
}

/// Adapter enum that erases the concrete catalog backend behind [`ProjectCatalogService`].
#[derive(Debug, Clone)]
pub enum ProjectCatalogAdapter {
    /// Backend `/api/projects` over browser fetch.
    Browser(WebProjectCatalogService),
    /// Offline catalog; callers fall back to the static list.
    Native(OfflineProjectCatalog),
}

impl ProjectCatalogService for ProjectCatalogAdapter {
    fn list_projects<'a>(
        &'a self,
    ) -> ProjectCatalogFuture<'a, Result<Vec<ProjectRecord>, ProjectCatalogError>> {
        match self {
            Self::Browser(service) => service.list_projects(),
            Self::Native(service) => service.list_projects(),
        }
    }
}

/// Builds the external URL adapter for the selected host strategy.
pub fn external_url_service() -> ExternalUrlServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ExternalUrlServiceAdapter::Browser(WebExternalUrlService),
        HostStrategy::Native => ExternalUrlServiceAdapter::Native(NoopExternalUrlService),
    }
}

/// Builds the project catalog adapter for the selected host strategy.
pub fn project_catalog_service() -> ProjectCatalogAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => {
            ProjectCatalogAdapter::Browser(WebProjectCatalogService::default())
        }
        HostStrategy::Native => ProjectCatalogAdapter::Native(OfflineProjectCatalog),
    }
}

/// Assembles the full host bundle handed to `desktop_runtime::DesktopProvider`.
pub fn build_host_services() -> HostServices {
    HostServices {
        external_urls: Rc::new(external_url_service()),
        projects: Rc::new(project_catalog_service()),
        host_strategy: selected_host_strategy(),
    }
}
