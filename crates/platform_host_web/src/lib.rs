//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires external URL navigation and the HTTP project catalog for the browser host.
//! Bridge bindings under `bridge/` split wasm and non-wasm transport so the adapters also compile
//! (and fail soft) in native builds.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod external_url;
pub mod projects;

pub use adapters::{
    build_host_services, external_url_service, host_strategy_name, project_catalog_service,
    selected_host_strategy, ExternalUrlServiceAdapter, ProjectCatalogAdapter,
};
pub use external_url::WebExternalUrlService;
pub use projects::{
    projects_api_base_url, projects_endpoint, WebProjectCatalogService, DEFAULT_PROJECTS_API_URL,
};
