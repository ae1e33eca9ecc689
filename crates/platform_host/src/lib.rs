//! Typed host-domain contracts and shared models used across the desktop runtime and browser
//! adapters.
//!
//! Concrete browser adapters live in `platform_host_web`; this crate only defines the service
//! traits, the project models, and offline implementations usable in native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod external_url;
pub mod host;
pub mod projects;
pub mod time;

pub use external_url::{
    ExternalUrlFuture, ExternalUrlService, NoopExternalUrlService, RecordingExternalUrlService,
};
pub use host::{HostServices, HostStrategy};
pub use projects::{
    decode_project_list, load_projects_with_fallback, static_projects, status_from_topics,
    OfflineProjectCatalog, ProjectCatalogError, ProjectCatalogFuture, ProjectCatalogService,
    ProjectListing, ProjectRecord, StaticProjectCatalog, PROJECTS_API_PATH,
};
pub use time::ClockTime;
