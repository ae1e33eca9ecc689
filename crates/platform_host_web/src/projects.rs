//! HTTP-backed project catalog adapter.

use platform_host::{
    decode_project_list, ProjectCatalogError, ProjectCatalogFuture, ProjectCatalogService,
    ProjectRecord, PROJECTS_API_PATH,
};

use crate::bridge;

/// API origin used when `PROJECTS_API_URL` is not set at build time.
pub const DEFAULT_PROJECTS_API_URL: &str = "http://127.0.0.1:8000";

/// Returns the configured API origin without a trailing slash.
pub fn projects_api_base_url() -> &'static str {
    option_env!("PROJECTS_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_PROJECTS_API_URL)
        .trim_end_matches('/')
}

/// Joins an API origin and the project listing path.
pub fn projects_endpoint(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), PROJECTS_API_PATH)
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Project catalog served by the portfolio backend's `/api/projects` endpoint.
pub struct WebProjectCatalogService {
    endpoint: String,
}

impl Default for WebProjectCatalogService {
    fn default() -> Self {
        Self::new(projects_api_base_url())
    }
}

impl WebProjectCatalogService {
    /// Creates a catalog rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: projects_endpoint(base_url),
        }
    }

    /// Returns the full listing URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProjectCatalogService for WebProjectCatalogService {
    fn list_projects<'a>(
        &'a self,
    ) -> ProjectCatalogFuture<'a, Result<Vec<ProjectRecord>, ProjectCatalogError>> {
        Box::pin(async move {
            let response = bridge::fetch_text(&self.endpoint)
                .await
                .map_err(ProjectCatalogError::Network)?;
            if !response.ok() {
                return Err(ProjectCatalogError::HttpStatus(response.status));
            }
            decode_project_list(&response.body)
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn endpoint_drops_trailing_slash_from_origin() {
        assert_eq!(
            projects_endpoint("https://portfolio.onrender.com/"),
            "https://portfolio.onrender.com/api/projects"
        );
        assert_eq!(
            WebProjectCatalogService::new("http://127.0.0.1:8000").endpoint(),
            "http://127.0.0.1:8000/api/projects"
        );
    }

    #[test]
    fn native_builds_report_network_failure() {
        let service = WebProjectCatalogService::default();
        let err = block_on(service.list_projects()).unwrap_err();
        assert!(matches!(err, ProjectCatalogError::Network(_)));
    }
}
