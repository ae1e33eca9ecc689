//! Project catalog contracts and the static fallback catalog.
//!
//! The projects window renders whatever [`ProjectCatalogService`] returns. Remote catalogs report
//! failures as [`ProjectCatalogError`]; callers fall back to [`static_projects`] via
//! [`load_projects_with_fallback`].

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Relative path of the project listing endpoint.
pub const PROJECTS_API_PATH: &str = "/api/projects";

/// Object-safe boxed future used by [`ProjectCatalogService`].
pub type ProjectCatalogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Failure modes of a remote project catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectCatalogError {
    /// The request never produced a response.
    #[error("project catalog request failed: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    /// The response body was not a project list.
    #[error("project catalog payload could not be decoded: {0}")]
    Decode(String),
}

/// One project entry as served by the projects endpoint.
///
/// Accepts both the backend's database shape (`ai_description`, nullable `languages`) and the
/// camel-cased link fields used by the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Backend row id, when served from the database.
    #[serde(default)]
    pub id: Option<u64>,
    /// Repository name shown in the project list.
    pub repo_name: String,
    /// Languages / tech stack labels.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
    /// Short description.
    #[serde(default, alias = "ai_description")]
    pub description: Option<String>,
    /// Explicit status label; derived from `topics` when absent.
    #[serde(default, alias = "project_status")]
    pub status: Option<String>,
    /// Repository topics used for status derivation.
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    /// Star count.
    #[serde(default)]
    pub stars: u32,
    /// Source repository link.
    #[serde(default, rename = "sourceUrl", alias = "source_url")]
    pub source_url: Option<String>,
    /// Live demo link.
    #[serde(default, rename = "demoUrl", alias = "demo_url")]
    pub demo_url: Option<String>,
}

impl ProjectRecord {
    /// Returns the status label, deriving it from topics when the record carries none.
    pub fn display_status(&self) -> String {
        self.status
            .clone()
            .filter(|status| !status.trim().is_empty())
            .unwrap_or_else(|| status_from_topics(&self.topics).to_string())
    }

    /// Returns the comma-joined tech stack.
    pub fn tech_stack(&self) -> String {
        self.languages.join(", ")
    }

    /// Returns a usable link, skipping empty and `#` placeholders.
    pub fn link(url: Option<&str>) -> Option<&str> {
        url.filter(|url| !url.is_empty() && *url != "#")
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Maps repository topics to a status label.
pub fn status_from_topics<S: AsRef<str>>(topics: &[S]) -> &'static str {
    let has = |tag: &str| topics.iter().any(|topic| topic.as_ref() == tag);
    if has("status-done") {
        "Done"
    } else if has("status-debugging") {
        "Under Debugging"
    } else if has("status-development") {
        "In Development"
    } else {
        "Planning"
    }
}

/// Decodes a project listing JSON payload.
///
/// # Errors
///
/// Returns [`ProjectCatalogError::Decode`] when the payload is not a JSON array of projects.
pub fn decode_project_list(raw: &str) -> Result<Vec<ProjectRecord>, ProjectCatalogError> {
    serde_json::from_str(raw).map_err(|err| ProjectCatalogError::Decode(err.to_string()))
}

/// Host service that lists portfolio projects.
pub trait ProjectCatalogService {
    /// Lists the projects to show in the projects window.
    fn list_projects<'a>(
        &'a self,
    ) -> ProjectCatalogFuture<'a, Result<Vec<ProjectRecord>, ProjectCatalogError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Catalog that always serves the built-in project list.
pub struct StaticProjectCatalog;

impl ProjectCatalogService for StaticProjectCatalog {
    fn list_projects<'a>(
        &'a self,
    ) -> ProjectCatalogFuture<'a, Result<Vec<ProjectRecord>, ProjectCatalogError>> {
        Box::pin(async { Ok(static_projects()) })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Catalog for hosts without network access; every request fails.
pub struct OfflineProjectCatalog;

impl ProjectCatalogService for OfflineProjectCatalog {
    fn list_projects<'a>(
        &'a self,
    ) -> ProjectCatalogFuture<'a, Result<Vec<ProjectRecord>, ProjectCatalogError>> {
        Box::pin(async {
            Err(ProjectCatalogError::Network(
                "no network transport on this host".to_string(),
            ))
        })
    }
}

/// Result of [`load_projects_with_fallback`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListing {
    /// Projects to display.
    pub projects: Vec<ProjectRecord>,
    /// Set when the catalog failed and `projects` is the static fallback.
    pub fallback_cause: Option<ProjectCatalogError>,
}

/// Lists projects from `service`, substituting [`static_projects`] on failure.
pub async fn load_projects_with_fallback(service: &dyn ProjectCatalogService) -> ProjectListing {
    match service.list_projects().await {
        Ok(projects) => ProjectListing {
            projects,
            fallback_cause: None,
        },
        Err(err) => ProjectListing {
            projects: static_projects(),
            fallback_cause: Some(err),
        },
    }
}

fn project(
    id: u64,
    repo_name: &str,
    languages: &[&str],
    description: &str,
    status: &str,
    source_url: &str,
    demo_url: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: Some(id),
        repo_name: repo_name.to_string(),
        languages: languages.iter().map(|lang| lang.to_string()).collect(),
        description: Some(description.to_string()),
        status: Some(status.to_string()),
        topics: Vec::new(),
        stars: 0,
        source_url: Some(source_url.to_string()),
        demo_url: Some(demo_url.to_string()),
    }
}

/// Built-in project list used when no catalog is reachable.
pub fn static_projects() -> Vec<ProjectRecord> {
    vec![
        project(
            1,
            "StudyConnect Platform",
            &["Spring Boot", "AWS", "Java"],
            "Full-stack platform for students",
            "Active Development",
            "https://github.com/sajad42/studyconnect",
            "https://d3hl37aapqqsoq.cloudfront.net/",
        ),
        project(
            2,
            "Portfolio Website",
            &["React", "Tailwind CSS"],
            "Windows 98-inspired portfolio",
            "Completed",
            "https://github.com/sajad42/Portfolio-website",
            "https://main.d3a6cq397zfehj.amplifyapp.com/",
        ),
        project(
            3,
            "Data Analysis Suite",
            &["Python", "Pandas", "Scikit-learn"],
            "Machine learning projects",
            "In Progress",
            "#",
            "#",
        ),
        project(
            4,
            "Smart Food App",
            &["React Native", "Node.js"],
            "Mobile app for food tracking",
            "In Progress",
            "#",
            "#",
        ),
    ]
}
