//! Project browser: a selectable project list with details and outbound links.

use leptos::*;
use platform_host::{load_projects_with_fallback, ProjectListing, ProjectRecord};
use system_ui::{
    Button, FieldRow, Icon, IconName, IconSize, InsetPanel, ListRow, ListSurface, Tab, TabList,
};

use crate::runtime_context::use_desktop_runtime;

const TABS: [&str; 3] = ["General", "Web Apps", "Data Science"];

/// Project under the selection index, clamped to the last entry.
fn selected_project(projects: &[ProjectRecord], index: usize) -> Option<&ProjectRecord> {
    projects.get(index).or_else(|| projects.last())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectLink {
    Source,
    Demo,
}

impl ProjectLink {
    fn url(self, project: &ProjectRecord) -> Option<&str> {
        let url = match self {
            Self::Source => project.source_url.as_deref(),
            Self::Demo => project.demo_url.as_deref(),
        };
        ProjectRecord::link(url)
    }
}

#[component]
pub(super) fn ProjectsPanel() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let listing = create_rw_signal(None::<ProjectListing>);
    let selected = create_rw_signal(0_usize);

    let catalog = runtime.host.get_value().project_catalog();
    spawn_local(async move {
        let loaded = load_projects_with_fallback(catalog.as_ref()).await;
        if let Some(cause) = &loaded.fallback_cause {
            logging::warn!("project catalog unavailable, showing built-in projects: {cause}");
        }
        // The panel may have closed while the request was in flight.
        let _ = listing.try_set(Some(loaded));
    });

    let current = move || {
        listing.with(|listing| {
            listing
                .as_ref()
                .and_then(|listing| selected_project(&listing.projects, selected.get()).cloned())
        })
    };
    let link_missing = move |link: ProjectLink| {
        Signal::derive(move || current().map_or(true, |project| link.url(&project).is_none()))
    };
    let open_link = move |link: ProjectLink| {
        Callback::new(move |_: web_sys::MouseEvent| {
            let Some(project) = current() else {
                return;
            };
            if let Some(url) = link.url(&project) {
                runtime.host.get_value().open_external_url(url);
            }
        })
    };

    view! {
        <div class="panel-projects">
            <TabList aria_label="Project categories">
                {TABS
                    .iter()
                    .enumerate()
                    .map(|(index, label)| view! { <Tab selected=(index == 0)>{*label}</Tab> })
                    .collect_view()}
            </TabList>
            <InsetPanel>
                {move || {
                    let Some(loaded) = listing.get() else {
                        return view! { <p>"Loading projects..."</p> }.into_view();
                    };
                    if loaded.projects.is_empty() {
                        return view! { <p>"No projects found."</p> }.into_view();
                    }
                    view! {
                        <p>"Select a project to view details:"</p>
                        <ListSurface aria_label="Projects">
                            {loaded
                                .projects
                                .iter()
                                .enumerate()
                                .map(|(index, project)| {
                                    let repo_name = project.repo_name.clone();
                                    view! {
                                        <ListRow
                                            selected=Signal::derive(move || selected.get() == index)
                                            on_click=Callback::new(move |_: web_sys::MouseEvent| {
                                                selected.set(index)
                                            })
                                        >
                                            <Icon icon=IconName::Folder size=IconSize::Xs />
                                            <span>{repo_name}</span>
                                        </ListRow>
                                    }
                                })
                                .collect_view()}
                        </ListSurface>
                    }
                    .into_view()
                }}
                {move || {
                    current()
                        .map(|project| {
                            let repo_name = project.repo_name.clone();
                            let tech_stack = project.tech_stack();
                            let description = project.description.clone().unwrap_or_default();
                            let status = project.display_status();
                            view! {
                                <InsetPanel>
                                    <FieldRow label="Project:">{repo_name}</FieldRow>
                                    <FieldRow label="Tech Stack:">{tech_stack}</FieldRow>
                                    <FieldRow label="Description:">
                                        {description}
                                    </FieldRow>
                                    <FieldRow label="Status:">{status}</FieldRow>
                                </InsetPanel>
                            }
                        })
                }}
            </InsetPanel>
            <div class="panel-actions">
                <Button
                    disabled=link_missing(ProjectLink::Source)
                    on_click=open_link(ProjectLink::Source)
                >
                    "View Source"
                </Button>
                <Button
                    disabled=link_missing(ProjectLink::Demo)
                    on_click=open_link(ProjectLink::Demo)
                >
                    "Live Demo"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use platform_host::static_projects;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn selection_is_clamped_to_the_list() {
        let projects = static_projects();

        assert_eq!(
            selected_project(&projects, 1).map(|p| p.repo_name.as_str()),
            Some("Portfolio Website")
        );
        assert_eq!(
            selected_project(&projects, 40).map(|p| p.repo_name.as_str()),
            Some("Smart Food App")
        );
        assert_eq!(selected_project(&[], 0), None);
    }

    #[test]
    fn placeholder_links_are_not_offered() {
        let projects = static_projects();

        assert_eq!(
            ProjectLink::Source.url(&projects[0]),
            Some("https://github.com/sajad42/studyconnect")
        );
        assert_eq!(ProjectLink::Demo.url(&projects[2]), None);
    }
}
