//! Window content panels, selected by a window definition's `content` key.
//!
//! Panels are self-contained leaves: they may keep local UI state and call host services, but they
//! never dispatch window-manager actions.

mod about;
mod computer;
mod contact;
mod cv;
mod history;
mod projects;

use leptos::*;

use self::{
    about::AboutPanel, computer::ComputerPanel, contact::ContactPanel, cv::CvPanel,
    history::HistoryPanel, projects::ProjectsPanel,
};

/// Content keys with a built-in panel.
pub const CONTENT_KEYS: [&str; 6] = ["about", "contact", "computer", "cv", "history", "projects"];

#[component]
/// Renders the panel registered for `content`, or a notice for unknown keys.
pub fn WindowContent(#[prop(into)] content: String) -> impl IntoView {
    match content.as_str() {
        "about" => view! { <AboutPanel /> }.into_view(),
        "contact" => view! { <ContactPanel /> }.into_view(),
        "computer" => view! { <ComputerPanel /> }.into_view(),
        "cv" => view! { <CvPanel /> }.into_view(),
        "history" => view! { <HistoryPanel /> }.into_view(),
        "projects" => view! { <ProjectsPanel /> }.into_view(),
        other => {
            logging::warn!("no content panel registered for `{other}`");
            view! { <p class="panel-missing">"This window has no content."</p> }.into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DesktopConfig;

    use super::CONTENT_KEYS;

    #[test]
    fn every_builtin_window_has_a_panel() {
        let config = DesktopConfig::builtin().expect("builtin config");
        for window in &config.windows {
            assert!(
                CONTENT_KEYS.contains(&window.content.as_str()),
                "window `{}` uses unknown content `{}`",
                window.id,
                window.content
            );
        }
    }
}
