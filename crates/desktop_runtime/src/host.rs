//! Host-side runtime helpers for executing reducer effects.
//!
//! The reducer stays pure; anything that leaves the desktop (opening URLs, loading the project
//! catalog) goes through the injected [`HostServices`] bundle held here.

use std::{future::Future, rc::Rc};

use leptos::{logging, spawn_local};
use platform_host::{ExternalUrlService, HostServices, ProjectCatalogService};

use crate::reducer::RuntimeEffect;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    services: HostServices,
}

impl DesktopHostContext {
    pub fn new(services: HostServices) -> Self {
        Self { services }
    }

    /// Returns the configured external URL service.
    pub fn external_url_service(&self) -> Rc<dyn ExternalUrlService> {
        self.services.external_urls.clone()
    }

    /// Returns the configured project catalog.
    pub fn project_catalog(&self) -> Rc<dyn ProjectCatalogService> {
        self.services.projects.clone()
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        spawn_local(self.runtime_effect_task(effect));
    }

    /// Builds the host work for `effect` without scheduling it.
    pub fn runtime_effect_task(
        &self,
        effect: RuntimeEffect,
    ) -> impl Future<Output = ()> + 'static {
        match effect {
            RuntimeEffect::OpenExternalUrl(url) => self.open_external_url_task(url),
        }
    }

    /// Opens `url` outside the desktop, logging failures.
    pub fn open_external_url(&self, url: &str) {
        spawn_local(self.open_external_url_task(url.to_string()));
    }

    fn open_external_url_task(&self, url: String) -> impl Future<Output = ()> + 'static {
        let service = self.external_url_service();
        async move {
            if let Err(err) = service.open_url(&url).await {
                logging::warn!("open external url failed for `{url}`: {err}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{
        ExternalUrlFuture, HostStrategy, RecordingExternalUrlService, StaticProjectCatalog,
    };
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        config::DesktopConfig,
        reducer::{reduce_desktop, DesktopAction},
    };

    struct RejectingExternalUrlService;

    impl ExternalUrlService for RejectingExternalUrlService {
        fn open_url<'a>(&'a self, _url: &'a str) -> ExternalUrlFuture<'a, Result<(), String>> {
            Box::pin(async { Err("popup blocked".to_string()) })
        }
    }

    fn host_with(external_urls: Rc<dyn ExternalUrlService>) -> DesktopHostContext {
        DesktopHostContext::new(HostServices {
            external_urls,
            projects: Rc::new(StaticProjectCatalog),
            host_strategy: HostStrategy::Native,
        })
    }

    #[test]
    fn external_icon_effect_reaches_the_url_service() {
        let recorder = RecordingExternalUrlService::default();
        let host = host_with(Rc::new(recorder.clone()));
        let (mut state, mut interaction) = DesktopConfig::builtin()
            .expect("builtin config")
            .initial_state();

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::ActivateIcon {
                icon_id: "github".to_string(),
            },
        );
        for effect in effects {
            block_on(host.runtime_effect_task(effect));
        }

        assert_eq!(recorder.opened(), vec!["https://github.com/sajad42".to_string()]);
    }

    #[test]
    fn failed_navigation_is_absorbed() {
        let host = host_with(Rc::new(RejectingExternalUrlService));

        block_on(host.runtime_effect_task(RuntimeEffect::OpenExternalUrl(
            "https://example.com".to_string(),
        )));

        assert_eq!(host.host_strategy_name(), "native");
    }
}
