use dioxus::prelude::*;
use journey_core::{AppState, Route, SurveyConfig};
use std::rc::Rc;

use crate::context::Relay;
use crate::platform;
use crate::view;
use crate::screens::{FormScreen, GalleryScreen, NotFoundScreen};
use crate::widgets::Layout;

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| {
        let config = SurveyConfig::from_env().unwrap_or_else(|e| {
            tracing::error!(error = %e, "invalid configuration; using defaults");
            SurveyConfig::default()
        });
        if config.access_key.is_none() {
            tracing::warn!("no submission key configured; submissions will fail");
        }
        Rc::new(config)
    });
    use_context_provider(|| Relay::new(&config));
    let app = use_context_provider(|| {
        Signal::new(AppState::load(platform::open_store(), platform::document_effects()))
    });
    let mut route = use_context_provider(|| Signal::new(platform::initial_route()));

    // The form guard runs here, before the form screen exists.
    let current = view::guarded_route(route(), app.read().selection());
    use_effect(move || {
        let target = view::guarded_route(route(), app.read().selection());
        if *route.peek() != target {
            tracing::debug!(?target, "form guard redirect");
            route.set(target);
        }
    });

    let current_screen = match current {
        Route::Gallery => rsx! { GalleryScreen {} },
        Route::Form => rsx! { FormScreen {} },
        Route::NotFound => rsx! { NotFoundScreen {} },
    };

    rsx! {
        Layout {
            {current_screen}
        }
    }
}
