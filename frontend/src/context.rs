//! Shared app state provided once by [`crate::app::App`] and read by every screen.
//!
//! ```ignore
//! let mut app = use_app_state();
//! app.write().toggle("theme-1");
//! ```

use dioxus::prelude::*;
use journey_core::{AppState, ReqwestTransport, SubmissionClient, SubmitError, SurveyConfig};
use journey_core::Route;
use std::rc::Rc;

/// Relay client built from the runtime configuration. Construction errors
/// are kept and reported at submit time.
#[derive(Clone)]
pub struct Relay(pub Rc<Result<SubmissionClient<ReqwestTransport>, SubmitError>>);

impl Relay {
    pub fn new(config: &SurveyConfig) -> Self {
        Relay(Rc::new(SubmissionClient::from_config(config)))
    }
}

/// Selection, language and dark-mode flag, persisted on every change.
pub fn use_app_state() -> Signal<AppState> {
    use_context::<Signal<AppState>>()
}

pub fn use_route() -> Signal<Route> {
    use_context::<Signal<Route>>()
}

pub fn use_config() -> Rc<SurveyConfig> {
    use_context::<Rc<SurveyConfig>>()
}

pub fn use_relay() -> Relay {
    use_context::<Relay>()
}
