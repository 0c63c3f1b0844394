//! Pure view helpers: labels and banners derived from core state.
//! No Dioxus here so they can be tested directly.

use journey_core::validation::Field;
use journey_core::{
    ContactMethod, Entry, FlowState, FormFlow, Language, Route, Selection, SubmitError,
    TimeSinceMenopause,
};

/// Gallery "continue" button.
pub fn continue_enabled(selection: &Selection) -> bool {
    FormFlow::enter(selection) == Entry::Render
}

/// Route actually shown for `requested`. The form falls back to its guard
/// target when nothing usable is selected; the caller writes that back into
/// the route signal so later selection changes do not reopen the form.
pub fn guarded_route(requested: Route, selection: &Selection) -> Route {
    match requested {
        Route::Form => match FormFlow::enter(selection) {
            Entry::Render => Route::Form,
            Entry::Redirect(target) => target,
        },
        other => other,
    }
}

pub fn select_label(selected: bool) -> &'static str {
    if selected {
        "Selected"
    } else {
        "Select"
    }
}

pub fn submit_label(state: &FlowState) -> &'static str {
    match state {
        FlowState::Submitting => "Submitting…",
        _ => "Submit",
    }
}

/// Notification shown under the form after a submission attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Success { title: String, description: String },
    Failure { title: String, description: String },
}

pub fn banner(state: &FlowState, language: Language) -> Option<Banner> {
    match state {
        FlowState::Success => {
            let (title, description) = language.success_text();
            Some(Banner::Success {
                title: title.to_string(),
                description: description.to_string(),
            })
        }
        FlowState::Error(e) => Some(Banner::Failure {
            title: language.error_title().to_string(),
            description: failure_text(e),
        }),
        FlowState::Editing | FlowState::Submitting => None,
    }
}

fn failure_text(error: &SubmitError) -> String {
    match error {
        SubmitError::MissingCredential => {
            "Something went wrong. Please try again later.".to_string()
        }
        other => other.to_string(),
    }
}

/// Inline error text for one field, if any.
pub fn field_message(flow: &FormFlow, field: Field) -> Option<String> {
    flow.field_error(field).map(|e| e.to_string())
}

/// `under-35` -> `Under 35`; other brackets are shown as-is.
pub fn age_label(value: &str) -> String {
    match value.strip_prefix("under-") {
        Some(rest) => format!("Under {}", rest),
        None => value.to_string(),
    }
}

pub fn since_label(value: TimeSinceMenopause) -> String {
    format!("{} years", value.as_str())
}

pub fn contact_label(method: ContactMethod) -> &'static str {
    match method {
        ContactMethod::Email => "Email",
        ContactMethod::Phone => "Phone",
    }
}

pub fn footer_text(year: i32) -> String {
    format!("© {} Menopause Wellness Journey", year)
}

/// Color-scheme classes on `<html>` as `(add, remove)`. Other classes on the
/// element are left alone.
pub fn scheme_classes(dark: bool) -> (&'static str, &'static str) {
    if dark {
        ("dark", "light")
    } else {
        ("light", "dark")
    }
}

/// Language shown in the header toggle.
pub fn language_badge(language: Language) -> String {
    language.code().to_ascii_uppercase()
}
