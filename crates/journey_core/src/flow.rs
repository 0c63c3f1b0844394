//! Form screen state machine: `Editing -> Submitting -> {Success, Error}`,
//! with `Error -> Editing` on the next edit or retry.
//!
//! Field values live in the flow and survive every transition, so a failed
//! submission can be retried without re-entering anything.

use crate::catalog;
use crate::error::{FieldError, SubmitError};
use crate::navigation::Route;
use crate::payload::FormPayload;
use crate::selection::Selection;
use crate::state::AppState;
use crate::submission::{Ack, SubmissionClient, Transport};
use crate::validation::{validate, Field, FormFields, SchemaVariant, ValidationReport};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Editing,
    Submitting,
    Success,
    Error(SubmitError),
}

/// Outcome of the entry guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    Render,
    Redirect(Route),
}

/// Why a submit action did not start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A submission is already in flight.
    InFlight,
    /// Nothing selected; the caller should redirect to the gallery.
    NoThemes,
    /// At least one field failed validation; see [`FormFlow::report`].
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFlow {
    variant: SchemaVariant,
    fields: FormFields,
    state: FlowState,
    report: ValidationReport,
    attempted: bool,
}

impl FormFlow {
    pub fn new(variant: SchemaVariant) -> Self {
        Self {
            variant,
            fields: FormFields::default(),
            state: FlowState::Editing,
            report: ValidationReport::default(),
            attempted: false,
        }
    }

    /// Guard run before the form renders or any field is read. Ids with no
    /// catalog entry do not count as a selection.
    pub fn enter(selection: &Selection) -> Entry {
        if !selection.ids().iter().any(|id| catalog::contains(id)) {
            Entry::Redirect(Route::Gallery)
        } else {
            Entry::Render
        }
    }

    pub fn variant(&self) -> SchemaVariant {
        self.variant
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.state == FlowState::Submitting
    }

    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.report.error_for(field)
    }

    /// Mutate field values. Ignored while submitting. Once a submit has been
    /// attempted, errors are re-checked on every edit so they clear as the
    /// user fixes them.
    pub fn edit<F: FnOnce(&mut FormFields)>(&mut self, f: F) {
        if self.is_submitting() {
            return;
        }
        f(&mut self.fields);
        if matches!(self.state, FlowState::Error(_) | FlowState::Success) {
            self.state = FlowState::Editing;
        }
        if self.attempted {
            self.report = validate(self.variant, &self.fields);
        }
    }

    /// Validate and, when clean, move to `Submitting` and return the payload
    /// to send. Allowed from `Editing`, `Error` and `Success`.
    pub fn begin_submit(&mut self, app: &AppState) -> Result<FormPayload, SubmitBlocked> {
        if self.is_submitting() {
            return Err(SubmitBlocked::InFlight);
        }
        if Self::enter(app.selection()) != Entry::Render {
            return Err(SubmitBlocked::NoThemes);
        }
        self.attempted = true;
        let form = match self.fields.validated(self.variant) {
            Ok(form) => form,
            Err(report) => {
                tracing::debug!(errors = report.len(), "form blocked by validation");
                self.report = report;
                self.state = FlowState::Editing;
                return Err(SubmitBlocked::Invalid);
            }
        };
        self.report = ValidationReport::default();

        let themes = app.selected_themes();
        let payload = FormPayload::build(self.variant, form, &themes, app.language());
        self.state = FlowState::Submitting;
        tracing::debug!("form submitting");
        Ok(payload)
    }

    /// Record the result of the single attempt started by [`begin_submit`].
    ///
    /// [`begin_submit`]: FormFlow::begin_submit
    pub fn finish(&mut self, result: Result<Ack, SubmitError>) {
        if !self.is_submitting() {
            tracing::warn!("submission result arrived outside of a submission");
            return;
        }
        self.state = match result {
            Ok(_) => FlowState::Success,
            Err(e) => {
                tracing::warn!(reason = ?e.reason(), error = %e, "submission failed");
                FlowState::Error(e)
            }
        };
    }

    /// Drive one full submission in place. Returns the resulting state.
    pub async fn submit<T: Transport>(
        &mut self,
        app: &AppState,
        client: &SubmissionClient<T>,
    ) -> Result<&FlowState, SubmitBlocked> {
        let payload = self.begin_submit(app)?;
        let result = client.submit(&payload).await;
        self.finish(result);
        Ok(&self.state)
    }
}
