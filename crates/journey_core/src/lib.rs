//! Wellness journey survey core: theme catalog, persisted selection, form
//! validation and submission to the external form relay. No UI code.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod navigation;
pub mod payload;
pub mod rich_text;
pub mod selection;
pub mod state;
pub mod store;
pub mod submission;
pub mod validation;

pub use config::SurveyConfig;
pub use error::{ConfigError, FailureReason, FieldError, StoreError, SubmitError};
pub use flow::{Entry, FlowState, FormFlow, SubmitBlocked};
pub use models::{ContactMethod, Language, Theme, TimeSinceMenopause};
pub use navigation::Route;
pub use payload::{FormPayload, ThemePriority, ThemeRef};
pub use selection::{Direction, Selection};
pub use state::{AppState, DocumentEffects, NoEffects};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use submission::{Ack, ReqwestTransport, SubmissionClient, Transport};
pub use validation::{validate, Field, FormFields, SchemaVariant, ValidationReport};
