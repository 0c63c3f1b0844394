//! Form field validation.
//!
//! [`validate`] is a pure function from raw field values to a per-field error
//! map; nothing here knows about the UI that collects the values.

use crate::error::{ConfigError, FieldError};
use crate::models::{ContactMethod, TimeSinceMenopause};
use once_cell::sync::Lazy;
use regex_lite::Regex;
use std::collections::BTreeMap;
use std::str::FromStr;

pub const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Which form schema is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchemaVariant {
    /// Name and email required; no priorities.
    #[default]
    RequiredContact,
    /// Name and email optional; asks for time since menopause and ranks the
    /// selected themes.
    OptionalContact,
}

impl SchemaVariant {
    pub fn age_groups(self) -> &'static [&'static str] {
        match self {
            SchemaVariant::RequiredContact => &["35-44", "45-54", "55-64", "65+"],
            SchemaVariant::OptionalContact => {
                &["under-35", "35-44", "45-54", "55-64", "65-74", "75+"]
            }
        }
    }

    pub fn requires_contact(self) -> bool {
        self == SchemaVariant::RequiredContact
    }

    pub fn asks_time_since_menopause(self) -> bool {
        self == SchemaVariant::OptionalContact
    }

    pub fn ranks_themes(self) -> bool {
        self == SchemaVariant::OptionalContact
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemaVariant::RequiredContact => "required-contact",
            SchemaVariant::OptionalContact => "optional-contact",
        }
    }
}

impl FromStr for SchemaVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "required-contact" | "a" => Ok(SchemaVariant::RequiredContact),
            "optional-contact" | "b" => Ok(SchemaVariant::OptionalContact),
            other => Err(ConfigError::UnknownSchema(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    AgeGroup,
    TimeSinceMenopause,
    ExtraChoice,
    Consent,
}

/// Raw form values as entered. Choice fields are `None` until picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub age_group: Option<String>,
    pub time_since_menopause: Option<String>,
    pub extra_choice: Option<String>,
    pub consent: bool,
}

/// Field values after a successful [`validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidForm {
    pub name: String,
    pub email: String,
    pub age_group: String,
    pub time_since_menopause: Option<TimeSinceMenopause>,
    pub extra_choice: ContactMethod,
    pub consent: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<Field, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &BTreeMap<Field, FieldError> {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }
}

/// Check every field independently.
pub fn validate(variant: SchemaVariant, fields: &FormFields) -> ValidationReport {
    let mut report = ValidationReport::default();

    let name = fields.name.trim();
    let email = fields.email.trim();
    if variant.requires_contact() {
        if name.chars().count() < MIN_NAME_LEN {
            report.insert(Field::Name, FieldError::TooShort { min: MIN_NAME_LEN });
        }
        if !is_valid_email(email) {
            report.insert(Field::Email, FieldError::InvalidEmail);
        }
    } else if !email.is_empty() && !is_valid_email(email) {
        report.insert(Field::Email, FieldError::InvalidEmail);
    }

    match fields.age_group.as_deref() {
        None | Some("") => report.insert(Field::AgeGroup, FieldError::Required),
        Some(age) if !variant.age_groups().contains(&age) => {
            report.insert(Field::AgeGroup, FieldError::NotAllowed)
        }
        Some(_) => {}
    }

    if variant.asks_time_since_menopause() {
        match fields.time_since_menopause.as_deref() {
            None | Some("") => report.insert(Field::TimeSinceMenopause, FieldError::Required),
            Some(v) if TimeSinceMenopause::parse(v).is_none() => {
                report.insert(Field::TimeSinceMenopause, FieldError::NotAllowed)
            }
            Some(_) => {}
        }
    }

    match fields.extra_choice.as_deref() {
        None | Some("") => report.insert(Field::ExtraChoice, FieldError::Required),
        Some(v) if ContactMethod::parse(v).is_none() => {
            report.insert(Field::ExtraChoice, FieldError::NotAllowed)
        }
        Some(_) => {}
    }

    if !fields.consent {
        report.insert(Field::Consent, FieldError::ConsentRequired);
    }

    report
}

impl FormFields {
    /// Validate and convert to typed values.
    pub fn validated(&self, variant: SchemaVariant) -> Result<ValidForm, ValidationReport> {
        let report = validate(variant, self);
        if !report.is_valid() {
            return Err(report);
        }
        // Fallbacks below are unreachable once the report is clean.
        Ok(ValidForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            age_group: self.age_group.clone().unwrap_or_default(),
            time_since_menopause: if variant.asks_time_since_menopause() {
                self.time_since_menopause
                    .as_deref()
                    .and_then(TimeSinceMenopause::parse)
            } else {
                None
            },
            extra_choice: self
                .extra_choice
                .as_deref()
                .and_then(ContactMethod::parse)
                .unwrap_or(ContactMethod::Email),
            consent: self.consent,
        })
    }
}
