//! Field-scoped validation for both form schemas.

use journey_core::validation::{is_valid_email, validate, Field, FormFields, SchemaVariant};
use journey_core::{ContactMethod, FieldError, TimeSinceMenopause};
use pretty_assertions::assert_eq;

fn filled_a() -> FormFields {
    FormFields {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        age_group: Some("45-54".to_string()),
        time_since_menopause: None,
        extra_choice: Some("email".to_string()),
        consent: true,
    }
}

fn filled_b() -> FormFields {
    FormFields {
        name: String::new(),
        email: String::new(),
        age_group: Some("65-74".to_string()),
        time_since_menopause: Some("5-10".to_string()),
        extra_choice: Some("phone".to_string()),
        consent: true,
    }
}

#[test]
fn email_pattern() {
    assert!(is_valid_email("jane@example.com"));
    assert!(is_valid_email("first.last+tag@mail.example.org"));
    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("jane@"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("jane@example"));
    assert!(!is_valid_email("jane..doe@example.com"));
    assert!(!is_valid_email("jane doe@example.com"));
}

#[test]
fn complete_required_contact_form_is_valid() {
    let report = validate(SchemaVariant::RequiredContact, &filled_a());
    assert!(report.is_valid(), "{:?}", report);
}

#[test]
fn empty_required_contact_form_reports_each_field() {
    let report = validate(SchemaVariant::RequiredContact, &FormFields::default());
    assert_eq!(report.error_for(Field::Name), Some(&FieldError::TooShort { min: 2 }));
    assert_eq!(report.error_for(Field::Email), Some(&FieldError::InvalidEmail));
    assert_eq!(report.error_for(Field::AgeGroup), Some(&FieldError::Required));
    assert_eq!(report.error_for(Field::ExtraChoice), Some(&FieldError::Required));
    assert_eq!(report.error_for(Field::Consent), Some(&FieldError::ConsentRequired));
    assert_eq!(report.error_for(Field::TimeSinceMenopause), None);
    assert_eq!(report.len(), 5);
}

#[test]
fn invalid_email_only_flags_email() {
    let mut fields = filled_a();
    fields.email = "not-an-email".to_string();
    let report = validate(SchemaVariant::RequiredContact, &fields);
    assert_eq!(report.len(), 1);
    assert_eq!(report.error_for(Field::Email), Some(&FieldError::InvalidEmail));
}

#[test]
fn name_length_counts_trimmed_characters() {
    let mut fields = filled_a();
    fields.name = " J ".to_string();
    assert!(validate(SchemaVariant::RequiredContact, &fields)
        .error_for(Field::Name)
        .is_some());

    fields.name = "Åsa".to_string();
    assert!(validate(SchemaVariant::RequiredContact, &fields).is_valid());
}

#[test]
fn consent_false_always_blocks() {
    for variant in [SchemaVariant::RequiredContact, SchemaVariant::OptionalContact] {
        let mut fields = if variant == SchemaVariant::RequiredContact {
            filled_a()
        } else {
            filled_b()
        };
        fields.consent = false;
        let report = validate(variant, &fields);
        assert!(!report.is_valid());
        assert_eq!(report.error_for(Field::Consent), Some(&FieldError::ConsentRequired));
        assert!(fields.validated(variant).is_err());
    }
}

#[test]
fn age_group_must_belong_to_schema() {
    let mut fields = filled_a();
    fields.age_group = Some("75+".to_string());
    assert_eq!(
        validate(SchemaVariant::RequiredContact, &fields).error_for(Field::AgeGroup),
        Some(&FieldError::NotAllowed)
    );

    let mut fields = filled_b();
    fields.age_group = Some("75+".to_string());
    assert!(validate(SchemaVariant::OptionalContact, &fields).is_valid());
}

#[test]
fn extra_choice_must_be_email_or_phone() {
    let mut fields = filled_a();
    fields.extra_choice = Some("pigeon".to_string());
    assert_eq!(
        validate(SchemaVariant::RequiredContact, &fields).error_for(Field::ExtraChoice),
        Some(&FieldError::NotAllowed)
    );
}

#[test]
fn optional_contact_allows_blank_name_and_email() {
    let report = validate(SchemaVariant::OptionalContact, &filled_b());
    assert!(report.is_valid(), "{:?}", report);
}

#[test]
fn optional_contact_still_checks_present_email() {
    let mut fields = filled_b();
    fields.email = "not-an-email".to_string();
    assert_eq!(
        validate(SchemaVariant::OptionalContact, &fields).error_for(Field::Email),
        Some(&FieldError::InvalidEmail)
    );
    fields.email = "jane@example.com".to_string();
    assert!(validate(SchemaVariant::OptionalContact, &fields).is_valid());
}

#[test]
fn optional_contact_requires_time_since_menopause() {
    let mut fields = filled_b();
    fields.time_since_menopause = None;
    assert_eq!(
        validate(SchemaVariant::OptionalContact, &fields).error_for(Field::TimeSinceMenopause),
        Some(&FieldError::Required)
    );
    fields.time_since_menopause = Some("20".to_string());
    assert_eq!(
        validate(SchemaVariant::OptionalContact, &fields).error_for(Field::TimeSinceMenopause),
        Some(&FieldError::NotAllowed)
    );
}

#[test]
fn validated_converts_to_typed_values() {
    let form = filled_b().validated(SchemaVariant::OptionalContact).unwrap();
    assert_eq!(form.extra_choice, ContactMethod::Phone);
    assert_eq!(form.time_since_menopause, Some(TimeSinceMenopause::FiveToTen));
    assert_eq!(form.age_group, "65-74");

    let mut fields = filled_a();
    fields.name = "  Jane Doe ".to_string();
    fields.time_since_menopause = Some("10+".to_string());
    let form = fields.validated(SchemaVariant::RequiredContact).unwrap();
    assert_eq!(form.name, "Jane Doe");
    assert_eq!(form.time_since_menopause, None);
}

#[test]
fn field_error_messages() {
    assert_eq!(FieldError::InvalidEmail.to_string(), "Please enter a valid email address");
    assert_eq!(
        FieldError::TooShort { min: 2 }.to_string(),
        "Must be at least 2 characters"
    );
    assert_eq!(FieldError::ConsentRequired.to_string(), "You must consent to continue");
}
