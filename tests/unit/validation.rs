use taskboard_client::models::{ProjectForm, WorkspaceForm};
use taskboard_client::validation::{
    FormValidation, StrengthLabel, get_password_strength, is_valid_email, validate_length,
    validate_password,
};

#[test]
fn validate_length_edges() {
    assert!(!validate_length("", 0, Some(500)).valid);
    assert!(!validate_length("", 0, None).valid);

    assert!(validate_length("abc", 3, Some(50)).valid);
    assert!(validate_length(&"x".repeat(50), 3, Some(50)).valid);
    assert!(!validate_length("ab", 3, Some(50)).valid);
    assert!(!validate_length(&"x".repeat(51), 3, Some(50)).valid);
    assert!(validate_length(&"x".repeat(51), 3, None).valid);
}

#[test]
fn password_strength_is_monotonic() {
    let samples = ["", "abcdefgh", "Abcdefgh", "Abcdefg1", "Abcdefg1!"];
    let levels: Vec<u8> = samples
        .iter()
        .map(|p| get_password_strength(p).level)
        .collect();
    assert!(levels.windows(2).all(|w| w[0] <= w[1]));

    assert_eq!(get_password_strength("").label, StrengthLabel::None);
    assert_eq!(get_password_strength("Abcdefg1!").label, StrengthLabel::Strong);
    assert_eq!(get_password_strength("Abcdefg1!").label.to_string(), "Strong");
}

#[test]
fn password_rules_are_independent_of_strength() {
    assert!(validate_password("aaaaaaaa").valid);
    assert_eq!(get_password_strength("aaaaaaaa").label, StrengthLabel::Weak);
    assert!(!validate_password("Ab1!").valid);
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("ops@acme.io"));
    assert!(!is_valid_email("ops@acme"));
    assert!(!is_valid_email("ops acme@acme.io"));
}

#[test]
fn workspace_form_rules() {
    let errors = WorkspaceForm::new("ab", "").validate_fields();
    assert_eq!(errors.get("name"), Some("Minimum 3 characters required"));
    assert_eq!(errors.get("description"), None);

    let errors = WorkspaceForm::new("abc", "").validate_fields();
    assert!(errors.is_empty());

    let errors = WorkspaceForm::new("abc", "d".repeat(501)).validate_fields();
    assert_eq!(
        errors.get("description"),
        Some("Maximum 500 characters allowed")
    );
}

#[test]
fn project_form_requires_name() {
    let errors = ProjectForm::new("   ", "").validate_fields();
    assert!(errors.get("name").is_some());
    assert!(ProjectForm::new("Launch", "").validate_fields().is_empty());
}
