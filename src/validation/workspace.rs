use crate::models::{AddMemberRequest, WorkspaceForm};

use super::{FieldErrors, FormValidation, ValidationResult, is_valid_email, validate_length};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 50;
pub const DESCRIPTION_MAX: usize = 500;

/// Name must be 3..=50 characters; description is optional but capped at 500.
pub fn validate_workspace_form(form: &WorkspaceForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record("name", &validate_length(&form.name, NAME_MIN, Some(NAME_MAX)));
    if !form.description.is_empty() {
        errors.record(
            "description",
            &validate_length(&form.description, 0, Some(DESCRIPTION_MAX)),
        );
    }
    errors
}

impl FormValidation for WorkspaceForm {
    fn validate_fields(&self) -> FieldErrors {
        validate_workspace_form(self)
    }
}

pub fn validate_add_member(req: &AddMemberRequest) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let email = if req.email.is_empty() {
        ValidationResult::fail("Email is required")
    } else if !is_valid_email(&req.email) {
        ValidationResult::fail("Please enter a valid email address")
    } else {
        ValidationResult::ok()
    };
    errors.record("email", &email);
    errors
}
