use crate::models::ProjectForm;

use super::{FieldErrors, FormValidation, validate_length};

pub const DESCRIPTION_MAX: usize = 500;

pub fn validate_project_form(form: &ProjectForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record("name", &validate_length(form.name.trim(), 1, None));
    if !form.description.is_empty() {
        errors.record(
            "description",
            &validate_length(&form.description, 0, Some(DESCRIPTION_MAX)),
        );
    }
    errors
}

impl FormValidation for ProjectForm {
    fn validate_fields(&self) -> FieldErrors {
        validate_project_form(self)
    }
}
