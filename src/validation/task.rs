use crate::models::TaskForm;

use super::{FieldErrors, FormValidation, validate_length};

pub const TITLE_MAX: usize = 200;
pub const DESCRIPTION_MAX: usize = 2000;

pub fn validate_task_form(form: &TaskForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.record("title", &validate_length(form.title.trim(), 1, Some(TITLE_MAX)));
    if !form.description.is_empty() {
        errors.record(
            "description",
            &validate_length(&form.description, 0, Some(DESCRIPTION_MAX)),
        );
    }
    errors
}

impl FormValidation for TaskForm {
    fn validate_fields(&self) -> FieldErrors {
        validate_task_form(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_title_required_and_capped() {
        let form = TaskForm { title: "Write docs".into(), ..Default::default() };
        assert!(validate_task_form(&form).is_empty());

        let form = TaskForm::default();
        assert_eq!(validate_task_form(&form).get("title"), Some("This field is required"));

        let form = TaskForm { title: "t".repeat(201), ..Default::default() };
        assert_eq!(
            validate_task_form(&form).get("title"),
            Some("Maximum 200 characters allowed")
        );
    }
}
