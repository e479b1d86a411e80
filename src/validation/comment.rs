use crate::models::CommentForm;

use super::{FieldErrors, FormValidation, ValidationResult, is_required};

pub const CONTENT_MAX: usize = 10000;

pub fn validate_comment_form(form: &CommentForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let content = if !is_required(&form.content) {
        ValidationResult::fail("Comment content is required")
    } else if form.content.chars().count() > CONTENT_MAX {
        ValidationResult::fail(format!(
            "Comment content is too long (max {} characters)",
            CONTENT_MAX
        ))
    } else {
        ValidationResult::ok()
    };
    errors.record("content", &content);
    errors
}

impl FormValidation for CommentForm {
    fn validate_fields(&self) -> FieldErrors {
        validate_comment_form(self)
    }
}
