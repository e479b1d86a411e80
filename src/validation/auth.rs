use validator::Validate;

use crate::models::{ChangePasswordRequest, LoginRequest, RegisterRequest};

use super::{FieldErrors, FormValidation};

impl FormValidation for RegisterRequest {
    fn validate_fields(&self) -> FieldErrors {
        collect(self)
    }
}

impl FormValidation for LoginRequest {
    fn validate_fields(&self) -> FieldErrors {
        collect(self)
    }
}

impl FormValidation for ChangePasswordRequest {
    fn validate_fields(&self) -> FieldErrors {
        let mut errors = collect(self);
        if !self.current_password.is_empty() && self.current_password == self.new_password {
            errors.set(
                "new_password",
                "New password must be different from the current password",
            );
        }
        errors
    }
}

fn collect<T: Validate>(value: &T) -> FieldErrors {
    match value.validate() {
        Ok(()) => FieldErrors::new(),
        Err(errors) => FieldErrors::from(&errors),
    }
}
