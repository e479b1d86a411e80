use tracing::debug;

use crate::validation::{FieldErrors, FormValidation};

/// Which operation a submitted form turns into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    /// Submit button label, switching to the progress form while in flight.
    pub fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormMode::Create, false) => "Create",
            (FormMode::Create, true) => "Creating...",
            (FormMode::Edit { .. }, false) => "Update",
            (FormMode::Edit { .. }, true) => "Updating...",
        }
    }
}

/// Why [`FormSession::begin_submit`] refused to start a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// No form is open.
    Closed,
    /// A submission is already in flight.
    InFlight,
    /// At least one field failed validation; see [`FormSession::errors`].
    Invalid,
}

/// 表单会话
///
/// One modal form shared by the create and edit flows:
/// closed → open (editing) → submitting → closed on success, or back to
/// open on failure. Field errors are replaced in full on every validation.
#[derive(Debug, Clone)]
pub struct FormSession<F> {
    mode: Option<FormMode>,
    form: F,
    errors: FieldErrors,
    submitting: bool,
}

impl<F> Default for FormSession<F>
where
    F: FormValidation + Default + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FormSession<F>
where
    F: FormValidation + Default + Clone,
{
    pub fn new() -> Self {
        Self {
            mode: None,
            form: F::default(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn open_create(&mut self) {
        debug!("form opened for create");
        self.mode = Some(FormMode::Create);
        self.form = F::default();
        self.errors = FieldErrors::new();
    }

    pub fn open_edit(&mut self, id: impl Into<String>, form: F) {
        let id = id.into();
        debug!(id = %id, "form opened for edit");
        self.mode = Some(FormMode::Edit { id });
        self.form = form;
        self.errors = FieldErrors::new();
    }

    /// Closes the form and throws away its fields and errors.
    pub fn cancel(&mut self) {
        self.mode = None;
        self.form = F::default();
        self.errors = FieldErrors::new();
    }

    pub fn is_open(&self) -> bool {
        self.mode.is_some()
    }

    pub fn mode(&self) -> Option<&FormMode> {
        self.mode.as_ref()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Re-runs every field check, replacing the previous error state.
    pub fn validate(&mut self) -> bool {
        self.errors = self.form.validate_fields();
        self.errors.is_empty()
    }

    /// Validates and, when the form is good, marks it as submitting.
    ///
    /// Returns the mode to submit under. Every `Ok` must be followed by
    /// [`finish_success`](Self::finish_success) or
    /// [`finish_failure`](Self::finish_failure).
    pub fn begin_submit(&mut self) -> Result<FormMode, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let Some(mode) = self.mode.clone() else {
            return Err(SubmitBlocked::Closed);
        };
        if !self.validate() {
            debug!(fields = ?self.errors.field_names(), "form submit blocked by validation");
            return Err(SubmitBlocked::Invalid);
        }
        self.submitting = true;
        Ok(mode)
    }

    pub fn finish_success(&mut self) {
        self.submitting = false;
        self.cancel();
    }

    /// Keeps the form open with its fields so the user can retry.
    pub fn finish_failure(&mut self) {
        self.submitting = false;
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode
            .as_ref()
            .unwrap_or(&FormMode::Create)
            .submit_label(self.submitting)
    }
}
