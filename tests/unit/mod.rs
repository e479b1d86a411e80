pub mod form_session;
pub mod pagination;
pub mod validation;
