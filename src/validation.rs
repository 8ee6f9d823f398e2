use serde::Serialize;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct FieldError {
    pub(crate) field: &'static str,
    pub(crate) message: Cow<'static, str>,
}

impl FieldError {
    pub(crate) fn new(field: &'static str, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Returns the trimmed value or records a "can't be blank" error.
pub(crate) fn required(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.push(FieldError::new(field, format!("{label} can't be blank")));
        None
    } else {
        Some(value.to_owned())
    }
}

/// The summary shown above a form that failed validation.
pub(crate) fn error_summary(errors: &[FieldError], subject: &str) -> String {
    match errors.len() {
        1 => format!("1 error prohibited this {subject} from being saved"),
        n => format!("{n} errors prohibited this {subject} from being saved"),
    }
}
