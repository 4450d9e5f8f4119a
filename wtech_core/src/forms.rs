//! Contact and newsletter forms.
//!
//! Forms collect fields and check their shape before handing a payload off.
//! The only rules are the standard field-type constraints: text fields must
//! not be blank and email fields must look like an email address. Where the
//! payload goes is decided by whoever supplies the [`FormSubmitter`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::warn;

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap())
}

/// Whether `value` has the shape of an email address.
pub fn is_email(value: &str) -> bool {
    email_shape().is_match(value.trim())
}

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Sender name.
    Name,
    /// Sender email.
    Email,
    /// Message body.
    Message,
}

impl Field {
    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Empty or whitespace only.
    #[error("is required")]
    Required,
    /// Not shaped like an email address.
    #[error("must be a valid email address")]
    InvalidEmail,
}

/// Every rejected field, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(Field, FieldError)>);

impl FormErrors {
    fn push(&mut self, field: Field, error: FieldError) {
        self.0.push((field, error));
    }

    /// Rejected fields with their reasons.
    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.0.iter()
    }

    /// Reason `field` was rejected, if it was.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, e)| *e)
    }

    /// Whether no field was rejected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of rejected fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result<T>(self, ok: T) -> Result<T, FormErrors> {
        if self.is_empty() { Ok(ok) } else { Err(self) }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, error)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{} {}", field.label(), error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

fn check_text(errors: &mut FormErrors, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, FieldError::Required);
    }
}

fn check_email(errors: &mut FormErrors, value: &str) {
    if value.trim().is_empty() {
        errors.push(Field::Email, FieldError::Required);
    } else if !is_email(value) {
        errors.push(Field::Email, FieldError::InvalidEmail);
    }
}

/// The "Send Inquiry" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

impl ContactForm {
    /// Check field shapes and build a trimmed payload.
    pub fn validate(&self) -> Result<FormPayload, FormErrors> {
        let mut errors = FormErrors::default();
        check_text(&mut errors, Field::Name, &self.name);
        check_email(&mut errors, &self.email);
        check_text(&mut errors, Field::Message, &self.message);
        errors.into_result(FormPayload::Contact {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// The footer newsletter form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    /// Subscriber email.
    pub email: String,
}

impl NewsletterForm {
    /// Check the email shape and build a payload.
    pub fn validate(&self) -> Result<FormPayload, FormErrors> {
        let mut errors = FormErrors::default();
        check_email(&mut errors, &self.email);
        errors.into_result(FormPayload::Newsletter {
            email: self.email.trim().to_string(),
        })
    }
}

/// A validated form ready for hand-off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPayload {
    /// Contact inquiry.
    Contact {
        /// Sender name.
        name: String,
        /// Sender email.
        email: String,
        /// Message body.
        message: String,
    },
    /// Newsletter sign-up.
    Newsletter {
        /// Subscriber email.
        email: String,
    },
}

impl FormPayload {
    /// Short form name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FormPayload::Contact { .. } => "contact",
            FormPayload::Newsletter { .. } => "newsletter",
        }
    }
}

/// Acknowledgement from a submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Message to show the visitor.
    pub message: String,
}

/// Submission failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No submission endpoint has been wired into the site.
    #[error("form submission is not configured")]
    NotConfigured,
    /// The endpoint refused the payload.
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Where validated payloads go. Supplied from outside the core.
pub trait FormSubmitter: Send + Sync {
    /// Hand off a payload.
    fn submit(&self, payload: &FormPayload) -> Result<Receipt, SubmitError>;
}

/// Submitter used until a real endpoint is integrated.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnwiredSubmitter;

impl FormSubmitter for UnwiredSubmitter {
    fn submit(&self, payload: &FormPayload) -> Result<Receipt, SubmitError> {
        warn!(form = payload.kind(), "no form endpoint configured; payload dropped");
        Err(SubmitError::NotConfigured)
    }
}

/// What a form shows under its submit button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Validation failed.
    Invalid(FormErrors),
    /// The submitter accepted the payload.
    Sent(String),
    /// The submitter failed.
    Failed(String),
}

impl FormStatus {
    /// Run validation and hand-off in one step.
    pub fn submit(
        validated: Result<FormPayload, FormErrors>,
        submitter: &dyn FormSubmitter,
    ) -> FormStatus {
        match validated {
            Err(errors) => FormStatus::Invalid(errors),
            Ok(payload) => match submitter.submit(&payload) {
                Ok(receipt) => FormStatus::Sent(receipt.message),
                Err(err) => {
                    let err = crate::Error::from(err);
                    warn!(form = payload.kind(), error = %err, "form hand-off failed");
                    FormStatus::Failed(err.to_string())
                }
            },
        }
    }

    /// Text for the status line, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Invalid(errors) => Some(errors.to_string()),
            FormStatus::Sent(msg) | FormStatus::Failed(msg) => Some(msg.clone()),
        }
    }

    /// CSS modifier class.
    pub fn class(&self) -> &'static str {
        match self {
            FormStatus::Idle => "form-status",
            FormStatus::Invalid(_) | FormStatus::Failed(_) => "form-status form-status-error",
            FormStatus::Sent(_) => "form-status form-status-ok",
        }
    }
}
