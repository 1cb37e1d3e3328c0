//! Contact form state and its submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle (status = Error, no relay call)
//!                       │
//!                     valid
//!                       ▼
//!                  Submitting (is_submitting = true)
//!                   │        │
//!               relay ok   relay err
//!                   ▼        ▼
//!   Success (fields cleared)  Failure (status = Error, fields kept)
//! ```
//!
//! Exactly one relay call is made per submit; there is no retry and no
//! request-level guard against a second submit. On the page, the submit
//! button is disabled while the POST is in flight.

use crate::relay::{RelayError, RelayProvider};
use thiserror::Error;

/// One input of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The HTML `name` attribute, also the relay template parameter name.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Subject is the only optional field.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Subject)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required field '{}' is empty", .0.key())]
    MissingField(Field),
}

/// Values typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Update exactly one field; the others are untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First empty required field, in form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match Field::ALL
            .into_iter()
            .find(|f| f.is_required() && self.get(*f).is_empty())
        {
            Some(field) => Err(ValidationError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }

    /// Parse an `application/x-www-form-urlencoded` body.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    /// Undecodable percent-escapes fall back to the raw text.
    pub fn from_urlencoded(body: &str) -> Self {
        let mut form = ContactForm::default();
        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if let Some(field) = Field::from_key(&decode_component(key)) {
                form.set(field, decode_component(value));
            }
        }
        form
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

/// Outcome shown under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// The form plus its submission state. A fresh flow is `{Idle, false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    pub form: ContactForm,
    status: SubmissionStatus,
    is_submitting: bool,
    last_error: Option<String>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Why the last submit ended in `Error`, for logging.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Keystroke handler.
    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Validate and enter `Submitting`.
    ///
    /// On a validation failure the status becomes `Error`, the fields are
    /// kept, and the caller must not contact the relay.
    pub fn begin(&mut self) -> Result<(), ValidationError> {
        if let Err(err) = self.form.validate() {
            self.status = SubmissionStatus::Error;
            self.last_error = Some(err.to_string());
            return Err(err);
        }
        self.is_submitting = true;
        self.status = SubmissionStatus::Idle;
        self.last_error = None;
        Ok(())
    }

    /// Apply the relay outcome and leave `Submitting`.
    pub fn finish(&mut self, outcome: Result<(), RelayError>) {
        self.is_submitting = false;
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.form.clear();
            }
            Err(err) => {
                self.status = SubmissionStatus::Error;
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// End a submit in `Error` without contacting the relay. Fields are kept.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.is_submitting = false;
        self.status = SubmissionStatus::Error;
        self.last_error = Some(reason.into());
    }

    /// Run one full submit: validate, one relay call, apply the outcome.
    pub fn submit(&mut self, relay: &dyn RelayProvider) -> SubmissionStatus {
        if self.begin().is_ok() {
            let outcome = relay.send(&self.form);
            self.finish(outcome);
        }
        self.status
    }
}
