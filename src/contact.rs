//! Contact form state machine and the simulated delivery.
//!
//! Status moves `Idle -> Sending -> Success | Error -> Idle`. The timers that
//! drive the transitions live in the component; this module only decides what
//! each transition does.

use std::{fmt, time::Duration};

use thiserror::Error;

/// Artificial latency before the simulated delivery completes.
pub const SEND_DELAY: Duration = Duration::from_millis(1500);
/// How long the success or error message stays up.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is blank")]
    Blank(Field),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error(ContactError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub status: ContactStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    pub fn edit(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Enter `Sending` and hand back the payload to deliver. Returns `None`
    /// while a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.is_sending() {
            return None;
        }
        self.status = ContactStatus::Sending;
        Some(self.fields.clone())
    }

    /// Apply the delivery outcome. Only meaningful while sending; a stale
    /// completion is ignored.
    pub fn complete(&mut self, result: Result<(), ContactError>) {
        if !self.is_sending() {
            return;
        }
        match result {
            Ok(()) => {
                self.fields = ContactFields::default();
                self.status = ContactStatus::Success;
            }
            Err(e) => self.status = ContactStatus::Error(e),
        }
    }

    /// Drop a finished outcome back to `Idle`.
    pub fn reset(&mut self) {
        if matches!(self.status, ContactStatus::Success | ContactStatus::Error(_)) {
            self.status = ContactStatus::Idle;
        }
    }
}

/// Stand-in for posting the message somewhere. Rejects fields that are
/// only whitespace, which the browser's `required` check lets through.
pub fn deliver(fields: &ContactFields) -> Result<(), ContactError> {
    for field in [Field::Name, Field::Email, Field::Message] {
        if fields.get(field).trim().is_empty() {
            return Err(ContactError::Blank(field));
        }
    }
    log::info!("contact message accepted from {}", fields.email);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Message, "Hello".to_string());
        form
    }

    #[test]
    fn successful_submit_clears_fields() {
        let mut form = filled();
        assert_eq!(form.status, ContactStatus::Idle);

        let payload = form.begin_submit().expect("idle form should submit");
        assert_eq!(form.status, ContactStatus::Sending);
        assert_eq!(payload.name, "Ada");

        form.complete(deliver(&payload));
        assert_eq!(form.status, ContactStatus::Success);
        assert_eq!(form.fields, ContactFields::default());

        form.reset();
        assert_eq!(form.status, ContactStatus::Idle);
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.status, ContactStatus::Sending);
    }

    #[test]
    fn blank_field_fails_and_keeps_input() {
        let mut form = filled();
        form.edit(Field::Message, "   \n".to_string());
        let payload = form.begin_submit().unwrap();
        form.complete(deliver(&payload));
        assert_eq!(form.status, ContactStatus::Error(ContactError::Blank(Field::Message)));
        assert_eq!(form.fields.name, "Ada");

        // can retry straight from the error state
        form.edit(Field::Message, "Hi".to_string());
        let payload = form.begin_submit().unwrap();
        form.complete(deliver(&payload));
        assert_eq!(form.status, ContactStatus::Success);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut form = filled();
        form.complete(Ok(()));
        assert_eq!(form.status, ContactStatus::Idle);
        assert_eq!(form.fields.name, "Ada");
    }

    #[test]
    fn reset_does_not_interrupt_sending() {
        let mut form = filled();
        form.begin_submit();
        form.reset();
        assert_eq!(form.status, ContactStatus::Sending);
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(ContactError::Blank(Field::Email).to_string(), "email is blank");
    }
}
