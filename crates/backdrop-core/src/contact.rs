//! Contact form state. The HTTP request itself belongs to the front-end; this
//! module decides what is sent and how the reply changes the form.

use crate::constants::CONTACT_SUCCESS_DISPLAY_MS;
use crate::error::ContactError;
use std::time::Duration;

/// Body posted to the form relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPayload {
    pub access_key: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub subject: String,
}

impl ContactPayload {
    /// Field name/value pairs in wire order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("access_key", &self.access_key),
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
            ("subject", &self.subject),
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Success {
        since: Duration,
    },
    Error,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmitStatus,
    submitting: bool,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn payload(&self, access_key: &str) -> Result<ContactPayload, ContactError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        Ok(ContactPayload {
            access_key: access_key.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            subject: format!("Portfolio Contact from {}", self.name),
        })
    }

    /// Mark the form as submitting and return what to send.
    pub fn begin_submit(&mut self, access_key: &str) -> Result<ContactPayload, ContactError> {
        if self.submitting {
            return Err(ContactError::InFlight);
        }
        let payload = self.payload(access_key)?;
        self.submitting = true;
        self.status = SubmitStatus::Idle;
        log::debug!("[contact] submitting for {}", payload.name);
        Ok(payload)
    }

    /// Apply the outcome of a submission. Failures keep the fields so the
    /// visitor can retry.
    pub fn finish(&mut self, result: Result<(), ContactError>, now: Duration) {
        self.submitting = false;
        match result {
            Ok(()) => {
                log::info!("[contact] message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmitStatus::Success { since: now };
            }
            Err(e) => {
                log::warn!("[contact] submission failed: {e}");
                self.status = SubmitStatus::Error;
            }
        }
    }

    /// Clear the success status set at `since`, whatever the clock reads now.
    /// A later success (with a different `since`) is left alone.
    pub fn expire_success(&mut self, since: Duration) -> bool {
        match self.status {
            SubmitStatus::Success { since: s } if s == since => {
                self.status = SubmitStatus::Idle;
                true
            }
            _ => false,
        }
    }

    /// Return a success status to idle once it has been shown long enough.
    pub fn tick(&mut self, now: Duration) {
        if let SubmitStatus::Success { since } = self.status {
            if now.saturating_sub(since) >= Duration::from_millis(CONTACT_SUCCESS_DISPLAY_MS) {
                self.status = SubmitStatus::Idle;
            }
        }
    }
}
