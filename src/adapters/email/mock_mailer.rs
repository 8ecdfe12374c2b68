//! Mock mailer for tests and dry runs. Records every send instead of
//! touching the network.

use std::sync::Mutex;

use crate::domain::{DomainError, OutgoingEmail};
use crate::ports::MailerPort;

/// Recording mailer. Optionally fails for a configured set of addresses to
/// exercise partial-failure paths.
#[derive(Default)]
pub struct MockMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail_for: Vec<String>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send to one of `addresses` returns a Mailer error.
    pub fn failing_for(addresses: &[&str]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: addresses.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Snapshot of everything sent so far.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().expect("mock mailer lock").clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().expect("mock mailer lock").len()
    }
}

#[async_trait::async_trait]
impl MailerPort for MockMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DomainError> {
        if self.fail_for.iter().any(|a| a == &email.to) {
            return Err(DomainError::Mailer(format!("mock failure for {}", email.to)));
        }
        self.sent.lock().expect("mock mailer lock").push(email.clone());
        Ok(())
    }
}
