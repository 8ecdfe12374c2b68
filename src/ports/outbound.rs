//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, EmailMessage, OutgoingEmail, Recipient};

/// Outbox of draft campaign emails.
#[async_trait::async_trait]
pub trait OutboxPort: Send + Sync {
    /// All drafts, unsent first, ordered by id.
    async fn list(&self) -> Result<Vec<EmailMessage>, DomainError>;

    /// Fetch one draft. `DomainError::DraftNotFound` if the id is unknown.
    async fn get(&self, id: u32) -> Result<EmailMessage, DomainError>;

    /// Stamp `sent_at` after a successful full run.
    async fn mark_sent(&self, id: u32, when: DateTime<Utc>) -> Result<(), DomainError>;
}

/// Source of campaign recipients.
#[async_trait::async_trait]
pub trait RecipientSource: Send + Sync {
    /// Active recipients with a non-empty address, ordered by id.
    async fn active_recipients(&self) -> Result<Vec<Recipient>, DomainError>;
}

/// Transport that delivers a rendered email.
#[async_trait::async_trait]
pub trait MailerPort: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), DomainError>;
}
