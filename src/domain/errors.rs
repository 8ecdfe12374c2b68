//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Template render error: {0}")]
    Template(String),

    #[error("Mailer error: {0}")]
    Mailer(String),

    #[error("Outbox error: {0}")]
    Outbox(String),

    #[error("Recipient list error: {0}")]
    Recipients(String),

    #[error("Draft not found: id={0}")]
    DraftNotFound(u32),

    #[error("Input error: {0}")]
    Input(String),
}
