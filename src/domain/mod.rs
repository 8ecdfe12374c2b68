//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod dashboard;
pub mod entities;
pub mod errors;

pub use entities::{
    CampaignOutcome, CampaignStats, EmailContext, EmailMessage, OutgoingEmail, Recipient,
};
pub use errors::DomainError;
