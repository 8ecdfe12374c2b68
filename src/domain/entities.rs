//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here — these are mapped from adapters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A draft platform-update email in the outbox.
///
/// Immutable once created except for `sent_at`, which is stamped after a
/// successful full campaign run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailMessage {
    pub id: u32,
    pub subject: String,
    /// Pre-rendered HTML fragment. Injected into the template unescaped;
    /// whoever authors the draft owns that trust boundary.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_link: Option<String>,
    #[serde(default)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl EmailMessage {
    /// True when both call-to-action fields are present. The template renders
    /// the button block only in that case.
    pub fn has_button(&self) -> bool {
        self.button_text.is_some() && self.button_link.is_some()
    }
}

/// One entry of the recipient list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub active: bool,
}

/// Variables the email template is rendered with.
///
/// `frontend_domain` is normalized at construction (trailing `/` stripped) so
/// the unsubscribe link is always `{domain}/unsubscribe`.
#[derive(Debug, Clone)]
pub struct EmailContext {
    pub subject: String,
    pub content: String,
    pub button_text: Option<String>,
    pub button_link: Option<String>,
    pub frontend_domain: String,
}

impl EmailContext {
    pub fn new(
        subject: impl Into<String>,
        content: impl Into<String>,
        frontend_domain: &str,
    ) -> Self {
        Self {
            subject: subject.into(),
            content: content.into(),
            button_text: None,
            button_link: None,
            frontend_domain: frontend_domain.trim_end_matches('/').to_string(),
        }
    }

    pub fn with_button(mut self, text: impl Into<String>, link: impl Into<String>) -> Self {
        self.button_text = Some(text.into());
        self.button_link = Some(link.into());
        self
    }

    /// Build the per-send context for a draft message.
    pub fn for_message(message: &EmailMessage, frontend_domain: &str) -> Self {
        let mut ctx = Self::new(&message.subject, &message.content, frontend_domain);
        ctx.button_text = message.button_text.clone();
        ctx.button_link = message.button_link.clone();
        ctx
    }

    pub fn unsubscribe_link(&self) -> String {
        format!("{}/unsubscribe", self.frontend_domain)
    }
}

/// A fully rendered message ready for the mailer port.
#[derive(Debug, Clone)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Counters from a single campaign run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CampaignStats {
    pub recipients: usize,
    pub sent: usize,
    pub failed: usize,
    pub batches: usize,
}

/// Outcome of `CampaignService::send_campaign`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignOutcome {
    Sent(CampaignStats),
    /// The draft was already delivered; nothing was sent.
    AlreadySent(DateTime<Utc>),
    /// The recipient list resolved to nothing; nothing was sent.
    NoRecipients,
}
