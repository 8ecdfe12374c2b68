//! Main campaign logic: load draft -> resolve recipients -> render -> batch send.
//!
//! - Skips drafts that already carry `sent_at`
//! - `test_to` sends to a single address and leaves the draft unsent
//! - A failed recipient is counted and logged, never aborts the run
//! - Sleeps `batch_pause` between batches to stay under provider rate limits
//! - Marks `sent_at` only after a full (non-test) run

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{info, warn};

use crate::adapters::email::template;
use crate::domain::{
    CampaignOutcome, CampaignStats, DomainError, EmailContext, OutgoingEmail,
};
use crate::ports::{MailerPort, OutboxPort, RecipientSource};

/// Campaign service. Coordinates outbox, recipient list, and mailer.
pub struct CampaignService {
    outbox: Arc<dyn OutboxPort>,
    recipients: Arc<dyn RecipientSource>,
    mailer: Arc<dyn MailerPort>,
    from_email: String,
    frontend_domain: String,
    batch_size: usize,
    batch_pause: Duration,
}

impl CampaignService {
    pub fn new(
        outbox: Arc<dyn OutboxPort>,
        recipients: Arc<dyn RecipientSource>,
        mailer: Arc<dyn MailerPort>,
        from_email: String,
        frontend_domain: String,
        batch_size: usize,
        batch_pause: Duration,
    ) -> Self {
        Self {
            outbox,
            recipients,
            mailer,
            from_email,
            frontend_domain,
            batch_size: batch_size.max(1),
            batch_pause,
        }
    }

    /// Render the HTML document for a draft, for on-disk preview.
    pub async fn render_preview(&self, id: u32) -> Result<String, DomainError> {
        let draft = self.outbox.get(id).await?;
        let ctx = EmailContext::for_message(&draft, &self.frontend_domain);
        template::render_html(&ctx)
    }

    /// Send draft `id` to every active recipient, or only to `test_to` when
    /// given. Test sends leave the draft unsent so the real run can follow.
    pub async fn send_campaign(
        &self,
        id: u32,
        test_to: Option<&str>,
    ) -> Result<CampaignOutcome, DomainError> {
        let draft = self.outbox.get(id).await?;

        if let Some(when) = draft.sent_at {
            info!(draft_id = id, sent_at = %when, "draft already sent; skipping");
            return Ok(CampaignOutcome::AlreadySent(when));
        }

        let addresses: Vec<String> = match test_to {
            Some(addr) => vec![addr.to_string()],
            None => self
                .recipients
                .active_recipients()
                .await?
                .into_iter()
                .map(|r| r.email)
                .collect(),
        };

        if addresses.is_empty() {
            warn!(draft_id = id, "no recipients for campaign");
            return Ok(CampaignOutcome::NoRecipients);
        }

        // The context carries no per-recipient fields, so one render covers
        // the whole run. A template failure downgrades to the fallback
        // document instead of cancelling the campaign.
        let ctx = EmailContext::for_message(&draft, &self.frontend_domain);
        let html_body = match template::render_html(&ctx) {
            Ok(html) => html,
            Err(e) => {
                warn!(draft_id = id, error = %e, "template render failed; using fallback document");
                template::fallback_html(&ctx)
            }
        };
        let text_body = template::render_text(&ctx);

        let mut stats = CampaignStats {
            recipients: addresses.len(),
            ..CampaignStats::default()
        };

        let mut batches = addresses.chunks(self.batch_size).peekable();
        while let Some(batch) = batches.next() {
            for to in batch {
                let email = OutgoingEmail {
                    to: to.clone(),
                    from: self.from_email.clone(),
                    subject: draft.subject.clone(),
                    text_body: text_body.clone(),
                    html_body: html_body.clone(),
                };
                match self.mailer.send(&email).await {
                    Ok(()) => stats.sent += 1,
                    Err(e) => {
                        warn!(draft_id = id, to = %to, error = %e, "send failed");
                        stats.failed += 1;
                    }
                }
            }
            stats.batches += 1;

            if batches.peek().is_some() {
                tokio::time::sleep(self.batch_pause).await;
            }
        }

        if test_to.is_none() {
            self.outbox.mark_sent(id, Utc::now()).await?;
        }

        info!(
            draft_id = id,
            recipients = stats.recipients,
            sent = stats.sent,
            failed = stats.failed,
            batches = stats.batches,
            test = test_to.is_some(),
            "campaign finished"
        );

        Ok(CampaignOutcome::Sent(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::email::MockMailer;
    use crate::domain::{EmailMessage, Recipient};
    use chrono::{DateTime, Utc};
    use std::sync::Mutex;

    struct StubOutbox {
        drafts: Mutex<Vec<EmailMessage>>,
    }

    impl StubOutbox {
        fn with_draft(draft: EmailMessage) -> Self {
            Self {
                drafts: Mutex::new(vec![draft]),
            }
        }

        fn sent_at(&self, id: u32) -> Option<DateTime<Utc>> {
            self.drafts
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == id)
                .and_then(|d| d.sent_at)
        }
    }

    #[async_trait::async_trait]
    impl OutboxPort for StubOutbox {
        async fn list(&self) -> Result<Vec<EmailMessage>, DomainError> {
            Ok(self.drafts.lock().unwrap().clone())
        }

        async fn get(&self, id: u32) -> Result<EmailMessage, DomainError> {
            self.drafts
                .lock()
                .unwrap()
                .iter()
                .find(|d| d.id == id)
                .cloned()
                .ok_or(DomainError::DraftNotFound(id))
        }

        async fn mark_sent(&self, id: u32, when: DateTime<Utc>) -> Result<(), DomainError> {
            let mut drafts = self.drafts.lock().unwrap();
            let draft = drafts
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or(DomainError::DraftNotFound(id))?;
            draft.sent_at = Some(when);
            Ok(())
        }
    }

    struct StubRecipients {
        emails: Vec<&'static str>,
    }

    #[async_trait::async_trait]
    impl RecipientSource for StubRecipients {
        async fn active_recipients(&self) -> Result<Vec<Recipient>, DomainError> {
            Ok(self
                .emails
                .iter()
                .enumerate()
                .map(|(i, email)| Recipient {
                    id: i as u32 + 1,
                    name: format!("User {}", i + 1),
                    email: email.to_string(),
                    active: true,
                })
                .collect())
        }
    }

    fn draft() -> EmailMessage {
        EmailMessage {
            id: 1,
            subject: "March updates".into(),
            content: "<p>New mock exams are live.</p>".into(),
            button_text: Some("Open dashboard".into()),
            button_link: Some("https://petroxassessment.com/dashboard".into()),
            sent_at: None,
        }
    }

    fn service(
        outbox: Arc<StubOutbox>,
        emails: Vec<&'static str>,
        mailer: Arc<MockMailer>,
        batch_size: usize,
    ) -> CampaignService {
        CampaignService::new(
            outbox,
            Arc::new(StubRecipients { emails }),
            mailer,
            "no-reply@petroxassessment.com".into(),
            "https://petroxassessment.com".into(),
            batch_size,
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn already_sent_draft_is_skipped() {
        let mut d = draft();
        let when = Utc::now();
        d.sent_at = Some(when);
        let outbox = Arc::new(StubOutbox::with_draft(d));
        let mailer = Arc::new(MockMailer::new());
        let svc = service(outbox, vec!["a@example.edu"], Arc::clone(&mailer), 20);

        let outcome = svc.send_campaign(1, None).await.unwrap();

        assert_eq!(outcome, CampaignOutcome::AlreadySent(when));
        assert_eq!(mailer.sent_count(), 0);
    }

    #[tokio::test]
    async fn empty_recipient_list_sends_nothing() {
        let outbox = Arc::new(StubOutbox::with_draft(draft()));
        let mailer = Arc::new(MockMailer::new());
        let svc = service(Arc::clone(&outbox), vec![], Arc::clone(&mailer), 20);

        let outcome = svc.send_campaign(1, None).await.unwrap();

        assert_eq!(outcome, CampaignOutcome::NoRecipients);
        assert_eq!(mailer.sent_count(), 0);
        assert!(outbox.sent_at(1).is_none());
    }

    #[tokio::test]
    async fn test_send_targets_one_address_and_keeps_draft_unsent() {
        let outbox = Arc::new(StubOutbox::with_draft(draft()));
        let mailer = Arc::new(MockMailer::new());
        let svc = service(
            Arc::clone(&outbox),
            vec!["a@example.edu", "b@example.edu"],
            Arc::clone(&mailer),
            20,
        );

        let outcome = svc.send_campaign(1, Some("qa@example.edu")).await.unwrap();

        match outcome {
            CampaignOutcome::Sent(stats) => {
                assert_eq!(stats.recipients, 1);
                assert_eq!(stats.sent, 1);
            }
            other => panic!("expected Sent, got {:?}", other),
        }
        assert_eq!(mailer.sent()[0].to, "qa@example.edu");
        assert!(outbox.sent_at(1).is_none());
    }

    #[tokio::test]
    async fn full_run_batches_and_marks_sent() {
        let outbox = Arc::new(StubOutbox::with_draft(draft()));
        let mailer = Arc::new(MockMailer::new());
        let emails = vec![
            "a@example.edu",
            "b@example.edu",
            "c@example.edu",
            "d@example.edu",
            "e@example.edu",
        ];
        let svc = service(Arc::clone(&outbox), emails, Arc::clone(&mailer), 2);

        let outcome = svc.send_campaign(1, None).await.unwrap();

        match outcome {
            CampaignOutcome::Sent(stats) => {
                assert_eq!(stats.recipients, 5);
                assert_eq!(stats.sent, 5);
                assert_eq!(stats.failed, 0);
                assert_eq!(stats.batches, 3);
            }
            other => panic!("expected Sent, got {:?}", other),
        }
        assert!(outbox.sent_at(1).is_some());

        let first = &mailer.sent()[0];
        assert_eq!(first.from, "no-reply@petroxassessment.com");
        assert!(first.html_body.contains("Open dashboard"));
        assert!(first
            .text_body
            .contains("Unsubscribe: https://petroxassessment.com/unsubscribe"));
    }

    #[tokio::test]
    async fn failed_recipient_does_not_abort_the_run() {
        let outbox = Arc::new(StubOutbox::with_draft(draft()));
        let mailer = Arc::new(MockMailer::failing_for(&["b@example.edu"]));
        let emails = vec!["a@example.edu", "b@example.edu", "c@example.edu"];
        let svc = service(Arc::clone(&outbox), emails, Arc::clone(&mailer), 20);

        let outcome = svc.send_campaign(1, None).await.unwrap();

        match outcome {
            CampaignOutcome::Sent(stats) => {
                assert_eq!(stats.sent, 2);
                assert_eq!(stats.failed, 1);
            }
            other => panic!("expected Sent, got {:?}", other),
        }
        assert!(outbox.sent_at(1).is_some());
    }

    #[tokio::test]
    async fn preview_renders_draft_html() {
        let outbox = Arc::new(StubOutbox::with_draft(draft()));
        let mailer = Arc::new(MockMailer::new());
        let svc = service(outbox, vec![], mailer, 20);

        let html = svc.render_preview(1).await.unwrap();
        assert!(html.contains("March updates"));
        assert!(html.contains("<p>New mock exams are live.</p>"));
    }
}
