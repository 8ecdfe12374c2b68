//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu: preview a draft, send a test email, run the campaign, inspect
//! the dashboard catalog.

use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, Select, Text};
use std::path::PathBuf;
use std::sync::Arc;

use crate::adapters::ui::progress;
use crate::domain::dashboard;
use crate::domain::{CampaignOutcome, DomainError, EmailMessage};
use crate::ports::{InputPort, OutboxPort};
use crate::usecases::CampaignService;

const MENU_PREVIEW: &str = "Preview draft (write preview.html)";
const MENU_TEST: &str = "Send test email";
const MENU_CAMPAIGN: &str = "Send campaign";
const MENU_CATALOG: &str = "Show dashboard catalog";
const MENU_QUIT: &str = "Quit";

/// Applies the petrol/teal theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let mut cfg = RenderConfig::default_colored();
    cfg.prompt_prefix = Styled::new("»").with_fg(Color::LightCyan);
    cfg.highlighted_option_prefix = Styled::new("›").with_fg(Color::LightCyan);
    inquire::set_global_render_config(cfg);
}

fn draft_label(draft: &EmailMessage) -> String {
    let state = match draft.sent_at {
        Some(when) => format!("sent {}", when.format("%Y-%m-%d %H:%M")),
        None => "unsent".to_string(),
    };
    format!("#{} {} [{}]", draft.id, draft.subject, state)
}

fn report_outcome(outcome: &CampaignOutcome) {
    match outcome {
        CampaignOutcome::Sent(stats) => println!(
            "Done: {} sent, {} failed ({} recipients, {} batches)",
            stats.sent, stats.failed, stats.recipients, stats.batches
        ),
        CampaignOutcome::AlreadySent(when) => {
            println!("Draft was already sent at {}; nothing to do", when)
        }
        CampaignOutcome::NoRecipients => println!("Recipient list is empty; nothing sent"),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    outbox: Arc<dyn OutboxPort>,
    campaign: Arc<CampaignService>,
    data_dir: PathBuf,
}

impl TuiInputPort {
    pub fn new(outbox: Arc<dyn OutboxPort>, campaign: Arc<CampaignService>, data_dir: PathBuf) -> Self {
        Self {
            outbox,
            campaign,
            data_dir,
        }
    }

    /// Prompt for a draft. None when the outbox is empty.
    async fn select_draft(&self) -> Result<Option<EmailMessage>, DomainError> {
        let drafts = self.outbox.list().await?;
        if drafts.is_empty() {
            println!(
                "Outbox is empty; add drafts to {}",
                self.data_dir.join("outbox.json").display()
            );
            return Ok(None);
        }
        let options: Vec<String> = drafts.iter().map(draft_label).collect();
        let selected = Select::new("Select a draft", options)
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        Ok(drafts.into_iter().find(|d| draft_label(d) == selected))
    }

    async fn preview(&self) -> Result<(), DomainError> {
        let Some(draft) = self.select_draft().await? else {
            return Ok(());
        };
        let html = self.campaign.render_preview(draft.id).await?;
        let path = self.data_dir.join("preview.html");
        tokio::fs::write(&path, html)
            .await
            .map_err(|e| DomainError::Input(format!("write preview: {}", e)))?;
        println!("Preview written to {}", path.display());
        Ok(())
    }

    async fn send_test(&self) -> Result<(), DomainError> {
        let Some(draft) = self.select_draft().await? else {
            return Ok(());
        };
        let to = Text::new("Test recipient address:")
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;
        if to.trim().is_empty() {
            println!("No address given; aborted");
            return Ok(());
        }
        let outcome = self.campaign.send_campaign(draft.id, Some(to.trim())).await?;
        report_outcome(&outcome);
        Ok(())
    }

    async fn send_campaign(&self) -> Result<(), DomainError> {
        let Some(draft) = self.select_draft().await? else {
            return Ok(());
        };
        let confirmed = Confirm::new(&format!(
            "Send \"{}\" to all active recipients?",
            draft.subject
        ))
        .with_default(false)
        .prompt()
        .map_err(|e| DomainError::Input(e.to_string()))?;
        if !confirmed {
            println!("Aborted");
            return Ok(());
        }

        let spinner = progress::campaign_spinner(format!("Sending \"{}\"…", draft.subject));
        let result = self.campaign.send_campaign(draft.id, None).await;
        spinner.finish_and_clear();

        let outcome = result?;
        report_outcome(&outcome);
        Ok(())
    }

    fn show_catalog(&self) {
        println!("Navigation:");
        for item in dashboard::nav_items() {
            let label = item.label.map(|l| format!(" ({})", l)).unwrap_or_default();
            println!("  {:<12} {}{}", item.title, item.href, label);
        }
        println!("Overview cards:");
        for card in dashboard::summary_cards() {
            println!("  {:<10} {:>5}  {}", card.date, card.total, card.role);
        }
        let users = dashboard::sample_users();
        println!("Sample users: {} rows (demo data)", users.len());
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = Select::new(
                "Petrox mailer",
                vec![
                    MENU_PREVIEW.to_string(),
                    MENU_TEST.to_string(),
                    MENU_CAMPAIGN.to_string(),
                    MENU_CATALOG.to_string(),
                    MENU_QUIT.to_string(),
                ],
            )
            .prompt()
            .map_err(|e| DomainError::Input(e.to_string()))?;

            match choice.as_str() {
                MENU_PREVIEW => self.preview().await?,
                MENU_TEST => self.send_test().await?,
                MENU_CAMPAIGN => self.send_campaign().await?,
                MENU_CATALOG => self.show_catalog(),
                _ => break,
            }
        }
        Ok(())
    }
}
