//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use petrox_mailer::adapters::email::{MockMailer, SendGridMailer};
use petrox_mailer::adapters::persistence::{CsvRecipientSource, OutboxJson};
use petrox_mailer::adapters::ui::tui::TuiInputPort;
use petrox_mailer::ports::{InputPort, MailerPort, OutboxPort, RecipientSource};
use petrox_mailer::usecases::CampaignService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    petrox_mailer::adapters::ui::init_ui();

    let cfg = petrox_mailer::shared::config::AppConfig::load().unwrap_or_default();

    let data_path = PathBuf::from(cfg.data_dir_or_default());
    tokio::fs::create_dir_all(&data_path)
        .await
        .map_err(|e| anyhow::anyhow!("create data dir: {}", e))?;
    let data_dir_abs = data_path
        .canonicalize()
        .unwrap_or_else(|_| data_path.clone());
    info!(path = %data_dir_abs.display(), "data directory");

    // --- Outbox (JSON drafts) ---
    let outbox_impl = OutboxJson::new(data_path.join("outbox.json"));
    outbox_impl
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    let outbox: Arc<dyn OutboxPort> = Arc::new(outbox_impl);
    if outbox.list().await.map_err(|e| anyhow::anyhow!("{}", e))?.is_empty() {
        info!(
            path = %data_path.join("outbox.json").display(),
            "outbox is empty; add draft messages before sending"
        );
    }

    // --- Recipient list (CSV) ---
    let recipients_path = cfg
        .recipients_path
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| data_path.join("recipients.csv"));
    let recipients: Arc<dyn RecipientSource> = Arc::new(CsvRecipientSource::new(&recipients_path));

    // --- Mailer: SendGrid when configured, recording mock otherwise ---
    let mailer: Arc<dyn MailerPort> = if cfg.is_sendgrid_configured() {
        info!(
            timeout_secs = cfg.send_timeout_secs_or_default(),
            "SendGrid delivery enabled"
        );
        Arc::new(
            SendGridMailer::new(
                cfg.sendgrid_api_key.clone().unwrap_or_default(),
                Duration::from_secs(cfg.send_timeout_secs_or_default()),
            )
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        )
    } else {
        warn!("SENDGRID_API_KEY not set, using mock mailer (nothing leaves this machine)");
        Arc::new(MockMailer::new())
    };

    // --- Campaign service ---
    let batch_size = cfg.batch_size_or_default();
    let batch_pause_ms = cfg.batch_pause_ms_or_default();
    info!(
        batch_size,
        batch_pause_ms, "batching: {} emails per batch, {} ms pause", batch_size, batch_pause_ms
    );
    let campaign_service = Arc::new(CampaignService::new(
        Arc::clone(&outbox),
        Arc::clone(&recipients),
        Arc::clone(&mailer),
        cfg.from_email_or_default(),
        cfg.frontend_domain_or_default(),
        batch_size,
        Duration::from_millis(batch_pause_ms),
    ));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&outbox),
        Arc::clone(&campaign_service),
        data_path,
    ));

    // --- Run (main menu -> Preview / Test send / Campaign / Catalog) ---
    input_port.run().await.map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
