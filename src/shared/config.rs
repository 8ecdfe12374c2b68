//! Application configuration. Delivery credentials, batching, paths.

use serde::Deserialize;

/// Default number of emails per batch.
pub const DEFAULT_BATCH_SIZE: usize = 20;
/// Default pause between batches, in milliseconds.
pub const DEFAULT_BATCH_PAUSE_MS: u64 = 500;
/// Default per-request timeout for the mail provider, in seconds.
pub const DEFAULT_SEND_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Public domain of the platform frontend; the unsubscribe link is built
    /// from it. Read from PETROX_FRONTEND_DOMAIN or FRONTEND_DOMAIN.
    #[serde(default)]
    pub frontend_domain: Option<String>,

    /// Sender address. Read from PETROX_FROM_EMAIL or DEFAULT_FROM_EMAIL.
    #[serde(default)]
    pub from_email: Option<String>,

    /// SendGrid API key. Read from PETROX_SENDGRID_API_KEY or SENDGRID_API_KEY.
    #[serde(default)]
    pub sendgrid_api_key: Option<String>,

    /// Directory holding outbox.json, recipients.csv, preview.html.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Recipient list path; defaults to {data_dir}/recipients.csv.
    #[serde(default)]
    pub recipients_path: Option<String>,

    /// Emails per batch. Read from EMAIL_BATCH_SIZE.
    #[serde(default)]
    pub batch_size: Option<usize>,

    /// Pause between batches in ms. Read from EMAIL_BATCH_PAUSE_MS.
    #[serde(default)]
    pub batch_pause_ms: Option<u64>,

    /// Per-request send timeout in seconds. Read from EMAIL_TIMEOUT.
    #[serde(default)]
    pub send_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("PETROX"));
        if let Ok(path) = std::env::var("PETROX_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // The unprefixed names below match the original platform settings, so
        // one .env can drive both deployments.
        if cfg.frontend_domain.is_none() {
            cfg.frontend_domain = std::env::var("FRONTEND_DOMAIN").ok();
        }
        if cfg.from_email.is_none() {
            cfg.from_email = std::env::var("DEFAULT_FROM_EMAIL").ok();
        }
        if cfg.sendgrid_api_key.is_none() {
            cfg.sendgrid_api_key = std::env::var("SENDGRID_API_KEY").ok();
        }
        if let Ok(s) = std::env::var("EMAIL_BATCH_SIZE") {
            if let Ok(n) = s.parse::<usize>() {
                cfg.batch_size = Some(n);
            }
        }
        if let Ok(s) = std::env::var("EMAIL_BATCH_PAUSE_MS") {
            if let Ok(ms) = s.parse::<u64>() {
                cfg.batch_pause_ms = Some(ms);
            }
        }
        if let Ok(s) = std::env::var("EMAIL_TIMEOUT") {
            if let Ok(secs) = s.parse::<u64>() {
                cfg.send_timeout_secs = Some(secs);
            }
        }
        Ok(cfg)
    }

    /// Returns emails per batch. Defaults to 20 if unset.
    pub fn batch_size_or_default(&self) -> usize {
        self.batch_size.unwrap_or(DEFAULT_BATCH_SIZE).max(1)
    }

    /// Returns the pause between batches in ms. Defaults to 500 if unset.
    pub fn batch_pause_ms_or_default(&self) -> u64 {
        self.batch_pause_ms.unwrap_or(DEFAULT_BATCH_PAUSE_MS)
    }

    /// Returns the per-request send timeout in seconds. Defaults to 10.
    pub fn send_timeout_secs_or_default(&self) -> u64 {
        self.send_timeout_secs.unwrap_or(DEFAULT_SEND_TIMEOUT_SECS)
    }

    /// Returns the frontend domain the unsubscribe link is built from.
    pub fn frontend_domain_or_default(&self) -> String {
        self.frontend_domain
            .clone()
            .unwrap_or_else(|| "https://petroxassessment.com".to_string())
    }

    /// Returns the sender address.
    pub fn from_email_or_default(&self) -> String {
        self.from_email
            .clone()
            .unwrap_or_else(|| "no-reply@petroxassessment.com".to_string())
    }

    /// Returns the data directory path. Defaults to ./data.
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Returns true if real delivery is configured (API key present).
    pub fn is_sendgrid_configured(&self) -> bool {
        self.sendgrid_api_key
            .as_deref()
            .is_some_and(|k| !k.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_platform_settings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.batch_size_or_default(), 20);
        assert_eq!(cfg.batch_pause_ms_or_default(), 500);
        assert_eq!(cfg.send_timeout_secs_or_default(), 10);
        assert!(!cfg.is_sendgrid_configured());
    }

    #[test]
    fn batch_size_never_zero() {
        let cfg = AppConfig {
            batch_size: Some(0),
            ..AppConfig::default()
        };
        assert_eq!(cfg.batch_size_or_default(), 1);
    }
}
