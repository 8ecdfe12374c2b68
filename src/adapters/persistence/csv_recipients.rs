//! Implements RecipientSource from a CSV file.
//!
//! Expected header: `id,name,email,active`. The csv crate handles quoting
//! and escaping; rows deserialize straight into `Recipient`.

use std::path::Path;

use crate::domain::{DomainError, Recipient};
use crate::ports::RecipientSource;

/// CSV-backed recipient list.
pub struct CsvRecipientSource {
    path: std::path::PathBuf,
}

impl CsvRecipientSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl RecipientSource for CsvRecipientSource {
    async fn active_recipients(&self) -> Result<Vec<Recipient>, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DomainError::Recipients(format!(
                    "recipient list not found: {}",
                    self.path.display()
                )));
            }
            Err(e) => return Err(DomainError::Recipients(e.to_string())),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(bytes.as_slice());

        let mut recipients: Vec<Recipient> = Vec::new();
        for row in reader.deserialize() {
            let recipient: Recipient =
                row.map_err(|e| DomainError::Recipients(format!("bad row: {}", e)))?;
            if recipient.active && !recipient.email.trim().is_empty() {
                recipients.push(recipient);
            }
        }
        recipients.sort_by_key(|r| r.id);
        Ok(recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn source_from(contents: &str, tag: &str) -> CsvRecipientSource {
        let path = std::env::temp_dir().join(format!(
            "petrox_recipients_{}_{}.csv",
            tag,
            std::process::id()
        ));
        tokio::fs::write(&path, contents).await.unwrap();
        CsvRecipientSource::new(path)
    }

    #[tokio::test]
    async fn filters_inactive_and_blank_emails() {
        let csv = "id,name,email,active\n\
                   3,Chidi Okafor,chidi@example.edu,true\n\
                   1,Amina Bello,amina@example.edu,true\n\
                   2,Blank Row,,true\n\
                   4,Gone User,gone@example.edu,false\n";
        let source = source_from(csv, "filter").await;
        let recipients = source.active_recipients().await.unwrap();
        let emails: Vec<&str> = recipients.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, ["amina@example.edu", "chidi@example.edu"]);
    }

    #[tokio::test]
    async fn missing_file_is_a_clear_error() {
        let source = CsvRecipientSource::new("/nonexistent/petrox_recipients.csv");
        let err = source.active_recipients().await.unwrap_err();
        assert!(matches!(err, DomainError::Recipients(_)));
        assert!(err.to_string().contains("not found"));
    }
}
