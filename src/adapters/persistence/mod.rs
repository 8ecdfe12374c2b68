pub mod csv_recipients;
pub mod outbox_json;

pub use csv_recipients::CsvRecipientSource;
pub use outbox_json::OutboxJson;
