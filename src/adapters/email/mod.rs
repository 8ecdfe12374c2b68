pub mod mock_mailer;
pub mod sendgrid;
pub mod template;

pub use mock_mailer::MockMailer;
pub use sendgrid::SendGridMailer;
