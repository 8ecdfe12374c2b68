//! Renders the platform-update email from an `EmailContext`.
//!
//! HTML comes from the compile-time askama template; the plaintext
//! alternative and the render-failure fallback are built by hand so a
//! template problem can never abort a campaign.

use askama::Template;

use crate::domain::{DomainError, EmailContext};

#[derive(Template)]
#[template(path = "email_template.html")]
struct UpdateEmail<'a> {
    subject: &'a str,
    content: &'a str,
    button_text: &'a Option<String>,
    button_link: &'a Option<String>,
    frontend_domain: &'a str,
}

/// Render the full HTML document for a context.
///
/// `content` is injected unescaped; the draft author owns that trust
/// boundary. The action block appears only when both button fields are set.
pub fn render_html(ctx: &EmailContext) -> Result<String, DomainError> {
    let template = UpdateEmail {
        subject: &ctx.subject,
        content: &ctx.content,
        button_text: &ctx.button_text,
        button_link: &ctx.button_link,
        frontend_domain: &ctx.frontend_domain,
    };
    template
        .render()
        .map_err(|e| DomainError::Template(e.to_string()))
}

/// Plaintext alternative attached alongside the HTML part.
pub fn render_text(ctx: &EmailContext) -> String {
    let mut text = format!("{}\n\n{}\n\n", ctx.subject, ctx.content);
    if let (Some(button_text), Some(button_link)) = (&ctx.button_text, &ctx.button_link) {
        text.push_str(&format!("{}: {}\n\n", button_text, button_link));
    }
    text.push_str(&format!("Unsubscribe: {}", ctx.unsubscribe_link()));
    text
}

/// Minimal document used when the template render fails. Unstyled but
/// complete: subject, content, optional action link, platform footer.
pub fn fallback_html(ctx: &EmailContext) -> String {
    let link_html = match (&ctx.button_text, &ctx.button_link) {
        (Some(text), Some(link)) => format!("<a href=\"{}\">{}</a>", link, text),
        _ => String::new(),
    };
    format!(
        "<html><body><h2>{}</h2><div>{}</div>{}<p>Sent by Petrox Assessment Platform</p></body></html>",
        ctx.subject, ctx.content, link_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_ctx() -> EmailContext {
        EmailContext::new(
            "March updates",
            "<p>New mock exams are live.</p>",
            "https://petroxassessment.com",
        )
    }

    #[test]
    fn renders_button_when_both_fields_set() {
        let ctx = base_ctx().with_button("Open dashboard", "https://petroxassessment.com/dashboard");
        let html = render_html(&ctx).unwrap();
        assert!(html.contains("href=\"https://petroxassessment.com/dashboard\""));
        assert!(html.contains(">Open dashboard</a>"));
    }

    #[test]
    fn omits_action_block_without_link() {
        let mut ctx = base_ctx();
        ctx.button_text = Some("Open dashboard".into());
        let html = render_html(&ctx).unwrap();
        assert!(!html.contains("class=\"action\""));
        assert!(!html.contains("Open dashboard"));
    }

    #[test]
    fn omits_action_block_without_text() {
        let mut ctx = base_ctx();
        ctx.button_link = Some("https://petroxassessment.com/dashboard".into());
        let html = render_html(&ctx).unwrap();
        assert!(!html.contains("class=\"action\""));
    }

    #[test]
    fn unsubscribe_link_uses_frontend_domain() {
        let html = render_html(&base_ctx()).unwrap();
        assert!(html.contains("href=\"https://petroxassessment.com/unsubscribe\""));
    }

    #[test]
    fn trailing_slash_in_domain_is_normalized() {
        let ctx = EmailContext::new("Hi", "<p>x</p>", "https://petroxassessment.com/");
        let html = render_html(&ctx).unwrap();
        assert!(html.contains("href=\"https://petroxassessment.com/unsubscribe\""));
        assert!(!html.contains("com//unsubscribe"));
    }

    #[test]
    fn content_html_passes_through_unescaped() {
        let html = render_html(&base_ctx()).unwrap();
        assert!(html.contains("<p>New mock exams are live.</p>"));
    }

    #[test]
    fn subject_is_escaped() {
        let ctx = EmailContext::new("<b>March</b>", "<p>x</p>", "https://petroxassessment.com");
        let html = render_html(&ctx).unwrap();
        assert!(html.contains("&lt;b&gt;March&lt;/b&gt;"));
    }

    #[test]
    fn text_alternative_lists_action_and_unsubscribe() {
        let ctx = base_ctx().with_button("Open", "https://petroxassessment.com/d");
        let text = render_text(&ctx);
        assert!(text.starts_with("March updates\n\n"));
        assert!(text.contains("Open: https://petroxassessment.com/d"));
        assert!(text.ends_with("Unsubscribe: https://petroxassessment.com/unsubscribe"));
    }

    #[test]
    fn fallback_document_is_complete() {
        let ctx = base_ctx().with_button("Open", "https://petroxassessment.com/d");
        let html = fallback_html(&ctx);
        assert!(html.contains("<h2>March updates</h2>"));
        assert!(html.contains("<a href=\"https://petroxassessment.com/d\">Open</a>"));
        assert!(html.contains("Sent by Petrox Assessment Platform"));
    }
}
