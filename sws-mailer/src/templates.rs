/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! HTML bodies for the two contact emails.
//!
//! Email clients ignore stylesheets, so every style is inline. All text
//! coming from the form is escaped before interpolation.

use std::borrow::Cow;

use sws_types::ContactSubmission;

const LOGO_URL: &str = "https://souswebstudi.com/icon.png";
const ACCENT: &str = "#FF4D00";

/// Escapes the five HTML-significant characters.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn operator_subject(submission: &ContactSubmission) -> String {
    format!("New Contact Form Submission from {}", submission.name)
}

pub const CONFIRMATION_SUBJECT: &str = "Thank you for contacting SWS";

/// Notification sent to the studio mailbox.
pub fn operator_notification(submission: &ContactSubmission) -> String {
    let name = escape_html(&submission.name);
    let email = escape_html(&submission.email);
    let company = submission
        .company
        .as_deref()
        .map(escape_html)
        .unwrap_or(Cow::Borrowed("N/A"));
    let message = escape_html(&submission.message);

    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="text-align: center; margin-bottom: 20px;">
      <img src="{LOGO_URL}" alt="SWS Logo" style="width: 60px; height: 60px;" />
    </div>
    <h2 style="color: {ACCENT};">New Contact Form Submission</h2>
    <div style="background-color: #f9f9f9; padding: 20px; border-radius: 8px;">
      <p><strong>Name:</strong> {name}</p>
      <p><strong>Email:</strong> <a href="mailto:{email}" style="color: {ACCENT};">{email}</a></p>
      <p><strong>Company:</strong> {company}</p>
      <hr style="border: 0; border-top: 1px solid #eee; margin: 20px 0;">
      <p><strong>Message:</strong></p>
      <p style="white-space: pre-wrap; background-color: #fff; padding: 15px; border: 1px solid #eee; border-radius: 4px;">{message}</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Dark-themed thank-you sent to the submitter.
pub fn submitter_confirmation(submission: &ContactSubmission, year: i32) -> String {
    let name = escape_html(&submission.name);
    let project = submission
        .company
        .as_deref()
        .map(escape_html)
        .unwrap_or(Cow::Borrowed("your project"));

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
</head>
<body style="margin: 0; padding: 0; background-color: #0a0a0a; font-family: Arial, sans-serif;">
  <table role="presentation" width="100%" border="0" cellspacing="0" cellpadding="0" style="background-color: #0a0a0a; min-height: 100vh;">
    <tr>
      <td align="center" style="padding: 40px 20px;">
        <table role="presentation" width="100%" style="max-width: 600px; background-color: #171717; border: 1px solid #333333; border-radius: 12px; overflow: hidden;">
          <tr>
            <td style="padding: 30px 40px; border-bottom: 1px solid #333333; text-align: center;">
              <img src="{LOGO_URL}" alt="SWS Logo" style="width: 60px; height: 60px; margin-bottom: 10px;" />
              <h1 style="margin: 0; color: {ACCENT}; font-size: 24px; font-weight: bold; letter-spacing: 1px;">SWS</h1>
            </td>
          </tr>
          <tr>
            <td style="padding: 40px;">
              <h2 style="margin: 0 0 20px 0; color: #ffffff; font-size: 24px;">Hello {name},</h2>
              <p style="margin: 0 0 20px 0; color: #a3a3a3; font-size: 16px; line-height: 1.6;">
                Thank you for reaching out to us. We have received your message regarding <strong>"{project}"</strong>.
              </p>
              <p style="margin: 0 0 30px 0; color: #a3a3a3; font-size: 16px; line-height: 1.6;">
                Our team will review your inquiry and get back to you shortly. We're excited to discuss how we can help bring your digital vision to life.
              </p>
              <div style="background-color: rgba(255, 77, 0, 0.1); border-left: 4px solid {ACCENT}; padding: 15px; border-radius: 4px;">
                <p style="margin: 0; color: #ffffff; font-size: 14px;">
                  "We'll get back to you within 24 hours."
                </p>
              </div>
            </td>
          </tr>
          <tr>
            <td style="padding: 30px 40px; background-color: #0f0f0f; border-top: 1px solid #333333;">
              <p style="margin: 0; color: #525252; font-size: 12px; text-align: center;">
                &copy; {year} Sous Web Studio. All rights reserved.
              </p>
            </td>
          </tr>
        </table>
      </td>
    </tr>
  </table>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(company: &str) -> ContactSubmission {
        ContactSubmission::new("Ada", "ada@example.com", company, "Line one\nLine two")
    }

    #[test]
    fn escape_leaves_plain_text_borrowed() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn operator_notification_lists_fields() {
        let html = operator_notification(&submission("Acme"));
        assert!(html.contains("<strong>Name:</strong> Ada"));
        assert!(html.contains(r#"href="mailto:ada@example.com""#));
        assert!(html.contains("<strong>Company:</strong> Acme"));
        assert!(html.contains("Line one\nLine two"));
    }

    #[test]
    fn operator_notification_without_company() {
        let html = operator_notification(&submission(""));
        assert!(html.contains("<strong>Company:</strong> N/A"));
    }

    #[test]
    fn user_input_cannot_inject_markup() {
        let hostile = ContactSubmission::new(
            "<script>alert(1)</script>",
            "x@example.com",
            "",
            "<img src=x onerror=alert(1)>",
        );
        let html = operator_notification(&hostile);
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn confirmation_greets_and_stamps_year() {
        let html = submitter_confirmation(&submission("Acme"), 2026);
        assert!(html.contains("Hello Ada,"));
        assert!(html.contains(r#"regarding <strong>"Acme"</strong>"#));
        assert!(html.contains("&copy; 2026 Sous Web Studio"));
    }

    #[test]
    fn confirmation_without_company_mentions_project() {
        let html = submitter_confirmation(&submission(""), 2026);
        assert!(html.contains(r#"<strong>"your project"</strong>"#));
    }

    #[test]
    fn subjects() {
        assert_eq!(
            operator_subject(&submission("")),
            "New Contact Form Submission from Ada"
        );
        assert_eq!(CONFIRMATION_SUBJECT, "Thank you for contacting SWS");
    }
}
