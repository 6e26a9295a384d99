//! HTML template for the operator notification email

use crate::models::DemoRequest;

/// Minimal HTML escaping for user-supplied text interpolated into the
/// notification body.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr>
  <td style="padding: 12px 0; border-bottom: 1px solid #e2e8f0; font-weight: 600; color: #64748b; width: 120px;">{label}</td>
  <td style="padding: 12px 0; border-bottom: 1px solid #e2e8f0; color: #1e293b;">{value}</td>
</tr>"#
    )
}

/// Renders the notification sent to the operator inbox. Phone, company, and
/// message blocks appear only when the request carries them.
pub fn render_demo_notification(request: &DemoRequest) -> String {
    let name = escape_html(&request.name);
    let email = escape_html(&request.email);
    // e.g. "Monday, March 16, 2026"
    let long_date = request.date.format("%A, %B %-d, %Y").to_string();

    let mut contact_rows = String::new();
    contact_rows.push_str(&detail_row("Name", &name));
    contact_rows.push_str(&detail_row(
        "Email",
        &format!(r#"<a href="mailto:{email}" style="color: #3b82f6; text-decoration: none;">{email}</a>"#),
    ));
    if let Some(phone) = &request.phone {
        let phone = escape_html(phone);
        contact_rows.push_str(&detail_row(
            "Phone",
            &format!(r#"<a href="tel:{phone}" style="color: #3b82f6; text-decoration: none;">{phone}</a>"#),
        ));
    }
    if let Some(company) = &request.company {
        contact_rows.push_str(&detail_row("Company", &escape_html(company)));
    }

    let message_block = match &request.message {
        Some(message) => format!(
            r#"<h2 style="color: #1e293b; margin-top: 30px;">Additional Notes</h2>
<div style="background: #f8fafc; padding: 20px; border-radius: 12px;">
  <p style="margin: 0; color: #475569; white-space: pre-wrap;">{}</p>
</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Demo Request</title>
  </head>
  <body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #334155; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #3b82f6 0%, #6366f1 100%); padding: 30px; border-radius: 16px 16px 0 0; text-align: center;">
      <h1 style="color: white; margin: 0; font-size: 24px;">New Demo Request</h1>
    </div>
    <div style="background: #ffffff; padding: 30px; border: 1px solid #e2e8f0; border-top: none; border-radius: 0 0 16px 16px;">
      <h2 style="color: #1e293b; margin-top: 0;">Contact Details</h2>
      <table style="width: 100%; border-collapse: collapse;">
{contact_rows}
      </table>
      <h2 style="color: #1e293b; margin-top: 30px;">Preferred Schedule</h2>
      <div style="background: #f8fafc; padding: 20px; border-radius: 12px;">
        <p style="margin: 0; color: #64748b; font-size: 14px;">Date</p>
        <p style="margin: 5px 0 0; color: #1e293b; font-weight: 600; font-size: 18px;">{long_date}</p>
        <p style="margin: 15px 0 0; color: #64748b; font-size: 14px;">Time</p>
        <p style="margin: 5px 0 0; color: #1e293b; font-weight: 600; font-size: 18px;">{time}</p>
      </div>
{message_block}
      <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #e2e8f0; text-align: center; color: #94a3b8; font-size: 14px;">
        <p>This email was sent from the StaySmart website contact form.</p>
      </div>
    </div>
  </body>
</html>"#,
        time = request.time.as_str(),
    )
}
