//! Server-rendered HTML. Small enough that a template engine would be
//! heavier than the pages themselves; handlers pass pre-fetched domain
//! values in and get full documents back.

use crate::domain::types::{Code, Submission};

const STYLE: &str = r#"
body { font-family: Arial, sans-serif; background: #f4f6f8; margin: 0; padding: 20px; }
h1 { text-align: center; margin-bottom: 30px; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 20px; }
.card { background: #fff; padding: 15px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); }
.card p { margin: 6px 0; }
.card img { width: 100%; border-radius: 6px; margin-top: 8px; }
.label { font-weight: bold; color: #555; }
form.panel { background: #fff; max-width: 480px; margin: 0 auto; padding: 20px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); }
form.panel input { width: 100%; padding: 8px; margin: 6px 0 14px; box-sizing: border-box; }
form.panel button { width: 100%; padding: 10px; border: 0; border-radius: 6px; background: #2d6cdf; color: #fff; font-size: 16px; }
.message { background: #fff; max-width: 480px; margin: 40px auto; padding: 24px; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); text-align: center; }
.error { color: #b00020; }
table { width: 100%; border-collapse: collapse; background: #fff; border-radius: 8px; box-shadow: 0 2px 6px rgba(0,0,0,0.1); margin-bottom: 30px; }
th, td { padding: 8px 10px; border-bottom: 1px solid #eee; text-align: left; font-size: 14px; }
th { color: #555; }
.logout { max-width: 120px; margin: 0 0 20px auto; }
.logout button { width: 100%; padding: 6px; border: 0; border-radius: 6px; background: #b00020; color: #fff; }
"#;

/// Replace HTML metacharacters so user-supplied values cannot inject markup.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n\
         <body>\n{body}\n</body>\n</html>\n"
    )
}

/// Centered notice used for confirmations and error pages.
pub fn message_page(title: &str, text: &str) -> String {
    let title = escape_html(title);
    let text = escape_html(text);
    layout(
        &title,
        &format!("<div class=\"message\"><h2>{title}</h2><p>{text}</p></div>"),
    )
}

/// The listing form behind an open code. Field names line up with the
/// multipart parser in the submission handler.
pub fn submission_form(code: &str) -> String {
    let code = escape_html(code);
    let body = format!(
        "<h1>Submit Your Listing</h1>\n\
         <form class=\"panel\" method=\"POST\" action=\"/submit/{code}\" enctype=\"multipart/form-data\">\n\
         <input name=\"name\" placeholder=\"Your Name\" required>\n\
         <input name=\"phone\" placeholder=\"Phone Number\" required>\n\
         <input name=\"address\" placeholder=\"Address\">\n\
         <input name=\"owner_name\" placeholder=\"Owner Name\">\n\
         <input name=\"price\" placeholder=\"Price\">\n\
         <input name=\"size\" placeholder=\"Size (m\u{b2})\">\n\
         <input name=\"bedrooms\" placeholder=\"Bedrooms\">\n\
         <input name=\"baths\" placeholder=\"Baths\">\n\
         <input name=\"condition\" placeholder=\"Condition\">\n\
         <input type=\"file\" name=\"images\" accept=\"image/jpeg,image/png\" multiple>\n\
         <button type=\"submit\">Submit</button>\n\
         </form>"
    );
    layout("Submit Your Listing", &body)
}

fn card_row(label: &str, value: &str) -> String {
    format!(
        "<p><span class=\"label\">{label}:</span> {}</p>\n",
        escape_html(value)
    )
}

fn listing_card(item: &Submission) -> String {
    let mut card = String::from("<div class=\"card\">\n");
    card.push_str(&card_row("Name", &item.name));
    card.push_str(&card_row("Phone", &item.phone));
    if let Some(ref address) = item.address {
        card.push_str(&card_row("Address", address));
    }
    if let Some(ref price) = item.price {
        card.push_str(&card_row("Price", price));
    }
    if let Some(size) = item.size {
        card.push_str(&card_row("Size", &size.to_string()));
    }
    if let Some(ref bedrooms) = item.bedrooms {
        card.push_str(&card_row("Bedrooms", bedrooms));
    }
    if let Some(ref baths) = item.baths {
        card.push_str(&card_row("Baths", baths));
    }
    if let Some(ref condition) = item.condition {
        card.push_str(&card_row("Condition", condition));
    }
    for image in &item.images {
        card.push_str(&format!("<img src=\"{}\" alt=\"\">\n", escape_html(image)));
    }
    card.push_str("</div>\n");
    card
}

/// Public card grid over all submissions, newest first.
pub fn listings_page(submissions: &[Submission]) -> String {
    let mut body = String::from("<h1>Public Listings</h1>\n<div class=\"grid\">\n");
    for item in submissions {
        body.push_str(&listing_card(item));
    }
    body.push_str("</div>");
    layout("Public Listings", &body)
}

/// Dashboard login form, optionally with a failure notice.
pub fn admin_login(error: Option<&str>) -> String {
    let notice = match error {
        Some(text) => format!("<p class=\"error\">{}</p>\n", escape_html(text)),
        None => String::new(),
    };
    let body = format!(
        "<h1>Admin Login</h1>\n\
         <form class=\"panel\" method=\"POST\" action=\"/admin/login\">\n\
         {notice}\
         <input type=\"password\" name=\"password\" placeholder=\"Password\" required>\n\
         <button type=\"submit\">Log in</button>\n\
         </form>"
    );
    layout("Admin Login", &body)
}

fn code_status(code: &Code) -> &'static str {
    if code.is_demo {
        "demo"
    } else if code.used {
        "used"
    } else {
        "open"
    }
}

/// Admin view: every submission and every issued code, newest first.
pub fn admin_dashboard(submissions: &[Submission], codes: &[Code]) -> String {
    let mut body = String::from(
        "<h1>Dashboard</h1>\n\
         <form class=\"logout\" method=\"POST\" action=\"/admin/logout\">\
         <button type=\"submit\">Log out</button></form>\n",
    );

    body.push_str(
        "<h2>Submissions</h2>\n<table>\n\
         <tr><th>Submitted</th><th>Name</th><th>Phone</th><th>Code</th>\
         <th>Price</th><th>Images</th></tr>\n",
    );
    for item in submissions {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            item.submitted_at.format("%Y-%m-%d %H:%M"),
            escape_html(&item.name),
            escape_html(&item.phone),
            escape_html(&item.code),
            escape_html(item.price.as_deref().unwrap_or("-")),
            item.images.len(),
        ));
    }
    body.push_str("</table>\n");

    body.push_str(
        "<h2>Codes</h2>\n<table>\n<tr><th>Code</th><th>Status</th><th>Created</th></tr>\n",
    );
    for code in codes {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&code.code),
            code_status(code),
            code.created_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    body.push_str("</table>");

    layout("Dashboard", &body)
}
