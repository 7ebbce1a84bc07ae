//! # Page Rendering
//!
//! Minimal server-rendered HTML for the tracker page. The data contract is
//! the [`CountrySummary`] sequence plus an optional highlighted entry for
//! the viewer's own country; markup stays deliberately plain (styling is a
//! hosting concern, not ours). All feed-sourced text is escaped.

use chrono::NaiveDate;

use stuckinside_core::{days_since, status_text, CountrySummary};

/// Escape text for interpolation into HTML element content or attributes.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

/// Render the tracker page.
///
/// With a resolved viewer country the headline names it and shows how many
/// days it has been locked down; otherwise the generic headline is used.
/// Either way the page lists one card per country.
pub fn page(
    summaries: &[CountrySummary],
    current: Option<&CountrySummary>,
    today: NaiveDate,
    site_domain: &str,
) -> String {
    let mut html = String::with_capacity(4096 + summaries.len() * 256);

    let title = match current {
        Some(c) => format!("How long has {} been stuck inside?", escape(&c.name)),
        None => "How long have you been stuck inside?".to_string(),
    };
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n<main>\n"));

    match current {
        Some(c) => {
            let days = days_since(c.first.start, today);
            html.push_str(&format!(
                "<h1 class=\"title\"><u>{}</u> has been <strong>stuck insi.de</strong> for {} days</h1>\n",
                escape(&c.name),
                days
            ));
            html.push_str(&format!(
                "<h2>Status: {}</h2>\n",
                escape(status_text(c.latest.policy_value))
            ));
            if !c.latest.initial_note.is_empty() {
                html.push_str(&format!("<p>{}</p>\n", escape(&c.latest.initial_note)));
            }
        }
        None => {
            html.push_str(
                "<h1 class=\"title\">How long have you been <strong>Stuck Insi.de</strong>?</h1>\n",
            );
        }
    }

    html.push_str("<div class=\"grid\">\n");
    for summary in summaries {
        let days = days_since(summary.first.start, today);
        html.push_str(&format!(
            "<a class=\"card\" href=\"https://{code}.{domain}\">\n\
             <h3>{name}</h3>\n\
             <h4>Current status:</h4>\n\
             <p>{status}</p>\n\
             <h4>Days locked down: {days}</h4>\n\
             </a>\n",
            code = escape(&summary.code),
            domain = escape(site_domain),
            name = escape(&summary.name),
            status = escape(status_text(summary.latest.policy_value)),
            days = days,
        ));
    }
    html.push_str("</div>\n</main>\n");

    html.push_str(
        "<footer>All data from the \
         <a href=\"https://github.com/OxCGRT/covid-policy-tracker\">Oxford COVID-19 policy tracker</a>\
         </footer>\n</body>\n</html>\n",
    );
    html
}

/// Render the user-visible error page shown when the feed is unavailable.
pub fn error_page(message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Stuck Insi.de — temporarily unavailable</title>\n</head>\n<body>\n<main>\n\
         <h1>The lockdown data is temporarily unavailable</h1>\n\
         <p>{}</p>\n\
         <p>Please try again in a moment.</p>\n\
         </main>\n</body>\n</html>\n",
        escape(message)
    )
}
