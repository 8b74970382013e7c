use itertools::Itertools;

use super::escape_html;
use crate::review::ReviewQuery;

const NOT_PROVIDED: &str = r#"<span class="muted">Not provided</span>"#;

pub fn render_no_submission() -> String {
    r#"<h2>Page loaded without form submission</h2>
<p class="muted">If you submitted the form, please ensure your browser used GET and redirected to this page.</p>"#
        .to_string()
}

fn or_not_provided(value: &str, render: impl FnOnce(String) -> String) -> String {
    if value.is_empty() {
        NOT_PROVIDED.to_string()
    } else {
        render(escape_html(value))
    }
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"  <div class="confirm-row"><div class="label">{label}</div><div class="value">{value}</div></div>"#
    )
}

/// Confirmation fragment for a counted submission.
pub fn render_confirmation(query: &ReviewQuery, product_name: &str, count: u64) -> String {
    let greeting = if query.username.is_empty() {
        "Thank you!".to_string()
    } else {
        format!("Thank you, {}!", escape_html(&query.username))
    };
    let product = escape_html(product_name);

    let features = if query.features.is_empty() {
        r#"<p class="muted">None selected</p>"#.to_string()
    } else {
        format!(
            "<ul>{}</ul>",
            query
                .features
                .iter()
                .map(|f| format!("<li>{}</li>", escape_html(f)))
                .join("")
        )
    };
    let review = if query.review.is_empty() {
        r#"<p class="muted">No written review</p>"#.to_string()
    } else {
        format!("<p>{}</p>", escape_html(&query.review))
    };

    let rows = [
        row("Product", &product),
        row("Rating", &or_not_provided(&query.rating, |r| format!("{r} / 5"))),
        row("Installed", &or_not_provided(&query.install_date, |d| d)),
        row("Features", &features),
        row("Review", &review),
        row("Submission Count (you)", &count.to_string()),
    ];

    format!(
        "<h2>{greeting}</h2>\n<p>Your review for <strong>{product}</strong> has been received.</p>\n<div class=\"card-detail\">\n{}\n</div>",
        rows.join("\n")
    )
}
