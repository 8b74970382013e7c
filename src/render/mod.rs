pub mod review;

use itertools::Itertools;

use crate::catalog::{Product, Temple, Tip};
use crate::filter::dedication_year;

pub const FAVORITE_GLYPH: &str = "★";
pub const NOT_FAVORITE_GLYPH: &str = "☆";

pub const NO_TIPS_MESSAGE: &str = "No tips match this filter.";
pub const NO_FAVORITES_MESSAGE: &str = "No favorites saved yet.";
pub const NO_TEMPLES_MESSAGE: &str = "No temples match this filter.";

/// Escapes `& < > " '`, ampersand first so produced entities are not re-escaped.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Groups digits in threes with commas (en-US style).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// The element whose content is replaced wholesale on every render.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub id: &'static str,
    inner_html: String,
}

impl Container {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            inner_html: String::new(),
        }
    }

    pub fn replace(&mut self, markup: String) {
        self.inner_html = markup;
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }
}

fn muted(message: &str) -> String {
    format!(r#"<p class="muted">{}</p>"#, escape_html(message))
}

fn tip_card(tip: &Tip, is_favorite: bool) -> String {
    let glyph = if is_favorite {
        FAVORITE_GLYPH
    } else {
        NOT_FAVORITE_GLYPH
    };
    format!(
        r#"<div class="tip" data-id="{id}">
  <div>
    <div class="text">{text}</div>
    <div class="meta">{difficulty}</div>
  </div>
  <div>
    <button class="fav-btn" aria-pressed="{is_favorite}">{glyph}</button>
  </div>
</div>"#,
        id = tip.id,
        text = escape_html(tip.text),
        difficulty = tip.difficulty.as_str(),
    )
}

/// Renders tip cards; the glyph reflects membership in `favorites`.
pub fn render_tips(tips: &[&Tip], favorites: &[u32]) -> String {
    if tips.is_empty() {
        return muted(NO_TIPS_MESSAGE);
    }
    tips.iter()
        .map(|t| tip_card(t, favorites.contains(&t.id)))
        .join("\n")
}

/// Renders the favorites-only view, every card marked as a favorite.
pub fn render_favorite_tips(tips: &[&Tip]) -> String {
    if tips.is_empty() {
        return muted(NO_FAVORITES_MESSAGE);
    }
    tips.iter().map(|t| tip_card(t, true)).join("\n")
}

fn temple_card(temple: &Temple) -> String {
    let alt = format!("{} — {}", temple.temple_name, temple.location);
    let year = dedication_year(temple.dedicated)
        .map(|y| y.to_string())
        .unwrap_or_default();
    format!(
        r#"<figure>
  <img src="{src}" alt="{alt}" loading="lazy" width="400" height="250">
  <figcaption>
    <div class="temple-info">
      <div class="temple-name">{name}</div>
      <div class="temple-meta">{location} • Dedic.: {dedicated}</div>
    </div>
    <div>
      <div class="temple-area">{area} sq ft</div>
      <div class="temple-year muted" aria-hidden="true">{year}</div>
    </div>
  </figcaption>
</figure>"#,
        src = escape_html(temple.image_url),
        alt = escape_html(&alt),
        name = escape_html(temple.temple_name),
        location = escape_html(temple.location),
        dedicated = escape_html(temple.dedicated),
        area = format_thousands(temple.area),
    )
}

pub fn render_temples(temples: &[&Temple]) -> String {
    if temples.is_empty() {
        return format!(
            r#"<p class="no-results">{}</p>"#,
            escape_html(NO_TEMPLES_MESSAGE)
        );
    }
    temples.iter().map(|t| temple_card(t)).join("\n")
}

/// `<option>` elements for the review form's product select.
pub fn render_product_options(products: &[Product]) -> String {
    products
        .iter()
        .map(|p| {
            format!(
                r#"<option value="{}">{}</option>"#,
                escape_html(p.id),
                escape_html(p.name)
            )
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PRODUCTS, TEMPLES, TIPS};
    use crate::filter::{filter_temples, TempleFilter};

    #[test]
    fn escape_handles_each_special_character() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn escape_combined_input() {
        assert_eq!(
            escape_html(r#"Bob & "Friend" <3>"#),
            "Bob &amp; &quot;Friend&quot; &lt;3&gt;"
        );
        assert_eq!(escape_html("it's <b>&amp;</b>"), "it&#039;s &lt;b&gt;&amp;amp;&lt;/b&gt;");
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        let plain = "Walk briskly for 20 minutes";
        assert_eq!(escape_html(plain), plain);
        assert_eq!(escape_html(&escape_html(plain)), plain);
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(6861), "6,861");
        assert_eq!(format_thousands(156558), "156,558");
        assert_eq!(format_thousands(1234567), "1,234,567");
    }

    #[test]
    fn container_replaces_whole_content() {
        let mut c = Container::new("gallery");
        c.replace("<p>one</p>".to_string());
        c.replace("<p>two</p>".to_string());
        assert_eq!(c.inner_html(), "<p>two</p>");
    }

    #[test]
    fn tip_glyph_follows_favorites() {
        let tips: Vec<&Tip> = TIPS.iter().take(2).collect();
        let html = render_tips(&tips, &[2]);
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"aria-pressed="false">☆"#));
        assert!(html.contains(r#"aria-pressed="true">★"#));
    }

    #[test]
    fn empty_lists_render_no_results_fragment() {
        assert_eq!(
            render_tips(&[], &[]),
            r#"<p class="muted">No tips match this filter.</p>"#
        );
        assert_eq!(
            render_favorite_tips(&[]),
            r#"<p class="muted">No favorites saved yet.</p>"#
        );
        assert_eq!(
            render_temples(&[]),
            r#"<p class="no-results">No temples match this filter.</p>"#
        );
    }

    #[test]
    fn temple_card_has_grouped_area_and_year() {
        let small = filter_temples(TEMPLES, TempleFilter::Small);
        let html = render_temples(&small);
        assert!(html.contains("6,861 sq ft"));
        assert!(html.contains("Lima Perú"));
        assert!(html.contains(r#"aria-hidden="true">2020</div>"#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn temple_without_year_renders_blank_year() {
        let t = Temple {
            temple_name: "A & B",
            location: "Somewhere",
            dedicated: "announced",
            area: 1000,
            image_url: "images/temple.jpg",
        };
        let html = render_temples(&[&t]);
        assert!(html.contains(r#"aria-hidden="true"></div>"#));
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("A & B"));
    }

    #[test]
    fn product_options_list_every_product() {
        let html = render_product_options(PRODUCTS);
        assert_eq!(html.matches("<option ").count(), PRODUCTS.len());
        assert!(html.contains(r#"<option value="prd-003">MaxiFit Hoodie - Lightweight</option>"#));
    }
}
