use serde::Serialize;

use crate::catalog;
use crate::render::review::{render_confirmation, render_no_submission};
use crate::state::increment_review_count;
use crate::storage::{KeyValueStore, StorageError};

/// Fields submitted by the review form.
///
/// `product` is the only field whose presence matters: it is `Some` even
/// when submitted with an empty value. Missing text fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewQuery {
    pub product: Option<String>,
    pub rating: String,
    pub install_date: String,
    pub features: Vec<String>,
    pub review: String,
    pub username: String,
}

impl ReviewQuery {
    /// Parses a query string, with or without the leading `?`.
    ///
    /// For single-valued fields the first occurrence wins; `features` keeps
    /// every occurrence in order. Unrecognized names are ignored.
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut out = Self::default();
        let mut seen_rating = false;
        let mut seen_install = false;
        let mut seen_review = false;
        let mut seen_username = false;
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "product" => {
                    if out.product.is_none() {
                        out.product = Some(value);
                    }
                }
                "rating" if !seen_rating => {
                    seen_rating = true;
                    out.rating = value;
                }
                "installDate" if !seen_install => {
                    seen_install = true;
                    out.install_date = value;
                }
                "review" if !seen_review => {
                    seen_review = true;
                    out.review = value;
                }
                "username" if !seen_username => {
                    seen_username = true;
                    out.username = value;
                }
                "features" => out.features.push(value),
                _ => {}
            }
        }
        out
    }

    pub fn is_submission(&self) -> bool {
        self.product.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub submitted: bool,
    pub product_name: Option<String>,
    /// Counter value after this load; `None` when nothing was counted.
    pub submission_count: Option<u64>,
    pub markup: String,
}

/// Handles one load of the confirmation view.
///
/// The stored counter is incremented exactly once when `product` is present
/// and left untouched otherwise.
pub fn confirm<S: KeyValueStore + ?Sized>(
    store: &mut S,
    query: &ReviewQuery,
) -> Result<Confirmation, StorageError> {
    let Some(product_id) = query.product.as_deref() else {
        return Ok(Confirmation {
            submitted: false,
            product_name: None,
            submission_count: None,
            markup: render_no_submission(),
        });
    };

    let product_name = catalog::product_name(product_id).to_string();
    let count = increment_review_count(store)?;
    Ok(Confirmation {
        submitted: true,
        markup: render_confirmation(query, &product_name, count),
        product_name: Some(product_name),
        submission_count: Some(count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_leading_question_mark_and_repeated_features() {
        let q = ReviewQuery::parse("?product=prd-002&rating=4&features=a&features=b");
        assert_eq!(q.product.as_deref(), Some("prd-002"));
        assert_eq!(q.rating, "4");
        assert_eq!(q.features, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(q.review, "");
    }

    #[test]
    fn parse_decodes_form_encoding() {
        let q = ReviewQuery::parse(
            "product=prd-001&review=Great+fit%21&username=J%C3%BAlia&installDate=2024-05-01",
        );
        assert_eq!(q.review, "Great fit!");
        assert_eq!(q.username, "Júlia");
        assert_eq!(q.install_date, "2024-05-01");
    }

    #[test]
    fn empty_product_value_still_counts_as_present() {
        let q = ReviewQuery::parse("product=&rating=3");
        assert!(q.is_submission());
        assert_eq!(q.product.as_deref(), Some(""));
    }

    #[test]
    fn first_value_wins_for_single_fields() {
        let q = ReviewQuery::parse("product=prd-001&product=prd-002&rating=1&rating=5");
        assert_eq!(q.product.as_deref(), Some("prd-001"));
        assert_eq!(q.rating, "1");
    }

    #[test]
    fn missing_product_is_not_a_submission() {
        assert!(!ReviewQuery::parse("").is_submission());
        assert!(!ReviewQuery::parse("?rating=5&username=x").is_submission());
    }
}
