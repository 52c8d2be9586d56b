//! Case-insensitive keyword matching on article designations.
//!
//! # Invariants
//! - An empty keyword matches every designation.
//! - Matching is a plain substring test after Unicode lowercase folding:
//!   no ranking, no word boundaries, no fuzziness.
//! - The keyword is used as given; surrounding whitespace is significant.

use crate::model::article::Article;

/// Returns whether `designation` contains `keyword`, ignoring case.
pub fn matches_keyword(designation: &str, keyword: &str) -> bool {
    contains_folded(designation, &keyword.to_lowercase())
}

/// Keeps the articles whose designation matches `keyword`, preserving order.
pub fn filter_by_keyword(articles: Vec<Article>, keyword: &str) -> Vec<Article> {
    let needle = keyword.to_lowercase();
    articles
        .into_iter()
        .filter(|article| contains_folded(&article.designation, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::{filter_by_keyword, matches_keyword};
    use crate::model::article::Article;

    fn article(id: i64, designation: &str) -> Article {
        Article {
            id,
            designation: designation.to_string(),
            purchase_price: 0.0,
            install_time: 0.0,
        }
    }

    #[test]
    fn matching_ignores_ascii_case() {
        assert!(matches_keyword("Vis Inox", "VIS"));
        assert!(matches_keyword("Vis Inox", "inox"));
        assert!(!matches_keyword("Vis Inox", "ecrou"));
    }

    #[test]
    fn matching_folds_non_ascii_letters() {
        assert!(matches_keyword("ÉCROU frein", "écrou"));
    }

    #[test]
    fn empty_keyword_matches_everything() {
        assert!(matches_keyword("", ""));
        assert!(matches_keyword("Cheville", ""));
    }

    #[test]
    fn whitespace_keyword_is_not_trimmed() {
        assert!(!matches_keyword("Vis", " "));
        assert!(matches_keyword("Vis M6", " "));
    }

    #[test]
    fn filter_agrees_with_single_match() {
        let articles = vec![
            article(1, "Vis Inox"),
            article(2, "ÉCROU frein"),
            article(3, "Cheville"),
        ];
        for keyword in ["", "VIS", "écrou", "x", " ", "zz"] {
            let expected: Vec<i64> = articles
                .iter()
                .filter(|article| matches_keyword(&article.designation, keyword))
                .map(|article| article.id)
                .collect();
            let filtered: Vec<i64> = filter_by_keyword(articles.clone(), keyword)
                .iter()
                .map(|article| article.id)
                .collect();
            assert_eq!(filtered, expected, "keyword `{keyword}`");
        }
    }

    #[test]
    fn filter_preserves_input_order() {
        let articles = vec![article(1, "Vis M6"), article(2, "Ecrou"), article(3, "vis M8")];
        let ids: Vec<i64> = filter_by_keyword(articles, "vis")
            .iter()
            .map(|article| article.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
