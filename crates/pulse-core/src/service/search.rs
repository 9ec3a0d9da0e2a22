//! Approximate search over the denormalized post corpus.
//!
//! Scores are distances in [0, 1] where 0 is an exact match. Results
//! scoring worse than [`SCORE_CUTOFF`] are dropped; everything else is
//! returned most-similar first.

use strsim::normalized_levenshtein;

use crate::domain::{Post, SocialPost};

/// Results with a distance above this are not similar enough to return.
pub const SCORE_CUTOFF: f64 = 0.3;

/// Which fields a search runs over.
#[derive(Debug, Clone, Copy)]
pub enum SearchFields {
    /// Title only - the `get_all_*` filter.
    TitleOnly,
    /// Title and body text - the `search_*` endpoints.
    TitleAndText,
}

/// A searchable entry: both post kinds expose a title and a body text.
pub trait Searchable {
    fn title(&self) -> &str;
    fn text(&self) -> &str;
}

impl Searchable for Post {
    fn title(&self) -> &str {
        &self.title
    }

    fn text(&self) -> &str {
        &self.text
    }
}

impl Searchable for SocialPost {
    fn title(&self) -> &str {
        &self.title
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Distance between a query and one candidate field.
///
/// Case-insensitive. Containment counts as exact; otherwise each query
/// token is matched against its closest candidate token and the
/// similarities averaged, so word order does not matter but every query
/// word has to land somewhere.
pub fn score(query: &str, candidate: &str) -> f64 {
    let query = query.to_lowercase();
    let candidate = candidate.to_lowercase();
    if query.is_empty() || candidate.contains(&query) {
        return 0.0;
    }

    let candidate_tokens: Vec<&str> = candidate.split_whitespace().collect();
    if candidate_tokens.is_empty() {
        return 1.0;
    }

    let mut total = 0.0;
    let mut tokens = 0usize;
    for token in query.split_whitespace() {
        let best = candidate_tokens
            .iter()
            .map(|c| normalized_levenshtein(token, c))
            .fold(0.0, f64::max);
        total += best;
        tokens += 1;
    }
    if tokens == 0 {
        return 1.0;
    }
    1.0 - total / tokens as f64
}

/// Rank `items` against `query`, best first, dropping anything past the
/// cutoff. Ties keep scan order.
pub fn rank<T: Searchable>(items: Vec<T>, query: &str, fields: SearchFields) -> Vec<T> {
    let mut scored: Vec<(f64, T)> = items
        .into_iter()
        .map(|item| (item_score(&item, query, fields), item))
        .filter(|(s, _)| *s <= SCORE_CUTOFF)
        .collect();
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, item)| item).collect()
}

fn item_score<T: Searchable>(item: &T, query: &str, fields: SearchFields) -> f64 {
    let title = score(query, item.title());
    match fields {
        SearchFields::TitleOnly => title,
        SearchFields::TitleAndText => title.min(score(query, item.text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, text: &str) -> Post {
        Post::new(
            title.to_string(),
            text.to_string(),
            "someone".to_string(),
            true,
            false,
        )
    }

    #[test]
    fn exact_title_scores_zero() {
        assert_eq!(score("Beach Cleanup", "beach cleanup"), 0.0);
    }

    #[test]
    fn contained_phrase_scores_zero() {
        assert_eq!(score("the park", "Help rebuild the park"), 0.0);
    }

    #[test]
    fn cutoff_keeps_close_and_drops_unrelated() {
        let posts = vec![
            post("Help rebuild the park", "Volunteers wanted this weekend"),
            post("Totally unrelated", "Nothing to see here"),
        ];
        let ranked = rank(posts, "rebuild park", SearchFields::TitleAndText);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].title, "Help rebuild the park");
    }

    #[test]
    fn title_only_ignores_body_matches() {
        let posts = vec![post("Winter drive", "rebuild park volunteers")];
        assert!(rank(posts, "rebuild park", SearchFields::TitleOnly).is_empty());
    }

    #[test]
    fn results_come_back_most_similar_first() {
        let posts = vec![
            post("Community garden clean day", "tools provided"),
            post("Garden cleanup", "bring gloves"),
        ];
        let ranked = rank(posts, "garden cleanup", SearchFields::TitleAndText);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].title, "Garden cleanup");
    }
}
