//! Catalog search
//!
//! Case-insensitive substring match over title and artist. Results keep
//! their catalog index so a front end can play them directly.

use groove_core::{Catalog, Track};

/// One catalog entry matching a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub index: usize,
    pub track: &'a Track,
}

/// Outcome of filtering the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<'a> {
    /// Query was blank; show the prompt, not an empty result list
    NotSearched,

    /// Query was non-blank but nothing matched
    NoMatches,

    /// Matches in catalog order
    Matches(Vec<SearchHit<'a>>),
}

impl<'a> SearchResult<'a> {
    /// Matching hits; empty unless `Matches`
    pub fn hits(&self) -> &[SearchHit<'a>] {
        match self {
            SearchResult::Matches(hits) => hits,
            _ => &[],
        }
    }

    pub fn is_searched(&self) -> bool {
        !matches!(self, SearchResult::NotSearched)
    }
}

/// Filter the catalog by a free-text query
///
/// A query that is empty after trimming yields `NotSearched`. Otherwise
/// the query is lower-cased (but not trimmed) and matched as a substring
/// of the lower-cased title or artist.
pub fn filter_catalog<'a>(query: &str, catalog: &'a Catalog) -> SearchResult<'a> {
    if query.trim().is_empty() {
        return SearchResult::NotSearched;
    }

    let needle = query.to_lowercase();
    let hits: Vec<SearchHit<'a>> = catalog
        .iter()
        .enumerate()
        .filter(|(_, track)| track.matches_lowercase(&needle))
        .map(|(index, track)| SearchHit { index, track })
        .collect();

    tracing::debug!(query, matches = hits.len(), "Catalog filtered");

    if hits.is_empty() {
        SearchResult::NoMatches
    } else {
        SearchResult::Matches(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_is_not_searched() {
        let catalog = Catalog::sample();
        assert_eq!(filter_catalog("", &catalog), SearchResult::NotSearched);
        assert_eq!(filter_catalog("   ", &catalog), SearchResult::NotSearched);
    }

    #[test]
    fn matches_artist_case_insensitively() {
        let catalog = Catalog::sample();
        let result = filter_catalog("DRAKE", &catalog);

        let hits = result.hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].index, 1);
        assert_eq!(hits[0].track.title, "Midnight Drive");
    }

    #[test]
    fn matches_title_substring() {
        let catalog = Catalog::sample();
        let result = filter_catalog("beats", &catalog);
        assert_eq!(result.hits().len(), 1);
        assert_eq!(result.hits()[0].track.artist, "Billie Eilish");
    }

    #[test]
    fn no_matches_is_distinct_from_not_searched() {
        let catalog = Catalog::sample();
        let result = filter_catalog("zzz-no-match", &catalog);
        assert_eq!(result, SearchResult::NoMatches);
        assert!(result.is_searched());
        assert!(result.hits().is_empty());
    }

    #[test]
    fn query_is_not_trimmed_for_matching() {
        let catalog = Catalog::sample();
        // Leading space means "drake" must be preceded by a space
        assert_eq!(filter_catalog(" drake", &catalog), SearchResult::NoMatches);
    }
}
