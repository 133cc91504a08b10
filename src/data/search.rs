//! Cross-year player search over the appearance index.
//!
//! Search is a pure lookup: no state, no subscriptions. The query is
//! matched case-insensitively as a substring of each indexed display
//! name, results are ranked by career length (most seasons first, ties in
//! index order), and the list is capped so a one-letter query stays
//! renderable.

use crate::data::index::IndexEntry;
use crate::domain::Dataset;

/// Maximum number of search results returned.
pub const MAX_RESULTS: usize = 50;

/// Searches players by name across all seasons.
///
/// The query is trimmed and lowercased; an empty normalized query (or an
/// empty index) returns no results. Every index entry whose display name
/// contains the normalized query as a case-insensitive substring is
/// returned, ordered by descending appearance count. The sort is stable,
/// so entries with equal counts keep their index encounter order. At most
/// [`MAX_RESULTS`] entries are returned.
///
/// # Examples
///
/// ```
/// use dugout::data::search_players;
/// use dugout::domain::Dataset;
///
/// let dataset = Dataset::default();
/// assert!(search_players(&dataset, "  ").is_empty());
/// ```
#[must_use]
pub fn search_players<'a>(dataset: &'a Dataset, query: &str) -> Vec<&'a IndexEntry> {
    let normalized = query.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&IndexEntry> = dataset
        .index
        .entries()
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&normalized))
        .collect();

    results.sort_by(|a, b| b.appearances.len().cmp(&a.appearances.len()));
    results.truncate(MAX_RESULTS);

    tracing::trace!(query = %normalized, count = results.len(), "player search");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::index::PlayerIndex;
    use crate::domain::{Player, Position, SeasonRoster};

    /// Builds a dataset where each (id, name) plays shortstop for
    /// `seasons` consecutive years starting at distinct start years so
    /// careers never collide.
    fn dataset_of(players: &[(&str, &str, u16)]) -> Dataset {
        let mut dataset = Dataset::default();
        let mut start = 1900u16;
        for (id, name, seasons) in players {
            for offset in 0..*seasons {
                let year = start + offset;
                let roster = dataset.years.entry(year.to_string()).or_insert_with(SeasonRoster::default);
                // One shortstop per season is enough for search purposes;
                // later players shift to an open year range.
                roster.position_players.insert(
                    Position::Short,
                    Player {
                        player_id: Some((*id).to_string()),
                        name: Some((*name).to_string()),
                        ..Player::default()
                    },
                );
            }
            start += seasons + 1;
        }
        dataset.index = PlayerIndex::build(&dataset);
        dataset
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let dataset = dataset_of(&[("jeterde01", "Derek Jeter", 19)]);

        let lower = search_players(&dataset, "jeter");
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].name, "Derek Jeter");
        assert_eq!(lower[0].appearances.len(), 19);

        let upper = search_players(&dataset, "JETER");
        assert_eq!(upper, lower);
    }

    #[test]
    fn query_is_trimmed_and_empty_query_matches_nothing() {
        let dataset = dataset_of(&[("jeterde01", "Derek Jeter", 3)]);

        assert_eq!(search_players(&dataset, "  jeter  ").len(), 1);
        assert!(search_players(&dataset, "").is_empty());
        assert!(search_players(&dataset, "   ").is_empty());
    }

    #[test]
    fn longer_careers_rank_first() {
        let dataset = dataset_of(&[("martibi02", "Billy Martin", 3), ("riverma01", "Mariano Rivera", 12)]);

        let results = search_players(&dataset, "ma");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].name, "Mariano Rivera");
        assert_eq!(results[1].name, "Billy Martin");
    }

    #[test]
    fn equal_careers_keep_index_order() {
        let dataset = dataset_of(&[("aaronha01", "Hank Aaron", 2), ("aaronto01", "Tommie Aaron", 2)]);

        let results = search_players(&dataset, "aaron");
        assert_eq!(results[0].name, "Hank Aaron");
        assert_eq!(results[1].name, "Tommie Aaron");
    }

    #[test]
    fn results_are_capped() {
        let players: Vec<(String, String)> = (0..60)
            .map(|i| (format!("smith{i:02}"), format!("Smith Number{i}")))
            .collect();
        let specs: Vec<(&str, &str, u16)> = players
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str(), 1))
            .collect();
        let dataset = dataset_of(&specs);

        assert_eq!(search_players(&dataset, "smith").len(), MAX_RESULTS);
    }

    #[test]
    fn unindexed_dataset_matches_nothing() {
        let dataset = Dataset::default();
        assert!(search_players(&dataset, "jeter").is_empty());
    }
}
