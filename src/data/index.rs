//! Player-appearance index derived from the dataset.
//!
//! This module builds the cross-year lookup structure that powers search
//! and the career section of the player card: a mapping from a stable
//! player key to that player's display name and every roster appearance
//! across the franchise's history.
//!
//! The index is built once at load time, attached to the dataset, and
//! treated as immutable thereafter. Appearances are kept in discovery
//! order; entry iteration order is the order keys were first encountered,
//! which keeps search-ranking ties deterministic.

use std::collections::HashMap;

use crate::domain::{Dataset, Player, Role, RosterSlot, POSITION_ORDER};

/// One roster appearance: a (year, position label, role, player record)
/// tuple.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Season of the appearance.
    pub year: u16,
    /// Position label in that year's roster (`"SS"`, `"SP1"`, `"CL"`).
    pub pos: String,
    /// Role category for the appearance.
    pub role: Role,
    /// That year's player record.
    pub player: Player,
}

/// All appearances recorded for one player key.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexEntry {
    /// Stable player key (`playerID`, or lowercase name when absent).
    pub key: String,
    /// Display name, taken from the first appearance encountered.
    pub name: String,
    /// Appearances in discovery order (not necessarily by year).
    pub appearances: Vec<Appearance>,
}

impl IndexEntry {
    /// Returns every appearance year, ascending and deduplicated.
    ///
    /// A player can hold two slots in one season (e.g. a starter who also
    /// closed); career listings show each season once.
    #[must_use]
    pub fn years(&self) -> Vec<u16> {
        let mut years: Vec<u16> = self.appearances.iter().map(|a| a.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Returns the most recent appearance year.
    ///
    /// The index never stores an entry without at least one appearance.
    #[must_use]
    pub fn last_year(&self) -> Option<u16> {
        self.appearances.iter().map(|a| a.year).max()
    }

    /// Returns the distinct position labels held, in first-seen order.
    #[must_use]
    pub fn positions(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for appearance in &self.appearances {
            if !seen.contains(&appearance.pos.as_str()) {
                seen.push(appearance.pos.as_str());
            }
        }
        seen
    }
}

/// Mapping from stable player key to career appearances.
///
/// Built once by [`PlayerIndex::build`]; lookups are O(1) by key, and
/// [`PlayerIndex::entries`] iterates in first-encounter order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerIndex {
    entries: Vec<IndexEntry>,
    by_key: HashMap<String, usize>,
}

impl PlayerIndex {
    /// Builds the index by walking every season roster.
    ///
    /// For each season: the named fielding positions (in conventional
    /// order), then the rotation by 1-based ordinal, then the closer.
    /// Players without a display name are skipped entirely. Season keys
    /// that do not parse as years are ignored, consistent with the
    /// loader's year derivation.
    #[must_use]
    pub fn build(dataset: &Dataset) -> Self {
        let _span = tracing::debug_span!("build_player_index").entered();

        let mut index = Self::default();

        for (year_key, roster) in &dataset.years {
            let Ok(year) = year_key.parse::<u16>() else {
                continue;
            };

            for pos in POSITION_ORDER {
                let slot = RosterSlot::Position(pos);
                if let Some(player) = roster.player_at(slot) {
                    index.record(player, year, slot);
                }
            }
            for ordinal in 0..roster.pitchers.starters.len() {
                let slot = RosterSlot::Starter(ordinal);
                if let Some(player) = roster.player_at(slot) {
                    index.record(player, year, slot);
                }
            }
            if let Some(player) = roster.player_at(RosterSlot::Closer) {
                index.record(player, year, RosterSlot::Closer);
            }
        }

        tracing::debug!(players = index.entries.len(), "player index built");
        index
    }

    fn record(&mut self, player: &Player, year: u16, slot: RosterSlot) {
        let Some(key) = player.index_key() else {
            return;
        };
        let Some(name) = player.name.clone() else {
            return;
        };

        let slot_index = match self.by_key.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.entries.len();
                self.entries.push(IndexEntry {
                    key: key.clone(),
                    name,
                    appearances: Vec::new(),
                });
                self.by_key.insert(key, index);
                index
            }
        };

        self.entries[slot_index].appearances.push(Appearance {
            year,
            pos: slot.label(),
            role: slot.role(),
            player: player.clone(),
        });
    }

    /// Returns the entry for a player key, if indexed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IndexEntry> {
        self.by_key.get(key).map(|&i| &self.entries[i])
    }

    /// Returns all entries in first-encounter order.
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    /// Number of indexed players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Position, SeasonRoster};

    fn player(id: Option<&str>, name: Option<&str>) -> Player {
        Player {
            player_id: id.map(str::to_string),
            name: name.map(str::to_string),
            ..Player::default()
        }
    }

    fn dataset_with_shortstop(name: &str, id: &str, years: std::ops::RangeInclusive<u16>) -> Dataset {
        let mut dataset = Dataset::default();
        for year in years {
            let mut roster = SeasonRoster::default();
            roster
                .position_players
                .insert(Position::Short, player(Some(id), Some(name)));
            dataset.years.insert(year.to_string(), roster);
        }
        dataset
    }

    #[test]
    fn career_appearances_accumulate_across_years() {
        let dataset = dataset_with_shortstop("Derek Jeter", "jeterde01", 1996..=2014);
        let index = PlayerIndex::build(&dataset);

        let entry = index.get("jeterde01").unwrap();
        assert_eq!(entry.name, "Derek Jeter");
        assert_eq!(entry.appearances.len(), 19);
        assert_eq!(entry.appearances[0].pos, "SS");
        assert_eq!(entry.appearances[0].role, Role::Hitter);
        assert_eq!(entry.years().first(), Some(&1996));
        assert_eq!(entry.last_year(), Some(2014));
    }

    #[test]
    fn rotation_and_closer_get_role_labels() {
        let mut roster = SeasonRoster::default();
        roster.pitchers.starters = vec![
            player(Some("fordwh01"), Some("Whitey Ford")),
            player(Some("turlebo01"), Some("Bob Turley")),
        ];
        roster.pitchers.closer = Some(player(Some("riverma01"), Some("Mariano Rivera")));

        let mut dataset = Dataset::default();
        dataset.years.insert("1956".to_string(), roster);
        let index = PlayerIndex::build(&dataset);

        assert_eq!(index.get("fordwh01").unwrap().appearances[0].pos, "SP1");
        assert_eq!(index.get("turlebo01").unwrap().appearances[0].pos, "SP2");
        let closer = index.get("riverma01").unwrap();
        assert_eq!(closer.appearances[0].pos, "CL");
        assert_eq!(closer.appearances[0].role, Role::Closer);
    }

    #[test]
    fn nameless_players_are_skipped() {
        let mut roster = SeasonRoster::default();
        roster
            .position_players
            .insert(Position::Catcher, player(Some("ghost01"), None));
        roster
            .position_players
            .insert(Position::Short, player(None, Some("Phil Rizzuto")));

        let mut dataset = Dataset::default();
        dataset.years.insert("1950".to_string(), roster);
        let index = PlayerIndex::build(&dataset);

        assert_eq!(index.len(), 1);
        assert!(index.get("ghost01").is_none());
        // No playerID: keyed by lowercase display name.
        assert_eq!(index.get("phil rizzuto").unwrap().name, "Phil Rizzuto");
    }

    #[test]
    fn non_numeric_season_keys_are_ignored() {
        let mut roster = SeasonRoster::default();
        roster
            .position_players
            .insert(Position::Short, player(Some("jeterde01"), Some("Derek Jeter")));

        let mut dataset = Dataset::default();
        dataset.years.insert("legends".to_string(), roster);
        let index = PlayerIndex::build(&dataset);

        assert!(index.is_empty());
    }

    #[test]
    fn duplicate_season_slots_count_once_in_career_years() {
        let mut roster = SeasonRoster::default();
        roster.pitchers.starters = vec![player(Some("gomezle01"), Some("Lefty Gomez"))];
        roster.pitchers.closer = Some(player(Some("gomezle01"), Some("Lefty Gomez")));

        let mut dataset = Dataset::default();
        dataset.years.insert("1937".to_string(), roster);
        let index = PlayerIndex::build(&dataset);

        let entry = index.get("gomezle01").unwrap();
        assert_eq!(entry.appearances.len(), 2);
        assert_eq!(entry.years(), vec![1937]);
        assert_eq!(entry.positions(), vec!["SP1", "CL"]);
    }
}
