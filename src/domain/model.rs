//! Franchise dataset model.
//!
//! This module defines the decoded shape of the season dataset: one
//! [`SeasonRoster`] per year, era definitions, season records, and the
//! assorted optional extras (championship years, on-this-date moments,
//! leaderboards). Everything here is immutable once loaded; missing
//! optional fields are simply absent and are never treated as errors.
//!
//! Field names follow the dataset's JSON document, which uses baseball
//! abbreviations (`HR`, `RBI`, `ERA`, ...) and a handful of camelCase keys
//! (`worldSeries`, `playerID`). Serde renames keep the Rust side idiomatic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::data::index::PlayerIndex;

/// The eight named fielding positions, in conventional display order.
pub const POSITION_ORDER: [Position; 8] = [
    Position::Catcher,
    Position::First,
    Position::Second,
    Position::Third,
    Position::Short,
    Position::Left,
    Position::Center,
    Position::Right,
];

/// Number of starting-pitcher slots shown on the field diagram.
///
/// Rosters may carry fewer starters; the remaining slots render as empty.
pub const STARTER_SLOTS: usize = 5;

/// A named fielding position.
///
/// Serialized using the dataset's scorecard abbreviations (`"C"`, `"1B"`,
/// `"SS"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "C")]
    Catcher,
    #[serde(rename = "1B")]
    First,
    #[serde(rename = "2B")]
    Second,
    #[serde(rename = "3B")]
    Third,
    #[serde(rename = "SS")]
    Short,
    #[serde(rename = "LF")]
    Left,
    #[serde(rename = "CF")]
    Center,
    #[serde(rename = "RF")]
    Right,
}

impl Position {
    /// Returns the scorecard abbreviation (`"C"`, `"1B"`, ...).
    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Catcher => "C",
            Self::First => "1B",
            Self::Second => "2B",
            Self::Third => "3B",
            Self::Short => "SS",
            Self::Left => "LF",
            Self::Center => "CF",
            Self::Right => "RF",
        }
    }

    /// Returns the spelled-out position name for detail views.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Catcher => "Catcher",
            Self::First => "First Base",
            Self::Second => "Second Base",
            Self::Third => "Third Base",
            Self::Short => "Shortstop",
            Self::Left => "Left Field",
            Self::Center => "Center Field",
            Self::Right => "Right Field",
        }
    }
}

/// Coarse player category determining which stats are relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Position player; batting stats apply.
    Hitter,
    /// Starting pitcher; starts and win-loss record apply.
    Starter,
    /// Relief ace; saves apply.
    Closer,
}

/// A reference to one slot in a season roster.
///
/// Slots exist independently of whether a player occupies them: the field
/// diagram always shows all eight positions, [`STARTER_SLOTS`] starter
/// slots, and the closer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterSlot {
    /// A named fielding position.
    Position(Position),
    /// A starting-pitcher slot, zero-based.
    Starter(usize),
    /// The closer slot.
    Closer,
}

impl RosterSlot {
    /// Returns the display label for the slot (`"SS"`, `"SP1"`, `"CL"`).
    ///
    /// Starter labels are 1-based ordinals, matching the appearance index.
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Position(pos) => pos.abbrev().to_string(),
            Self::Starter(i) => format!("SP{}", i + 1),
            Self::Closer => "CL".to_string(),
        }
    }

    /// Returns the spelled-out label for detail views.
    #[must_use]
    pub fn full_label(self) -> String {
        match self {
            Self::Position(pos) => pos.full_name().to_string(),
            Self::Starter(i) => format!("Starter #{}", i + 1),
            Self::Closer => "Closer".to_string(),
        }
    }

    /// Returns the role category for players occupying this slot.
    #[must_use]
    pub const fn role(self) -> Role {
        match self {
            Self::Position(_) => Role::Hitter,
            Self::Starter(_) => Role::Starter,
            Self::Closer => Role::Closer,
        }
    }
}

/// Postseason outcome marker for a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorldSeries {
    /// Won the World Series.
    #[serde(rename = "won")]
    Won,
    /// Reached the World Series and lost.
    #[serde(rename = "lost")]
    Lost,
}

/// One player's season entry in a roster.
///
/// Every stat field is optional; the dataset only carries the stats that
/// could be computed for that player-season. Rendering paths omit missing
/// fields rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Player {
    /// Stable player identifier; falls back to the lowercase display name
    /// as the index key when absent.
    #[serde(rename = "playerID", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,

    /// Display name. Players without one are skipped by the index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Famous nickname, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    /// Hall of Fame inductee.
    #[serde(default)]
    pub hof: bool,

    /// Retired uniform number, when the franchise retired it.
    #[serde(rename = "retiredNum", default, skip_serializing_if = "Option::is_none")]
    pub retired_num: Option<u8>,

    /// Award codes earned this season (`MVP`, `CY`, `AS`, `GG`, `SS`, `ROY`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<String>,

    // Batting.
    #[serde(rename = "G", default, skip_serializing_if = "Option::is_none")]
    pub games: Option<u32>,
    #[serde(rename = "AB", default, skip_serializing_if = "Option::is_none")]
    pub at_bats: Option<u32>,
    #[serde(rename = "R", default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<u32>,
    #[serde(rename = "H", default, skip_serializing_if = "Option::is_none")]
    pub hits: Option<u32>,
    #[serde(rename = "2B", default, skip_serializing_if = "Option::is_none")]
    pub doubles: Option<u32>,
    #[serde(rename = "3B", default, skip_serializing_if = "Option::is_none")]
    pub triples: Option<u32>,
    #[serde(rename = "HR", default, skip_serializing_if = "Option::is_none")]
    pub home_runs: Option<u32>,
    #[serde(rename = "RBI", default, skip_serializing_if = "Option::is_none")]
    pub rbi: Option<u32>,
    #[serde(rename = "BB", default, skip_serializing_if = "Option::is_none")]
    pub walks: Option<u32>,
    #[serde(rename = "SB", default, skip_serializing_if = "Option::is_none")]
    pub stolen_bases: Option<u32>,
    /// Batting average pre-formatted as a display string (e.g. `".312"`).
    #[serde(rename = "AVG", default, skip_serializing_if = "Option::is_none")]
    pub avg: Option<String>,

    // Pitching.
    #[serde(rename = "W", default, skip_serializing_if = "Option::is_none")]
    pub wins: Option<u32>,
    #[serde(rename = "L", default, skip_serializing_if = "Option::is_none")]
    pub losses: Option<u32>,
    #[serde(rename = "ERA", default, skip_serializing_if = "Option::is_none")]
    pub era: Option<f64>,
    /// Innings pitched pre-formatted as a display string (e.g. `"212.1"`).
    #[serde(rename = "IP", default, skip_serializing_if = "Option::is_none")]
    pub innings: Option<String>,
    #[serde(rename = "SO", default, skip_serializing_if = "Option::is_none")]
    pub strikeouts: Option<u32>,
    #[serde(rename = "GS", default, skip_serializing_if = "Option::is_none")]
    pub games_started: Option<u32>,
    #[serde(rename = "SV", default, skip_serializing_if = "Option::is_none")]
    pub saves: Option<u32>,
}

impl Player {
    /// Returns the stable index key: `playerID`, falling back to the
    /// lowercase display name. `None` when the player has no name either.
    #[must_use]
    pub fn index_key(&self) -> Option<String> {
        if let Some(id) = &self.player_id {
            return Some(id.clone());
        }
        self.name.as_ref().map(|n| n.to_lowercase())
    }

    /// Returns the last word of the display name, for compact node labels.
    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|n| n.split_whitespace().last())
    }

    /// Builds the short stat lines shown in a field-diagram node bubble.
    ///
    /// Line selection depends on the role: closers lead with saves,
    /// starters with starts and record, hitters with average and power
    /// numbers. When nothing better is available, games played is the
    /// fallback so a node is never blank.
    #[must_use]
    pub fn node_stat_lines(&self, role: Role) -> Vec<String> {
        let mut lines = Vec::new();
        match role {
            Role::Closer => {
                if let Some(sv) = self.saves {
                    lines.push(format!("{sv} SV"));
                }
                if let Some(era) = self.era {
                    lines.push(format!("{era:.2} ERA"));
                }
            }
            Role::Starter => {
                if let Some(gs) = self.games_started {
                    lines.push(format!("{gs} GS"));
                }
                if let (Some(w), Some(l)) = (self.wins, self.losses) {
                    lines.push(format!("{w}-{l}"));
                }
                if let Some(era) = self.era {
                    lines.push(format!("{era:.2} ERA"));
                }
            }
            Role::Hitter => {
                if let Some(avg) = &self.avg {
                    lines.push(avg.clone());
                }
                match (self.home_runs, self.rbi) {
                    (Some(hr), Some(rbi)) => lines.push(format!("{hr} HR  {rbi} RBI")),
                    (Some(hr), None) => lines.push(format!("{hr} HR")),
                    _ => {}
                }
            }
        }
        if lines.is_empty() {
            if let Some(g) = self.games {
                lines.push(format!("{g} G"));
            }
        }
        lines
    }
}

/// The pitching staff portion of a season roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PitchingStaff {
    /// Starting rotation in rotation order; may be shorter than
    /// [`STARTER_SLOTS`].
    #[serde(default)]
    pub starters: Vec<Player>,

    /// Relief ace, when the season had a recognized one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closer: Option<Player>,
}

/// One season's roster: fielders, rotation, closer, and outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SeasonRoster {
    /// Fielding positions present this season; absent positions render as
    /// empty slots.
    #[serde(default)]
    pub position_players: HashMap<Position, Player>,

    /// Rotation and closer.
    #[serde(default)]
    pub pitchers: PitchingStaff,

    /// Postseason outcome; absent when the season ended without a
    /// World Series appearance.
    #[serde(rename = "worldSeries", default, skip_serializing_if = "Option::is_none")]
    pub world_series: Option<WorldSeries>,
}

impl SeasonRoster {
    /// Returns the player occupying `slot`, if any.
    #[must_use]
    pub fn player_at(&self, slot: RosterSlot) -> Option<&Player> {
        match slot {
            RosterSlot::Position(pos) => self.position_players.get(&pos),
            RosterSlot::Starter(i) => self.pitchers.starters.get(i),
            RosterSlot::Closer => self.pitchers.closer.as_ref(),
        }
    }

    /// True when this season ended with a championship.
    #[must_use]
    pub fn won_title(&self) -> bool {
        self.world_series == Some(WorldSeries::Won)
    }
}

/// A named, contiguous, inclusive range of seasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Era {
    /// Stable era identifier, used to look up era quotes.
    pub id: String,
    /// Display label.
    pub label: String,
    /// First season of the era, inclusive.
    pub start: u16,
    /// Last season of the era, inclusive.
    pub end: u16,
    /// One-line flavor text shown with the label.
    pub tagline: String,
}

impl Era {
    /// True when `year` falls inside the era's inclusive range.
    #[must_use]
    pub const fn contains(&self, year: u16) -> bool {
        year >= self.start && year <= self.end
    }
}

/// A season's win-loss record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    #[serde(rename = "W")]
    pub wins: u16,
    #[serde(rename = "L")]
    pub losses: u16,
}

/// One "on this date" franchise moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Moment {
    /// Calendar month, 1-based.
    pub month: u8,
    /// Day of month, 1-based.
    pub day: u8,
    /// Season the moment belongs to; the banner jumps here when clicked.
    pub year: u16,
    /// Display text.
    pub text: String,
}

/// One ranked entry in a franchise leaderboard category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(rename = "playerID", default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    pub name: String,
    pub count: u32,
}

/// The full decoded season dataset.
///
/// Loaded once by [`crate::data::load`], which also derives the
/// [`PlayerIndex`] and attaches it here before the dataset is shared.
/// Treated as immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Dataset {
    /// Franchise identifier (e.g. `"NYA"`).
    #[serde(default)]
    pub team: String,

    /// Franchise display name.
    #[serde(rename = "teamName", default)]
    pub team_name: String,

    /// Season rosters keyed by year string. Non-numeric keys are ignored
    /// when the sorted year list is derived.
    pub years: BTreeMap<String, SeasonRoster>,

    /// Era definitions in chronological order.
    #[serde(default)]
    pub eras: Vec<Era>,

    /// Era id → famous quote.
    #[serde(rename = "eraQuotes", default)]
    pub era_quotes: HashMap<String, String>,

    /// Championship seasons.
    #[serde(rename = "wsWon", default)]
    pub ws_won: Vec<u16>,

    /// Seasons that reached the World Series and lost.
    #[serde(rename = "wsLost", default)]
    pub ws_lost: Vec<u16>,

    /// Year string → season win-loss record.
    #[serde(rename = "seasonRecords", default)]
    pub season_records: HashMap<String, SeasonRecord>,

    /// Franchise moments for the on-this-date banner.
    #[serde(rename = "onThisDate", default)]
    pub on_this_date: Vec<Moment>,

    /// Leaderboard category → ranked entries.
    #[serde(default)]
    pub leaderboards: HashMap<String, Vec<LeaderboardEntry>>,

    /// Derived player-appearance index; built at load time, never
    /// serialized.
    #[serde(skip)]
    pub index: PlayerIndex,
}

impl Dataset {
    /// Returns the roster for `year`, if the dataset has that season.
    #[must_use]
    pub fn roster(&self, year: u16) -> Option<&SeasonRoster> {
        self.years.get(&year.to_string())
    }

    /// Returns the season record for `year`, if known.
    #[must_use]
    pub fn record(&self, year: u16) -> Option<SeasonRecord> {
        self.season_records.get(&year.to_string()).copied()
    }

    /// Returns the first era whose inclusive range contains `year`.
    #[must_use]
    pub fn era_for(&self, year: u16) -> Option<&Era> {
        self.eras.iter().find(|e| e.contains(year))
    }

    /// Returns the on-this-date moment matching a calendar (month, day),
    /// if any. The first match wins, mirroring banner behavior.
    #[must_use]
    pub fn moment_on(&self, month: u8, day: u8) -> Option<&Moment> {
        self.on_this_date
            .iter()
            .find(|m| m.month == month && m.day == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster_json() -> &'static str {
        r#"{
            "position_players": {
                "SS": {"playerID": "jeterde01", "name": "Derek Jeter",
                       "G": 148, "AB": 582, "H": 183, "HR": 10, "RBI": 61,
                       "AVG": ".314", "nickname": "The Captain",
                       "retiredNum": 2, "awards": ["AS", "GG"]},
                "CF": {"playerID": "willibe02", "name": "Bernie Williams",
                       "G": 141, "HR": 30, "RBI": 121, "AVG": ".307"}
            },
            "pitchers": {
                "starters": [
                    {"playerID": "pettian01", "name": "Andy Pettitte",
                     "G": 32, "GS": 32, "W": 19, "L": 9, "ERA": 4.35,
                     "IP": "204.2", "SO": 125}
                ],
                "closer": {"playerID": "riverma01", "name": "Mariano Rivera",
                           "G": 66, "SV": 45, "ERA": 1.83, "SO": 52}
            },
            "worldSeries": "won"
        }"#
    }

    #[test]
    fn decodes_roster_with_scorecard_keys() {
        let roster: SeasonRoster = serde_json::from_str(sample_roster_json()).unwrap();

        let ss = roster
            .player_at(RosterSlot::Position(Position::Short))
            .unwrap();
        assert_eq!(ss.name.as_deref(), Some("Derek Jeter"));
        assert_eq!(ss.avg.as_deref(), Some(".314"));
        assert_eq!(ss.retired_num, Some(2));
        assert_eq!(ss.awards, vec!["AS", "GG"]);

        let sp1 = roster.player_at(RosterSlot::Starter(0)).unwrap();
        assert_eq!(sp1.games_started, Some(32));
        let cl = roster.player_at(RosterSlot::Closer).unwrap();
        assert_eq!(cl.saves, Some(45));

        assert_eq!(roster.world_series, Some(WorldSeries::Won));
        assert!(roster.won_title());
    }

    #[test]
    fn absent_slots_resolve_to_none() {
        let roster: SeasonRoster = serde_json::from_str(sample_roster_json()).unwrap();

        assert!(roster
            .player_at(RosterSlot::Position(Position::Catcher))
            .is_none());
        assert!(roster.player_at(RosterSlot::Starter(4)).is_none());
    }

    #[test]
    fn empty_roster_decodes_with_defaults() {
        let roster: SeasonRoster = serde_json::from_str("{}").unwrap();

        assert!(roster.position_players.is_empty());
        assert!(roster.pitchers.starters.is_empty());
        assert!(roster.pitchers.closer.is_none());
        assert!(roster.world_series.is_none());
    }

    #[test]
    fn node_stat_lines_pick_role_appropriate_stats() {
        let roster: SeasonRoster = serde_json::from_str(sample_roster_json()).unwrap();

        let ss = roster
            .player_at(RosterSlot::Position(Position::Short))
            .unwrap();
        assert_eq!(ss.node_stat_lines(Role::Hitter), vec![".314", "10 HR  61 RBI"]);

        let sp1 = roster.player_at(RosterSlot::Starter(0)).unwrap();
        assert_eq!(
            sp1.node_stat_lines(Role::Starter),
            vec!["32 GS", "19-9", "4.35 ERA"]
        );

        let cl = roster.player_at(RosterSlot::Closer).unwrap();
        assert_eq!(cl.node_stat_lines(Role::Closer), vec!["45 SV", "1.83 ERA"]);
    }

    #[test]
    fn node_stat_lines_fall_back_to_games() {
        let player = Player {
            name: Some("Hal Chase".to_string()),
            games: Some(151),
            ..Player::default()
        };
        assert_eq!(player.node_stat_lines(Role::Hitter), vec!["151 G"]);
    }

    #[test]
    fn index_key_prefers_player_id() {
        let with_id = Player {
            player_id: Some("ruthba01".to_string()),
            name: Some("Babe Ruth".to_string()),
            ..Player::default()
        };
        assert_eq!(with_id.index_key().as_deref(), Some("ruthba01"));

        let name_only = Player {
            name: Some("Babe Ruth".to_string()),
            ..Player::default()
        };
        assert_eq!(name_only.index_key().as_deref(), Some("babe ruth"));

        assert!(Player::default().index_key().is_none());
    }

    #[test]
    fn era_contains_is_inclusive() {
        let era = Era {
            id: "murderers-row".to_string(),
            label: "Murderers' Row".to_string(),
            start: 1920,
            end: 1935,
            tagline: "Ruth, Gehrig, and the birth of a dynasty".to_string(),
        };
        assert!(era.contains(1920));
        assert!(era.contains(1935));
        assert!(!era.contains(1919));
        assert!(!era.contains(1936));
    }

    #[test]
    fn moment_lookup_matches_month_and_day() {
        let dataset = Dataset {
            on_this_date: vec![
                Moment {
                    month: 10,
                    day: 8,
                    year: 1956,
                    text: "Don Larsen throws a perfect game in World Series Game 5".to_string(),
                },
                Moment {
                    month: 10,
                    day: 8,
                    year: 2000,
                    text: "later moment on the same date".to_string(),
                },
            ],
            ..Dataset::default()
        };

        // First match wins.
        assert_eq!(dataset.moment_on(10, 8).unwrap().year, 1956);
        assert!(dataset.moment_on(7, 4).is_none());
    }

    #[test]
    fn slot_labels_use_one_based_starter_ordinals() {
        assert_eq!(RosterSlot::Starter(0).label(), "SP1");
        assert_eq!(RosterSlot::Starter(2).label(), "SP3");
        assert_eq!(RosterSlot::Position(Position::Short).label(), "SS");
        assert_eq!(RosterSlot::Closer.label(), "CL");
        assert_eq!(RosterSlot::Closer.role(), Role::Closer);
    }
}
