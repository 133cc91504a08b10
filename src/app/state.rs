//! Transient UI state and view model computation.
//!
//! This module defines [`UiState`], the per-session interaction state that
//! lives alongside the shared store: input mode, search query, node and
//! result selection, and the open player card. It also computes the
//! renderable [`FrameViewModel`] from a store snapshot plus this state.
//!
//! # Architecture
//!
//! `UiState` deliberately contains nothing the store owns. The store holds
//! what is displayed (dataset, season); `UiState` holds how the user is
//! interacting with it. View models are computed on demand from snapshots,
//! so rendering never reaches into live state.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::app::modes::{InputMode, SearchFocus};
use crate::data::search_players;
use crate::data::IndexEntry;
use crate::domain::{
    Dataset, Player, Role, RosterSlot, SeasonRoster, WorldSeries, POSITION_ORDER, STARTER_SLOTS,
};
use crate::store::AppState;
use crate::ui::layout;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BannerViewModel, BoardViewModel, CardViewModel, CareerChipViewModel, DiamondViewModel,
    EraPillViewModel, FooterViewModel, FrameViewModel, HeaderViewModel, LeaderboardsViewModel,
    NodeViewModel, OverlayViewModel, SearchResultViewModel, SearchViewModel, TimelineViewModel,
};

/// Total number of nodes on the field diagram: eight fielding positions,
/// the rotation strip, and the closer.
pub const NODE_COUNT: usize = 8 + STARTER_SLOTS + 1;

/// Maximum championship trophies rendered per search result before
/// collapsing to a `+N` suffix.
const TROPHY_DISPLAY_CAP: usize = 5;

/// Leaderboard categories in display order: dataset key, title, icon.
const LEADERBOARD_CATEGORIES: [(&str, &str, &str); 4] = [
    ("mvp", "Most MVPs", "\u{1f3c5}"),
    ("cyYoung", "Most Cy Youngs", "\u{1f3c6}"),
    ("allStar", "Most All-Stars", "\u{2b50}"),
    ("wsWins", "Most WS Wins", "\u{1f48d}"),
];

/// Maps a node index to its roster slot.
///
/// Node order is fielding positions in conventional order, then the
/// rotation by ordinal, then the closer.
#[must_use]
pub fn node_slot(index: usize) -> RosterSlot {
    if index < POSITION_ORDER.len() {
        RosterSlot::Position(POSITION_ORDER[index])
    } else if index < POSITION_ORDER.len() + STARTER_SLOTS {
        RosterSlot::Starter(index - POSITION_ORDER.len())
    } else {
        RosterSlot::Closer
    }
}

/// The open player card: which slot it shows and which career chip is
/// selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenCard {
    /// Roster slot the card was opened from.
    pub slot: RosterSlot,
    /// Selected chip within the player's career years.
    pub chip_index: usize,
}

/// Transient interaction state.
///
/// Mutated by the event handler; read (never written) by view model
/// computation.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search query. Cleared when search closes.
    pub search_query: String,

    /// Selection cursor within the search results.
    pub result_index: usize,

    /// Selection cursor over the field diagram nodes.
    pub node_index: usize,

    /// Open player card, present exactly in [`InputMode::Card`].
    pub card: Option<OpenCard>,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Today's calendar (month, day), captured at startup for the
    /// on-this-date banner.
    pub today: (u8, u8),
}

impl UiState {
    /// Creates interaction state with default mode and selections.
    #[must_use]
    pub fn new(theme: Theme, today: (u8, u8)) -> Self {
        Self {
            input_mode: InputMode::Normal,
            search_query: String::new(),
            result_index: 0,
            node_index: 0,
            card: None,
            theme,
            today,
        }
    }

    /// Moves the node selection cursor, wrapping at either end.
    pub fn move_node_selection(&mut self, delta: isize) {
        let count = NODE_COUNT as isize;
        let next = (self.node_index as isize + delta).rem_euclid(count);
        self.node_index = next as usize;
    }

    /// Enters search mode with a fresh query.
    pub fn enter_search(&mut self) {
        self.input_mode = InputMode::Search(SearchFocus::Typing);
        self.search_query.clear();
        self.result_index = 0;
    }

    /// Leaves search mode and clears the query.
    pub fn exit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.search_query.clear();
        self.result_index = 0;
    }

    /// Computes the full frame view model from a store snapshot.
    ///
    /// Before the dataset is committed this returns a loading frame; every
    /// missing-data condition below that (absent roster, empty slot,
    /// year without an era) renders as a placeholder, never a failure.
    #[must_use]
    pub fn compute_frame(&self, state: &AppState) -> FrameViewModel {
        let (Some(dataset), Some(year)) = (&state.dataset, state.year) else {
            return FrameViewModel {
                header: HeaderViewModel::default(),
                timeline: TimelineViewModel::default(),
                diamond: DiamondViewModel::default(),
                footer: FooterViewModel {
                    keybindings: "loading season data...".to_string(),
                },
                overlay: None,
                loading: true,
            };
        };

        let roster = dataset.roster(year);

        let overlay = match self.input_mode {
            InputMode::Card => self
                .card
                .map(|card| OverlayViewModel::Card(self.compute_card(dataset, roster, year, card))),
            InputMode::Search(_) => Some(OverlayViewModel::Search(self.compute_search(dataset))),
            InputMode::Leaderboards => Some(OverlayViewModel::Leaderboards(
                Self::compute_leaderboards(dataset),
            )),
            InputMode::Normal => None,
        };

        FrameViewModel {
            header: self.compute_header(dataset, roster, year),
            timeline: Self::compute_timeline(dataset, &state.years, year),
            diamond: self.compute_diamond(roster),
            footer: self.compute_footer(),
            overlay,
            loading: false,
        }
    }

    fn compute_header(
        &self,
        dataset: &Dataset,
        roster: Option<&SeasonRoster>,
        year: u16,
    ) -> HeaderViewModel {
        let era = dataset.era_for(year);
        let banner = roster
            .and_then(|r| r.world_series)
            .map(|outcome| BannerViewModel {
                text: banner_text(year, outcome),
                outcome,
            });

        HeaderViewModel {
            title: format!("{} \u{2014} {year}", dataset.team_name),
            record: dataset
                .record(year)
                .map(|r| format!("{}\u{2013}{}", r.wins, r.losses)),
            banner,
            era_label: era.map(|e| format!("{} {}\u{2013}{}", e.label, e.start, e.end)),
            era_tagline: era.map(|e| e.tagline.clone()),
            era_quote: era.and_then(|e| dataset.era_quotes.get(&e.id).cloned()),
            moment: dataset
                .moment_on(self.today.0, self.today.1)
                .map(|m| format!("On this date in {}: {}", m.year, m.text)),
        }
    }

    fn compute_timeline(dataset: &Dataset, years: &[u16], year: u16) -> TimelineViewModel {
        let position = years.iter().position(|&y| y == year).unwrap_or(0);

        let markers = years
            .iter()
            .enumerate()
            .filter_map(|(i, &y)| {
                dataset
                    .roster(y)
                    .and_then(|r| r.world_series)
                    .map(|outcome| (i, outcome))
            })
            .collect();

        let era_pills = dataset
            .eras
            .iter()
            .map(|era| EraPillViewModel {
                label: era.label.clone(),
                years: format!("{}\u{2013}{}", era.start, era.end),
                active: era.contains(year),
            })
            .collect();

        TimelineViewModel {
            first: years.first().copied().unwrap_or(year),
            last: years.last().copied().unwrap_or(year),
            position,
            total: years.len(),
            markers,
            era_pills,
        }
    }

    fn compute_diamond(&self, roster: Option<&SeasonRoster>) -> DiamondViewModel {
        let nodes = (0..NODE_COUNT)
            .map(|i| {
                let slot = node_slot(i);
                let coord = layout::slot_coord(slot);
                let player = roster.and_then(|r| r.player_at(slot));
                NodeViewModel {
                    x_pct: coord.x,
                    y_pct: coord.y,
                    pos_label: slot.label(),
                    name: player
                        .and_then(Player::last_name)
                        .unwrap_or("\u{2014}")
                        .to_string(),
                    stat_lines: player
                        .map(|p| p.node_stat_lines(slot.role()))
                        .unwrap_or_default(),
                    badges: player.map(node_badges).unwrap_or_default(),
                    is_selected: i == self.node_index,
                }
            })
            .collect();

        DiamondViewModel {
            nodes,
            outcome: roster.and_then(|r| r.world_series),
        }
    }

    fn compute_card(
        &self,
        dataset: &Dataset,
        roster: Option<&SeasonRoster>,
        year: u16,
        card: OpenCard,
    ) -> CardViewModel {
        let player = roster.and_then(|r| r.player_at(card.slot));
        let is_champion = roster.is_some_and(SeasonRoster::won_title);
        let champions_tag = if is_champion {
            " \u{b7} \u{1f3c6} World Champions"
        } else {
            ""
        };
        let meta = format!(
            "{} {year} \u{b7} {}{champions_tag}",
            dataset.team_name,
            card.slot.full_label()
        );

        let Some(player) = player else {
            return CardViewModel {
                name: "No Player Data".to_string(),
                meta,
                ..CardViewModel::default()
            };
        };

        let role = card.slot.role();
        let career = player
            .index_key()
            .and_then(|key| dataset.index.get(&key))
            .map(|entry| career_chips(entry, dataset, year, card.chip_index))
            .unwrap_or_default();

        CardViewModel {
            name: player
                .name
                .clone()
                .unwrap_or_else(|| "\u{2014}".to_string()),
            nickname: player.nickname.as_ref().map(|n| format!("\"{n}\"")),
            meta,
            badges: card_badges(player, dataset),
            hero: hero_stats(player, role),
            table: table_stats(player, role),
            career,
        }
    }

    fn compute_search(&self, dataset: &Dataset) -> SearchViewModel {
        let results = search_players(dataset, &self.search_query);
        let selected = self.result_index.min(results.len().saturating_sub(1));
        let matcher = SkimMatcherV2::default();
        let query = self.search_query.trim();

        let results = results
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let years = entry.years();
                let count = years.len();
                let titles = years
                    .iter()
                    .filter(|&&y| dataset.ws_won.contains(&y))
                    .count();
                SearchResultViewModel {
                    name: entry.name.clone(),
                    year_range: year_range_label(&years),
                    positions: entry.positions().join(", "),
                    seasons: format!("{count} season{}", if count == 1 { "" } else { "s" }),
                    trophies: trophy_label(titles),
                    highlight_ranges: highlight_ranges(&entry.name, query, &matcher),
                    is_selected: i == selected,
                }
            })
            .collect();

        SearchViewModel {
            query: self.search_query.clone(),
            results,
            typing: matches!(self.input_mode, InputMode::Search(SearchFocus::Typing)),
        }
    }

    fn compute_leaderboards(dataset: &Dataset) -> LeaderboardsViewModel {
        let boards = LEADERBOARD_CATEGORIES
            .iter()
            .filter_map(|(key, title, icon)| {
                let entries = dataset.leaderboards.get(*key)?;
                if entries.is_empty() {
                    return None;
                }
                Some(BoardViewModel {
                    title: (*title).to_string(),
                    icon: (*icon).to_string(),
                    entries: entries
                        .iter()
                        .enumerate()
                        .map(|(i, e)| (i + 1, e.name.clone(), e.count))
                        .collect(),
                })
            })
            .collect();
        LeaderboardsViewModel { boards }
    }

    fn compute_footer(&self) -> FooterViewModel {
        let keybindings = match self.input_mode {
            InputMode::Normal => {
                "\u{2190}/\u{2192}: season  Home/End: first/last  1-9: era  Tab: node  \
                 Enter: card  /: search  b: leaderboards  o: on this date  q: quit"
                    .to_string()
            }
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: close  Enter/\u{2193}: results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: close  /: edit query  \u{2191}/\u{2193}: navigate  \
                 Enter: jump to last season"
                    .to_string()
            }
            InputMode::Card => {
                "ESC: close  \u{2190}/\u{2192}: career season  Enter: jump".to_string()
            }
            InputMode::Leaderboards => "ESC: close".to_string(),
        };
        FooterViewModel { keybindings }
    }
}

/// Picks the banner message for a season, deterministically by year.
fn banner_text(year: u16, outcome: WorldSeries) -> String {
    let messages: &[&str] = match outcome {
        WorldSeries::Won => &layout::WS_WON_MESSAGES,
        WorldSeries::Lost => &layout::WS_LOST_MESSAGES,
    };
    let message = messages[year as usize % messages.len()];
    format!("{year} \u{2014} {message}")
}

/// Builds the compact badge string for a diamond node.
fn node_badges(player: &Player) -> String {
    let mut parts = Vec::new();
    if let Some(num) = player.retired_num {
        parts.push(format!("#{num}"));
    }
    if player.hof {
        parts.push("HOF".to_string());
    }
    let icons: String = player
        .awards
        .iter()
        .filter_map(|code| layout::award_icon(code))
        .collect();
    if !icons.is_empty() {
        parts.push(icons);
    }
    parts.join(" ")
}

/// Builds the badge lines for the player card, including aggregated
/// multi-season award counts from the career index.
fn card_badges(player: &Player, dataset: &Dataset) -> Vec<String> {
    let mut badges = Vec::new();
    if player.hof {
        badges.push("HOF".to_string());
    }
    if let Some(num) = player.retired_num {
        badges.push(format!("#{num} Retired"));
    }
    for code in &player.awards {
        if let (Some(icon), Some(label)) = (layout::award_icon(code), layout::award_label(code)) {
            badges.push(format!("{icon} {label}"));
        }
    }

    if let Some(entry) = player.index_key().and_then(|key| dataset.index.get(&key)) {
        let mut career_counts: Vec<(&str, u32)> = Vec::new();
        for appearance in &entry.appearances {
            for code in &appearance.player.awards {
                match career_counts.iter_mut().find(|(c, _)| *c == code.as_str()) {
                    Some((_, n)) => *n += 1,
                    None => career_counts.push((code.as_str(), 1)),
                }
            }
        }
        let repeated: Vec<String> = career_counts
            .iter()
            .filter(|(_, n)| *n > 1)
            .filter_map(|(code, n)| layout::award_label(code).map(|label| format!("{n}x {label}")))
            .collect();
        if !repeated.is_empty() {
            badges.push(repeated.join(" \u{b7} "));
        }
    }

    badges
}

/// Builds the career chip strip; empty for single-season players.
fn career_chips(
    entry: &IndexEntry,
    dataset: &Dataset,
    current_year: u16,
    chip_index: usize,
) -> Vec<CareerChipViewModel> {
    let years = entry.years();
    if years.len() <= 1 {
        return Vec::new();
    }
    let selected = chip_index.min(years.len() - 1);
    years
        .iter()
        .enumerate()
        .map(|(i, &year)| CareerChipViewModel {
            year,
            is_current: year == current_year,
            is_champion: dataset.ws_won.contains(&year),
            is_selected: i == selected,
        })
        .collect()
}

/// Hero stats shown large on the card, per role.
fn hero_stats(player: &Player, role: Role) -> Vec<(String, String)> {
    let mut hero = Vec::new();
    match role {
        Role::Hitter => {
            if let Some(avg) = &player.avg {
                hero.push((avg.clone(), "AVG".to_string()));
            }
            if let Some(hr) = player.home_runs {
                hero.push((hr.to_string(), "HR".to_string()));
            }
            if let Some(rbi) = player.rbi {
                hero.push((rbi.to_string(), "RBI".to_string()));
            }
        }
        Role::Starter => {
            if let (Some(w), Some(l)) = (player.wins, player.losses) {
                hero.push((format!("{w}-{l}"), "W-L".to_string()));
            }
            if let Some(era) = player.era {
                hero.push((format!("{era:.2}"), "ERA".to_string()));
            }
            if let Some(so) = player.strikeouts {
                hero.push((so.to_string(), "K".to_string()));
            }
        }
        Role::Closer => {
            if let Some(sv) = player.saves {
                hero.push((sv.to_string(), "SV".to_string()));
            }
            if let Some(era) = player.era {
                hero.push((format!("{era:.2}"), "ERA".to_string()));
            }
            if let Some(so) = player.strikeouts {
                hero.push((so.to_string(), "K".to_string()));
            }
        }
    }
    if hero.is_empty() {
        let games = player
            .games
            .map_or_else(|| "\u{2014}".to_string(), |g| g.to_string());
        hero.push((games, "Games".to_string()));
    }
    hero
}

/// Detail stat table on the card, per role. Missing stats are omitted.
fn table_stats(player: &Player, role: Role) -> Vec<(String, String)> {
    let mut table: Vec<(&str, Option<String>)> = Vec::new();
    match role {
        Role::Hitter => {
            table.push(("G", player.games.map(|v| v.to_string())));
            table.push(("AB", player.at_bats.map(|v| v.to_string())));
            table.push(("R", player.runs.map(|v| v.to_string())));
            table.push(("H", player.hits.map(|v| v.to_string())));
            table.push(("2B", player.doubles.map(|v| v.to_string())));
            table.push(("3B", player.triples.map(|v| v.to_string())));
            table.push(("HR", player.home_runs.map(|v| v.to_string())));
            table.push(("RBI", player.rbi.map(|v| v.to_string())));
            table.push(("BB", player.walks.map(|v| v.to_string())));
            table.push(("SB", player.stolen_bases.map(|v| v.to_string())));
            table.push(("AVG", player.avg.clone()));
        }
        Role::Starter | Role::Closer => {
            table.push(("G", player.games.map(|v| v.to_string())));
            if role == Role::Starter {
                table.push(("GS", player.games_started.map(|v| v.to_string())));
            } else {
                table.push(("SV", player.saves.map(|v| v.to_string())));
            }
            table.push(("W", player.wins.map(|v| v.to_string())));
            table.push(("L", player.losses.map(|v| v.to_string())));
            table.push(("ERA", player.era.map(|v| format!("{v:.2}"))));
            table.push(("IP", player.innings.clone()));
            table.push(("K", player.strikeouts.map(|v| v.to_string())));
            table.push(("BB", player.walks.map(|v| v.to_string())));
        }
    }
    table
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label.to_string(), v)))
        .collect()
}

/// Formats a career span (`"1996–2014"`, or the single year).
fn year_range_label(years: &[u16]) -> String {
    match (years.first(), years.last()) {
        (Some(first), Some(last)) if first != last => format!("{first}\u{2013}{last}"),
        (Some(first), _) => first.to_string(),
        _ => String::new(),
    }
}

/// Formats the championship trophy string, capped for display.
fn trophy_label(titles: usize) -> String {
    if titles == 0 {
        return String::new();
    }
    let shown = titles.min(TROPHY_DISPLAY_CAP);
    let mut label = "\u{1f3c6}".repeat(shown);
    if titles > TROPHY_DISPLAY_CAP {
        label.push_str(&format!("+{}", titles - TROPHY_DISPLAY_CAP));
    }
    label
}

/// Coalesces fuzzy match indices into contiguous highlight ranges.
///
/// Indices come back from the matcher one character at a time; runs of
/// consecutive indices collapse into `(start, end)` ranges with exclusive
/// ends.
fn highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return Vec::new();
    };

    let mut ranges = Vec::new();
    let mut start = None;
    let mut prev = None;

    for &idx in &indices {
        match (start, prev) {
            (None, _) => {
                start = Some(idx);
                prev = Some(idx);
            }
            (Some(_), Some(p)) if idx == p + 1 => {
                prev = Some(idx);
            }
            (Some(s), Some(p)) => {
                ranges.push((s, p + 1));
                start = Some(idx);
                prev = Some(idx);
            }
            _ => {}
        }
    }
    if let (Some(s), Some(p)) = (start, prev) {
        ranges.push((s, p + 1));
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::PlayerIndex;
    use crate::domain::{Position, SeasonRecord};
    use crate::store::{StateUpdate, Store};
    use std::sync::Arc;

    fn player(id: &str, name: &str) -> Player {
        Player {
            player_id: Some(id.to_string()),
            name: Some(name.to_string()),
            ..Player::default()
        }
    }

    fn dynasty_dataset() -> Arc<Dataset> {
        let mut dataset = Dataset {
            team: "NYA".to_string(),
            team_name: "New York Yankees".to_string(),
            ..Dataset::default()
        };
        for year in [1998u16, 1999, 2000] {
            let mut roster = SeasonRoster::default();
            let mut jeter = player("jeterde01", "Derek Jeter");
            jeter.avg = Some(".324".to_string());
            jeter.home_runs = Some(19);
            jeter.rbi = Some(84);
            jeter.nickname = Some("The Captain".to_string());
            roster.position_players.insert(Position::Short, jeter);
            roster.pitchers.closer = Some(player("riverma01", "Mariano Rivera"));
            roster.world_series = Some(WorldSeries::Won);
            dataset.years.insert(year.to_string(), roster);
        }
        dataset.ws_won = vec![1998, 1999, 2000];
        dataset
            .season_records
            .insert("1998".to_string(), SeasonRecord { wins: 114, losses: 48 });
        dataset.index = PlayerIndex::build(&dataset);
        Arc::new(dataset)
    }

    fn loaded_state() -> AppState {
        let store = Store::new();
        store.set(StateUpdate::loaded_dataset(
            dynasty_dataset(),
            vec![1998, 1999, 2000],
            1998,
        ));
        store.snapshot()
    }

    fn ui() -> UiState {
        UiState::new(Theme::default(), (1, 15))
    }

    #[test]
    fn unloaded_state_renders_a_loading_frame() {
        let frame = ui().compute_frame(&AppState::default());
        assert!(frame.loading);
        assert!(frame.overlay.is_none());
    }

    #[test]
    fn frame_has_all_nodes_and_marks_the_selection() {
        let mut ui = ui();
        ui.node_index = 4; // shortstop
        let frame = ui.compute_frame(&loaded_state());

        assert!(!frame.loading);
        assert_eq!(frame.diamond.nodes.len(), NODE_COUNT);
        let ss = &frame.diamond.nodes[4];
        assert_eq!(ss.pos_label, "SS");
        assert_eq!(ss.name, "Jeter");
        assert!(ss.is_selected);
        // Empty rotation slots still render, as placeholders.
        assert_eq!(frame.diamond.nodes[8].name, "\u{2014}");
        assert_eq!(frame.diamond.outcome, Some(WorldSeries::Won));
    }

    #[test]
    fn header_carries_record_and_championship_banner() {
        let frame = ui().compute_frame(&loaded_state());

        assert_eq!(frame.header.title, "New York Yankees \u{2014} 1998");
        assert_eq!(frame.header.record.as_deref(), Some("114\u{2013}48"));
        let banner = frame.header.banner.unwrap();
        assert_eq!(banner.outcome, WorldSeries::Won);
        assert!(banner.text.starts_with("1998"));
    }

    #[test]
    fn timeline_markers_cover_every_title_season() {
        let frame = ui().compute_frame(&loaded_state());

        assert_eq!(frame.timeline.total, 3);
        assert_eq!(frame.timeline.position, 0);
        assert_eq!(
            frame.timeline.markers,
            vec![
                (0, WorldSeries::Won),
                (1, WorldSeries::Won),
                (2, WorldSeries::Won)
            ]
        );
    }

    #[test]
    fn card_shows_hero_stats_career_and_nickname() {
        let mut ui = ui();
        ui.input_mode = InputMode::Card;
        ui.card = Some(OpenCard {
            slot: RosterSlot::Position(Position::Short),
            chip_index: 0,
        });

        let frame = ui.compute_frame(&loaded_state());
        let Some(OverlayViewModel::Card(card)) = frame.overlay else {
            panic!("expected card overlay");
        };

        assert_eq!(card.name, "Derek Jeter");
        assert_eq!(card.nickname.as_deref(), Some("\"The Captain\""));
        assert_eq!(card.hero[0], (".324".to_string(), "AVG".to_string()));
        assert_eq!(card.career.len(), 3);
        assert!(card.career[0].is_current);
        assert!(card.career.iter().all(|chip| chip.is_champion));
        assert!(card.meta.contains("World Champions"));
    }

    #[test]
    fn card_for_an_empty_slot_is_a_placeholder() {
        let mut ui = ui();
        ui.input_mode = InputMode::Card;
        ui.card = Some(OpenCard {
            slot: RosterSlot::Starter(2),
            chip_index: 0,
        });

        let frame = ui.compute_frame(&loaded_state());
        let Some(OverlayViewModel::Card(card)) = frame.overlay else {
            panic!("expected card overlay");
        };

        assert_eq!(card.name, "No Player Data");
        assert!(card.hero.is_empty());
        assert!(card.career.is_empty());
    }

    #[test]
    fn search_overlay_lists_ranked_results_with_trophies() {
        let mut ui = ui();
        ui.input_mode = InputMode::Search(SearchFocus::Typing);
        ui.search_query = "rivera".to_string();

        let frame = ui.compute_frame(&loaded_state());
        let Some(OverlayViewModel::Search(search)) = frame.overlay else {
            panic!("expected search overlay");
        };

        assert!(search.typing);
        assert_eq!(search.results.len(), 1);
        let result = &search.results[0];
        assert_eq!(result.name, "Mariano Rivera");
        assert_eq!(result.year_range, "1998\u{2013}2000");
        assert_eq!(result.seasons, "3 seasons");
        assert_eq!(result.trophies, "\u{1f3c6}\u{1f3c6}\u{1f3c6}");
        assert!(result.is_selected);
        assert!(!result.highlight_ranges.is_empty());
    }

    #[test]
    fn leaderboards_overlay_skips_empty_categories() {
        let mut ui = ui();
        ui.input_mode = InputMode::Leaderboards;

        let frame = ui.compute_frame(&loaded_state());
        let Some(OverlayViewModel::Leaderboards(boards)) = frame.overlay else {
            panic!("expected leaderboards overlay");
        };

        // The test dataset carries no leaderboard sections at all.
        assert!(boards.boards.is_empty());
    }

    #[test]
    fn trophy_label_collapses_past_the_cap() {
        assert_eq!(trophy_label(0), "");
        assert_eq!(trophy_label(2), "\u{1f3c6}\u{1f3c6}");
        assert_eq!(trophy_label(7), format!("{}+2", "\u{1f3c6}".repeat(5)));
    }

    #[test]
    fn node_selection_wraps_both_directions() {
        let mut ui = ui();
        ui.move_node_selection(-1);
        assert_eq!(ui.node_index, NODE_COUNT - 1);
        ui.move_node_selection(1);
        assert_eq!(ui.node_index, 0);
    }

    #[test]
    fn highlight_ranges_coalesce_consecutive_indices() {
        let matcher = SkimMatcherV2::default();
        let ranges = highlight_ranges("Derek Jeter", "jeter", &matcher);
        assert_eq!(ranges, vec![(6, 11)]);
    }
}
