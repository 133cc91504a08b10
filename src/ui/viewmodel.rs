//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from store snapshots
//! and transient UI state, following the MVVM pattern: view models are
//! optimized for rendering and contain pre-computed display information
//! (formatted stat lines, highlight ranges, selection flags), never
//! business logic.
//!
//! A full frame is described by [`FrameViewModel`]; overlays (player card,
//! search) replace the center of the screen but leave the chrome in place.

use crate::domain::WorldSeries;

/// Complete view model for one rendered frame.
#[derive(Debug, Clone)]
pub struct FrameViewModel {
    /// Top chrome: team, season, record, banners.
    pub header: HeaderViewModel,
    /// Season track with era pills.
    pub timeline: TimelineViewModel,
    /// The field diagram.
    pub diamond: DiamondViewModel,
    /// Keybinding help line.
    pub footer: FooterViewModel,
    /// Active overlay, if any.
    pub overlay: Option<OverlayViewModel>,
    /// Loading placeholder: set before the dataset is committed.
    pub loading: bool,
}

/// Modal overlay replacing the screen center.
#[derive(Debug, Clone)]
pub enum OverlayViewModel {
    /// Baseball-card detail view for one player.
    Card(CardViewModel),
    /// Cross-year player search.
    Search(SearchViewModel),
    /// Franchise leaderboards.
    Leaderboards(LeaderboardsViewModel),
}

/// Leaderboards overlay display information.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardsViewModel {
    /// One board per category with data, in display order.
    pub boards: Vec<BoardViewModel>,
}

/// One ranked leaderboard category.
#[derive(Debug, Clone)]
pub struct BoardViewModel {
    /// Category title (`"Most MVPs"`).
    pub title: String,
    /// Category icon.
    pub icon: String,
    /// Ranked entries as (rank, name, count), rank 1-based.
    pub entries: Vec<(usize, String, u32)>,
}

/// Header display information.
#[derive(Debug, Clone, Default)]
pub struct HeaderViewModel {
    /// `"New York Yankees — 1998"`.
    pub title: String,
    /// Season win-loss record, pre-formatted (`"114–48"`).
    pub record: Option<String>,
    /// World Series banner for the displayed season.
    pub banner: Option<BannerViewModel>,
    /// Era label with year range (`"The Dynasty 1996–2001"`).
    pub era_label: Option<String>,
    /// Era tagline.
    pub era_tagline: Option<String>,
    /// Era quote, when the dataset carries one.
    pub era_quote: Option<String>,
    /// On-this-date banner text, when a moment matches today.
    pub moment: Option<String>,
}

/// World Series banner contents.
#[derive(Debug, Clone)]
pub struct BannerViewModel {
    /// Pre-formatted banner text including the season.
    pub text: String,
    /// Outcome, for styling.
    pub outcome: WorldSeries,
}

/// Season track display information.
#[derive(Debug, Clone, Default)]
pub struct TimelineViewModel {
    /// First season in the dataset.
    pub first: u16,
    /// Last season in the dataset.
    pub last: u16,
    /// Index of the current season within the season list.
    pub position: usize,
    /// Number of seasons.
    pub total: usize,
    /// World Series seasons, as (season index, outcome) pairs.
    pub markers: Vec<(usize, WorldSeries)>,
    /// Era pills in chronological order.
    pub era_pills: Vec<EraPillViewModel>,
}

/// One era pill on the timeline.
#[derive(Debug, Clone)]
pub struct EraPillViewModel {
    /// Era display label.
    pub label: String,
    /// Inclusive year range, pre-formatted (`"1996–2001"`).
    pub years: String,
    /// True when the current season falls in this era.
    pub active: bool,
}

/// Field diagram display information.
#[derive(Debug, Clone, Default)]
pub struct DiamondViewModel {
    /// All roster slots, occupied or not, in node order.
    pub nodes: Vec<NodeViewModel>,
    /// Postseason outcome of the displayed season, for border styling.
    pub outcome: Option<WorldSeries>,
}

/// One player slot on the field diagram.
#[derive(Debug, Clone)]
pub struct NodeViewModel {
    /// Horizontal position as a percentage of the diagram width.
    pub x_pct: u8,
    /// Vertical position as a percentage of the diagram height.
    pub y_pct: u8,
    /// Slot label (`"SS"`, `"SP1"`, `"CL"`).
    pub pos_label: String,
    /// Compact display name (last name), `"—"` for empty slots.
    pub name: String,
    /// Role-appropriate stat lines; empty for empty slots.
    pub stat_lines: Vec<String>,
    /// Compact badge string (retired number, HOF, award icons).
    pub badges: String,
    /// True when the node selection cursor is here.
    pub is_selected: bool,
}

/// Player card display information.
#[derive(Debug, Clone, Default)]
pub struct CardViewModel {
    /// Player name, or a placeholder for empty slots.
    pub name: String,
    /// Famous nickname, quoted for display.
    pub nickname: Option<String>,
    /// `"New York Yankees 1998 · Shortstop"`, with a champions tag when
    /// the season won the title.
    pub meta: String,
    /// Badge lines: HOF, retired number, season awards, aggregated career
    /// awards.
    pub badges: Vec<String>,
    /// Hero stats shown large, as (value, label) pairs.
    pub hero: Vec<(String, String)>,
    /// Detail stat table, as (label, value) pairs.
    pub table: Vec<(String, String)>,
    /// Career season chips; empty when the player appears only once.
    pub career: Vec<CareerChipViewModel>,
}

/// One season chip in the card's career strip.
#[derive(Debug, Clone)]
pub struct CareerChipViewModel {
    pub year: u16,
    /// This chip is the displayed season.
    pub is_current: bool,
    /// The franchise won the title that season.
    pub is_champion: bool,
    /// The chip selection cursor is here.
    pub is_selected: bool,
}

/// Search overlay display information.
#[derive(Debug, Clone, Default)]
pub struct SearchViewModel {
    /// Current query text.
    pub query: String,
    /// Ranked results, at most the search cap.
    pub results: Vec<SearchResultViewModel>,
    /// True when the query edits; false when navigating results.
    pub typing: bool,
}

/// One row in the search results.
#[derive(Debug, Clone)]
pub struct SearchResultViewModel {
    /// Player display name.
    pub name: String,
    /// Career span, pre-formatted (`"1996–2014"` or a single year).
    pub year_range: String,
    /// Distinct positions held, comma-joined.
    pub positions: String,
    /// `"19 seasons"` / `"1 season"`.
    pub seasons: String,
    /// Championship trophy string, capped for display.
    pub trophies: String,
    /// Matched-character ranges in `name`, as char indices.
    pub highlight_ranges: Vec<(usize, usize)>,
    /// The result selection cursor is here.
    pub is_selected: bool,
}

/// Footer display information.
#[derive(Debug, Clone, Default)]
pub struct FooterViewModel {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}
