//! Dataset loading and store population.
//!
//! The loader performs the application's single data acquisition: one
//! read of the season dataset from a fixed relative resource path. It
//! decodes the JSON document, derives the sorted season list, builds the
//! player-appearance index, and commits everything into the store as one
//! atomic update so that no partially loaded state is ever observable.
//!
//! There is no retry and no cancellation: the load either completes or
//! fails once, and a failure leaves the store un-loaded for the caller to
//! surface.

use std::path::Path;
use std::sync::Arc;

use crate::data::index::PlayerIndex;
use crate::domain::{Dataset, DugoutError, Result};
use crate::store::{StateUpdate, Store};

/// Default dataset location, relative to the working directory.
pub const DATA_PATH: &str = "data/franchise.json";

/// Loads the dataset from `path` and commits it into `store`.
///
/// On success the store receives `dataset` (with the appearance index
/// attached), the ascending season list, the most recent season as the
/// current one, and `loaded = true` — all in a single [`Store::set`]
/// call. The decoded dataset is also returned to the caller.
///
/// Season keys that do not parse as years are excluded from the season
/// list (and from the index). A dataset with no numeric seasons at all is
/// committed with an empty list and no current season.
///
/// # Errors
///
/// - [`DugoutError::Io`] when the file cannot be read.
/// - [`DugoutError::Data`] when the contents do not decode as a dataset.
///
/// In both cases the store is left untouched.
pub fn load(store: &Store, path: &Path) -> Result<Arc<Dataset>> {
    let _span = tracing::info_span!("load_dataset", path = %path.display()).entered();

    let contents = std::fs::read_to_string(path)?;
    let mut dataset: Dataset = serde_json::from_str(&contents)
        .map_err(|e| DugoutError::Data(format!("failed to parse dataset: {e}")))?;

    let mut years: Vec<u16> = dataset
        .years
        .keys()
        .filter_map(|key| key.parse().ok())
        .collect();
    years.sort_unstable();

    dataset.index = PlayerIndex::build(&dataset);

    tracing::info!(
        team = %dataset.team,
        seasons = years.len(),
        players = dataset.index.len(),
        "dataset loaded"
    );

    let dataset = Arc::new(dataset);
    if let Some(&latest) = years.last() {
        store.set(StateUpdate::loaded_dataset(
            Arc::clone(&dataset),
            years,
            latest,
        ));
    } else {
        tracing::warn!("dataset has no numeric seasons");
        store.set(StateUpdate {
            dataset: Some(Arc::clone(&dataset)),
            years: Some(Vec::new()),
            year: None,
            loaded: Some(true),
        });
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::search_players;
    use crate::domain::WorldSeries;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const DYNASTY_JSON: &str = r#"{
        "team": "NYA",
        "teamName": "New York Yankees",
        "years": {
            "1998": {
                "position_players": {
                    "SS": {"playerID": "jeterde01", "name": "Derek Jeter", "AVG": ".324"}
                },
                "pitchers": {"starters": [], "closer": null},
                "worldSeries": "won"
            },
            "1999": {
                "position_players": {
                    "SS": {"playerID": "jeterde01", "name": "Derek Jeter"}
                },
                "pitchers": {"starters": []}
            },
            "2000": {
                "position_players": {
                    "SS": {"playerID": "jeterde01", "name": "Derek Jeter"}
                },
                "pitchers": {"starters": []}
            },
            "roster-notes": {}
        },
        "eras": [
            {"id": "dynasty", "label": "The Dynasty", "start": 1996, "end": 2001,
             "tagline": "Four rings in five years"}
        ],
        "wsWon": [1998, 1999, 2000]
    }"#;

    #[test]
    fn load_commits_dataset_years_and_latest_season() {
        let file = write_dataset(DYNASTY_JSON);
        let store = Store::new();

        let dataset = load(&store, file.path()).unwrap();

        let state = store.snapshot();
        assert!(state.loaded);
        // Non-numeric season keys are excluded.
        assert_eq!(state.years, vec![1998, 1999, 2000]);
        assert_eq!(state.year, Some(2000));
        assert!(Arc::ptr_eq(state.dataset.as_ref().unwrap(), &dataset));

        store.set(StateUpdate::year(1998));
        let roster = store.roster_for(None).unwrap();
        assert_eq!(roster.world_series, Some(WorldSeries::Won));
    }

    #[test]
    fn load_builds_a_searchable_index() {
        let file = write_dataset(DYNASTY_JSON);
        let store = Store::new();

        let dataset = load(&store, file.path()).unwrap();

        let results = search_players(&dataset, "jeter");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].appearances.len(), 3);
    }

    #[test]
    fn missing_file_fails_and_leaves_store_unloaded() {
        let store = Store::new();

        let err = load(&store, Path::new("/nonexistent/franchise.json")).unwrap_err();

        assert!(matches!(err, DugoutError::Io(_)));
        assert!(!store.snapshot().loaded);
        assert!(store.dataset().is_none());
    }

    #[test]
    fn malformed_json_fails_and_leaves_store_unloaded() {
        let file = write_dataset("{ not json");
        let store = Store::new();

        let err = load(&store, file.path()).unwrap_err();

        assert!(matches!(err, DugoutError::Data(_)));
        assert!(!store.snapshot().loaded);
    }

    #[test]
    fn dataset_without_numeric_seasons_loads_empty() {
        let file = write_dataset(r#"{"years": {"prehistory": {}}}"#);
        let store = Store::new();

        load(&store, file.path()).unwrap();

        let state = store.snapshot();
        assert!(state.loaded);
        assert!(state.years.is_empty());
        assert!(state.year.is_none());
    }
}
