//! Shared application state with key-scoped change notification.
//!
//! This module defines [`Store`], the single shared state container for the
//! application, along with its publish/subscribe mechanism. The store holds
//! the loaded dataset, the sorted season list, the currently displayed
//! season, and the load flag. Render consumers subscribe to the fields they
//! care about and re-render their screen region when notified.
//!
//! # Architecture
//!
//! The store is constructed exactly once at startup and injected by
//! reference into every consumer; there is no module-level singleton.
//! Observable fields are a fixed enum ([`StateKey`]) rather than open-ended
//! string keys, so a subscription to a nonexistent field is a compile
//! error.
//!
//! Updates flow through [`Store::set`] as partial [`StateUpdate`]s. Fields
//! whose incoming value equals the current value are not applied and do not
//! notify. Change detection is by value for `years`/`year`/`loaded` and by
//! `Arc` pointer identity for `dataset`: replacing the dataset with a
//! deep-equal but freshly allocated one still counts as a change.
//!
//! # Concurrency
//!
//! Single-threaded cooperative. All operations are synchronous; every
//! subscriber callback runs to completion before `set` returns. Calling
//! `set`, `subscribe`, or `unsubscribe` from inside a callback is
//! unsupported (it panics on the interior `RefCell`) and is the caller's
//! responsibility to avoid.

use std::cell::RefCell;
use std::sync::Arc;

use crate::domain::{Dataset, Era, SeasonRoster};

/// The observable fields of the application state.
///
/// Subscriptions are scoped to exactly one key, or to every key via
/// [`Store::subscribe_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateKey {
    /// The loaded dataset.
    Dataset,
    /// The sorted ascending season list.
    Years,
    /// The currently displayed season.
    Year,
    /// The load flag.
    Loaded,
}

/// Snapshot of the shared application state.
///
/// Cloning is cheap: the dataset is behind an `Arc` and the remaining
/// fields are small. Subscribers receive a post-update snapshot; reads
/// through [`Store::snapshot`] receive the current one.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The full loaded dataset, or `None` before load completes.
    pub dataset: Option<Arc<Dataset>>,

    /// Every numeric season key present in the dataset, ascending.
    /// Empty before load.
    pub years: Vec<u16>,

    /// The season currently displayed. When present, always a member of
    /// `years`.
    pub year: Option<u16>,

    /// True exactly once `dataset`, `years`, and `year` have been
    /// committed together.
    pub loaded: bool,
}

/// A partial state update: fields left as `None` are untouched.
///
/// The loader commits all four fields in one update so that partial load
/// states are never observable; after load, consumers are expected to set
/// only `year`.
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    pub dataset: Option<Arc<Dataset>>,
    pub years: Option<Vec<u16>>,
    pub year: Option<u16>,
    pub loaded: Option<bool>,
}

impl StateUpdate {
    /// Builds the single-field update consumers use for season navigation.
    #[must_use]
    pub fn year(year: u16) -> Self {
        Self {
            year: Some(year),
            ..Self::default()
        }
    }

    /// Builds the loader's atomic commit: dataset, season list, initial
    /// season, and the load flag in one update.
    #[must_use]
    pub fn loaded_dataset(dataset: Arc<Dataset>, years: Vec<u16>, year: u16) -> Self {
        Self {
            dataset: Some(dataset),
            years: Some(years),
            year: Some(year),
            loaded: Some(true),
        }
    }
}

/// Subscriber callback. Receives the full post-update state snapshot; the
/// changed value is read off the snapshot field the subscription named.
pub type Callback = Box<dyn FnMut(&AppState)>;

/// Handle identifying one registration, returned by the subscribe
/// operations. Passing it to [`Store::unsubscribe`] removes exactly that
/// callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: u64,
}

struct Registration {
    id: u64,
    /// `None` registers a wildcard subscriber.
    key: Option<StateKey>,
    callback: Callback,
}

/// The shared state container.
///
/// See the module documentation for the update and notification contract.
#[derive(Default)]
pub struct Store {
    state: RefCell<AppState>,
    subscribers: RefCell<Vec<Registration>>,
    next_id: RefCell<u64>,
}

impl Store {
    /// Creates an empty, un-loaded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current state. No side effects.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Returns the loaded dataset, if any. Cheap (`Arc` clone).
    #[must_use]
    pub fn dataset(&self) -> Option<Arc<Dataset>> {
        self.state.borrow().dataset.clone()
    }

    /// Returns the currently displayed season, if any.
    #[must_use]
    pub fn current_year(&self) -> Option<u16> {
        self.state.borrow().year
    }

    /// Applies a partial update and notifies subscribers of changed fields.
    ///
    /// For each field present in `update`, the incoming value is compared
    /// against the current one; equal values are not applied and do not
    /// notify. After all fields are applied, subscribers of each changed
    /// key are invoked in registration order with the post-update
    /// snapshot, then wildcard subscribers are invoked once if anything
    /// changed. Synchronous: all callbacks complete before `set` returns.
    ///
    /// A `year` that is not a member of the (possibly just-updated) season
    /// list is ignored and logged, keeping the membership invariant
    /// regardless of the update sequence.
    pub fn set(&self, update: StateUpdate) {
        let mut changed: Vec<StateKey> = Vec::new();
        {
            let mut state = self.state.borrow_mut();

            if let Some(dataset) = update.dataset {
                let unchanged = state
                    .dataset
                    .as_ref()
                    .is_some_and(|current| Arc::ptr_eq(current, &dataset));
                if !unchanged {
                    state.dataset = Some(dataset);
                    changed.push(StateKey::Dataset);
                }
            }

            if let Some(years) = update.years {
                if state.years != years {
                    state.years = years;
                    changed.push(StateKey::Years);
                }
            }

            if let Some(year) = update.year {
                if !state.years.contains(&year) {
                    tracing::warn!(year, "ignoring year outside the season list");
                } else if state.year != Some(year) {
                    state.year = Some(year);
                    changed.push(StateKey::Year);
                }
            }

            if let Some(loaded) = update.loaded {
                if state.loaded != loaded {
                    state.loaded = loaded;
                    changed.push(StateKey::Loaded);
                }
            }
        }

        if changed.is_empty() {
            return;
        }

        tracing::debug!(changed = ?changed, "state updated");

        let snapshot = self.state.borrow().clone();
        let mut subscribers = self.subscribers.borrow_mut();
        for key in &changed {
            for registration in subscribers
                .iter_mut()
                .filter(|r| r.key == Some(*key))
            {
                (registration.callback)(&snapshot);
            }
        }
        for registration in subscribers.iter_mut().filter(|r| r.key.is_none()) {
            (registration.callback)(&snapshot);
        }
    }

    /// Registers `callback` for changes to one field.
    ///
    /// Callbacks under the same key are invoked in registration order.
    /// Each call creates a distinct registration, even for an identical
    /// closure; the returned handle removes exactly this one.
    pub fn subscribe<F>(&self, key: StateKey, callback: F) -> Subscription
    where
        F: FnMut(&AppState) + 'static,
    {
        self.register(Some(key), Box::new(callback))
    }

    /// Registers `callback` for any state change.
    ///
    /// Wildcard callbacks run after all key-scoped callbacks, once per
    /// `set` that changed at least one field.
    pub fn subscribe_all<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&AppState) + 'static,
    {
        self.register(None, Box::new(callback))
    }

    /// Removes the registration identified by `subscription`.
    ///
    /// Removing an already-removed handle is a no-op.
    pub fn unsubscribe(&self, subscription: Subscription) {
        self.subscribers
            .borrow_mut()
            .retain(|r| r.id != subscription.id);
    }

    fn register(&self, key: Option<StateKey>, callback: Callback) -> Subscription {
        let mut next_id = self.next_id.borrow_mut();
        let id = *next_id;
        *next_id += 1;
        self.subscribers
            .borrow_mut()
            .push(Registration { id, key, callback });
        Subscription { id }
    }

    /// Returns the roster for `year`, defaulting to the current season.
    ///
    /// `None` when no dataset is loaded or the resolved year has no
    /// roster. Returns a clone; the store retains ownership of the
    /// dataset.
    #[must_use]
    pub fn roster_for(&self, year: Option<u16>) -> Option<SeasonRoster> {
        let state = self.state.borrow();
        let resolved = year.or(state.year)?;
        state
            .dataset
            .as_ref()
            .and_then(|d| d.roster(resolved))
            .cloned()
    }

    /// Returns the era containing `year`, defaulting to the current
    /// season. The first era whose inclusive range contains the year wins.
    #[must_use]
    pub fn era_for(&self, year: Option<u16>) -> Option<Era> {
        let state = self.state.borrow();
        let resolved = year.or(state.year)?;
        state
            .dataset
            .as_ref()
            .and_then(|d| d.era_for(resolved))
            .cloned()
    }

    /// Returns the quote attached to an era, if the dataset has one.
    #[must_use]
    pub fn era_quote(&self, era_id: &str) -> Option<String> {
        self.state
            .borrow()
            .dataset
            .as_ref()
            .and_then(|d| d.era_quotes.get(era_id))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Era, SeasonRoster, WorldSeries};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn dataset_with_years(years: &[u16]) -> Arc<Dataset> {
        let mut dataset = Dataset::default();
        for &year in years {
            dataset
                .years
                .insert(year.to_string(), SeasonRoster::default());
        }
        Arc::new(dataset)
    }

    fn loaded_store(years: &[u16]) -> Store {
        let store = Store::new();
        let last = *years.last().unwrap();
        store.set(StateUpdate::loaded_dataset(
            dataset_with_years(years),
            years.to_vec(),
            last,
        ));
        store
    }

    #[test]
    fn load_commit_is_one_atomic_update() {
        let store = Store::new();
        let observed = Rc::new(RefCell::new(Vec::new()));

        let log = Rc::clone(&observed);
        store.subscribe_all(move |state| {
            log.borrow_mut().push((
                state.dataset.is_some(),
                state.years.clone(),
                state.year,
                state.loaded,
            ));
        });

        store.set(StateUpdate::loaded_dataset(
            dataset_with_years(&[1998, 1999, 2000]),
            vec![1998, 1999, 2000],
            2000,
        ));

        // One wildcard notification, with every field already in place.
        assert_eq!(
            *observed.borrow(),
            vec![(true, vec![1998, 1999, 2000], Some(2000), true)]
        );
    }

    #[test]
    fn setting_current_year_again_notifies_nobody() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let calls = Rc::new(RefCell::new(0));

        let keyed = Rc::clone(&calls);
        store.subscribe(StateKey::Year, move |_| *keyed.borrow_mut() += 1);
        let wildcard = Rc::clone(&calls);
        store.subscribe_all(move |_| *wildcard.borrow_mut() += 1);

        store.set(StateUpdate::year(2000));

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn year_subscribers_run_in_registration_order() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        store.subscribe(StateKey::Year, move |_| first.borrow_mut().push("a"));
        let second = Rc::clone(&order);
        store.subscribe(StateKey::Year, move |_| second.borrow_mut().push("b"));

        store.set(StateUpdate::year(1998));

        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn wildcard_runs_after_keyed_and_once_per_set() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let order = Rc::new(RefCell::new(Vec::new()));

        let wildcard = Rc::clone(&order);
        store.subscribe_all(move |_| wildcard.borrow_mut().push("*"));
        let keyed = Rc::clone(&order);
        store.subscribe(StateKey::Year, move |_| keyed.borrow_mut().push("year"));

        store.set(StateUpdate::year(1999));

        assert_eq!(*order.borrow(), vec!["year", "*"]);
    }

    #[test]
    fn unsubscribe_removes_exactly_that_callback() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        let handle = store.subscribe(StateKey::Year, move |_| first.borrow_mut().push("a"));
        let second = Rc::clone(&order);
        store.subscribe(StateKey::Year, move |_| second.borrow_mut().push("b"));

        store.unsubscribe(handle);
        store.set(StateUpdate::year(1998));

        assert_eq!(*order.borrow(), vec!["b"]);
    }

    #[test]
    fn subscribers_see_the_new_value() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let seen = Rc::new(RefCell::new(None));

        let sink = Rc::clone(&seen);
        store.subscribe(StateKey::Year, move |state| {
            *sink.borrow_mut() = state.year;
        });

        store.set(StateUpdate::year(1999));

        assert_eq!(*seen.borrow(), Some(1999));
    }

    #[test]
    fn year_outside_the_season_list_is_ignored() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let calls = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&calls);
        store.subscribe(StateKey::Year, move |_| *sink.borrow_mut() += 1);

        store.set(StateUpdate::year(1850));

        assert_eq!(*calls.borrow(), 0);
        assert_eq!(store.current_year(), Some(2000));
    }

    #[test]
    fn membership_invariant_holds_across_set_sequences() {
        let store = loaded_store(&[1998, 1999, 2000]);

        for year in [1998, 2000, 1234, 1999, 0, 2000] {
            store.set(StateUpdate::year(year));
            let state = store.snapshot();
            let current = state.year.unwrap();
            assert!(state.years.contains(&current));
            assert_eq!(state.loaded, state.dataset.is_some());
        }
    }

    #[test]
    fn dataset_changes_by_pointer_identity_not_deep_equality() {
        let store = loaded_store(&[1998, 1999, 2000]);
        let calls = Rc::new(RefCell::new(0));

        let sink = Rc::clone(&calls);
        store.subscribe(StateKey::Dataset, move |_| *sink.borrow_mut() += 1);

        let same = store.dataset().unwrap();
        store.set(StateUpdate {
            dataset: Some(same),
            ..StateUpdate::default()
        });
        assert_eq!(*calls.borrow(), 0);

        // Deep-equal but freshly allocated still counts as changed.
        let replacement = Arc::new((*store.dataset().unwrap()).clone());
        store.set(StateUpdate {
            dataset: Some(replacement),
            ..StateUpdate::default()
        });
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn roster_and_era_lookups_default_to_current_year() {
        let mut dataset = Dataset::default();
        let mut champion = SeasonRoster::default();
        champion.world_series = Some(WorldSeries::Won);
        dataset.years.insert("1998".to_string(), champion);
        dataset
            .years
            .insert("1999".to_string(), SeasonRoster::default());
        dataset
            .years
            .insert("2000".to_string(), SeasonRoster::default());
        dataset.eras = vec![
            Era {
                id: "a".to_string(),
                label: "A".to_string(),
                start: 1920,
                end: 1935,
                tagline: String::new(),
            },
            Era {
                id: "b".to_string(),
                label: "B".to_string(),
                start: 1936,
                end: 2050,
                tagline: String::new(),
            },
        ];
        dataset
            .era_quotes
            .insert("b".to_string(), "quote".to_string());

        let store = Store::new();
        store.set(StateUpdate::loaded_dataset(
            Arc::new(dataset),
            vec![1998, 1999, 2000],
            2000,
        ));

        assert_eq!(store.current_year(), Some(2000));

        store.set(StateUpdate::year(1998));
        let roster = store.roster_for(None).unwrap();
        assert_eq!(roster.world_series, Some(WorldSeries::Won));

        assert_eq!(store.era_for(None).unwrap().id, "b");
        assert_eq!(store.era_quote("b").as_deref(), Some("quote"));
        assert!(store.era_quote("a").is_none());
    }

    #[test]
    fn era_boundaries_are_inclusive_and_gaps_resolve_to_none() {
        let mut dataset = Dataset::default();
        dataset
            .years
            .insert("1936".to_string(), SeasonRoster::default());
        dataset.eras = vec![
            Era {
                id: "a".to_string(),
                label: "A".to_string(),
                start: 1920,
                end: 1935,
                tagline: String::new(),
            },
            Era {
                id: "b".to_string(),
                label: "B".to_string(),
                start: 1936,
                end: 1950,
                tagline: String::new(),
            },
        ];

        let store = Store::new();
        store.set(StateUpdate::loaded_dataset(
            Arc::new(dataset),
            vec![1936],
            1936,
        ));

        assert_eq!(store.era_for(Some(1936)).unwrap().id, "b");
        assert_eq!(store.era_for(Some(1935)).unwrap().id, "a");
        assert!(store.era_for(Some(1919)).is_none());
    }

    #[test]
    fn lookups_before_load_return_none() {
        let store = Store::new();

        assert!(store.roster_for(None).is_none());
        assert!(store.roster_for(Some(1998)).is_none());
        assert!(store.era_for(None).is_none());
        assert!(!store.snapshot().loaded);
    }
}
