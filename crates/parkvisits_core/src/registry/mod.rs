//! Explicit registry context for parks and trips.
//!
//! # Responsibility
//! - Hold the append-only, insertion-ordered sequences of every park and
//!   trip created against this context.
//! - Provide the scan helpers shared by derived queries.
//!
//! # Invariants
//! - Entries are only appended by successful constructors; there is no
//!   removal or clearing API.
//! - A park or trip belongs to exactly one registry for its lifetime.
//! - Visitors are never registered.

use crate::model::national_park::NationalPark;
use crate::model::trip::Trip;
use log::debug;
use std::collections::HashSet;
use std::hash::Hash;
use uuid::Uuid;

/// Stable identifier of one registry context.
pub type RegistryId = Uuid;

/// Owner of all parks and trips created for one application root or test case.
#[derive(Debug)]
pub struct Registry {
    id: RegistryId,
    parks: Vec<NationalPark>,
    trips: Vec<Trip>,
}

impl Registry {
    /// Creates an empty registry with a fresh id.
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        debug!("event=registry_create module=registry status=ok registry_id={id}");
        Self {
            id,
            parks: Vec::new(),
            trips: Vec::new(),
        }
    }

    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// All parks in creation order.
    pub fn parks(&self) -> &[NationalPark] {
        &self.parks
    }

    /// All trips in creation order.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Returns whether `park` was registered in this registry.
    pub fn contains_park(&self, park: &NationalPark) -> bool {
        park.registry_id() == self.id
    }

    pub(crate) fn register_park(&mut self, park: NationalPark) {
        debug!(
            "event=park_register module=registry status=ok registry_id={} park_id={} park_count={}",
            self.id,
            park.id(),
            self.parks.len() + 1
        );
        self.parks.push(park);
    }

    pub(crate) fn register_trip(&mut self, trip: Trip) {
        debug!(
            "event=trip_register module=registry status=ok registry_id={} trip_id={} trip_count={}",
            self.id,
            trip.id(),
            self.trips.len() + 1
        );
        self.trips.push(trip);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses duplicates by identity, keeping first-appearance order.
pub(crate) fn distinct_in_order<T>(items: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Returns the first item whose key is maximal during a left-to-right scan.
pub(crate) fn first_max_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(T, K)> = None;
    for item in items {
        let item_key = key(&item);
        let replace = match &best {
            Some((_, best_key)) => item_key > *best_key,
            None => true,
        };
        if replace {
            best = Some((item, item_key));
        }
    }
    best.map(|(item, _)| item)
}
