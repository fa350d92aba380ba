//! National park domain model.
//!
//! # Responsibility
//! - Represent one park with a name fixed at construction.
//! - Answer per-park aggregation queries and the registry-wide
//!   "most visited" lookup.
//!
//! # Invariants
//! - `name` is at least 3 characters and never changes after construction.
//! - Renaming is a silent no-op: it neither fails nor changes the value.
//! - A park is appended to its registry exactly once, and only after
//!   validation succeeds.
//! - Equality is identity, not name equality.

use crate::model::trip::Trip;
use crate::model::validation::{validate_park_name, ModelResult};
use crate::model::visitor::Visitor;
use crate::registry::{distinct_in_order, first_max_by_key, Registry, RegistryId};
use log::debug;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier assigned to every park at construction.
pub type ParkId = Uuid;

/// Shared handle to one national park instance.
#[derive(Clone)]
pub struct NationalPark {
    inner: Rc<ParkState>,
}

struct ParkState {
    id: ParkId,
    registry_id: RegistryId,
    name: String,
}

impl NationalPark {
    /// Creates a park and appends it to `registry`.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` when `name` is shorter than 3 characters.
    ///   Nothing is registered in that case.
    pub fn new(registry: &mut Registry, name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if let Err(err) = validate_park_name(&name) {
            debug!("event=park_create module=model status=rejected reason=name_length");
            return Err(err);
        }

        let park = Self {
            inner: Rc::new(ParkState {
                id: Uuid::new_v4(),
                registry_id: registry.id(),
                name,
            }),
        };
        debug!(
            "event=park_create module=model status=ok park_id={}",
            park.inner.id
        );
        registry.register_park(park.clone());
        Ok(park)
    }

    pub fn id(&self) -> ParkId {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Accepts and discards a new name; park names are fixed once set.
    pub fn set_name(&self, _name: impl Into<String>) {
        debug!(
            "event=park_rename module=model status=ignored park_id={}",
            self.inner.id
        );
    }

    pub(crate) fn registry_id(&self) -> RegistryId {
        self.inner.registry_id
    }

    /// Trips to this park, in registry order.
    pub fn trips(&self, registry: &Registry) -> Vec<Trip> {
        registry
            .trips()
            .iter()
            .filter(|trip| trip.national_park() == *self)
            .cloned()
            .collect()
    }

    /// Distinct visitors across [`NationalPark::trips`], in first-visit order.
    pub fn visitors(&self, registry: &Registry) -> Vec<Visitor> {
        distinct_in_order(self.trips(registry).iter().map(|trip| trip.visitor()))
    }

    pub fn total_visits(&self, registry: &Registry) -> usize {
        registry
            .trips()
            .iter()
            .filter(|trip| trip.national_park() == *self)
            .count()
    }

    /// Visitor with the most trips to this park, `None` when nobody came.
    ///
    /// Ties go to the visitor whose first trip here was registered earliest.
    pub fn best_visitor(&self, registry: &Registry) -> Option<Visitor> {
        let mut tally: Vec<(Visitor, usize)> = Vec::new();
        for trip in self.trips(registry) {
            let visitor = trip.visitor();
            match tally.iter_mut().find(|(seen, _)| *seen == visitor) {
                Some((_, count)) => *count += 1,
                None => tally.push((visitor, 1)),
            }
        }

        first_max_by_key(tally, |(_, count)| *count).map(|(visitor, _)| visitor)
    }

    /// Park with the most trips across `registry`, `None` when no park exists.
    ///
    /// Ties go to the park created first.
    pub fn most_visited(registry: &Registry) -> Option<NationalPark> {
        first_max_by_key(registry.parks().iter(), |park| park.total_visits(registry)).cloned()
    }
}

impl PartialEq for NationalPark {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for NationalPark {}

impl Hash for NationalPark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for NationalPark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NationalPark")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish()
    }
}
