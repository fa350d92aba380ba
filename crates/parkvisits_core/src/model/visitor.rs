//! Visitor domain model.
//!
//! # Responsibility
//! - Represent one person with a validated, mutable name.
//! - Answer queries over the trips that reference this visitor.
//!
//! # Invariants
//! - `name` is always 1..=15 characters; a rejected rename keeps the old value.
//! - Visitors are not registered anywhere; they live as long as a handle does.
//! - Equality is identity: clones of one handle are equal, separately
//!   constructed visitors are not, whatever their names.

use crate::model::national_park::NationalPark;
use crate::model::trip::Trip;
use crate::model::validation::{validate_visitor_name, ModelError, ModelResult};
use crate::registry::{distinct_in_order, Registry};
use log::debug;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier assigned to every visitor at construction.
pub type VisitorId = Uuid;

/// Shared handle to one visitor instance.
#[derive(Clone)]
pub struct Visitor {
    inner: Rc<VisitorState>,
}

struct VisitorState {
    id: VisitorId,
    name: RefCell<String>,
}

impl Visitor {
    /// Creates a visitor after validating `name`.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` when `name` is empty or longer than 15 characters.
    pub fn new(name: impl Into<String>) -> ModelResult<Self> {
        let name = name.into();
        if let Err(err) = validate_visitor_name(&name) {
            debug!("event=visitor_create module=model status=rejected reason=name_length");
            return Err(err);
        }

        let id = Uuid::new_v4();
        debug!("event=visitor_create module=model status=ok visitor_id={id}");
        Ok(Self {
            inner: Rc::new(VisitorState {
                id,
                name: RefCell::new(name),
            }),
        })
    }

    pub fn id(&self) -> VisitorId {
        self.inner.id
    }

    pub fn name(&self) -> String {
        self.inner.name.borrow().clone()
    }

    /// Renames this visitor in place, visible through every clone of the handle.
    ///
    /// # Errors
    /// - `ModelError::OutOfRange` under the same rule as [`Visitor::new`].
    pub fn set_name(&self, name: impl Into<String>) -> ModelResult<()> {
        let name = name.into();
        if let Err(err) = validate_visitor_name(&name) {
            debug!(
                "event=visitor_rename module=model status=rejected visitor_id={}",
                self.inner.id
            );
            return Err(err);
        }
        *self.inner.name.borrow_mut() = name;
        debug!(
            "event=visitor_rename module=model status=ok visitor_id={}",
            self.inner.id
        );
        Ok(())
    }

    /// Trips whose visitor is this instance, in registry order.
    pub fn trips(&self, registry: &Registry) -> Vec<Trip> {
        registry
            .trips()
            .iter()
            .filter(|trip| trip.visitor() == *self)
            .cloned()
            .collect()
    }

    /// Distinct parks across [`Visitor::trips`], in first-visit order.
    pub fn national_parks(&self, registry: &Registry) -> Vec<NationalPark> {
        distinct_in_order(
            self.trips(registry)
                .iter()
                .map(|trip| trip.national_park()),
        )
    }

    /// Counts this visitor's trips to `park`.
    ///
    /// # Errors
    /// - `ModelError::TypeMismatch` when `park` belongs to another registry.
    pub fn total_visits_at_park(
        &self,
        registry: &Registry,
        park: &NationalPark,
    ) -> ModelResult<usize> {
        if !registry.contains_park(park) {
            return Err(ModelError::TypeMismatch {
                field: "park",
                expected: "a NationalPark registered in this registry",
            });
        }

        Ok(self
            .trips(registry)
            .iter()
            .filter(|trip| trip.national_park() == *park)
            .count())
    }
}

impl PartialEq for Visitor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Visitor {}

impl Hash for Visitor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Visitor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visitor")
            .field("id", &self.inner.id)
            .field("name", &*self.inner.name.borrow())
            .finish()
    }
}
