//! Trip join model between visitors and parks.
//!
//! # Responsibility
//! - Record one visit of one visitor to one park with start/end dates.
//! - Re-validate every field on every write.
//!
//! # Invariants
//! - `national_park` always belongs to the registry the trip was created in.
//! - `start_date` and `end_date` are always at least 7 characters; their
//!   format is otherwise unconstrained and never parsed.
//! - Validation finishes before any field write or registry append, so a
//!   failed write leaves the previous value and a failed construction
//!   registers nothing.

use crate::model::national_park::NationalPark;
use crate::model::validation::{validate_trip_date, ModelError, ModelResult};
use crate::model::visitor::Visitor;
use crate::registry::{Registry, RegistryId};
use log::debug;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier assigned to every trip at construction.
pub type TripId = Uuid;

/// Shared handle to one trip record.
#[derive(Clone)]
pub struct Trip {
    inner: Rc<TripState>,
}

struct TripState {
    id: TripId,
    registry_id: RegistryId,
    fields: RefCell<TripFields>,
}

struct TripFields {
    visitor: Visitor,
    national_park: NationalPark,
    start_date: String,
    end_date: String,
}

impl Trip {
    /// Creates a trip and appends it to `registry`.
    ///
    /// Checks run in field order: visitor, park, start date, end date. The
    /// first failure is returned.
    ///
    /// # Errors
    /// - `ModelError::TypeMismatch` when `national_park` belongs to another registry.
    /// - `ModelError::OutOfRange` when either date is shorter than 7 characters.
    pub fn new(
        registry: &mut Registry,
        visitor: &Visitor,
        national_park: &NationalPark,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> ModelResult<Self> {
        let start_date = start_date.into();
        let end_date = end_date.into();

        let checked = ensure_park_in(registry.id(), national_park)
            .and_then(|_| validate_trip_date("start_date", &start_date))
            .and_then(|_| validate_trip_date("end_date", &end_date));
        if let Err(err) = checked {
            debug!(
                "event=trip_create module=model status=rejected field={}",
                err.field()
            );
            return Err(err);
        }

        let trip = Self {
            inner: Rc::new(TripState {
                id: Uuid::new_v4(),
                registry_id: registry.id(),
                fields: RefCell::new(TripFields {
                    visitor: visitor.clone(),
                    national_park: national_park.clone(),
                    start_date,
                    end_date,
                }),
            }),
        };
        debug!(
            "event=trip_create module=model status=ok trip_id={} visitor_id={} park_id={}",
            trip.inner.id,
            visitor.id(),
            national_park.id()
        );
        registry.register_trip(trip.clone());
        Ok(trip)
    }

    pub fn id(&self) -> TripId {
        self.inner.id
    }

    pub fn visitor(&self) -> Visitor {
        self.inner.fields.borrow().visitor.clone()
    }

    pub fn national_park(&self) -> NationalPark {
        self.inner.fields.borrow().national_park.clone()
    }

    pub fn start_date(&self) -> String {
        self.inner.fields.borrow().start_date.clone()
    }

    pub fn end_date(&self) -> String {
        self.inner.fields.borrow().end_date.clone()
    }

    /// Points this trip at another visitor. Any visitor handle is acceptable.
    pub fn set_visitor(&self, visitor: &Visitor) {
        self.inner.fields.borrow_mut().visitor = visitor.clone();
        self.log_update("visitor");
    }

    /// # Errors
    /// - `ModelError::TypeMismatch` when `national_park` belongs to another registry.
    pub fn set_national_park(&self, national_park: &NationalPark) -> ModelResult<()> {
        self.guarded_update("national_park", ensure_park_in(self.inner.registry_id, national_park))?;
        self.inner.fields.borrow_mut().national_park = national_park.clone();
        self.log_update("national_park");
        Ok(())
    }

    /// # Errors
    /// - `ModelError::OutOfRange` when `start_date` is shorter than 7 characters.
    pub fn set_start_date(&self, start_date: impl Into<String>) -> ModelResult<()> {
        let start_date = start_date.into();
        self.guarded_update("start_date", validate_trip_date("start_date", &start_date))?;
        self.inner.fields.borrow_mut().start_date = start_date;
        self.log_update("start_date");
        Ok(())
    }

    /// # Errors
    /// - `ModelError::OutOfRange` when `end_date` is shorter than 7 characters.
    pub fn set_end_date(&self, end_date: impl Into<String>) -> ModelResult<()> {
        let end_date = end_date.into();
        self.guarded_update("end_date", validate_trip_date("end_date", &end_date))?;
        self.inner.fields.borrow_mut().end_date = end_date;
        self.log_update("end_date");
        Ok(())
    }

    fn guarded_update(&self, field: &str, checked: ModelResult<()>) -> ModelResult<()> {
        if checked.is_err() {
            debug!(
                "event=trip_update module=model status=rejected trip_id={} field={field}",
                self.inner.id
            );
        }
        checked
    }

    fn log_update(&self, field: &str) {
        debug!(
            "event=trip_update module=model status=ok trip_id={} field={field}",
            self.inner.id
        );
    }
}

fn ensure_park_in(registry_id: RegistryId, national_park: &NationalPark) -> ModelResult<()> {
    if national_park.registry_id() != registry_id {
        return Err(ModelError::TypeMismatch {
            field: "national_park",
            expected: "a NationalPark registered in this registry",
        });
    }
    Ok(())
}

impl PartialEq for Trip {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Trip {}

impl Hash for Trip {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl Debug for Trip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let fields = self.inner.fields.borrow();
        f.debug_struct("Trip")
            .field("id", &self.inner.id)
            .field("visitor", &fields.visitor)
            .field("national_park", &fields.national_park)
            .field("start_date", &fields.start_date)
            .field("end_date", &fields.end_date)
            .finish()
    }
}
