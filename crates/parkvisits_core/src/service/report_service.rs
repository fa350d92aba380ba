//! Park and visitor report service.
//!
//! # Responsibility
//! - Assemble per-park and per-visitor summaries from registry queries.
//! - Expose plain serializable records with stable snake_case field names.
//!
//! # Invariants
//! - Reports never mutate the registry or any entity.
//! - Summary ordering follows registry and first-visit order.

use crate::model::national_park::{NationalPark, ParkId};
use crate::model::visitor::{Visitor, VisitorId};
use crate::registry::Registry;
use log::debug;
use serde::Serialize;

/// Aggregated view of one park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkSummary {
    pub park_id: ParkId,
    pub name: String,
    pub total_visits: usize,
    pub distinct_visitors: usize,
    /// `None` when the park has no trips.
    pub best_visitor_id: Option<VisitorId>,
    pub best_visitor_name: Option<String>,
}

/// Visit count of one visitor at one park.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkVisitCount {
    pub park_id: ParkId,
    pub park_name: String,
    pub visits: usize,
}

/// Aggregated view of one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisitorSummary {
    pub visitor_id: VisitorId,
    pub name: String,
    pub total_trips: usize,
    /// One entry per distinct park, in first-visit order.
    pub parks: Vec<ParkVisitCount>,
}

/// Read-only report builder borrowing one registry.
pub struct ReportService<'r> {
    registry: &'r Registry,
}

impl<'r> ReportService<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Summaries for every park, in creation order.
    pub fn park_summaries(&self) -> Vec<ParkSummary> {
        let summaries: Vec<ParkSummary> = self
            .registry
            .parks()
            .iter()
            .map(|park| self.park_summary(park))
            .collect();
        debug!(
            "event=report_parks module=service status=ok registry_id={} park_count={}",
            self.registry.id(),
            summaries.len()
        );
        summaries
    }

    /// Summary of [`NationalPark::most_visited`], if any park exists.
    pub fn most_visited_park(&self) -> Option<ParkSummary> {
        NationalPark::most_visited(self.registry).map(|park| self.park_summary(&park))
    }

    pub fn visitor_summary(&self, visitor: &Visitor) -> VisitorSummary {
        let trips = visitor.trips(self.registry);
        let parks = visitor
            .national_parks(self.registry)
            .into_iter()
            .map(|park| ParkVisitCount {
                park_id: park.id(),
                park_name: park.name().to_string(),
                visits: trips
                    .iter()
                    .filter(|trip| trip.national_park() == park)
                    .count(),
            })
            .collect();

        VisitorSummary {
            visitor_id: visitor.id(),
            name: visitor.name(),
            total_trips: trips.len(),
            parks,
        }
    }

    fn park_summary(&self, park: &NationalPark) -> ParkSummary {
        let best = park.best_visitor(self.registry);
        ParkSummary {
            park_id: park.id(),
            name: park.name().to_string(),
            total_visits: park.total_visits(self.registry),
            distinct_visitors: park.visitors(self.registry).len(),
            best_visitor_id: best.as_ref().map(Visitor::id),
            best_visitor_name: best.as_ref().map(Visitor::name),
        }
    }
}
