//! Core domain logic for park visit tracking.
//! Visitors and national parks are joined through trips; all derived
//! queries scan an explicit `Registry` context.

pub mod logging;
pub mod model;
pub mod registry;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::national_park::{NationalPark, ParkId};
pub use model::trip::{Trip, TripId};
pub use model::validation::{
    ModelError, ModelErrorKind, ModelResult, PARK_NAME_MIN_CHARS, TRIP_DATE_MIN_CHARS,
    VISITOR_NAME_MAX_CHARS, VISITOR_NAME_MIN_CHARS,
};
pub use model::visitor::{Visitor, VisitorId};
pub use registry::{Registry, RegistryId};
pub use service::report_service::{ParkSummary, ParkVisitCount, ReportService, VisitorSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
