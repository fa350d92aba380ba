//! Read-side services over a registry.
//!
//! # Responsibility
//! - Turn registry queries into serializable summaries for callers.
//! - Keep presentation shapes out of the model layer.

pub mod report_service;
