//! Domain model for visitors, national parks and the trips joining them.
//!
//! # Responsibility
//! - Define the three entity handles and their validation rules.
//! - Keep visitor/park relations derived from trips only; there is no
//!   direct visitor-to-park edge.
//!
//! # Invariants
//! - Entity equality is instance identity, never structural equality.
//! - No entity or relation can be deleted.

pub mod national_park;
pub mod trip;
pub mod validation;
pub mod visitor;
