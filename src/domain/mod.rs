//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - flattened indicator observations (`ObservationRow`, `ObservationTable`)
//! - the per-country grouping query (`group_by_country`)
//! - the render-agnostic chart model (`ChartSeries`, `ChartDescription`)

pub mod types;

pub use types::*;
