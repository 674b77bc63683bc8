//! `wb-figures` library crate.
//!
//! Fetches World Bank indicator series for a fixed set of countries and
//! assembles render-agnostic chart descriptions (series + layout) for a
//! four-chart dashboard. The crate stops at the chart description so that:
//!
//! - the data wrangling is testable without a display surface
//! - any plotting front end can consume the serialized `data`/`layout` bundles
//! - transport stays swappable behind the [`data::IndicatorSource`] seam
//!
//! Module map:
//!
//! - [`data`] — World Bank client and observation reshaping
//! - [`domain`] — observation rows, grouping, and the chart model
//! - [`figures`] — the four fixed dashboard figures
//! - [`error`] — the crate error type

pub mod data;
pub mod domain;
pub mod error;
pub mod figures;
