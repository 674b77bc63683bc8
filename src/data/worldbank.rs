//! World Bank API integration for indicator observations.
//!
//! One call = one HTTP GET to the per-country/per-indicator endpoint; the
//! provider is asked for up to 500 observations per page and pagination is
//! never followed. There is no retry and no caching: callers issuing four
//! fetches pay four independent round-trips even when parameters overlap.

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::{ObservationRow, ObservationTable};
use crate::error::Error;

const BASE_URL: &str = "http://api.worldbank.org/v2";
const PER_PAGE: &str = "500";

/// Something that can produce an observation table for an indicator query.
///
/// The figure pipeline consumes this seam rather than a concrete client so
/// transport failures and canned payloads can be supplied in tests.
pub trait IndicatorSource {
    /// Fetch observations for `indicator` (a provider indicator code) across
    /// `countries` (semicolon-delimited country codes) and `years` (a single
    /// 4-digit year or a `start:end` span).
    fn fetch(&self, indicator: &str, countries: &str, years: &str)
        -> Result<ObservationTable, Error>;
}

/// Blocking World Bank API client.
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    /// Client against the production World Bank endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Client against an explicit endpoint (tests, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Client honoring a `WORLD_BANK_API_URL` override from the environment
    /// (`.env` is loaded if present), falling back to the production endpoint.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var("WORLD_BANK_API_URL") {
            Ok(url) => Self::with_base_url(url),
            Err(_) => Self::new(),
        }
    }
}

impl Default for WorldBankClient {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorSource for WorldBankClient {
    fn fetch(
        &self,
        indicator: &str,
        countries: &str,
        years: &str,
    ) -> Result<ObservationTable, Error> {
        let url = format!(
            "{}/countries/{}/indicators/{}",
            self.base_url, countries, indicator
        );
        debug!(%url, date = years, "requesting indicator observations");

        let resp = self
            .client
            .get(&url)
            .query(&[("format", "json"), ("per_page", PER_PAGE), ("date", years)])
            .send()?
            .error_for_status()?;

        let body: Value = resp
            .json()
            .map_err(|e| Error::MalformedResponse(format!("body is not JSON: {e}")))?;

        reshape(&body)
    }
}

/// Flatten a raw `[metadata, observations]` payload into an observation table.
///
/// Validates the two-element shape and the presence of `country.value` and
/// `date` on every observation, then coerces each entry into a typed row.
/// Rows whose value is null/non-numeric or whose year does not parse are
/// dropped; provider row order is preserved otherwise.
pub fn reshape(body: &Value) -> Result<ObservationTable, Error> {
    let page = body
        .as_array()
        .filter(|elems| elems.len() == 2)
        .ok_or_else(|| {
            Error::MalformedResponse(
                "expected a 2-element [metadata, observations] array".to_string(),
            )
        })?;

    // The provider signals query errors (bad indicator code, bad country) as
    // a 1-element array of messages, caught above. Element 0 is pagination
    // metadata we only require to exist.
    let entries = page[1].as_array().ok_or_else(|| {
        Error::MalformedResponse("observations element is not an array".to_string())
    })?;

    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let obs: RawObservation = serde_json::from_value(entry.clone())
            .map_err(|e| Error::MalformedResponse(format!("bad observation object: {e}")))?;

        // Current-year observations are routinely published with null values;
        // coercion failures are dropped rows, not errors.
        let Some(value) = obs.value.as_ref().and_then(Value::as_f64).filter(|v| v.is_finite())
        else {
            continue;
        };
        let Ok(year) = obs.date.trim().parse::<i32>() else {
            continue;
        };

        rows.push(ObservationRow {
            country: obs.country.value,
            year,
            value,
        });
    }

    debug!(
        kept = rows.len(),
        dropped = entries.len() - rows.len(),
        "reshaped indicator observations"
    );

    Ok(rows)
}

/// The subset of the provider's observation object we consume.
///
/// `country.value` and `date` are required; a payload missing either is
/// malformed. `value` stays a raw JSON value so that null and non-numeric
/// entries can be dropped per-row instead of failing the whole response.
#[derive(Debug, Deserialize)]
struct RawObservation {
    country: CountryRef,
    date: String,
    value: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct CountryRef {
    value: String,
}
